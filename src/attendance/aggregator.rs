use std::collections::HashSet;

use chrono::{Local, TimeZone};
use tracing::{debug, info, instrument};

use super::aliases::AliasResolver;
use super::dedup::dedupe_players;
use super::exclusion::ExclusionFilter;
use super::matrix::{AttendanceMatrix, build_matrix};
use super::sessions::{Session, merge_sessions, stamp_session};
use crate::config::Config;
use crate::data_fetcher::models::{RawPlayer, RawSession};
use crate::error::AppError;

/// Runs the normalization pipeline over a complete attendance history.
///
/// Stage order is fixed: validate, sort by start time, stamp dates, merge
/// same-date sessions, drop excluded names, resolve aliases, dedupe. Exclusion
/// runs before alias resolution, so it matches the names the feed reported.
#[derive(Debug, Clone, Default)]
pub struct AttendanceAggregator {
    aliases: AliasResolver,
    exclusions: ExclusionFilter,
}

impl AttendanceAggregator {
    pub fn new(aliases: AliasResolver, exclusions: ExclusionFilter) -> Self {
        AttendanceAggregator {
            aliases,
            exclusions,
        }
    }

    /// Builds an aggregator from the alias groups and excluded names in `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(AttendanceAggregator::new(
            AliasResolver::new(config.aliases.clone())?,
            ExclusionFilter::new(config.exclude.iter().cloned()),
        ))
    }

    /// Processes `raw` with session dates taken in the system's local timezone.
    pub fn process(&self, raw: Vec<RawSession>) -> Result<Vec<Session>, AppError> {
        self.process_in(raw, &Local)
    }

    /// Processes `raw` with session dates taken in `tz`.
    #[instrument(skip_all, fields(records = raw.len()))]
    pub fn process_in<Tz: TimeZone>(
        &self,
        raw: Vec<RawSession>,
        tz: &Tz,
    ) -> Result<Vec<Session>, AppError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut records = validate(raw)?;

        // Stable, so records sharing a start time keep their feed order
        records.sort_by_key(|(_, start_time, _)| *start_time);

        let stamped = records
            .into_iter()
            .map(|(index, start_time, players)| stamp_session(index, start_time, players, tz))
            .collect::<Result<Vec<_>, _>>()?;

        let merged = merge_sessions(stamped);
        debug!("Merged into {} session dates", merged.len());

        let sessions: Vec<Session> = merged
            .into_iter()
            .map(|session| {
                let players = self.exclusions.apply(session.players);
                let players = players
                    .into_iter()
                    .map(|player| RawPlayer {
                        name: self.aliases.resolve(&player.name).to_string(),
                        presence: player.presence,
                    })
                    .collect();
                Session {
                    players: dedupe_players(players),
                    ..session
                }
            })
            .collect();

        info!("Processed attendance into {} sessions", sessions.len());
        Ok(sessions)
    }

    /// Runs the whole pipeline and builds the sorted attendance matrix.
    pub fn build_matrix(&self, raw: Vec<RawSession>) -> Result<AttendanceMatrix, AppError> {
        self.build_matrix_in(raw, &Local)
    }

    /// [`build_matrix`](Self::build_matrix) with session dates taken in `tz`.
    pub fn build_matrix_in<Tz: TimeZone>(
        &self,
        raw: Vec<RawSession>,
        tz: &Tz,
    ) -> Result<AttendanceMatrix, AppError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let sessions = self.process_in(raw, tz)?;
        let universe = player_universe(&sessions);
        info!(
            "Building attendance matrix for {} players over {} sessions",
            universe.len(),
            sessions.len()
        );
        Ok(build_matrix(&sessions, &universe))
    }
}

/// Checks every record has a start time and a player list, keeping its feed position.
fn validate(raw: Vec<RawSession>) -> Result<Vec<(usize, i64, Vec<RawPlayer>)>, AppError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let start_time = record
                .start_time
                .ok_or_else(|| AppError::malformed_input(index, "missing `startTime`"))?;
            let players = record
                .players
                .ok_or_else(|| AppError::malformed_input(index, "missing `players`"))?;
            Ok((index, start_time, players))
        })
        .collect()
}

/// Every distinct player name, in order of first appearance across `sessions`.
pub fn player_universe(sessions: &[Session]) -> Vec<String> {
    let mut seen = HashSet::new();
    sessions
        .iter()
        .flat_map(|session| session.players.iter())
        .filter(|player| seen.insert(player.name.as_str()))
        .map(|player| player.name.clone())
        .collect()
}
