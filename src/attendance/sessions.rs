//! Session dating and same-day merging.

use std::collections::HashMap;

use chrono::{LocalResult, TimeZone};

use crate::constants::matrix::DATE_FORMAT;
use crate::data_fetcher::models::RawPlayer;
use crate::error::AppError;

/// A raid night: every attendance record reported for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// `dd/mm/yyyy` in the exporting timezone.
    pub date: String,
    /// Start of the earliest record merged into this session (epoch ms).
    pub start_time: i64,
    pub players: Vec<RawPlayer>,
}

/// Formats epoch milliseconds as a `dd/mm/yyyy` calendar date in `tz`.
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn format_session_date<Tz: TimeZone>(millis: i64, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(millis) {
        LocalResult::Single(dt) => Some(dt.format(DATE_FORMAT).to_string()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.format(DATE_FORMAT).to_string()),
        LocalResult::None => None,
    }
}

/// Stamps a single record with its calendar date.
pub fn stamp_session<Tz: TimeZone>(
    index: usize,
    start_time: i64,
    players: Vec<RawPlayer>,
    tz: &Tz,
) -> Result<Session, AppError>
where
    Tz::Offset: std::fmt::Display,
{
    let date = format_session_date(start_time, tz).ok_or_else(|| {
        AppError::malformed_input(index, format!("startTime {start_time} is out of range"))
    })?;
    Ok(Session {
        date,
        start_time,
        players,
    })
}

/// Combines sessions that share a date.
///
/// Input must already be in chronological order. Player lists of same-date
/// sessions are concatenated in encounter order (duplicates are kept), and
/// each date stays at the position of its first occurrence.
pub fn merge_sessions(sessions: Vec<Session>) -> Vec<Session> {
    let mut merged: Vec<Session> = Vec::with_capacity(sessions.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for session in sessions {
        match positions.get(&session.date) {
            Some(&position) => merged[position].players.extend(session.players),
            None => {
                positions.insert(session.date.clone(), merged.len());
                merged.push(session);
            }
        }
    }

    merged
}
