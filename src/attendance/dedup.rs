use std::collections::HashSet;

use crate::data_fetcher::models::RawPlayer;

/// Removes repeated players by name, keeping the first occurrence.
pub fn dedupe_players(players: Vec<RawPlayer>) -> Vec<RawPlayer> {
    let mut seen = HashSet::with_capacity(players.len());
    players
        .into_iter()
        .filter(|player| seen.insert(player.name.clone()))
        .collect()
}
