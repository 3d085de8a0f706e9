use std::collections::HashSet;

use crate::data_fetcher::models::RawPlayer;

/// Drops configured names from a session's player list.
///
/// Matching is exact and happens on the names as reported by the feed, so
/// excluding an alias does not exclude its canonical name or vice versa.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    excluded: HashSet<String>,
}

impl ExclusionFilter {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExclusionFilter {
            excluded: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Returns `players` without excluded entries, order preserved.
    pub fn apply(&self, players: Vec<RawPlayer>) -> Vec<RawPlayer> {
        players
            .into_iter()
            .filter(|player| !self.is_excluded(&player.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(names: &[&str]) -> Vec<RawPlayer> {
        names.iter().map(|name| RawPlayer::new(*name)).collect()
    }

    fn names(players: &[RawPlayer]) -> Vec<&str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_excluded_names_removed_in_order() {
        let filter = ExclusionFilter::new(["Zenrawr", "Zensham", "Menotröll", "Niake"]);
        let result = filter.apply(players(&["Ginshi", "Zenrawr", "Shaní", "Niake", "Otje"]));
        assert_eq!(names(&result), vec!["Ginshi", "Shaní", "Otje"]);
    }

    #[test]
    fn test_every_occurrence_is_removed() {
        let filter = ExclusionFilter::new(["Zenrawr"]);
        let result = filter.apply(players(&["Zenrawr", "Suni", "Zenrawr"]));
        assert_eq!(names(&result), vec!["Suni"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = ExclusionFilter::default();
        let input = players(&["Suni", "Suni", "Miffzy"]);
        assert_eq!(filter.apply(input.clone()), input);
    }

    #[test]
    fn test_matching_is_exact() {
        let filter = ExclusionFilter::new(["Menotröll"]);
        assert!(filter.is_excluded("Menotröll"));
        assert!(!filter.is_excluded("Menotroll"));
        assert!(!filter.is_excluded("menotröll"));
    }
}
