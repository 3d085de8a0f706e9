//! Player-by-date presence table.
//!
//! Each cell is one of three states. A player is "not yet eligible" for
//! every session before the first one they attended; after that, missed
//! sessions are plain absences.

use std::cmp::Reverse;
use std::collections::HashSet;

use super::sessions::Session;
use crate::constants::matrix::{ABSENT, ATTENDED, NOT_YET_ELIGIBLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Attended,
    NotYetEligible,
    Absent,
}

impl Cell {
    /// Marker written to the CSV.
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Attended => ATTENDED,
            Cell::NotYetEligible => NOT_YET_ELIGIBLE,
            Cell::Absent => ABSENT,
        }
    }
}

/// One player's attendance across every session date, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub name: String,
    pub cells: Vec<(String, Cell)>,
}

impl AttendanceRow {
    pub fn attended_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|(_, cell)| *cell == Cell::Attended)
            .count()
    }

    /// Cell for a given session date, if the date is part of the matrix.
    pub fn cell(&self, date: &str) -> Option<Cell> {
        self.cells
            .iter()
            .find(|(cell_date, _)| cell_date == date)
            .map(|(_, cell)| *cell)
    }
}

/// Rows sorted by attendance, plus the ordered session dates they cover.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttendanceMatrix {
    pub dates: Vec<String>,
    pub rows: Vec<AttendanceRow>,
}

impl AttendanceMatrix {
    /// `name` followed by the session dates.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(crate::constants::matrix::NAME_COLUMN)
            .chain(self.dates.iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds one row per name in `universe`, then sorts rows by attended count
/// (descending). The sort is stable, so ties keep `universe` order.
pub fn build_matrix(sessions: &[Session], universe: &[String]) -> AttendanceMatrix {
    let rosters: Vec<HashSet<&str>> = sessions
        .iter()
        .map(|session| session.players.iter().map(|p| p.name.as_str()).collect())
        .collect();

    let mut rows: Vec<AttendanceRow> = universe
        .iter()
        .map(|name| {
            let mut has_attended = false;
            let cells = sessions
                .iter()
                .zip(&rosters)
                .map(|(session, roster)| {
                    let cell = if roster.contains(name.as_str()) {
                        has_attended = true;
                        Cell::Attended
                    } else if has_attended {
                        Cell::Absent
                    } else {
                        Cell::NotYetEligible
                    };
                    (session.date.clone(), cell)
                })
                .collect();
            AttendanceRow {
                name: name.clone(),
                cells,
            }
        })
        .collect();

    rows.sort_by_key(|row| Reverse(row.attended_count()));

    AttendanceMatrix {
        dates: sessions.iter().map(|s| s.date.clone()).collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::RawPlayer;

    fn session(date: &str, names: &[&str]) -> Session {
        Session {
            date: date.to_string(),
            start_time: 0,
            players: names.iter().map(|n| RawPlayer::new(*n)).collect(),
        }
    }

    fn universe(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn markers(row: &AttendanceRow) -> Vec<&'static str> {
        row.cells.iter().map(|(_, cell)| cell.as_str()).collect()
    }

    #[test]
    fn test_three_state_cells() {
        let sessions = vec![
            session("01/01/2021", &["A"]),
            session("02/01/2021", &["B"]),
            session("03/01/2021", &["B"]),
            session("04/01/2021", &["A"]),
        ];
        let matrix = build_matrix(&sessions, &universe(&["A", "B"]));

        let a = matrix.rows.iter().find(|r| r.name == "A").unwrap();
        let b = matrix.rows.iter().find(|r| r.name == "B").unwrap();
        assert_eq!(markers(a), vec!["x", "", "", "x"]);
        assert_eq!(markers(b), vec!["n/a", "x", "x", ""]);
    }

    #[test]
    fn test_not_yet_eligible_is_only_a_prefix() {
        let sessions = vec![
            session("01/01/2021", &["A"]),
            session("02/01/2021", &[]),
            session("03/01/2021", &["A", "C"]),
            session("04/01/2021", &["A"]),
            session("05/01/2021", &["C"]),
            session("06/01/2021", &[]),
        ];
        let matrix = build_matrix(&sessions, &universe(&["A", "C"]));

        for row in &matrix.rows {
            let first_attended = row
                .cells
                .iter()
                .position(|(_, cell)| *cell == Cell::Attended)
                .unwrap();
            assert!(
                row.cells[..first_attended]
                    .iter()
                    .all(|(_, cell)| *cell == Cell::NotYetEligible)
            );
            assert!(
                row.cells[first_attended..]
                    .iter()
                    .all(|(_, cell)| *cell != Cell::NotYetEligible)
            );
        }
    }

    #[test]
    fn test_rows_sorted_by_attendance_descending() {
        let sessions = vec![
            session("01/01/2021", &["A", "B"]),
            session("02/01/2021", &["B", "C"]),
            session("03/01/2021", &["B", "C"]),
        ];
        let matrix = build_matrix(&sessions, &universe(&["A", "B", "C"]));
        let order: Vec<&str> = matrix.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let sessions = vec![
            session("01/01/2021", &["D", "A"]),
            session("02/01/2021", &["C", "B"]),
        ];
        let matrix = build_matrix(&sessions, &universe(&["D", "A", "C", "B"]));
        let order: Vec<&str> = matrix.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_header_and_cell_lookup() {
        let sessions = vec![session("01/01/2021", &["A"]), session("02/01/2021", &[])];
        let matrix = build_matrix(&sessions, &universe(&["A"]));
        assert_eq!(matrix.header(), vec!["name", "01/01/2021", "02/01/2021"]);
        assert_eq!(matrix.rows[0].cell("02/01/2021"), Some(Cell::Absent));
        assert_eq!(matrix.rows[0].cell("03/01/2021"), None);
        assert_eq!(matrix.rows[0].attended_count(), 1);
    }

    #[test]
    fn test_no_sessions_no_rows() {
        let matrix = build_matrix(&[], &[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.header(), vec!["name"]);
    }
}
