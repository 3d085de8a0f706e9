//! Guild Raid Attendance Exporter Library
//!
//! Fetches a guild's raid attendance history from the Warcraft Logs GraphQL
//! API and turns it into a player-by-date attendance matrix: same-day
//! reports are merged, alternate characters are folded into one player,
//! excluded names are dropped and rows are ordered by attendance.
//!
//! # Examples
//!
//! ```rust
//! use chrono::Utc;
//! use raid_attendance::attendance::{AliasResolver, AttendanceAggregator, ExclusionFilter};
//! use raid_attendance::data_fetcher::models::{RawPlayer, RawSession};
//!
//! let aggregator = AttendanceAggregator::new(
//!     AliasResolver::new(vec![vec!["Ginshi".to_string(), "Jinshi".to_string()]]).unwrap(),
//!     ExclusionFilter::new(["Zenrawr"]),
//! );
//!
//! let matrix = aggregator
//!     .build_matrix_in(
//!         vec![
//!             RawSession::new(1_609_873_200_000, vec![RawPlayer::new("Jinshi")]),
//!             RawSession::new(1_610_046_000_000, vec![RawPlayer::new("Zenrawr")]),
//!         ],
//!         &Utc,
//!     )
//!     .unwrap();
//!
//! assert_eq!(matrix.header(), vec!["name", "05/01/2021", "07/01/2021"]);
//! assert_eq!(matrix.rows[0].name, "Ginshi");
//! ```

pub mod attendance;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod export;
pub mod output;

// Re-export commonly used types for convenience
pub use attendance::{AttendanceAggregator, AttendanceMatrix, AttendanceRow, Cell};
pub use config::Config;
pub use data_fetcher::models::{RawPlayer, RawSession};
pub use error::AppError;
pub use export::{ExportSummary, export_attendance};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
