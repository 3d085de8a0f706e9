//! Attendance normalization.
//!
//! Turns the raw attendance history of a guild into a player-by-date matrix:
//! - `sessions`: calendar dating and same-day merging
//! - `exclusion`: removal of configured names
//! - `aliases`: mapping alternate characters to one canonical player
//! - `dedup`: one entry per player per session
//! - `aggregator`: the fixed-order pipeline and the player universe
//! - `matrix`: three-state presence cells and attendance ordering

mod aggregator;
mod aliases;
mod dedup;
mod exclusion;
mod matrix;
mod sessions;

pub use aggregator::{AttendanceAggregator, player_universe};
pub use aliases::AliasResolver;
pub use dedup::dedupe_players;
pub use exclusion::ExclusionFilter;
pub use matrix::{AttendanceMatrix, AttendanceRow, Cell, build_matrix};
pub use sessions::{Session, format_session_date, merge_sessions, stamp_session};
