pub mod api;
pub mod models;

pub use api::{GraphQlClient, fetch_all_attendance};
pub use models::{AttendancePage, RawPlayer, RawSession};
