pub mod attendance;
pub mod auth;
mod fetch_utils;
pub mod graphql;
pub mod http_client;

pub use attendance::{ATTENDANCE_QUERY, fetch_all_attendance, fetch_attendance_page};
pub use auth::fetch_access_token;
pub use graphql::GraphQlClient;
pub use http_client::create_http_client_with_timeout;
