pub mod attendance;
pub mod graphql;

// Re-export all public types for convenience
pub use attendance::{AttendancePage, RawPlayer, RawSession};
pub use graphql::{
    AttendanceQueryData, GraphQlError, GraphQlRequest, GraphQlResponse, Guild, GuildData,
    TokenResponse,
};
