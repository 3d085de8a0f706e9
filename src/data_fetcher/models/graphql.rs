use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::attendance::AttendancePage;

/// Body of a GraphQL POST request.
#[derive(Debug, Serialize, Clone)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GraphQlError {
    pub message: String,
}

/// OAuth token endpoint response.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub token_type: String,
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// `data` of the attendance query: `guildData.guild.attendance`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQueryData {
    pub guild_data: Option<GuildData>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GuildData {
    pub guild: Option<Guild>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Guild {
    pub attendance: AttendancePage,
}

impl AttendanceQueryData {
    /// Unwraps the nested page, or `None` when the guild is unknown.
    pub fn into_page(self) -> Option<AttendancePage> {
        self.guild_data
            .and_then(|guild_data| guild_data.guild)
            .map(|guild| guild.attendance)
    }
}
