//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, default endpoints and marker
//! strings so the rest of the crate does not repeat them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Application name used for config and log directories
pub const APP_DIR_NAME: &str = "raid_attendance";

/// Log file name used when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "raid_attendance.log";

/// Warcraft Logs endpoints and report defaults
pub mod warcraft_logs {
    /// GraphQL client endpoint
    pub const API_ENDPOINT: &str = "https://www.warcraftlogs.com/api/v2/client";

    /// OAuth token endpoint for the client credentials grant
    pub const TOKEN_URL: &str = "https://www.warcraftlogs.com/oauth/token";

    /// Guild whose attendance is exported when none is configured
    pub const DEFAULT_GUILD_ID: u64 = 492939;

    /// Zone (raid instance) exported when none is configured
    pub const DEFAULT_ZONE_ID: u64 = 26;

    /// First page of the paginated attendance feed
    pub const FIRST_PAGE: u32 = 1;

    /// Upper bound on attendance pages fetched in one export
    pub const MAX_ATTENDANCE_PAGES: u32 = 500;
}

/// Roster rules of the default guild
pub mod roster {
    /// Alias groups; the first name of each group is the canonical one
    pub const DEFAULT_ALIAS_GROUPS: &[&[&str]] = &[
        &["Ginshi", "Jinshi"],
        &["Shaní", "Manida"],
        &["Kagejinn", "Ezkage", "Kagenoroi"],
        &["Liquidpower", "Eludien", "Dahwa"],
        &["Dumbclass", "Bigfast"],
        &["Flórpdru", "Flórprogue", "Flórpmonk"],
        &["Suni", "Venkalth"],
        &["Miffzy", "Miffysaurus"],
        &["Controlling", "Conflagrated", "Concentrated"],
        &["Hãze", "Hazékazam"],
        &["Dorathy", "Friedeggs", "Restoration", "Tn"],
        &["Yanembi", "Yanembathy"],
        &["Chaoriel", "Chaoren"],
        &["Svusj", "Svûsj", "Khalyz"],
        &["Dauntilus", "Sharissa"],
        &["Otje", "Otjé"],
    ];

    /// Names dropped from every session, matched as reported
    pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &["Zenrawr", "Zensham", "Menotröll", "Niake"];
}

/// Attendance matrix markers and layout
pub mod matrix {
    /// Cell value for a session the player attended
    pub const ATTENDED: &str = "x";

    /// Cell value for sessions before the player's first attendance
    pub const NOT_YET_ELIGIBLE: &str = "n/a";

    /// Cell value for a missed session after the first attendance
    pub const ABSENT: &str = "";

    /// Header of the first output column
    pub const NAME_COLUMN: &str = "name";

    /// chrono format for session dates (dd/mm/yyyy)
    pub const DATE_FORMAT: &str = "%d/%m/%Y";
}

/// Default output file for the exported matrix
pub const DEFAULT_OUTPUT_PATH: &str = "out.csv";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the OAuth client id
    pub const CLIENT_ID: &str = "WARCRAFT_LOGS_CLIENT";

    /// Environment variable for the OAuth client secret
    pub const CLIENT_SECRET: &str = "WARCRAFT_LOGS_SECRET";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "RAID_ATTENDANCE_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "RAID_ATTENDANCE_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_markers_are_distinct() {
        assert_ne!(matrix::ATTENDED, matrix::NOT_YET_ELIGIBLE);
        assert_ne!(matrix::ATTENDED, matrix::ABSENT);
        assert_ne!(matrix::NOT_YET_ELIGIBLE, matrix::ABSENT);
        assert!(matrix::ABSENT.is_empty());
    }

    #[test]
    fn test_endpoints_use_https() {
        assert!(warcraft_logs::API_ENDPOINT.starts_with("https://"));
        assert!(warcraft_logs::TOKEN_URL.starts_with("https://"));
    }

    #[test]
    fn test_env_var_names_are_unique() {
        let names = [
            env_vars::CLIENT_ID,
            env_vars::CLIENT_SECRET,
            env_vars::LOG_FILE,
            env_vars::HTTP_TIMEOUT,
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
