use crate::constants::{self, env_vars, roster, warcraft_logs};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_credentials;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// GraphQL endpoint for attendance queries.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// OAuth token endpoint used for the client credentials grant.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// OAuth client id. May be supplied through `WARCRAFT_LOGS_CLIENT` instead.
    #[serde(default)]
    pub client_id: String,
    /// OAuth client secret. May be supplied through `WARCRAFT_LOGS_SECRET` instead.
    #[serde(default)]
    pub client_secret: String,
    /// Guild whose attendance is exported.
    #[serde(default = "default_guild_id")]
    pub guild_id: u64,
    /// Zone (raid instance) whose attendance is exported.
    #[serde(default = "default_zone_id")]
    pub zone_id: u64,
    /// Where the attendance CSV is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Alias groups. The first name of each group is the canonical one.
    /// Defaults to the default guild's groups; `aliases = []` disables them.
    #[serde(default = "default_aliases")]
    pub aliases: Vec<Vec<String>>,
    /// Names dropped from every session before alias resolution.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_endpoint() -> String {
    warcraft_logs::API_ENDPOINT.to_string()
}

fn default_token_url() -> String {
    warcraft_logs::TOKEN_URL.to_string()
}

fn default_guild_id() -> u64 {
    warcraft_logs::DEFAULT_GUILD_ID
}

fn default_zone_id() -> u64 {
    warcraft_logs::DEFAULT_ZONE_ID
}

fn default_aliases() -> Vec<Vec<String>> {
    roster::DEFAULT_ALIAS_GROUPS
        .iter()
        .map(|group| group.iter().map(|name| name.to_string()).collect())
        .collect()
}

fn default_exclude() -> Vec<String> {
    roster::DEFAULT_EXCLUDED_NAMES
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_output_path() -> String {
    constants::DEFAULT_OUTPUT_PATH.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_endpoint: default_api_endpoint(),
            token_url: default_token_url(),
            client_id: String::new(),
            client_secret: String::new(),
            guild_id: default_guild_id(),
            zone_id: default_zone_id(),
            output_path: default_output_path(),
            aliases: default_aliases(),
            exclude: default_exclude(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

/// Masks all but the last four characters of a secret for display
fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let visible: String = secret.chars().skip(count - 4).collect();
    format!("{}{visible}", "*".repeat(count - 4))
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, credentials are taken from the environment or
    /// prompted for, and a config file is created in the prompted case.
    ///
    /// # Environment Variables
    /// - `WARCRAFT_LOGS_CLIENT` - Override OAuth client id
    /// - `WARCRAFT_LOGS_SECRET` - Override OAuth client secret
    /// - `RAID_ATTENDANCE_LOG_FILE` - Override log file path
    /// - `RAID_ATTENDANCE_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Notes
    /// - Environment variables take precedence over config file values
    /// - Overlapping alias groups fail here with `AppError::Config`
    pub async fn load() -> Result<Self, AppError> {
        Config::load_or_create(&get_config_path()).await
    }

    /// [`load`](Self::load) against an explicit config file path.
    pub async fn load_or_create(config_path: &str) -> Result<Self, AppError> {
        let mut config = Config::load_stored(config_path).await?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Returns the configuration as stored on disk, without environment
    /// overrides or validation.
    ///
    /// Without a file, defaults are used when both credential variables are
    /// set; otherwise credentials are prompted for and the file is created.
    pub async fn load_stored(config_path: &str) -> Result<Self, AppError> {
        if Path::new(config_path).exists() {
            debug!("Loading config from {config_path}");
            return Config::load_from_path(config_path).await;
        }

        if std::env::var(env_vars::CLIENT_ID).is_ok()
            && std::env::var(env_vars::CLIENT_SECRET).is_ok()
        {
            debug!("No config file at {config_path}, using defaults and environment credentials");
            return Ok(Config::default());
        }

        let (client_id, client_secret) = prompt_for_credentials().await?;
        let config = Config {
            client_id,
            client_secret,
            ..Config::default()
        };
        config.save_to_path(config_path).await?;
        info!("Created config file at {config_path}");
        Ok(config)
    }

    /// Overrides file values with any environment variables that are set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(client_id) = std::env::var(env_vars::CLIENT_ID) {
            self.client_id = client_id;
        }

        if let Ok(client_secret) = std::env::var(env_vars::CLIENT_SECRET) {
            self.client_secret = client_secret;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The client secret is masked. Handles the case when no config file exists.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Endpoint:");
            println!("{}", config.api_endpoint);
            println!("Token URL:");
            println!("{}", config.token_url);
            println!("Client ID:");
            println!("{}", config.client_id);
            println!("Client Secret:");
            println!("{}", mask_secret(&config.client_secret));
            println!("────────────────────────────────────");
            println!("Guild / Zone:");
            println!("{} / {}", config.guild_id, config.zone_id);
            println!("Output File:");
            println!("{}", config.output_path);
            println!("Alias Groups:");
            for group in &config.aliases {
                println!("  {}", group.join(", "));
            }
            println!("Excluded:");
            println!("  {}", config.exclude.join(", "));
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", constants::DEFAULT_LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
