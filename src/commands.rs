use crate::cli::Args;
use raid_attendance::config::Config;
use raid_attendance::error::AppError;
use raid_attendance::export::export_attendance;
use tracing::{error, info};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use --set-log-file and --clear-log-file together",
        ));
    }
    if let Some(output) = &args.output
        && output.trim().is_empty()
    {
        return Err(AppError::config_error("Output path cannot be empty"));
    }
    Ok(())
}

/// Applies per-run CLI overrides on top of the loaded configuration.
pub fn apply_cli_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(guild) = args.guild {
        config.guild_id = guild;
    }
    if let Some(zone) = args.zone {
        config.zone_id = zone;
    }
    config
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", raid_attendance::NAME, raid_attendance::VERSION);
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let config = update_stored_config(&config_path, args).await?;

    if config.log_file_path.is_none() {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the log file flags to the config stored at `config_path` and saves it.
///
/// The result is validated with environment overrides applied, but only the
/// stored values are written back.
pub async fn update_stored_config(config_path: &str, args: &Args) -> Result<Config, AppError> {
    let mut stored = Config::load_stored(config_path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        stored.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        stored.log_file_path = None;
    }

    let mut effective = stored.clone();
    effective.apply_env_overrides();
    effective.validate()?;

    stored.save_to_path(config_path).await?;
    info!("Saved config to {config_path}");
    Ok(stored)
}

/// Handles the default export command.
///
/// Loads config, applies CLI overrides, fetches every attendance page and
/// writes the matrix to the output path.
pub async fn handle_export_command(args: &Args) -> Result<(), AppError> {
    let config = apply_cli_overrides(Config::load().await?, args);
    info!(
        "Exporting attendance for guild {} zone {}",
        config.guild_id, config.zone_id
    );

    match export_attendance(&config).await {
        Ok(summary) => {
            info!(
                "The CSV file was written successfully: {} ({} players, {} sessions from {} reports)",
                summary.output_path, summary.players, summary.sessions, summary.records
            );
            Ok(())
        }
        Err(e) => {
            if e.is_retryable() {
                error!("Export failed with a temporary error, try again later: {e}");
            } else {
                error!("Export failed: {e}");
            }
            Err(e)
        }
    }
}
