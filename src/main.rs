// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use commands::{
    handle_config_update_command, handle_export_command, handle_list_config_command,
    handle_version_command, validate_args,
};
use logging::setup_logging;
use raid_attendance::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // Handle version flag first
    if args.version {
        handle_version_command();
        return Ok(());
    }

    // Keep the guard alive until exit so buffered logs are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::debug!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    handle_export_command(&args).await
}
