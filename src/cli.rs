use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when progress logs should also go to stdout.
/// Config and version commands print their own output, and --quiet keeps
/// the export silent apart from errors.
pub fn logs_to_stdout(args: &Args) -> bool {
    !(args.quiet || args.version || args.list_config)
}

/// Returns true when the invocation only changes stored configuration.
pub fn is_config_update(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Guild Raid Attendance Exporter
///
/// Downloads a guild's attendance history from Warcraft Logs and writes a
/// players × raid-nights CSV. Cells are "x" for attended, "n/a" for nights
/// before the player's first raid, and empty for missed nights.
///
/// Credentials are read from the config file or from the
/// WARCRAFT_LOGS_CLIENT and WARCRAFT_LOGS_SECRET environment variables.
#[derive(Parser, Debug, Default)]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the CSV to this path instead of the configured output path.
    #[arg(short = 'o', long = "output", help_heading = "Export Options")]
    pub output: Option<String>,

    /// Export this guild instead of the configured one.
    #[arg(long = "guild", value_name = "GUILD_ID", help_heading = "Export Options")]
    pub guild: Option<u64>,

    /// Export this zone instead of the configured one.
    #[arg(long = "zone", value_name = "ZONE_ID", help_heading = "Export Options")]
    pub zone: Option<u64>,

    /// Keep progress logs off the terminal. Full logs still go to the log file.
    #[arg(short = 'q', long = "quiet", help_heading = "Export Options")]
    pub quiet: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug level logging.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
