//! End-to-end attendance export: authenticate, fetch every page, normalize,
//! write the CSV.

use std::path::Path;

use tracing::{info, instrument};

use crate::attendance::{AttendanceAggregator, AttendanceMatrix};
use crate::config::Config;
use crate::data_fetcher::api::{GraphQlClient, fetch_all_attendance};
use crate::error::AppError;
use crate::output::write_matrix_csv;

/// What an export produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub records: usize,
    pub sessions: usize,
    pub players: usize,
    pub output_path: String,
}

/// Runs the export described by `config`.
///
/// The alias configuration is checked before any network call. Transport
/// and auth failures abort before the pipeline runs, and nothing is written
/// unless the whole matrix was built.
///
/// # Example
/// ```rust,no_run
/// use raid_attendance::{Config, export::export_attendance};
///
/// #[tokio::main]
/// async fn main() -> Result<(), raid_attendance::AppError> {
///     let config = Config::load().await?;
///     let summary = export_attendance(&config).await?;
///     println!("{} players written to {}", summary.players, summary.output_path);
///     Ok(())
/// }
/// ```
#[instrument(skip(config), fields(guild = config.guild_id, zone = config.zone_id))]
pub async fn export_attendance(config: &Config) -> Result<ExportSummary, AppError> {
    let aggregator = AttendanceAggregator::from_config(config)?;

    let client = GraphQlClient::connect(config).await?;
    let records = fetch_all_attendance(&client, config.guild_id, config.zone_id).await?;
    let record_count = records.len();

    info!("Processing data...");
    let matrix: AttendanceMatrix = aggregator.build_matrix(records)?;

    info!("Writing to CSV...");
    write_matrix_csv(&matrix, Path::new(&config.output_path))?;

    Ok(ExportSummary {
        records: record_count,
        sessions: matrix.dates.len(),
        players: matrix.rows.len(),
        output_path: config.output_path.clone(),
    })
}
