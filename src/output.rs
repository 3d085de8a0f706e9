//! CSV export of the attendance matrix.

use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::{info, instrument, warn};

use crate::attendance::AttendanceMatrix;
use crate::error::AppError;

/// Writes `matrix` as CSV to any writer.
///
/// Every field is quoted. The header is `name` followed by the session dates
/// in chronological order; absent cells are written as empty strings.
pub fn write_matrix<W: Write>(matrix: &AttendanceMatrix, writer: W) -> Result<(), AppError> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(matrix.header())?;
    for row in &matrix.rows {
        let record = std::iter::once(row.name.as_str())
            .chain(row.cells.iter().map(|(_, cell)| cell.as_str()));
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes `matrix` to the file at `path`, replacing any existing file.
///
/// A matrix without rows still produces a header-only file.
#[instrument(skip(matrix))]
pub fn write_matrix_csv(matrix: &AttendanceMatrix, path: &Path) -> Result<(), AppError> {
    if matrix.is_empty() {
        warn!("No players to export, writing header only");
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    write_matrix(matrix, std::io::BufWriter::new(file))?;

    info!(
        "Wrote {} players x {} sessions to {}",
        matrix.rows.len(),
        matrix.dates.len(),
        path.display()
    );
    Ok(())
}
