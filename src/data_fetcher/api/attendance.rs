//! Paginated guild attendance feed

use serde_json::json;
use tracing::{error, info, instrument};

use super::graphql::GraphQlClient;
use crate::constants::warcraft_logs::{FIRST_PAGE, MAX_ATTENDANCE_PAGES};
use crate::data_fetcher::models::{AttendancePage, AttendanceQueryData, RawSession};
use crate::error::AppError;

/// Attendance for one guild and zone, one page per call.
pub const ATTENDANCE_QUERY: &str = r#"
query getAttendance($guildId: Int!, $zoneId: Int!, $page: Int!) {
  guildData {
    guild(id: $guildId) {
      attendance(zoneID: $zoneId, page: $page) {
        current_page
        has_more_pages
        data {
          startTime
          players {
            name
            presence
          }
        }
      }
    }
  }
}
"#;

/// Fetches a single attendance page.
#[instrument(skip(client))]
pub async fn fetch_attendance_page(
    client: &GraphQlClient,
    guild_id: u64,
    zone_id: u64,
    page: u32,
) -> Result<AttendancePage, AppError> {
    let data: AttendanceQueryData = client
        .query(
            ATTENDANCE_QUERY,
            json!({ "guildId": guild_id, "zoneId": zone_id, "page": page }),
        )
        .await?;

    data.into_page().ok_or_else(|| {
        AppError::api_no_data(format!("guild {guild_id} not found"), client.endpoint())
    })
}

/// Fetches every attendance page in order and concatenates the records.
///
/// Page N+1 is requested only after page N reports `has_more_pages`.
/// A feed that still reports more pages after `MAX_ATTENDANCE_PAGES` fails
/// with `AppError::ApiUnexpectedStructure`.
#[instrument(skip(client))]
pub async fn fetch_all_attendance(
    client: &GraphQlClient,
    guild_id: u64,
    zone_id: u64,
) -> Result<Vec<RawSession>, AppError> {
    fetch_attendance_pages(client, guild_id, zone_id, MAX_ATTENDANCE_PAGES).await
}

async fn fetch_attendance_pages(
    client: &GraphQlClient,
    guild_id: u64,
    zone_id: u64,
    max_pages: u32,
) -> Result<Vec<RawSession>, AppError> {
    info!("Getting attendance report...");

    let mut records = Vec::new();
    let mut page = FIRST_PAGE;
    loop {
        let response = fetch_attendance_page(client, guild_id, zone_id, page).await?;
        records.extend(response.data);

        if !response.has_more_pages {
            break;
        }
        if page >= max_pages {
            error!("Attendance feed reports more pages after page {page}");
            return Err(AppError::api_unexpected_structure(
                format!("attendance feed did not end within {max_pages} pages"),
                client.endpoint(),
            ));
        }
        page += 1;
        info!("Report has more pages, grabbing page {page}...");
    }

    info!("Got {} attendance records for zone {zone_id}", records.len());
    Ok(records)
}
