//! Shared request execution and response classification

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::AppError;

/// Maps a non-success HTTP status to the matching `AppError` variant.
pub(super) fn status_error(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Maps a transport-level reqwest failure.
pub(super) fn request_error(e: reqwest::Error, url: &str) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Sends `request` once and returns the status and body text.
///
/// Nothing is retried; failures surface to the caller.
pub(super) async fn send(request: RequestBuilder, url: &str) -> Result<(StatusCode, String), AppError> {
    let response = request.send().await.map_err(|e| request_error(e, url))?;
    let status = response.status();
    debug!("Response status: {status}");

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", text.len());
    Ok((status, text))
}

/// Parses a JSON body, telling empty, non-JSON and mis-shaped payloads apart.
pub(super) fn parse_json<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let preview: String = text.chars().take(200).collect();
        error!("Response text (first 200 chars): {preview}");

        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[allow(dead_code)]
        value: i32,
    }

    #[test]
    fn test_status_error_classification() {
        let url = "https://api.example.com";
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, url),
            AppError::ApiNotFound { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, url),
            AppError::ApiRateLimit { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, url),
            AppError::ApiClientError { status: 401, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            AppError::ApiServiceUnavailable { status: 502, .. }
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR, url),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_parse_json_classification() {
        let url = "https://api.example.com";
        assert!(parse_json::<Sample>(r#"{"value": 1}"#, url).is_ok());
        assert!(matches!(
            parse_json::<Sample>("   ", url),
            Err(AppError::ApiNoData { .. })
        ));
        assert!(matches!(
            parse_json::<Sample>("<html>", url),
            Err(AppError::ApiMalformedJson { .. })
        ));
        assert!(matches!(
            parse_json::<Sample>(r#"{"other": 1}"#, url),
            Err(AppError::ApiUnexpectedStructure { .. })
        ));
    }
}
