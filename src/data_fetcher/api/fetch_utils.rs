//! Generic HTTP fetching with a fixed courtesy delay and status classification

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches a JSON document with a single GET request.
///
/// This function:
/// - Sends exactly one request, with no retry or backoff
/// - Waits `delay` after the response arrives, whatever its status
/// - Maps 403 to [`AppError::AccessDenied`] and any other non-200 status to
///   [`AppError::UpstreamUnavailable`]
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
/// * `delay` - Pause observed after every request
///
/// # Returns
/// * `Result<Value, AppError>` - Parsed document or error
#[instrument(skip(client))]
pub async fn fetch_json(client: &Client, url: &str, delay: Duration) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let status = response.status();
    debug!("Response status: {status}");

    match status.as_u16() {
        200 => {}
        403 => {
            error!("HTTP 403 - access denied (URL: {})", url);
            return Err(AppError::access_denied(url));
        }
        code => {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            error!("HTTP {} - {} (URL: {})", code, reason, url);
            return Err(AppError::upstream_unavailable(code, url));
        }
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            &response_text.chars().take(200).collect::<String>()
        );
        if response_text.trim().is_empty() {
            AppError::api_malformed_json("Response body is empty", url)
        } else {
            AppError::api_malformed_json(e.to_string(), url)
        }
    })
}
