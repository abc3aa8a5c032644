//! API utilities for talking to the listing server
//!
//! Provides the API base URL, the error type shared by all API calls and a
//! small JSON GET helper.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Port the listing server (`/stores`, `/categories`) listens on
const API_PORT: u16 = 3001;

/// Ошибки запросов к API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// A `STORES_API_BASE` set at compile time wins. Otherwise the base is built
/// from the current window location with port 3001.
///
/// # Returns
/// - API base URL like "http://localhost:3001"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("STORES_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/categories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
