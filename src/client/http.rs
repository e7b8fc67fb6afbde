//! Shared HTTP plumbing for the vocabulary service clients

use std::time::Duration;

use log::warn;
use reqwest::{Client as HttpClient, Response, Url};

use crate::error::{ApiError, ApiResult};

/// Default vocabulary service location
pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:8000";

/// HTTP client and base URL shared by every client in the process.
///
/// The underlying client keeps a cookie jar, so the session cookie set by
/// the login response is sent automatically with the refresh request. Clones
/// share the same connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct HttpContext {
    http: HttpClient,
    base_url: String,
}

impl HttpContext {
    /// Create a new HTTP context with an optional custom host.
    ///
    /// # Arguments
    /// * `api_host` - Service host (e.g. "http://localhost:8000"); defaults to [`DEFAULT_API_HOST`]
    /// * `timeout` - Per-request timeout
    pub fn new(api_host: Option<&str>, timeout: Duration) -> ApiResult<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string();

        Ok(Self { http, base_url })
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL.
    ///
    /// Absolute URLs pass through only when they share the base URL's origin,
    /// so credentials never travel to another host.
    pub fn url(&self, path: &str) -> ApiResult<String> {
        if !(path.starts_with("http://") || path.starts_with("https://")) {
            return Ok(format!("{}{}", self.base_url, path));
        }

        let target = Url::parse(path).map_err(|_| ApiError::ForeignHost(path.to_string()))?;
        let base = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Network(format!("Invalid API host {}: {}", self.base_url, e)))?;

        if target.origin() != base.origin() {
            warn!(
                "Blocked request to {} (service host is {})",
                target.origin().ascii_serialization(),
                self.base_url
            );
            return Err(ApiError::ForeignHost(target.origin().ascii_serialization()));
        }

        Ok(path.to_string())
    }
}

/// Extract a readable error message from a failed response.
///
/// Prefers the `detail` field of a JSON error body, then the raw body, then
/// the canonical status reason.
pub(crate) async fn error_message(response: Response) -> String {
    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string();

    let body = match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => return fallback,
    };

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => match json.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body,
        },
        Err(_) => body,
    }
}
