//! Authorized requests against protected endpoints
//!
//! [`AuthorizedRequest`] is the only path through which protected calls are
//! made. Before every request it asks its [`TokenSource`] for a bearer token;
//! sources refresh expired tokens before handing them out, so a request is
//! never sent with a token known to be expired.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde_json::Value;

use super::http::{HttpContext, error_message};
use crate::error::{ApiError, ApiResult};

/// Provider of currently valid bearer tokens.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Return a bearer token that is not expired, refreshing if necessary.
    async fn bearer_token(&self) -> ApiResult<String>;
}

#[async_trait]
impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    async fn bearer_token(&self) -> ApiResult<String> {
        (**self).bearer_token().await
    }
}

/// Outbound API call wrapper that attaches a valid bearer token.
pub struct AuthorizedRequest<S> {
    http: HttpContext,
    tokens: S,
}

impl<S: TokenSource> AuthorizedRequest<S> {
    pub fn new(http: HttpContext, tokens: S) -> Self {
        Self { http, tokens }
    }

    /// GET `url` (a path, or an absolute URL on the service host) and return the
    /// decoded JSON body.
    pub async fn call(&self, url: &str) -> ApiResult<Value> {
        self.send::<()>(Method::GET, url, &[], None).await
    }

    /// Send an authorized request with optional query parameters and JSON body.
    ///
    /// An empty success body decodes as `Value::Null`.
    pub async fn send<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<Value> {
        let url = self.http.url(path)?;

        // A refresh failure stops the flow here, before anything is sent
        let token = self.tokens.bearer_token().await?;

        debug!("{} {}", method, url);

        let mut request = self
            .http
            .http()
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", token));

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Request {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }

        let text = response.text().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to read response: {}", e))
        })?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}
