//! Mock authentication client for testing
//!
//! Provides a mock implementation of [`AuthApi`] for unit testing the token
//! machinery without making real HTTP calls.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::api::AuthApi;
use super::models::UserProfile;
use crate::error::{ApiError, ApiResult};
use crate::token::Token;

/// Mock auth client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAuthClient::new()
///     .with_refresh(Ok(MockAuthClient::token("T2", 60)))
///     .await;
///
/// let token = mock.refresh().await?;
/// assert_eq!(mock.call_counts().await.refresh, 1);
/// ```
#[derive(Default)]
pub struct MockAuthClient {
    /// Token returned from login
    login_token: Arc<Mutex<Option<Token>>>,
    /// Error to return from login (if any) - consumed on first use
    login_error: Arc<Mutex<Option<ApiError>>>,
    /// Queued refresh outcomes, consumed in order
    refresh_results: Arc<Mutex<VecDeque<ApiResult<Token>>>>,
    /// Simulated latency of a refresh round trip
    refresh_delay: Duration,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub refresh: usize,
    pub register: usize,
}

impl MockAuthClient {
    /// Create a new mock client with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a token expiring `minutes` from now (negative for the past).
    pub fn token(value: &str, minutes: i64) -> Token {
        Token::new(value, Utc::now() + chrono::Duration::minutes(minutes))
    }

    /// Configure the token returned from login.
    pub async fn with_login_token(self, token: Token) -> Self {
        *self.login_token.lock().await = Some(token);
        self
    }

    /// Configure an error to return on the next login.
    pub async fn with_login_error(self, error: ApiError) -> Self {
        *self.login_error.lock().await = Some(error);
        self
    }

    /// Queue an outcome for the next refresh call.
    pub async fn with_refresh(self, result: ApiResult<Token>) -> Self {
        self.refresh_results.lock().await.push_back(result);
        self
    }

    /// Make every refresh take `delay` before answering.
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn login(&self, _email: &str, _password: &str) -> ApiResult<Token> {
        self.call_count.lock().await.login += 1;

        if let Some(error) = self.login_error.lock().await.take() {
            return Err(error);
        }

        self.login_token
            .lock()
            .await
            .clone()
            .ok_or(ApiError::Authentication { status: 401 })
    }

    async fn refresh(&self) -> ApiResult<Token> {
        self.call_count.lock().await.refresh += 1;

        if !self.refresh_delay.is_zero() {
            tokio::time::sleep(self.refresh_delay).await;
        }

        self.refresh_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Refresh("HTTP 401".to_string())))
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> ApiResult<UserProfile> {
        self.call_count.lock().await.register += 1;

        Ok(UserProfile {
            user_id: "mock-user".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            is_active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_login_without_token_is_unauthorized() {
        let mock = MockAuthClient::new();

        let err = mock.login("a@b.com", "pw").await.unwrap_err();

        assert!(matches!(err, ApiError::Authentication { status: 401 }));
        assert_eq!(mock.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_mock_refresh_results_consumed_in_order() {
        let mock = MockAuthClient::new()
            .with_refresh(Ok(MockAuthClient::token("first", 10)))
            .await
            .with_refresh(Err(ApiError::Refresh("HTTP 403".to_string())))
            .await;

        assert_eq!(mock.refresh().await.unwrap().value, "first");
        assert!(matches!(mock.refresh().await, Err(ApiError::Refresh(_))));
        assert_eq!(mock.call_counts().await.refresh, 2);
    }

    #[tokio::test]
    async fn test_mock_login_error_consumed_once() {
        let mock = MockAuthClient::new()
            .with_login_token(MockAuthClient::token("T1", 10))
            .await
            .with_login_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.login("a@b.com", "pw").await.is_err());
        assert_eq!(mock.login("a@b.com", "pw").await.unwrap().value, "T1");
    }
}
