//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::UserProfile;
use crate::error::ApiResult;
use crate::token::Token;

/// Token-producing exchanges with the authentication service
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange email and password for an access token
    async fn login(&self, email: &str, password: &str) -> ApiResult<Token>;

    /// Obtain a fresh access token using the session cookie set at login.
    ///
    /// Failures are reported as [`ApiError::Refresh`](crate::error::ApiError::Refresh).
    async fn refresh(&self) -> ApiResult<Token>;

    /// Create a new account
    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<UserProfile>;
}
