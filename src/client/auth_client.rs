//! HTTP implementation of the authentication exchanges

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;

use super::api::AuthApi;
use super::http::{HttpContext, error_message};
use super::models::{PasswordGrantForm, RegisterRequest, TokenResponse, UserProfile};
use crate::error::{ApiError, ApiResult};
use crate::token::{TimestampPolicy, Token, parse_instant};

const LOGIN_PATH: &str = "/login/token";
const REFRESH_PATH: &str = "/login/refresh";
const REGISTER_PATH: &str = "/user/";

/// Client for the login, refresh and registration endpoints.
///
/// Never retries; every failure is returned to the caller.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: HttpContext,
    policy: TimestampPolicy,
}

impl AuthClient {
    pub fn new(http: HttpContext, policy: TimestampPolicy) -> Self {
        Self { http, policy }
    }

    fn parse_token(&self, body: TokenResponse) -> ApiResult<Token> {
        let expires_at = parse_instant(&body.exp, self.policy)?;
        Ok(Token::new(body.access_token, expires_at))
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<Token> {
        let url = self.http.url(LOGIN_PATH)?;
        debug!("POST {}", url);

        let response = self
            .http
            .http()
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&PasswordGrantForm::new(email, password))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Login rejected with HTTP {}", status.as_u16());
            return Err(ApiError::Authentication {
                status: status.as_u16(),
            });
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;

        let token = self.parse_token(body)?;
        info!("Logged in as {} (token expires {})", email, token.expires_at);
        Ok(token)
    }

    async fn refresh(&self) -> ApiResult<Token> {
        let url = self
            .http
            .url(REFRESH_PATH)
            .map_err(|e| ApiError::Refresh(e.to_string()))?;
        debug!("POST {}", url);

        let response = self
            .http
            .http()
            .post(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Refresh(ApiError::from(e).to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Token refresh rejected with HTTP {}", status.as_u16());
            return Err(ApiError::Refresh(format!("HTTP {}", status.as_u16())));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Refresh(format!("invalid refresh response: {}", e)))?;

        let token = self
            .parse_token(body)
            .map_err(|e| ApiError::Refresh(e.to_string()))?;
        info!("Access token refreshed (expires {})", token.expires_at);
        Ok(token)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<UserProfile> {
        let url = self.http.url(REGISTER_PATH)?;
        debug!("POST {}", url);

        let response = self
            .http
            .http()
            .post(&url)
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Request {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }

        response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse registration response: {}", e))
        })
    }
}
