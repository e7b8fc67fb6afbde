//! In-memory token store owned by the background service

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;
use tokio::sync::RwLock;

use super::timestamp::{TimestampPolicy, parse_instant};
use crate::error::ApiResult;

/// Bearer access token with its absolute expiry.
///
/// `Debug` never prints the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// Opaque bearer credential
    pub value: String,

    /// Instant after which the token is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl Token {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Check whether the token has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Check whether the token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Default)]
struct StoreState {
    token: Option<Token>,
    generation: u64,
}

/// Holder of the current access token.
///
/// Cloning yields another handle to the same token. Value and expiry are
/// always replaced together in a single write.
#[derive(Debug, Clone)]
pub struct TokenStore {
    state: Arc<RwLock<StoreState>>,
    policy: TimestampPolicy,
}

impl TokenStore {
    pub fn new(policy: TimestampPolicy) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            policy,
        }
    }

    /// Store a token from its raw wire form.
    ///
    /// The expiry is parsed before anything is written; on a parse error the
    /// store keeps whatever it held before.
    pub async fn set_token(&self, value: impl Into<String>, expires_at_raw: &str) -> ApiResult<Token> {
        let expires_at = parse_instant(expires_at_raw, self.policy)?;
        let token = Token::new(value, expires_at);
        self.store(token.clone()).await;
        Ok(token)
    }

    /// Replace the current token with an already parsed one
    pub async fn store(&self, token: Token) {
        let mut state = self.state.write().await;
        debug!("Storing access token expiring at {}", token.expires_at);
        state.token = Some(token);
        state.generation += 1;
    }

    /// Most recently stored token value, expired or not
    pub async fn get_token(&self) -> Option<String> {
        self.state.read().await.token.as_ref().map(|t| t.value.clone())
    }

    /// Copy of the current token (value and expiry together)
    pub async fn current(&self) -> Option<Token> {
        self.state.read().await.token.clone()
    }

    /// Current token together with the write generation it belongs to
    pub async fn snapshot(&self) -> (Option<Token>, u64) {
        let state = self.state.read().await;
        (state.token.clone(), state.generation)
    }

    /// Number of writes since the store was created
    pub async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }

    /// Check whether the token has expired. A store that never held a token
    /// counts as expired.
    pub async fn is_token_expired(&self) -> bool {
        match self.state.read().await.token {
            None => true,
            Some(ref token) => token.is_expired(),
        }
    }
}
