//! Background session state
//!
//! [`Session`] owns the [`TokenStore`] for the lifetime of the background
//! service and coordinates refreshes so that at most one refresh request is
//! outstanding at any time. Callers that observe an expired token while a
//! refresh is running await that same refresh instead of starting another.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};
use log::{debug, warn};
use tokio::sync::Mutex;

use crate::client::AuthApi;
use crate::client::authorized::TokenSource;
use crate::error::ApiResult;
use crate::token::{Token, TokenStore};

type SharedRefresh = Shared<BoxFuture<'static, ApiResult<Token>>>;

/// Outcome of a token request made over the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAnswer {
    /// No login surface has delivered a token yet
    NotDelivered,
    /// A token that is valid now
    Valid(Token),
    /// The stored token expired and the refresh failed; carries the stale expiry
    RefreshFailed(DateTime<Utc>),
}

/// Token store plus single-flight refresh, owned by the background service.
pub struct Session {
    store: TokenStore,
    auth: Arc<dyn AuthApi>,
    // The refresh currently running, if any. Cleared once it completes.
    in_flight: Mutex<Option<SharedRefresh>>,
}

impl Session {
    pub fn new(store: TokenStore, auth: Arc<dyn AuthApi>) -> Self {
        Self {
            store,
            auth,
            in_flight: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// Store a token pushed by a login surface.
    pub async fn deliver(&self, value: &str, expires_at_raw: &str) -> ApiResult<Token> {
        self.store.set_token(value, expires_at_raw).await
    }

    /// Return a token that is valid now, refreshing first when the stored one
    /// is expired or missing.
    pub async fn valid_token(&self) -> ApiResult<Token> {
        let (current, generation) = self.store.snapshot().await;

        match current {
            Some(token) if !token.is_expired() => return Ok(token),
            Some(_) => debug!("Access token expired, refreshing"),
            None => debug!("No access token stored, refreshing"),
        }

        self.refresh_since(generation).await
    }

    /// Answer a token request from another component.
    ///
    /// Nothing was ever stored: not delivered, without refreshing. Stored but
    /// expired: refresh first, and report the failure if that does not work.
    pub async fn answer_token_request(&self) -> TokenAnswer {
        let (current, _) = self.store.snapshot().await;
        let Some(stored) = current else {
            debug!("Token requested before any token was delivered");
            return TokenAnswer::NotDelivered;
        };

        match self.valid_token().await {
            Ok(token) => TokenAnswer::Valid(token),
            Err(e) => {
                warn!("Unable to provide an access token: {}", e);
                TokenAnswer::RefreshFailed(stored.expires_at)
            }
        }
    }

    // `seen` is the store generation the caller observed as expired. If the
    // store moved on since then and now holds a valid token, another flow
    // already refreshed and no new request is needed.
    async fn refresh_since(&self, seen: u64) -> ApiResult<Token> {
        let refresh = {
            let mut slot = self.in_flight.lock().await;
            let running = slot
                .as_ref()
                .filter(|pending| pending.peek().is_none())
                .cloned();

            match running {
                Some(pending) => {
                    debug!("Joining in-flight token refresh");
                    pending
                }
                None => {
                    let (current, generation) = self.store.snapshot().await;
                    if generation != seen {
                        if let Some(token) = current.filter(|t| !t.is_expired()) {
                            return Ok(token);
                        }
                    }

                    let pending = self.start_refresh();
                    *slot = Some(pending.clone());
                    pending
                }
            }
        };

        let result = refresh.clone().await;

        let mut slot = self.in_flight.lock().await;
        if slot.as_ref().is_some_and(|pending| pending.ptr_eq(&refresh)) {
            *slot = None;
        }

        result
    }

    fn start_refresh(&self) -> SharedRefresh {
        let auth = Arc::clone(&self.auth);
        let store = self.store.clone();

        async move {
            let token = auth.refresh().await?;
            store.store(token.clone()).await;
            Ok(token)
        }
        .boxed()
        .shared()
    }
}

#[async_trait]
impl TokenSource for Session {
    async fn bearer_token(&self) -> ApiResult<String> {
        self.valid_token().await.map(|token| token.value)
    }
}
