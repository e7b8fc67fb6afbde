//! Surface side of the token bridge

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use tokio::sync::{Mutex, mpsc, oneshot};

use super::protocol::{Envelope, Message, RequestId, TokenReply};
use crate::client::authorized::TokenSource;
use crate::error::{ApiError, ApiResult};
use crate::token::{TimestampPolicy, Token, parse_instant};

type PendingMap = Arc<Mutex<HashMap<RequestId, oneshot::Sender<TokenReply>>>>;

/// Handle used by surfaces to talk to the background service.
///
/// Clones share the same connection; responses are routed back to the
/// requester by correlation id.
#[derive(Clone)]
pub struct BridgeClient {
    outbound: mpsc::Sender<Envelope>,
    pending: PendingMap,
    next_id: Arc<AtomicU64>,
    timeout: Duration,
}

impl BridgeClient {
    /// Create a client and spawn the task routing responses to requesters.
    ///
    /// Must be called from within a Tokio runtime.
    pub(super) fn new(
        outbound: mpsc::Sender<Envelope>,
        inbound: mpsc::Receiver<Envelope>,
        timeout: Duration,
    ) -> Self {
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        tokio::spawn(route_responses(inbound, Arc::clone(&pending)));

        Self {
            outbound,
            pending,
            next_id: Arc::new(AtomicU64::new(1)),
            timeout,
        }
    }

    fn next_id(&self) -> RequestId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Push a freshly obtained token to the background service.
    pub async fn deliver_token(&self, token: &Token) -> ApiResult<()> {
        let envelope = Envelope::new(
            self.next_id(),
            Message::TokenDelivered {
                value: token.value.clone(),
                expires_at: token.expires_at.to_rfc3339(),
            },
        );

        self.outbound.send(envelope).await.map_err(|_| {
            ApiError::TokenUnavailable("background service is not running".to_string())
        })
    }

    /// Ask the background service for the current token.
    ///
    /// Resolves to [`ApiError::TokenUnavailable`] if the service is gone or
    /// does not answer within the bridge timeout. An answered request may
    /// still carry no token.
    pub async fn request_token(&self) -> ApiResult<TokenReply> {
        let id = self.next_id();
        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id, tx);

        let exchange = async move {
            self.outbound
                .send(Envelope::new(id, Message::TokenRequest))
                .await
                .map_err(|_| {
                    ApiError::TokenUnavailable("background service is not running".to_string())
                })?;

            rx.await.map_err(|_| {
                ApiError::TokenUnavailable("background service stopped before answering".to_string())
            })
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(e)) => {
                self.pending.lock().await.remove(&id);
                Err(e)
            }
            Err(_) => {
                self.pending.lock().await.remove(&id);
                warn!("Token request {} not answered within {:?}", id, self.timeout);
                Err(ApiError::TokenUnavailable(format!(
                    "no answer from background service within {:?}",
                    self.timeout
                )))
            }
        }
    }
}

async fn route_responses(mut inbound: mpsc::Receiver<Envelope>, pending: PendingMap) {
    while let Some(envelope) = inbound.recv().await {
        match envelope.message {
            Message::TokenResponse { value, expires_at } => {
                let waiter = pending.lock().await.remove(&envelope.id);
                match waiter {
                    // The requester may have timed out already
                    Some(tx) => {
                        let _ = tx.send(TokenReply { value, expires_at });
                    }
                    None => debug!("Dropping response to unknown request {}", envelope.id),
                }
            }
            other => warn!("Ignoring unexpected {} message on surface side", other.kind()),
        }
    }

    // Background side closed; fail everyone still waiting
    pending.lock().await.clear();
}

#[async_trait]
impl TokenSource for BridgeClient {
    async fn bearer_token(&self) -> ApiResult<String> {
        let reply = self.request_token().await?;

        let value = match (reply.value, reply.expires_at.as_deref()) {
            (Some(value), _) => value,
            (None, None) => {
                return Err(ApiError::TokenUnavailable(
                    "no token has been delivered yet".to_string(),
                ));
            }
            (None, Some(expired_at)) => {
                return Err(ApiError::Refresh(format!(
                    "background service could not renew the token that expired at {}",
                    expired_at
                )));
            }
        };

        // The background refreshes before answering; still refuse a token
        // that is already past its expiry.
        if let Some(raw) = reply.expires_at {
            let expires_at = parse_instant(&raw, TimestampPolicy::Strict)?;
            if Utc::now() > expires_at {
                return Err(ApiError::TokenUnavailable("token expired in transit".to_string()));
            }
        }

        Ok(value)
    }
}
