//! Background side of the token bridge

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc;

use super::BridgePort;
use super::protocol::{Envelope, Message, RequestId};
use crate::session::{Session, TokenAnswer};

/// Serve bridge messages from one connection until every client handle is
/// dropped.
///
/// Deliveries are stored before the next message is read. Each token request
/// is answered exactly once from its own task, so a slow refresh never holds
/// up deliveries or other requests.
pub async fn serve(session: Arc<Session>, port: BridgePort) {
    let BridgePort {
        mut inbound,
        outbound,
    } = port;

    while let Some(envelope) = inbound.recv().await {
        debug!("Bridge received {} #{}", envelope.message.kind(), envelope.id);

        match envelope.message {
            Message::TokenDelivered { value, expires_at } => {
                if let Err(e) = session.deliver(&value, &expires_at).await {
                    warn!("Rejected delivered token: {}", e);
                }
            }
            Message::TokenRequest => {
                tokio::spawn(answer(Arc::clone(&session), outbound.clone(), envelope.id));
            }
            other => warn!("Ignoring unexpected {} message on background side", other.kind()),
        }
    }

    debug!("Bridge connection closed");
}

async fn answer(session: Arc<Session>, outbound: mpsc::Sender<Envelope>, id: RequestId) {
    // A failed refresh answers with the stale expiry and no value
    let response = match session.answer_token_request().await {
        TokenAnswer::NotDelivered => Message::TokenResponse {
            value: None,
            expires_at: None,
        },
        TokenAnswer::Valid(token) => Message::TokenResponse {
            value: Some(token.value),
            expires_at: Some(token.expires_at.to_rfc3339()),
        },
        TokenAnswer::RefreshFailed(expired_at) => Message::TokenResponse {
            value: None,
            expires_at: Some(expired_at.to_rfc3339()),
        },
    };

    if outbound.send(Envelope::new(id, response)).await.is_err() {
        debug!("Requester for #{} went away before the answer", id);
    }
}
