//! Wire format of the token bridge
//!
//! Every message travels inside an [`Envelope`] carrying a correlation id.
//! Responses echo the id of the request they answer. Payloads carry only a
//! token value and a raw expiry timestamp.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Correlation identifier of a bridge message
pub type RequestId = u64;

/// Messages exchanged between surfaces and the background service
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    /// A login surface obtained a token; fire-and-forget
    TokenDelivered { value: String, expires_at: String },

    /// A surface asks for the current token
    TokenRequest,

    /// Answer to a [`Message::TokenRequest`]. Both fields absent: nothing was
    /// delivered yet. Only `expires_at` present: the stored token expired and
    /// could not be refreshed.
    TokenResponse {
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        expires_at: Option<String>,
    },
}

impl Message {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Message::TokenDelivered { .. } => "token_delivered",
            Message::TokenRequest => "token_request",
            Message::TokenResponse { .. } => "token_response",
        }
    }
}

// Token values must never reach logs
impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::TokenDelivered { expires_at, .. } => f
                .debug_struct("TokenDelivered")
                .field("value", &"<redacted>")
                .field("expires_at", expires_at)
                .finish(),
            Message::TokenRequest => f.write_str("TokenRequest"),
            Message::TokenResponse { value, expires_at } => f
                .debug_struct("TokenResponse")
                .field("value", &value.as_ref().map(|_| "<redacted>"))
                .field("expires_at", expires_at)
                .finish(),
        }
    }
}

/// A message plus its correlation id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: RequestId,
    pub message: Message,
}

impl Envelope {
    pub fn new(id: RequestId, message: Message) -> Self {
        Self { id, message }
    }
}

/// Payload of a token response as seen by the requesting surface
#[derive(Clone, PartialEq, Eq)]
pub struct TokenReply {
    pub value: Option<String>,
    pub expires_at: Option<String>,
}

impl fmt::Debug for TokenReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenReply")
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
