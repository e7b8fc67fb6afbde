//! Token bridge between surfaces and the background service
//!
//! Surfaces never touch the token store. They push tokens they obtained
//! ([`BridgeClient::deliver_token`]) and ask for the current one
//! ([`BridgeClient::request_token`]) over a pair of channels; the background
//! service answers through [`responder::serve`].

mod client;
pub mod protocol;
pub mod responder;

use std::time::Duration;

use tokio::sync::mpsc;

pub use client::BridgeClient;
pub use protocol::{Envelope, Message, TokenReply};

/// Default channel capacity per connection
pub const DEFAULT_CAPACITY: usize = 32;

/// Background end of one bridge connection
pub struct BridgePort {
    pub inbound: mpsc::Receiver<Envelope>,
    pub outbound: mpsc::Sender<Envelope>,
}

/// Open a bridge connection.
///
/// Returns the surface handle and the port to hand to the background
/// service. Must be called from within a Tokio runtime.
pub fn channel(capacity: usize, timeout: Duration) -> (BridgeClient, BridgePort) {
    let (to_background, from_surface) = mpsc::channel(capacity);
    let (to_surface, from_background) = mpsc::channel(capacity);

    let client = BridgeClient::new(to_background, from_background, timeout);
    let port = BridgePort {
        inbound: from_surface,
        outbound: to_surface,
    };

    (client, port)
}
