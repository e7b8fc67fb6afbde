//! Background service hosting the token state
//!
//! The service is created once per process. It owns the [`Session`] (and
//! through it the token store) and serves any number of bridge connections.
//! Token state lives exactly as long as the service.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::bridge::{self, BridgeClient, responder};
use crate::client::AuthApi;
use crate::session::Session;
use crate::token::{TimestampPolicy, TokenStore};

pub struct BackgroundService {
    session: Arc<Session>,
    bridge_timeout: Duration,
}

impl BackgroundService {
    pub fn new(auth: Arc<dyn AuthApi>, policy: TimestampPolicy, bridge_timeout: Duration) -> Self {
        let store = TokenStore::new(policy);
        Self {
            session: Arc::new(Session::new(store, auth)),
            bridge_timeout,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Open a bridge connection served by this service.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn connect(&self) -> BridgeClient {
        let (client, port) = bridge::channel(bridge::DEFAULT_CAPACITY, self.bridge_timeout);
        tokio::spawn(responder::serve(Arc::clone(&self.session), port));
        debug!("Bridge connection opened");
        client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::authorized::{AuthorizedRequest, TokenSource};
    use crate::client::{HttpContext, MockAuthClient};
    use crate::error::ApiError;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn service_with(mock: Arc<MockAuthClient>) -> BackgroundService {
        BackgroundService::new(mock, TimestampPolicy::AssumeUtc, TIMEOUT)
    }

    #[tokio::test]
    async fn test_request_before_delivery_is_answered_absent() {
        let mock = Arc::new(MockAuthClient::new());
        let service = service_with(mock.clone());
        let bridge = service.connect();

        let reply = bridge.request_token().await.unwrap();

        assert_eq!(reply.value, None);
        assert_eq!(reply.expires_at, None);
        assert_eq!(mock.call_counts().await.refresh, 0);
    }

    #[tokio::test]
    async fn test_bearer_token_before_delivery_is_unavailable() {
        let service = service_with(Arc::new(MockAuthClient::new()));
        let bridge = service.connect();

        let err = bridge.bearer_token().await.unwrap_err();

        assert!(matches!(err, ApiError::TokenUnavailable(_)));
    }

    #[tokio::test]
    async fn test_login_deliver_then_request_round_trip() {
        let mock = Arc::new(
            MockAuthClient::new()
                .with_login_token(MockAuthClient::token("T1", 60))
                .await,
        );
        let service = service_with(mock.clone());
        let login_surface = service.connect();
        let words_surface = service.connect();

        let token = mock.login("a@b.com", "pw").await.unwrap();
        login_surface.deliver_token(&token).await.unwrap();

        // Deliveries are applied in order on their own connection
        let reply = login_surface.request_token().await.unwrap();
        assert_eq!(reply.value.as_deref(), Some("T1"));

        assert_eq!(words_surface.bearer_token().await.unwrap(), "T1");
        assert!(!service.session().store().is_token_expired().await);
    }

    #[tokio::test]
    async fn test_delivery_with_zoneless_expiry() {
        let service = service_with(Arc::new(MockAuthClient::new()));
        let store = service.session().store().clone();

        service.session().deliver("T1", "2030-01-01T00:00:00").await.unwrap();

        assert_eq!(store.get_token().await.as_deref(), Some("T1"));
        assert!(!store.is_token_expired().await);
    }

    #[tokio::test]
    async fn test_expired_token_refreshed_before_answer() {
        let mock = Arc::new(
            MockAuthClient::new()
                .with_refresh(Ok(MockAuthClient::token("T2", 60)))
                .await,
        );
        let service = service_with(mock.clone());
        let bridge = service.connect();

        bridge
            .deliver_token(&MockAuthClient::token("T1", -5))
            .await
            .unwrap();

        assert_eq!(bridge.bearer_token().await.unwrap(), "T2");
        assert_eq!(mock.call_counts().await.refresh, 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_answers_with_stale_expiry_only() {
        let mock = Arc::new(
            MockAuthClient::new()
                .with_refresh(Err(ApiError::Refresh("HTTP 403".to_string())))
                .await,
        );
        let service = service_with(mock.clone());
        let bridge = service.connect();
        let stale = MockAuthClient::token("T1", -5);
        bridge.deliver_token(&stale).await.unwrap();

        let reply = bridge.request_token().await.unwrap();

        assert_eq!(reply.value, None);
        assert_eq!(reply.expires_at, Some(stale.expires_at.to_rfc3339()));
        assert_eq!(
            service.session().store().get_token().await.as_deref(),
            Some("T1")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_requests_correlate_and_share_refresh() {
        let mock = Arc::new(
            MockAuthClient::new()
                .with_refresh(Ok(MockAuthClient::token("T2", 60)))
                .await
                .with_refresh_delay(Duration::from_millis(100)),
        );
        let service = service_with(mock.clone());
        let bridge = service.connect();
        bridge
            .deliver_token(&MockAuthClient::token("T1", -5))
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let bridge = bridge.clone();
            handles.push(tokio::spawn(async move { bridge.request_token().await }));
        }

        for handle in handles {
            let reply = handle.await.unwrap().unwrap();
            assert_eq!(reply.value.as_deref(), Some("T2"));
        }
        assert_eq!(mock.call_counts().await.refresh, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unanswered_request_times_out() {
        // Nobody serves the port, but it stays open
        let (bridge, _port) = bridge::channel(4, Duration::from_millis(500));

        let err = bridge.request_token().await.unwrap_err();

        match err {
            ApiError::TokenUnavailable(reason) => assert!(reason.contains("no answer")),
            other => panic!("Expected ApiError::TokenUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_without_background_fails_fast() {
        let (bridge, port) = bridge::channel(4, Duration::from_secs(60));
        drop(port);

        let err = bridge.request_token().await.unwrap_err();

        assert!(matches!(err, ApiError::TokenUnavailable(_)));
    }

    #[tokio::test]
    async fn test_authorized_request_through_bridge_uses_refreshed_token() {
        let mut server = mockito::Server::new_async().await;
        let stale = server
            .mock("GET", "/user/my-words")
            .match_header("authorization", "Bearer T1")
            .expect(0)
            .create_async()
            .await;
        let fresh = server
            .mock("GET", "/user/my-words")
            .match_header("authorization", "Bearer T2")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let mock = Arc::new(
            MockAuthClient::new()
                .with_refresh(Ok(MockAuthClient::token("T2", 60)))
                .await,
        );
        let service = service_with(mock.clone());
        let bridge = service.connect();
        bridge
            .deliver_token(&MockAuthClient::token("T1", -5))
            .await
            .unwrap();

        let http = HttpContext::new(Some(server.url().as_str()), TIMEOUT).unwrap();
        let request = AuthorizedRequest::new(http, bridge);
        request.call("/user/my-words").await.unwrap();

        stale.assert_async().await;
        fresh.assert_async().await;
        assert_eq!(mock.call_counts().await.refresh, 1);
    }

    #[tokio::test]
    async fn test_authorized_request_through_bridge_reports_refresh_failure() {
        let mut server = mockito::Server::new_async().await;
        let words = server
            .mock("GET", "/user/my-words")
            .expect(0)
            .create_async()
            .await;

        let mock = Arc::new(
            MockAuthClient::new()
                .with_refresh(Err(ApiError::Refresh("HTTP 403".to_string())))
                .await,
        );
        let service = service_with(mock.clone());
        let bridge = service.connect();
        bridge
            .deliver_token(&MockAuthClient::token("T1", -5))
            .await
            .unwrap();

        let http = HttpContext::new(Some(server.url().as_str()), TIMEOUT).unwrap();
        let request = AuthorizedRequest::new(http, bridge);
        let err = request.call("/user/my-words").await.unwrap_err();

        match err {
            ApiError::Refresh(reason) => assert!(reason.contains("could not renew")),
            other => panic!("Expected ApiError::Refresh, got {:?}", other),
        }
        words.assert_async().await;
        assert_eq!(mock.call_counts().await.refresh, 1);
    }
}
