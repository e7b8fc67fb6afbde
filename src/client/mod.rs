//! Vocabulary service API clients

pub mod api;
pub mod auth_client;
pub mod authorized;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod vocabulary;

pub use api::{AuthApi, VocabularyApi};
pub use auth_client::AuthClient;
pub use authorized::{AuthorizedRequest, TokenSource};
pub use http::HttpContext;
#[cfg(test)]
pub use mock::MockAuthClient;
pub use vocabulary::VocabularyClient;
