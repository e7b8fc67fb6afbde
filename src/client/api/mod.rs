//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Token-producing exchanges (login, refresh) and registration
//! - [`VocabularyApi`] - Protected word operations

mod auth;
mod vocabulary;

pub use auth::AuthApi;
pub use vocabulary::VocabularyApi;
