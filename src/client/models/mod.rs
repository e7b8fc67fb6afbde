//! Vocabulary service data models
//!
//! Request and response types for the authentication and vocabulary
//! endpoints, organized by resource.

mod auth;
mod user;
mod word;

pub use auth::{PasswordGrantForm, RegisterRequest, TokenResponse};
pub use user::UserProfile;
pub use word::{CustomTranslation, SavedWord};
