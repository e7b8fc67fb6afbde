//! Vocabulary API trait for protected word operations

use async_trait::async_trait;

use crate::client::models::{SavedWord, UserProfile};
use crate::error::ApiResult;

/// Protected operations on the current user's vocabulary.
///
/// Every method goes through an authorized request, so an expired token is
/// refreshed before the call is made.
#[async_trait]
pub trait VocabularyApi: Send + Sync {
    /// Save a word or phrase; the server translates it
    async fn save_phrase(&self, phrase: &str) -> ApiResult<serde_json::Value>;

    /// List all saved words
    async fn list_words(&self) -> ApiResult<Vec<SavedWord>>;

    /// Replace the translation (and optionally part of speech) of a word
    async fn set_custom_translation(
        &self,
        word_id: &str,
        translation: &str,
        pos: Option<&str>,
    ) -> ApiResult<()>;

    /// Remove a word from the user's list
    async fn delete_word(&self, word_id: &str) -> ApiResult<()>;

    /// Mark or unmark a word as favourite
    async fn set_favorite(&self, word_id: &str, is_favorite: bool) -> ApiResult<()>;

    /// Profile of the authenticated user
    async fn current_user(&self) -> ApiResult<UserProfile>;
}
