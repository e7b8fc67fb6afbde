//! Vocabulary client for protected word endpoints

use async_trait::async_trait;
use log::debug;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::VocabularyApi;
use super::authorized::{AuthorizedRequest, TokenSource};
use super::http::HttpContext;
use super::models::{CustomTranslation, SavedWord, UserProfile};
use crate::error::{ApiError, ApiResult};

const SAVE_PHRASE_PATH: &str = "/user/save-phrase";
const MY_WORDS_PATH: &str = "/user/my-words";
const CUSTOM_TRANSLATION_PATH: &str = "/user/set-custom-translation";
const DELETE_WORD_PATH: &str = "/user/delete-word";
const FAVORITE_PATH: &str = "/user/change-favorite";
const CURRENT_USER_PATH: &str = "/user/get-user";

/// Client for the current user's vocabulary.
///
/// Generic over the token source: inside the background service this is the
/// [`Session`](crate::session::Session), on a surface it is a
/// [`BridgeClient`](crate::bridge::BridgeClient).
pub struct VocabularyClient<S> {
    request: AuthorizedRequest<S>,
}

impl<S: TokenSource> VocabularyClient<S> {
    pub fn new(http: HttpContext, tokens: S) -> Self {
        Self {
            request: AuthorizedRequest::new(http, tokens),
        }
    }

    fn decode<T: DeserializeOwned>(value: Value, what: &str) -> ApiResult<T> {
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
    }
}

#[async_trait]
impl<S: TokenSource> VocabularyApi for VocabularyClient<S> {
    async fn save_phrase(&self, phrase: &str) -> ApiResult<Value> {
        debug!("Saving phrase ({} chars)", phrase.chars().count());
        self.request
            .send::<()>(
                Method::POST,
                SAVE_PHRASE_PATH,
                &[("word", phrase.to_string())],
                None,
            )
            .await
    }

    async fn list_words(&self) -> ApiResult<Vec<SavedWord>> {
        let body = self.request.call(MY_WORDS_PATH).await?;
        if body.is_null() {
            return Ok(Vec::new());
        }
        let words: Vec<SavedWord> = Self::decode(body, "word list")?;
        debug!("Fetched {} saved words", words.len());
        Ok(words)
    }

    async fn set_custom_translation(
        &self,
        word_id: &str,
        translation: &str,
        pos: Option<&str>,
    ) -> ApiResult<()> {
        let body = CustomTranslation {
            word_id,
            translation,
            pos: pos.unwrap_or(""),
        };
        self.request
            .send(Method::PATCH, CUSTOM_TRANSLATION_PATH, &[], Some(&body))
            .await?;
        Ok(())
    }

    async fn delete_word(&self, word_id: &str) -> ApiResult<()> {
        self.request
            .send::<()>(
                Method::DELETE,
                DELETE_WORD_PATH,
                &[("word_id", word_id.to_string())],
                None,
            )
            .await?;
        Ok(())
    }

    async fn set_favorite(&self, word_id: &str, is_favorite: bool) -> ApiResult<()> {
        self.request
            .send::<()>(
                Method::PATCH,
                FAVORITE_PATH,
                &[
                    ("word_id", word_id.to_string()),
                    ("is_favorite", is_favorite.to_string()),
                ],
                None,
            )
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> ApiResult<UserProfile> {
        let body = self.request.call(CURRENT_USER_PATH).await?;
        Self::decode(body, "user profile")
    }
}
