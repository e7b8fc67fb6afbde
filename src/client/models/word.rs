//! Vocabulary models

use serde::{Deserialize, Serialize};

/// Word saved by the current user, as returned by `/user/my-words`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWord {
    /// Word ID
    pub word_id: String,

    /// The saved word or phrase
    pub word: String,

    /// Current translation
    #[serde(default)]
    pub translation: String,

    /// Part of speech of the translation (e.g. "noun")
    #[serde(default)]
    pub part_of_speech: Option<String>,

    /// Whether the user marked the word as a favourite
    #[serde(default)]
    pub is_favorite: bool,

    /// When the word was added (server timestamp string)
    #[serde(default)]
    pub added_at: Option<String>,
}

/// Body of `PATCH /user/set-custom-translation`
#[derive(Debug, Clone, Serialize)]
pub struct CustomTranslation<'a> {
    pub word_id: &'a str,
    pub translation: &'a str,
    /// Empty lets the server guess the part of speech
    pub pos: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_word_full_payload() {
        let json = r#"{
            "word_id": "6f1c",
            "word": "apple",
            "translation": "яблоко",
            "part_of_speech": "noun",
            "is_favorite": true,
            "added_at": "2024-05-01T10:00:00"
        }"#;

        let word: SavedWord = serde_json::from_str(json).unwrap();

        assert_eq!(word.word, "apple");
        assert_eq!(word.part_of_speech.as_deref(), Some("noun"));
        assert!(word.is_favorite);
        assert_eq!(word.added_at.as_deref(), Some("2024-05-01T10:00:00"));
    }

    #[test]
    fn test_saved_word_sparse_payload() {
        let json = r#"{"word_id": "1", "word": "run", "part_of_speech": null}"#;

        let word: SavedWord = serde_json::from_str(json).unwrap();

        assert_eq!(word.translation, "");
        assert_eq!(word.part_of_speech, None);
        assert!(!word.is_favorite);
        assert_eq!(word.added_at, None);
    }

    #[test]
    fn test_custom_translation_body() {
        let body = CustomTranslation {
            word_id: "w-1",
            translation: "бежать",
            pos: "verb",
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"word_id": "w-1", "translation": "бежать", "pos": "verb"}));
    }
}
