//! Saved word display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::client::models::SavedWord;
use crate::output::PrettyRow;
use crate::output::formatters::format_added_at;

/// Maximum phrase width in table output
const MAX_WORD_WIDTH: usize = 40;

/// Saved word display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WordDisplay {
    #[tabled(rename = "WORD ID")]
    pub id: String,

    #[tabled(rename = "WORD")]
    pub word: String,

    #[tabled(rename = "TRANSLATION")]
    pub translation: String,

    #[tabled(rename = "POS")]
    pub part_of_speech: String,

    #[tabled(rename = "FAV")]
    #[serde(skip)]
    pub mark: String,

    #[tabled(skip)]
    pub favorite: bool,

    /// Local time the word was added
    #[tabled(rename = "ADDED")]
    pub added: String,

    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

fn favorite_mark(favorite: bool) -> String {
    if favorite { "★".to_string() } else { String::new() }
}

impl From<SavedWord> for WordDisplay {
    fn from(word: SavedWord) -> Self {
        Self {
            added: format_added_at(word.added_at.as_deref()),
            id: word.word_id,
            word: truncate_string(&word.word, MAX_WORD_WIDTH),
            translation: word.translation,
            part_of_speech: word.part_of_speech.unwrap_or_else(|| "--".to_string()),
            mark: favorite_mark(word.is_favorite),
            favorite: word.is_favorite,
            added_at: word.added_at,
        }
    }
}

impl PrettyRow for WordDisplay {
    const EMPTY: &'static str = "No saved words match.";

    fn pretty(&self) -> String {
        let star = if self.favorite { "★ ".yellow().to_string() } else { "  ".to_string() };
        format!(
            "{}{} {} {} {}",
            star,
            self.word.bold(),
            format!("({})", self.part_of_speech).dimmed(),
            self.translation.cyan(),
            format!("[{}]", self.id).dimmed()
        )
    }
}
