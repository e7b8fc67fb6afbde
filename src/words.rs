//! Filtering and ordering of the saved word list

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::SavedWord;
use crate::token::{TimestampPolicy, parse_instant};

/// Order of the word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently added first
    #[default]
    Time,
    /// Alphabetical by word, ignoring case
    Alphabet,
}

/// Criteria applied to the word list after it is fetched.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    pub favorites_only: bool,
    pub part_of_speech: Option<String>,
    /// UTC calendar day the word was added on
    pub added_on: Option<NaiveDate>,
    pub sort: SortOrder,
}

fn added_at(word: &SavedWord) -> Option<DateTime<Utc>> {
    // Server timestamps carry no zone
    word.added_at
        .as_deref()
        .and_then(|raw| parse_instant(raw, TimestampPolicy::AssumeUtc).ok())
}

impl WordFilter {
    fn matches(&self, word: &SavedWord) -> bool {
        if self.favorites_only && !word.is_favorite {
            return false;
        }

        if let Some(ref pos) = self.part_of_speech {
            let same = word
                .part_of_speech
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case(pos));
            if !same {
                return false;
            }
        }

        if let Some(day) = self.added_on {
            if added_at(word).map(|at| at.date_naive()) != Some(day) {
                return false;
            }
        }

        true
    }

    /// Keep matching words and order them.
    ///
    /// Words without a readable `added_at` sort last in time order.
    pub fn apply(&self, words: Vec<SavedWord>) -> Vec<SavedWord> {
        let mut kept: Vec<SavedWord> = words.into_iter().filter(|w| self.matches(w)).collect();

        match self.sort {
            SortOrder::Time => kept.sort_by_key(|w| std::cmp::Reverse(added_at(w))),
            SortOrder::Alphabet => kept.sort_by_cached_key(|w| w.word.to_lowercase()),
        }

        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: &str, text: &str, pos: Option<&str>, favorite: bool, added: Option<&str>) -> SavedWord {
        SavedWord {
            word_id: id.to_string(),
            word: text.to_string(),
            translation: String::new(),
            part_of_speech: pos.map(str::to_string),
            is_favorite: favorite,
            added_at: added.map(str::to_string),
        }
    }

    fn sample() -> Vec<SavedWord> {
        vec![
            word("1", "banana", Some("noun"), false, Some("2024-05-01T10:00:00")),
            word("2", "Apple", Some("noun"), true, Some("2024-05-03T09:00:00")),
            word("3", "run", Some("verb"), true, Some("2024-05-01T23:59:59")),
            word("4", "quickly", None, false, None),
        ]
    }

    fn ids(words: &[SavedWord]) -> Vec<&str> {
        words.iter().map(|w| w.word_id.as_str()).collect()
    }

    #[test]
    fn test_default_sorts_newest_first() {
        let result = WordFilter::default().apply(sample());
        assert_eq!(ids(&result), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_alphabet_sort_ignores_case() {
        let filter = WordFilter {
            sort: SortOrder::Alphabet,
            ..Default::default()
        };
        let result = filter.apply(sample());
        assert_eq!(ids(&result), vec!["2", "1", "4", "3"]);
    }

    #[test]
    fn test_favorites_only() {
        let filter = WordFilter {
            favorites_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["2", "3"]);
    }

    #[test]
    fn test_part_of_speech_filter() {
        let filter = WordFilter {
            part_of_speech: Some("NOUN".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["2", "1"]);
    }

    #[test]
    fn test_added_on_uses_utc_day() {
        let filter = WordFilter {
            added_on: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["3", "1"]);
    }

    #[test]
    fn test_filters_combine() {
        let filter = WordFilter {
            favorites_only: true,
            part_of_speech: Some("verb".to_string()),
            added_on: NaiveDate::from_ymd_opt(2024, 5, 1),
            sort: SortOrder::Alphabet,
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["3"]);
    }

    #[test]
    fn test_sort_order_parses_from_yaml() {
        let order: SortOrder = serde_yaml::from_str("alphabet").unwrap();
        assert_eq!(order, SortOrder::Alphabet);
    }
}
