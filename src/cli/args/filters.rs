//! Filter argument types for CLI commands

use chrono::NaiveDate;
use clap::Args;

use crate::words::{SortOrder, WordFilter};

/// Filter arguments for the words command.
#[derive(Args, Debug, Clone, Default)]
pub struct WordFilterArgs {
    /// Only show favourite words
    #[arg(long, short = 'f')]
    pub favorites: bool,

    /// Filter by part of speech (noun, verb, ...)
    #[arg(long, short = 'p')]
    pub pos: Option<String>,

    /// Only words added on this UTC day (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: Option<NaiveDate>,

    /// Sort order (time, alphabet)
    #[arg(long, short = 's', value_enum, hide_possible_values = true)]
    pub sort: Option<SortOrder>,
}

impl WordFilterArgs {
    /// Build the filter, falling back to `default_sort` when `--sort` is absent
    pub fn to_filter(&self, default_sort: Option<SortOrder>) -> WordFilter {
        WordFilter {
            favorites_only: self.favorites,
            part_of_speech: self.pos.clone(),
            added_on: self.date,
            sort: self.sort.or(default_sort).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_sort_wins_over_config() {
        let args = WordFilterArgs {
            sort: Some(SortOrder::Time),
            ..Default::default()
        };
        assert_eq!(args.to_filter(Some(SortOrder::Alphabet)).sort, SortOrder::Time);
    }

    #[test]
    fn test_config_sort_used_when_flag_absent() {
        let args = WordFilterArgs::default();
        assert_eq!(args.to_filter(Some(SortOrder::Alphabet)).sort, SortOrder::Alphabet);
        assert_eq!(args.to_filter(None).sort, SortOrder::Time);
    }
}
