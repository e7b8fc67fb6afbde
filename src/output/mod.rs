//! Output formatting for CLI results

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// Display rows with a one-line human rendering for the pretty format
pub trait PrettyRow {
    /// Shown instead of an empty table or list
    const EMPTY: &'static str = "Nothing to show.";

    fn pretty(&self) -> String;
}

impl<T: Tabled + Serialize + PrettyRow> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json_list(self)?),
            OutputFormat::Table => Ok(table::format_table(self, T::EMPTY)),
            OutputFormat::Pretty if self.is_empty() => Ok(T::EMPTY.to_string()),
            OutputFormat::Pretty => Ok(self
                .iter()
                .map(PrettyRow::pretty)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}

/// Spinner on stderr for a network round trip; hidden when not a terminal
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
