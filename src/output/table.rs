//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Render rows as a rounded table with a centred header, or `empty` when
/// there is nothing to show.
pub fn format_table<T: Tabled>(rows: &[T], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}
