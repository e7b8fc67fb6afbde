//! JSON output formatting
//!
//! Every JSON document is wrapped as `{ "data": ..., "meta": {...} }` so
//! scripts can rely on one shape for single records and word lists alike.

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the document was produced (RFC 3339, UTC)
    pub generated_at: String,

    /// CLI version
    pub version: String,

    /// Number of entries, for list output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    fn new(data: &'a T, count: Option<usize>) -> Self {
        Self {
            data,
            meta: Metadata {
                generated_at: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                count,
            },
        }
    }
}

/// Format a single record as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data, None))
}

/// Format a list as pretty-printed JSON with its length in `meta.count`
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(items, Some(items.len())))
}
