//! Expiry timestamp parsing
//!
//! The authentication service reports token expiry as a timestamp string.
//! Zone-qualified RFC 3339 instants are always honoured; what happens to
//! zoneless timestamps depends on the [`TimestampPolicy`].

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// How to treat timestamps that carry no zone information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampPolicy {
    /// Interpret zoneless timestamps as UTC (what the service emits today)
    #[default]
    AssumeUtc,
    /// Reject zoneless timestamps as a server contract violation
    Strict,
}

/// Parse a server-provided timestamp into a UTC instant.
pub fn parse_instant(raw: &str, policy: TimestampPolicy) -> ApiResult<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    match policy {
        TimestampPolicy::AssumeUtc => parse_naive(trimmed)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| ApiError::InvalidTimestamp(raw.to_string())),
        TimestampPolicy::Strict => Err(ApiError::InvalidTimestamp(raw.to_string())),
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok())
}
