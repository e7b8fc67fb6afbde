//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

use crate::token::{TimestampPolicy, parse_instant};

/// Format a server timestamp as local date/time.
///
/// Server timestamps without a zone are UTC. Returns "--" when absent or
/// unreadable.
///
/// # Example output
/// `05/01/2024 12:00 CET`
pub fn format_added_at(raw: Option<&str>) -> String {
    raw.and_then(|r| parse_instant(r, TimestampPolicy::AssumeUtc).ok())
        .map(format_local)
        .unwrap_or_else(|| "--".to_string())
}

/// Format a UTC instant in the local zone
pub fn format_local(instant: DateTime<Utc>) -> String {
    let local = instant.with_timezone(&chrono::Local);
    let date_time = local.format("%m/%d/%Y %H:%M").to_string();
    format!("{} {}", date_time, offset_label(local.offset().local_minus_utc()))
}

/// Human label for a UTC offset in seconds
pub fn offset_label(offset_secs: i32) -> String {
    let hours = offset_secs / 3600;
    let minutes = (offset_secs.abs() % 3600) / 60;
    match (hours, minutes) {
        (0, 0) => "UTC".to_string(),
        (h, 0) => format!("UTC{:+}", h),
        (h, m) => format!("UTC{:+}:{:02}", h, m),
    }
}

/// Remaining lifetime in "Xh Ym" form, or None once expired
pub fn format_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let remaining = expires_at.signed_duration_since(now);
    if remaining <= chrono::Duration::zero() {
        return None;
    }
    let hours = remaining.num_hours();
    let mins = remaining.num_minutes() % 60;
    Some(if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_added_at_absent() {
        assert_eq!(format_added_at(None), "--");
        assert_eq!(format_added_at(Some("not a date")), "--");
    }

    #[test]
    fn test_format_added_at_zoneless_contains_year() {
        // Exact output depends on local TZ
        assert!(format_added_at(Some("2024-05-01T12:00:00")).contains("2024"));
    }

    #[test]
    fn test_offset_label() {
        assert_eq!(offset_label(0), "UTC");
        assert_eq!(offset_label(-8 * 3600), "UTC-8");
        assert_eq!(offset_label(5 * 3600 + 1800), "UTC+5:30");
    }

    #[test]
    fn test_format_remaining() {
        let now = Utc::now();
        assert_eq!(
            format_remaining(now + chrono::Duration::minutes(90), now).as_deref(),
            Some("1h 30m")
        );
        assert_eq!(
            format_remaining(now + chrono::Duration::minutes(5), now).as_deref(),
            Some("5m")
        );
        assert_eq!(format_remaining(now - chrono::Duration::minutes(1), now), None);
    }
}
