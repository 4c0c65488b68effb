//! Report generation: pure functions from read models to bounded,
//! ordered text summaries.
//!
//! Every report is deterministic for a given payload except for the
//! `Generated at` timestamp appended to the summary line. Empty results
//! render a distinct ⚠️ warning string, success reports carry the 📊
//! prefix; error strings come from [`crate::error::AppError::user_message`].

pub mod events;
pub mod matches;
pub mod seasons;

use chrono::Utc;

/// ISO-8601 UTC timestamp at second precision with a `Z` suffix
pub fn iso_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Renders optional pagination metadata, degrading to "Unknown"
pub(crate) fn display_count(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamp_shape() {
        let ts = iso_timestamp();
        assert_eq!(ts.len(), 20, "unexpected timestamp shape: {ts}");
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }

    #[test]
    fn test_display_count() {
        assert_eq!(display_count(Some(42)), "42");
        assert_eq!(display_count(None), "Unknown");
    }
}
