//! Match events report.

use super::iso_timestamp;
use crate::korastats::models::MatchEventData;

/// Renders the events summary for one match. The preview renders the
/// first `min(limit, events.len())` entries; `limit` arrives already
/// clamped by the tool layer.
///
/// A payload without a match record, or a match without events, renders a
/// ⚠️ warning rather than an error.
pub fn render(match_id: i64, data: &MatchEventData, limit: usize, message: &str) -> String {
    let Some(detail) = &data.match_detail else {
        return "⚠️ No match details returned for the given match_id.".to_string();
    };

    if detail.events.is_empty() {
        return format!("⚠️ No events available for match {match_id}.");
    }

    let preview = &detail.events[..detail.events.len().min(limit)];
    let lines: Vec<String> = preview
        .iter()
        .map(|event| {
            format!(
                "- {}H {}'{}\" {}: {} | {} → {} ({})",
                event.half_display(),
                event.minute_display(),
                event.second_or_zero(),
                event.team_display(),
                event.player_display(),
                event.category_display(),
                event.action_display(),
                event.result_display()
            )
        })
        .collect();

    format!(
        "📊 Match Events:\n\
         - Fixture: {} vs {}\n\
         - Status: {}\n\
         - Total events: {}\n\
         - Showing first {} events (limit {})\n\
         \n\
         Highlights:\n\
         {}\n\
         \n\
         Summary: {} | Generated at {}",
        detail.home_name(),
        detail.away_name(),
        detail.status_display(),
        detail.events.len(),
        preview.len(),
        limit,
        lines.join("\n"),
        message,
        iso_timestamp()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data_with_events(events: serde_json::Value) -> MatchEventData {
        serde_json::from_value(json!({
            "match": {
                "home": { "name": "Lions" },
                "away": { "name": "Hawks" },
                "status": { "strStatus": "Finished" },
                "events": events
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_match_is_warning() {
        let data = MatchEventData::default();
        assert_eq!(
            render(501, &data, 10, "Success"),
            "⚠️ No match details returned for the given match_id."
        );
    }

    #[test]
    fn test_no_events_is_warning() {
        let data = data_with_events(json!([]));
        assert_eq!(
            render(501, &data, 10, "Success"),
            "⚠️ No events available for match 501."
        );
    }

    #[test]
    fn test_event_lines() {
        let data = data_with_events(json!([
            {
                "half": 1,
                "min": 23,
                "sec": 14,
                "team": "Lions",
                "nickname": "Leo",
                "category": "Goal",
                "event": "Shot",
                "result": "Scored"
            },
            {}
        ]));

        let report = render(501, &data, 10, "All good");
        assert!(report.starts_with("📊 Match Events:"));
        assert!(report.contains("- Fixture: Lions vs Hawks"));
        assert!(report.contains("- Status: Finished"));
        assert!(report.contains("- Total events: 2"));
        assert!(report.contains("- Showing first 2 events (limit 10)"));
        assert!(report.contains("- 1H 23'14\" Lions: Leo | Goal → Shot (Scored)"));
        assert!(report.contains(
            "- N/AH N/A'0\" Unknown: Unknown player | Event → Action (Unknown)"
        ));
        assert!(report.contains("Summary: All good | Generated at "));
    }

    #[test]
    fn test_preview_respects_limit() {
        let events: Vec<_> = (1..=20).map(|m| json!({ "min": m })).collect();
        let data = data_with_events(json!(events));

        let report = render(501, &data, 3, "Success");
        // Count shown tracks the truncated preview, total stays at 20
        assert!(report.contains("- Total events: 20"));
        assert!(report.contains("- Showing first 3 events (limit 3)"));
        assert!(report.contains("- N/AH 3'0\""));
        assert!(!report.contains("- N/AH 4'0\""));
    }

    #[test]
    fn test_limit_larger_than_list() {
        let data = data_with_events(json!([ { "min": 1 } ]));
        let report = render(501, &data, 50, "Success");
        assert!(report.contains("- Showing first 1 events (limit 50)"));
    }
}
