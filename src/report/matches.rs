//! Season match list report.

use super::{display_count, iso_timestamp};
use crate::constants::LIST_PREVIEW_CAP;
use crate::korastats::models::MatchPage;

/// Renders the match overview for one season page. The header echoes the
/// requested page number; the upstream does not return one for this
/// operation, only `RowsCount`/`PageCount`.
pub fn render(page: &MatchPage, requested_page: i64, message: &str) -> String {
    if page.data.is_empty() {
        return "⚠️ No matches found for the supplied season.".to_string();
    }

    let preview = &page.data[..page.data.len().min(LIST_PREVIEW_CAP)];
    let lines: Vec<String> = preview
        .iter()
        .map(|m| {
            format!(
                "- #{}: {} vs {} | {} | Score {} | Status {}",
                m.id_display(),
                m.home_name(),
                m.away_name(),
                m.kickoff_display(),
                m.score_display(),
                m.status_display()
            )
        })
        .collect();

    format!(
        "📊 Match Overview:\n\
         - Matches on page: {}\n\
         - Total matches: {}\n\
         - Page: {} of {}\n\
         \n\
         Upcoming details:\n\
         {}\n\
         \n\
         Summary: {} | Generated at {}",
        preview.len(),
        display_count(page.rows_count),
        requested_page,
        display_count(page.page_count),
        lines.join("\n"),
        message,
        iso_timestamp()
    )
}
