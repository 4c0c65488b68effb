//! Season list report.

use super::{display_count, iso_timestamp};
use crate::constants::LIST_PREVIEW_CAP;
use crate::korastats::models::SeasonPage;

/// Renders the seasons overview: a header with preview and total counts,
/// at most [`LIST_PREVIEW_CAP`] record lines, and a summary trailer.
pub fn render(page: &SeasonPage, message: &str) -> String {
    if page.data.is_empty() {
        return "⚠️ No seasons found for the requested page.".to_string();
    }

    let preview = &page.data[..page.data.len().min(LIST_PREVIEW_CAP)];
    let lines: Vec<String> = preview
        .iter()
        .map(|season| {
            format!(
                "- ID {}: {} | {} | {} → {}",
                season.id_display(),
                season.display_name(),
                season.tournament_name(),
                season.start_display(),
                season.end_display()
            )
        })
        .collect();

    format!(
        "📊 Seasons Overview:\n\
         - Records on page: {}\n\
         - Total records: {}\n\
         - Page: {} of {}\n\
         \n\
         Top seasons:\n\
         {}\n\
         \n\
         Summary: {} | Generated at {}",
        preview.len(),
        display_count(page.total_records),
        display_count(page.current_page),
        display_count(page.pages),
        lines.join("\n"),
        message,
        iso_timestamp()
    )
}
