//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Variation candidates eligible at one hour setting.
pub struct HourCandidates {
    /// Hour of day, or `None` when the hour is unknown.
    pub hour: Option<u8>,
    /// Eligible candidate keys, in key order.
    pub candidates: Vec<String>,
}

/// Format per-hour candidates as an ASCII table.
pub fn format_variations_table(rows: &[HourCandidates]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Hour", "Eligible", "Candidates"]);

    for row in rows {
        let hour = row
            .hour
            .map_or_else(|| "unknown".to_string(), |h| format!("{h:02}"));
        let candidates = if row.candidates.is_empty() {
            "-".to_string()
        } else {
            row.candidates.join(", ")
        };
        table.add_row(vec![hour, row.candidates.len().to_string(), candidates]);
    }

    table
}
