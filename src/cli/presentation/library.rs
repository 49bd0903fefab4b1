//! Library presentation.

use super::to_pretty_json;
use crate::library::StoredRecord;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

const PROMPT_PREVIEW_CHARS: usize = 40;

pub fn format_library_text(records: &[StoredRecord]) -> String {
    if records.is_empty() {
        return "Library is empty.\n\nUse --save with 'ideaforge text' or 'ideaforge startup' to add content."
            .to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Type", "Created", "Prompt"]);
    for stored in records {
        table.add_row(vec![
            stored.id.as_str(),
            stored.record.content_type.as_str(),
            stored.record.created_at.as_str(),
            &preview(&stored.record.prompt),
        ]);
    }
    format!("{}\n\nTotal: {} record(s)", table, records.len())
}

pub fn format_library_json(records: &[StoredRecord]) -> String {
    to_pretty_json(&records)
}

pub fn format_saved_ids(ids: &[String]) -> String {
    ids.iter()
        .map(|id| format!("Saved to library: {}", id))
        .collect::<Vec<_>>()
        .join("\n")
}

fn preview(prompt: &str) -> String {
    if prompt.chars().count() <= PROMPT_PREVIEW_CHARS {
        return prompt.to_string();
    }
    let head: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
