//! Generated content and generator type presentation.

use super::{section_title, to_pretty_json};
use crate::content::{StartupIdeaResult, TextResult};
use crate::generation::Envelope;
use crate::workflow::GeneratorType;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

pub fn format_text_result(result: &TextResult) -> String {
    result.text.clone()
}

/// One section per generator type, each listing its fields in display order.
pub fn format_startup_text(result: &StartupIdeaResult, views: &[GeneratorType]) -> String {
    let sections: Vec<String> = views
        .iter()
        .map(|view| {
            let mut section = section_title(view.title());
            for (field, value) in result.select(*view) {
                section.push_str(&format!(
                    "\n{} {}",
                    format!("{}:", field.label()).bold(),
                    value.copy_text()
                ));
            }
            section
        })
        .collect();
    sections.join("\n\n")
}

pub fn format_envelope_json<T: Serialize>(envelope: &Envelope<T>) -> String {
    to_pretty_json(envelope)
}

pub fn format_views_text() -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Tag", "Title", "Fields"]);
    for view in GeneratorType::ALL {
        let fields: Vec<&str> = view.fields().iter().map(|f| f.key()).collect();
        table.add_row(vec![view.as_str(), view.title(), &fields.join(", ")]);
    }
    table.to_string()
}

pub fn format_views_json() -> String {
    let views: Vec<_> = GeneratorType::ALL
        .iter()
        .map(|view| {
            json!({
                "tag": view.as_str(),
                "title": view.title(),
                "fields": view.fields().iter().map(|f| f.key()).collect::<Vec<_>>(),
            })
        })
        .collect();
    to_pretty_json(&views)
}
