//! CLI presentation: text and json formatters per command family.

mod content;
mod library;
mod provider;

pub use content::{
    format_envelope_json, format_startup_text, format_text_result, format_views_json,
    format_views_text,
};
pub use library::{format_library_json, format_library_text, format_saved_ids};
pub use provider::{
    format_provider_models_text, format_provider_show_text, format_provider_json,
};

use owo_colors::OwoColorize;

pub(crate) fn section_title(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
