//! Provider command presentation: show and models, text/json.

use super::to_pretty_json;
use crate::provider::commands::{ProviderModelsResult, ProviderShowResult};
use crate::provider::ProviderConfig;
use serde::Serialize;

pub fn format_provider_show_text(result: &ProviderShowResult, config: &ProviderConfig) -> String {
    let mut output = format!("Type: {}\n", result.provider_type);
    output.push_str(&format!("Model: {}\n", result.model));
    match &result.endpoint {
        Some(endpoint) => output.push_str(&format!("Endpoint: {}\n", endpoint)),
        None => output.push_str("Endpoint: (not set)\n"),
    }
    output.push_str(&format!("API Key: {}\n", result.api_key_status));

    let options = &config.default_options;
    let mut option_lines = Vec::new();
    if let Some(temp) = options.temperature {
        option_lines.push(format!("  temperature: {}", temp));
    }
    if let Some(max_tokens) = options.max_tokens {
        option_lines.push(format!("  max_tokens: {}", max_tokens));
    }
    if let Some(top_p) = options.top_p {
        option_lines.push(format!("  top_p: {}", top_p));
    }
    if !option_lines.is_empty() {
        output.push_str("\nDefault Completion Options:\n");
        output.push_str(&option_lines.join("\n"));
        output.push('\n');
    }
    output
}

pub fn format_provider_models_text(result: &ProviderModelsResult) -> String {
    let mut output = format!("Models available from {}:\n", result.provider_type);
    for model in &result.available_models {
        let marker = if *model == result.model_checked { "*" } else { " " };
        output.push_str(&format!("{} {}\n", marker, model));
    }
    if result.model_available {
        output.push_str(&format!("\nConfigured model '{}' is available.\n", result.model_checked));
    } else {
        output.push_str(&format!(
            "\nConfigured model '{}' was not found.\n",
            result.model_checked
        ));
    }
    output
}

pub fn format_provider_json<T: Serialize>(result: &T) -> String {
    to_pretty_json(result)
}
