//! Free-text generation contract.

use super::{ContentContract, ContentKind, GeneratedContent};
use crate::schema::{FieldSpec, FieldType, SchemaDescriptor};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const TEXT_TEMPLATE: &str = "Generate text from the following prompt: {{prompt}}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextResult {
    pub text: String,
}

impl ContentContract for TextResult {
    const KIND: ContentKind = ContentKind::Text;

    fn input_schema() -> &'static SchemaDescriptor {
        static SCHEMA: OnceLock<SchemaDescriptor> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaDescriptor::new(
                "GenerateTextFromPromptInput",
                "Prompt for free-text generation",
                vec![FieldSpec::new(
                    "prompt",
                    FieldType::NonEmptyString,
                    "The prompt to generate text from.",
                )],
            )
        })
    }

    fn output_schema() -> &'static SchemaDescriptor {
        static SCHEMA: OnceLock<SchemaDescriptor> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            SchemaDescriptor::new(
                "GenerateTextFromPromptOutput",
                "Generated free text",
                vec![FieldSpec::new(
                    "text",
                    FieldType::NonEmptyString,
                    "The generated text.",
                )],
            )
        })
    }

    fn instruction_template() -> &'static str {
        TEXT_TEMPLATE
    }

    fn into_content(self) -> GeneratedContent {
        GeneratedContent::Text(self)
    }
}
