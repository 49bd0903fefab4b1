//! Content kinds and their prompt contracts.
//!
//! Each result type binds together its input schema, output schema and instruction
//! template through [`ContentContract`]. The generation invoker is generic over this
//! trait, so adding a content kind never touches the invocation path.

use crate::schema::SchemaDescriptor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod startup;
pub mod text;

pub use startup::{FieldValue, StartupField, StartupIdeaResult};
pub use text::TextResult;

/// Placeholder the user prompt is interpolated into.
pub const PROMPT_SLOT: &str = "{{prompt}}";

/// Content kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Text,
    StartupIdea,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::StartupIdea => "startup-idea",
        }
    }

    /// Noun used in user-facing failure messages.
    pub fn noun(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::StartupIdea => "startup ideas",
        }
    }

    pub fn input_schema(&self) -> &'static SchemaDescriptor {
        match self {
            ContentKind::Text => TextResult::input_schema(),
            ContentKind::StartupIdea => StartupIdeaResult::input_schema(),
        }
    }

    pub fn output_schema(&self) -> &'static SchemaDescriptor {
        match self {
            ContentKind::Text => TextResult::output_schema(),
            ContentKind::StartupIdea => StartupIdeaResult::output_schema(),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentKind::Text),
            "startup-idea" | "startup" => Ok(ContentKind::StartupIdea),
            other => Err(format!(
                "Unknown content kind: {} (expected 'text' or 'startup-idea')",
                other
            )),
        }
    }
}

/// Input accepted from a user-entered prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptInput {
    pub prompt: String,
}

impl PromptInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.prompt.trim().is_empty()
    }
}

/// Output of a kind-selected generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    StartupIdea(StartupIdeaResult),
    Text(TextResult),
}

impl GeneratedContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            GeneratedContent::Text(_) => ContentKind::Text,
            GeneratedContent::StartupIdea(_) => ContentKind::StartupIdea,
        }
    }
}

/// Binds a result type to its kind, schemas and instruction template.
pub trait ContentContract: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ContentKind;

    fn input_schema() -> &'static SchemaDescriptor;

    fn output_schema() -> &'static SchemaDescriptor;

    /// Instruction template containing exactly one [`PROMPT_SLOT`].
    fn instruction_template() -> &'static str;

    fn into_content(self) -> GeneratedContent;

    fn render_instruction(prompt: &str) -> String {
        render_instruction(Self::instruction_template(), prompt)
    }
}

/// Interpolate `prompt` verbatim into the single slot of `template`.
pub fn render_instruction(template: &str, prompt: &str) -> String {
    template.replacen(PROMPT_SLOT, prompt, 1)
}
