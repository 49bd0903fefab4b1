//! Generative capability seam.
//!
//! The invoker only needs "instruction plus output schema in, optional JSON record out".
//! `ProviderCapability` provides that on top of any `ModelProviderClient`.

use crate::error::ApiError;
use crate::provider::{
    ChatMessage, CompletionOptions, ModelProviderClient, ProviderConfig, ProviderFactory,
};
use crate::schema::SchemaDescriptor;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

const SYSTEM_INSTRUCTION: &str = "Respond with a single JSON object that conforms to the \
provided response schema. Do not wrap it in Markdown and do not add commentary.";

/// One outbound request: rendered instruction plus the structural constraint.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub instruction: String,
    pub output_schema: SchemaDescriptor,
}

/// Raw structured output; `None` when the model produced nothing.
#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    pub output: Option<Value>,
}

#[async_trait]
pub trait GenerativeCapability: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ApiError>;
}

/// Adapts a chat-completion provider client into a structured-output capability.
pub struct ProviderCapability {
    client: Box<dyn ModelProviderClient>,
    options: CompletionOptions,
}

impl ProviderCapability {
    pub fn new(client: Box<dyn ModelProviderClient>, options: CompletionOptions) -> Self {
        Self { client, options }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ApiError> {
        let provider = config.to_model_provider()?;
        let client = ProviderFactory::create_client(&provider)?;
        Ok(Self::new(client, config.default_options.clone()))
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

#[async_trait]
impl GenerativeCapability for ProviderCapability {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ApiError> {
        let messages = vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(request.instruction),
        ];
        let options = CompletionOptions {
            response_schema: Some(request.output_schema),
            ..self.options.clone()
        };

        let response = self.client.complete(messages, options).await?;
        debug!(
            provider = self.client.provider_name(),
            model = %response.model,
            finish_reason = ?response.finish_reason,
            completion_tokens = response.usage.completion_tokens,
            "Provider completion received"
        );

        Ok(GenerationResponse {
            output: parse_structured_output(&response.content)?,
        })
    }
}

/// Parse model text into a JSON value. Blank text or a JSON `null` is no output.
pub fn parse_structured_output(content: &str) -> Result<Option<Value>, ApiError> {
    let body = strip_code_fence(content.trim());
    if body.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body).map_err(|e| {
        ApiError::ProviderError(format!("Model output is not valid JSON: {}", e))
    })?;
    Ok(if value.is_null() { None } else { Some(value) })
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop an optional language tag on the opening fence line
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
