//! Generation Invoker
//!
//! The single point where a prompt becomes one outbound request. Each call walks
//! `Idle -> Requesting -> {Succeeded, Failed}` on its own: nothing is cached, retried,
//! deduplicated or shared between calls.

use crate::content::{
    ContentContract, ContentKind, GeneratedContent, PromptInput, StartupIdeaResult, TextResult,
};
use crate::error::{GenerationError, SchemaValidationError};
use crate::generation::capability::{GenerationRequest, GenerativeCapability};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct GenerationInvoker {
    capability: Arc<dyn GenerativeCapability>,
}

impl GenerationInvoker {
    pub fn new(capability: Arc<dyn GenerativeCapability>) -> Self {
        Self { capability }
    }

    /// Generate content of the selected kind.
    pub async fn generate(
        &self,
        kind: ContentKind,
        input: &PromptInput,
    ) -> Result<GeneratedContent, GenerationError> {
        match kind {
            ContentKind::Text => self
                .generate_as::<TextResult>(input)
                .await
                .map(ContentContract::into_content),
            ContentKind::StartupIdea => self
                .generate_as::<StartupIdeaResult>(input)
                .await
                .map(ContentContract::into_content),
        }
    }

    /// Generate a typed result. Returns a fully schema-conformant value or an error,
    /// never a partial result.
    pub async fn generate_as<T: ContentContract>(
        &self,
        input: &PromptInput,
    ) -> Result<T, GenerationError> {
        let kind = T::KIND;
        if input.is_blank() {
            warn!(%kind, "Rejected empty prompt");
            return Err(GenerationError::EmptyPrompt);
        }

        let input_value = serde_json::to_value(input)
            .map_err(|e| GenerationError::failed(format!("Failed to encode input: {}", e)))?;
        T::input_schema().validate(&input_value)?;

        let request = GenerationRequest {
            instruction: T::render_instruction(&input.prompt),
            output_schema: T::output_schema().clone(),
        };

        info!(%kind, prompt_len = input.prompt.len(), "Generation requested");
        let response = self.capability.generate(request).await.map_err(|e| {
            warn!(%kind, error = %e, "Generation failed");
            GenerationError::failed(e.to_string())
        })?;

        let output = response.output.ok_or_else(|| {
            warn!(%kind, "Model returned no output");
            GenerationError::failed("The model returned no output")
        })?;

        if let Err(e) = T::output_schema().validate(&output) {
            warn!(%kind, path = %e.path, reason = %e.reason, "Output failed schema validation");
            return Err(e.into());
        }

        let result: T = serde_json::from_value(output)
            .map_err(|e| SchemaValidationError::new("/", e.to_string()))?;

        info!(%kind, "Generation succeeded");
        Ok(result)
    }
}
