//! Per-form generation session.
//!
//! A form owns its prompt and its latest result. Every submit or regenerate starts a
//! fresh `Idle -> Requesting -> {Succeeded, Failed}` run and discards the previous
//! result before the request goes out. Submitting takes `&mut self` across the await,
//! so one form can never have two requests in flight.

use crate::content::{ContentContract, FieldValue, StartupField, StartupIdeaResult, TextResult};
use crate::error::SchemaValidationError;
use crate::generation::{ContentService, Envelope};
use crate::workflow::GeneratorType;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct GeneratorForm<T> {
    prompt: String,
    state: GenerationState,
    result: Option<T>,
    error: Option<String>,
    runs: usize,
}

impl<T> Default for GeneratorForm<T> {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            state: GenerationState::Idle,
            result: None,
            error: None,
            runs: 0,
        }
    }
}

impl<T: ContentContract> GeneratorForm<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Local edits; never re-invokes generation.
    pub fn result_mut(&mut self) -> Option<&mut T> {
        self.result.as_mut()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of generation runs this form has started.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Outcome of the last finished run; `None` before the first one completes.
    pub fn envelope(&self) -> Option<Envelope<T>> {
        match self.state {
            GenerationState::Succeeded => self.result.clone().map(Envelope::Success),
            GenerationState::Failed => self.error.clone().map(Envelope::Failure),
            GenerationState::Idle | GenerationState::Requesting => None,
        }
    }

    /// Store `prompt` and generate from it.
    pub async fn submit(
        &mut self,
        service: &ContentService,
        prompt: impl Into<String>,
    ) -> GenerationState {
        self.prompt = prompt.into();
        self.run(service).await
    }

    /// Generate again from the stored prompt, replacing the previous result wholesale.
    pub async fn regenerate(&mut self, service: &ContentService) -> GenerationState {
        self.run(service).await
    }

    async fn run(&mut self, service: &ContentService) -> GenerationState {
        self.state = GenerationState::Requesting;
        self.result = None;
        self.error = None;
        self.runs += 1;
        debug!(kind = %T::KIND, run = self.runs, "Form generation started");

        match service.handle::<T>(&self.prompt).await {
            Envelope::Success(data) => {
                self.result = Some(data);
                self.state = GenerationState::Succeeded;
            }
            Envelope::Failure(error) => {
                self.error = Some(error);
                self.state = GenerationState::Failed;
            }
        }
        self.state
    }
}

impl GeneratorForm<StartupIdeaResult> {
    /// Edit one field of the current result. Returns `Ok(false)` when there is no result.
    pub fn edit_field(
        &mut self,
        field: StartupField,
        value: FieldValue,
    ) -> Result<bool, SchemaValidationError> {
        match self.result.as_mut() {
            Some(result) => result.set_field(field, value).map(|_| true),
            None => Ok(false),
        }
    }

    pub fn selected(&self, generator_type: GeneratorType) -> Vec<(StartupField, FieldValue)> {
        self.result
            .as_ref()
            .map(|result| result.select(generator_type))
            .unwrap_or_default()
    }
}

impl GeneratorForm<TextResult> {
    /// Replace the generated text locally. Returns false when there is no result.
    pub fn edit_text(&mut self, text: impl Into<String>) -> bool {
        match self.result.as_mut() {
            Some(result) => {
                result.text = text.into();
                true
            }
            None => false,
        }
    }
}
