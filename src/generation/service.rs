//! Caller-facing generation handlers. These never return `Err`; every failure becomes a
//! failure envelope.

use crate::content::{ContentContract, PromptInput, StartupIdeaResult, TextResult};
use crate::generation::envelope::Envelope;
use crate::generation::invoker::GenerationInvoker;

#[derive(Clone)]
pub struct ContentService {
    invoker: GenerationInvoker,
}

impl ContentService {
    pub fn new(invoker: GenerationInvoker) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &GenerationInvoker {
        &self.invoker
    }

    pub async fn handle<T: ContentContract>(&self, prompt: &str) -> Envelope<T> {
        let result = self
            .invoker
            .generate_as::<T>(&PromptInput::new(prompt))
            .await;
        Envelope::from_result(T::KIND, result)
    }

    pub async fn handle_text_generation(&self, prompt: &str) -> Envelope<TextResult> {
        self.handle::<TextResult>(prompt).await
    }

    pub async fn handle_startup_idea_generation(
        &self,
        prompt: &str,
    ) -> Envelope<StartupIdeaResult> {
        self.handle::<StartupIdeaResult>(prompt).await
    }
}
