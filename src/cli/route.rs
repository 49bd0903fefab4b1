//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::output::CommandOutput;
use crate::cli::parse::{Commands, LibraryCommands, ProviderCommands};
use crate::cli::presentation::{
    format_envelope_json, format_library_json, format_library_text, format_provider_json,
    format_provider_models_text, format_provider_show_text, format_saved_ids,
    format_startup_text, format_text_result, format_views_json, format_views_text,
};
use crate::config::{ConfigLoader, IdeaforgeConfig};
use crate::content::{ContentContract, StartupIdeaResult, TextResult};
use crate::error::ApiError;
use crate::generation::{
    ContentService, Envelope, GenerationInvoker, GenerationRequest, GenerationResponse,
    GenerativeCapability, ProviderCapability,
};
use crate::library::{FileLibrary, LibraryRecord, LibraryStore, UserId};
use crate::provider::commands::ProviderCommandService;
use crate::workflow::{GeneratorForm, GeneratorType};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Stands in for a provider that could not be built, so prompt validation still runs
/// and the failure surfaces through the envelope.
struct UnavailableCapability {
    reason: String,
}

#[async_trait]
impl GenerativeCapability for UnavailableCapability {
    async fn generate(&self, _request: GenerationRequest) -> Result<GenerationResponse, ApiError> {
        Err(ApiError::ProviderNotConfigured(self.reason.clone()))
    }
}

/// Runtime context for CLI execution: loaded config, content service and library.
pub struct RunContext {
    config: IdeaforgeConfig,
    service: ContentService,
    library: Arc<dyn LibraryStore>,
    user: UserId,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.ensure_valid()?;

        let capability: Arc<dyn GenerativeCapability> =
            match ProviderCapability::from_config(&config.provider) {
                Ok(capability) => {
                    debug!(
                        provider = capability.provider_name(),
                        model = capability.model_name(),
                        "Provider capability ready"
                    );
                    Arc::new(capability)
                }
                Err(e) => {
                    warn!(error = %e, "Provider unavailable; generation requests will fail");
                    Arc::new(UnavailableCapability {
                        reason: e.to_string(),
                    })
                }
            };
        let library = Arc::new(FileLibrary::new(config.library.resolve_path()?));

        Self::with_parts(config, capability, library)
    }

    /// Assemble a context from already-built parts.
    pub fn with_parts(
        config: IdeaforgeConfig,
        capability: Arc<dyn GenerativeCapability>,
        library: Arc<dyn LibraryStore>,
    ) -> Result<Self, ApiError> {
        let user = config.library.user_id()?;
        Ok(Self {
            service: ContentService::new(GenerationInvoker::new(capability)),
            config,
            library,
            user,
        })
    }

    pub fn config(&self) -> &IdeaforgeConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(output) => info!(
                command = command.name(),
                success = output.success,
                duration_ms,
                "Command finished"
            ),
            Err(e) => warn!(command = command.name(), error = %e, duration_ms, "Command failed"),
        }
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Text {
                prompt,
                format,
                save,
            } => self.handle_text(prompt, format, *save).await,
            Commands::Startup {
                prompt,
                view,
                format,
                save,
            } => self.handle_startup(prompt, view, format, *save).await,
            Commands::Views { format } => Ok(CommandOutput::ok(if format == "json" {
                format_views_json()
            } else {
                format_views_text()
            })),
            Commands::Library {
                command: LibraryCommands::List { format },
            } => {
                let records = self.library.list(&self.user).await?;
                Ok(CommandOutput::ok(if format == "json" {
                    format_library_json(&records)
                } else {
                    format_library_text(&records)
                }))
            }
            Commands::Provider { command } => self.handle_provider_command(command).await,
        }
    }

    async fn handle_text(
        &self,
        prompt: &str,
        format: &str,
        save: bool,
    ) -> Result<CommandOutput, ApiError> {
        let mut form = GeneratorForm::<TextResult>::new();
        form.submit(&self.service, prompt).await;
        let (envelope, result) = match finished(&form, format)? {
            Finished::Done(envelope, result) => (envelope, result),
            Finished::Reported(output) => return Ok(output),
        };

        let mut saved = Vec::new();
        if save {
            let record = LibraryRecord::from_text(&result, form.prompt(), Utc::now());
            saved.push(self.library.save(&self.user, &record).await?);
        }

        Ok(CommandOutput::ok(render(
            format,
            &envelope,
            format_text_result(&result),
            &saved,
        )))
    }

    async fn handle_startup(
        &self,
        prompt: &str,
        view: &str,
        format: &str,
        save: bool,
    ) -> Result<CommandOutput, ApiError> {
        let views = parse_views(view)?;

        let mut form = GeneratorForm::<StartupIdeaResult>::new();
        form.submit(&self.service, prompt).await;
        let (envelope, result) = match finished(&form, format)? {
            Finished::Done(envelope, result) => (envelope, result),
            Finished::Reported(output) => return Ok(output),
        };

        let mut saved = Vec::new();
        if save {
            let created_at = Utc::now();
            for generator_type in &views {
                let record =
                    LibraryRecord::from_startup(&result, *generator_type, form.prompt(), created_at);
                saved.push(self.library.save(&self.user, &record).await?);
            }
        }

        Ok(CommandOutput::ok(render(
            format,
            &envelope,
            format_startup_text(&result, &views),
            &saved,
        )))
    }

    async fn handle_provider_command(
        &self,
        command: &ProviderCommands,
    ) -> Result<CommandOutput, ApiError> {
        let provider = &self.config.provider;
        match command {
            ProviderCommands::Show { format } => {
                let result = ProviderCommandService::run_show(provider);
                Ok(CommandOutput::ok(if format == "json" {
                    format_provider_json(&result)
                } else {
                    format_provider_show_text(&result, provider)
                }))
            }
            ProviderCommands::Models { format } => {
                let result = ProviderCommandService::run_models(provider).await?;
                Ok(CommandOutput::ok(if format == "json" {
                    format_provider_json(&result)
                } else {
                    format_provider_models_text(&result)
                }))
            }
        }
    }
}

enum Finished<T> {
    Done(Envelope<T>, T),
    Reported(CommandOutput),
}

/// Split a finished form into its success value, or the output reporting its failure.
/// Text-format failures become `ApiError::Generation` so they go to stderr.
fn finished<T: ContentContract>(
    form: &GeneratorForm<T>,
    format: &str,
) -> Result<Finished<T>, ApiError> {
    let envelope = form.envelope().ok_or_else(|| {
        ApiError::Generation(format!("Failed to generate {}.", T::KIND.noun()))
    })?;
    match envelope {
        Envelope::Success(result) => Ok(Finished::Done(Envelope::Success(result.clone()), result)),
        Envelope::Failure(error) if format != "json" => Err(ApiError::Generation(error)),
        failure => Ok(Finished::Reported(CommandOutput::failed(
            format_envelope_json(&failure),
        ))),
    }
}

fn render<T: serde::Serialize>(
    format: &str,
    envelope: &Envelope<T>,
    text: String,
    saved: &[String],
) -> String {
    if format == "json" {
        return format_envelope_json(envelope);
    }
    if saved.is_empty() {
        text
    } else {
        format!("{}\n\n{}", text, format_saved_ids(saved))
    }
}

fn parse_views(view: &str) -> Result<Vec<GeneratorType>, ApiError> {
    if view == "all" {
        return Ok(GeneratorType::ALL.to_vec());
    }
    view.parse::<GeneratorType>()
        .map(|generator_type| vec![generator_type])
        .map_err(ApiError::InvalidArgument)
}
