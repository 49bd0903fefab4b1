use crate::error::ApiError;
use crate::provider::profile::{ProviderConfig, ProviderType};
use crate::provider::ProviderFactory;
use serde::{Deserialize, Serialize};

pub struct ProviderCommandService;

/// Result of provider show (config plus API key status).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderShowResult {
    pub provider_type: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub api_key_status: String,
}

/// Result of provider models command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderModelsResult {
    pub provider_type: String,
    pub model_checked: String,
    pub model_available: bool,
    pub available_models: Vec<String>,
}

impl ProviderCommandService {
    pub fn default_endpoint(provider_type: ProviderType) -> Option<String> {
        match provider_type {
            ProviderType::OpenAI => Some("https://api.openai.com/v1".to_string()),
            ProviderType::Gemini => {
                Some("https://generativelanguage.googleapis.com/v1beta".to_string())
            }
            ProviderType::Ollama => Some("http://localhost:11434".to_string()),
            ProviderType::LocalCustom => None,
        }
    }

    pub fn run_show(config: &ProviderConfig) -> ProviderShowResult {
        ProviderShowResult {
            provider_type: config.provider_type.to_string(),
            model: config.model.clone(),
            endpoint: config
                .endpoint
                .clone()
                .or_else(|| Self::default_endpoint(config.provider_type)),
            api_key_status: config.api_key_status(),
        }
    }

    pub async fn run_models(config: &ProviderConfig) -> Result<ProviderModelsResult, ApiError> {
        let provider = config.to_model_provider()?;
        let client = ProviderFactory::create_client(&provider)?;
        let available_models = client.list_models().await?;
        let model_available = available_models.iter().any(|m| m == &config.model);

        Ok(ProviderModelsResult {
            provider_type: config.provider_type.to_string(),
            model_checked: config.model.clone(),
            model_available,
            available_models,
        })
    }
}
