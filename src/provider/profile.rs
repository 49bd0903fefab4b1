//! Provider profile: the configured backend, model and credentials.

use crate::error::ApiError;
use crate::provider::{CompletionOptions, ModelProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported provider backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
    #[serde(rename = "local")]
    LocalCustom,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::OpenAI => "openai",
            ProviderType::Gemini => "gemini",
            ProviderType::Ollama => "ollama",
            ProviderType::LocalCustom => "local",
        }
    }

    /// Environment variables consulted, in order, when no API key is configured.
    pub fn api_key_env_vars(&self) -> &'static [&'static str] {
        match self {
            ProviderType::OpenAI => &["OPENAI_API_KEY"],
            ProviderType::Gemini => &["GEMINI_API_KEY", "GOOGLE_API_KEY"],
            ProviderType::Ollama | ProviderType::LocalCustom => &[],
        }
    }

    pub fn requires_api_key(&self) -> bool {
        !self.api_key_env_vars().is_empty()
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider configuration as loaded from config files and environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider_type: ProviderType,

    pub model: String,

    /// Falls back to the provider's API key environment variables when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL override; required for `local`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub default_options: CompletionOptions,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::Gemini,
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            endpoint: None,
            default_options: CompletionOptions::default(),
        }
    }
}

impl ProviderConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(format!(
                    "Endpoint must be an http(s) URL, got '{}'",
                    endpoint
                ));
            }
        } else if self.provider_type == ProviderType::LocalCustom {
            return Err("Local provider requires an endpoint".to_string());
        }

        if let Some(temp) = self.default_options.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(format!("Temperature must be between 0.0 and 2.0, got {}", temp));
            }
        }

        Ok(())
    }

    /// Resolve the API key from config, then from the provider's environment variables.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.provider_type
                    .api_key_env_vars()
                    .iter()
                    .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            })
    }

    /// Where the API key comes from, for display. Never includes the key itself.
    pub fn api_key_status(&self) -> String {
        if !self.provider_type.requires_api_key() {
            return "not required".to_string();
        }
        if self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()) {
            return "set in config".to_string();
        }
        match self
            .provider_type
            .api_key_env_vars()
            .iter()
            .find(|var| std::env::var(var).is_ok_and(|v| !v.trim().is_empty()))
        {
            Some(var) => format!("from {}", var),
            None => format!(
                "missing (set {})",
                self.provider_type.api_key_env_vars().join(" or ")
            ),
        }
    }

    /// Convert to a concrete `ModelProvider`, resolving credentials.
    pub fn to_model_provider(&self) -> Result<ModelProvider, ApiError> {
        self.validate().map_err(ApiError::ConfigError)?;

        let require_key = || {
            self.resolve_api_key().ok_or_else(|| {
                ApiError::ProviderNotConfigured(format!(
                    "No API key for provider '{}'. Set provider.api_key or {}",
                    self.provider_type,
                    self.provider_type.api_key_env_vars().join(" / ")
                ))
            })
        };

        Ok(match self.provider_type {
            ProviderType::OpenAI => ModelProvider::OpenAI {
                model: self.model.clone(),
                api_key: require_key()?,
                base_url: self.endpoint.clone(),
            },
            ProviderType::Gemini => ModelProvider::Gemini {
                model: self.model.clone(),
                api_key: require_key()?,
                base_url: self.endpoint.clone(),
            },
            ProviderType::Ollama => ModelProvider::Ollama {
                model: self.model.clone(),
                base_url: self.endpoint.clone(),
            },
            ProviderType::LocalCustom => ModelProvider::LocalCustom {
                model: self.model.clone(),
                endpoint: self.endpoint.clone().unwrap_or_default(),
                api_key: self.resolve_api_key(),
            },
        })
    }
}
