//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, workspace config files
//! and `IDEAFORGE__SECTION__KEY` environment variables, in increasing precedence.

use crate::error::ApiError;
use crate::library::{default_library_path, UserId};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use crate::provider::{ProviderConfig, ProviderType};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaforgeConfig {
    /// The single model provider used for generation
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Where saved content goes
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Library settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library root; defaults to `$XDG_DATA_HOME/ideaforge/library`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// User the library is scoped to
    #[serde(default = "default_user")]
    pub user: String,
}

fn default_user() -> String {
    "local".to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: None,
            user: default_user(),
        }
    }
}

impl LibraryConfig {
    pub fn resolve_path(&self) -> Result<PathBuf, ApiError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => default_library_path(),
        }
    }

    pub fn user_id(&self) -> Result<UserId, ApiError> {
        UserId::new(self.user.clone())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Provider(String),
    Library(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Provider(msg) => write!(f, "Provider: {}", msg),
            ValidationError::Library(msg) => write!(f, "Library: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl IdeaforgeConfig {
    /// Validate the entire configuration, collecting every problem found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.provider.validate() {
            errors.push(ValidationError::Provider(e));
        }

        if let Err(e) = self.library.user_id() {
            errors.push(ValidationError::Library(e.to_string()));
        }
        if let Some(path) = &self.library.path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::Library(
                    "Library path cannot be empty".to_string(),
                ));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate` folded into a single `ApiError::ConfigError`.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })
    }
}
