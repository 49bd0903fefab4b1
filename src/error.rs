//! Error types for ideaforge.
//!
//! `ApiError` covers provider transport, configuration and storage failures.
//! `GenerationError` is the taxonomy surfaced by the generation invoker.

use thiserror::Error;

/// Message surfaced when a prompt is empty or whitespace-only.
pub const EMPTY_PROMPT_MESSAGE: &str = "Prompt cannot be empty.";

/// A candidate value did not satisfy a declared schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Schema validation failed at '{path}': {reason}")]
pub struct SchemaValidationError {
    /// JSON-pointer style path to the offending value (`/tagline`, `/colorPalette/1`).
    pub path: String,
    pub reason: String,
}

impl SchemaValidationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Failures of a single generation invocation.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("{}", EMPTY_PROMPT_MESSAGE)]
    EmptyPrompt,

    #[error("Generation failed: {cause}")]
    GenerationFailed { cause: String },

    #[error(transparent)]
    SchemaValidation(#[from] SchemaValidationError),
}

impl GenerationError {
    pub fn failed(cause: impl Into<String>) -> Self {
        GenerationError::GenerationFailed {
            cause: cause.into(),
        }
    }

    /// The underlying cause text, without the variant prefix.
    pub fn cause(&self) -> String {
        match self {
            GenerationError::EmptyPrompt => EMPTY_PROMPT_MESSAGE.to_string(),
            GenerationError::GenerationFailed { cause } => cause.clone(),
            GenerationError::SchemaValidation(e) => e.to_string(),
        }
    }
}

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Corrupt record {path}: {reason}")]
    CorruptRecord { path: String, reason: String },

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Service-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    Generation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
