//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// What a command printed and whether it counts as success for the exit code.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    /// Output that still goes to stdout (e.g. a JSON failure envelope) but exits non-zero.
    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        // Generation failures already carry the user-facing message
        ApiError::Generation(message) => message.clone(),
        other => format!("Error: {}", other),
    }
}
