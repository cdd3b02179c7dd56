//! Crate-level error type.

use crate::validation::ValidationError;

/// Errors surfaced by simulator entry points and config loading.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// One or more configuration checks failed.
    #[error("invalid configuration: {}", join_messages(.0))]
    InvalidConfiguration(Vec<ValidationError>),

    /// Reading a config file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A config file or report could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for SimError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfiguration(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
