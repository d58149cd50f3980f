// src/infra/errors.rs — Error types for tooljudge
//
// Malformed tool calls are scored, not rejected, so nothing here describes a
// bad call. Only configuration and batch-input problems surface as errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JudgeError {
    // Configuration errors (raised at construction time)
    #[error("Unknown metric type '{value}', expected 'precision' or 'recall'")]
    InvalidMetric { value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    // Batch input errors
    #[error("Invalid sample field '{field}': {message}")]
    InvalidSample { field: String, message: String },

    #[error("Invalid dataset line {line}: {source}")]
    DatasetLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    // Infra
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JudgeError {
    /// Whether the error comes from illegal configuration rather than input data.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            JudgeError::InvalidMetric { .. } | JudgeError::Config(_) | JudgeError::Toml(_)
        )
    }
}
