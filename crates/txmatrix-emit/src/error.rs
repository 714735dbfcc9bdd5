//! Errors from matrix rendering.

use thiserror::Error;

/// Convenience alias for results within the emit crate.
pub type Result<T> = std::result::Result<T, EmitError>;

/// Errors that can occur while rendering or reading back a matrix document.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("unknown output format: '{name}'. Available formats: yaml, json")]
    UnknownFormat { name: String },

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered {format} document does not decode to the same matrix: {detail}")]
    RoundTrip {
        format: &'static str,
        detail: String,
    },
}
