//! Error types for ms-gen

use thiserror::Error;

/// Generation pipeline errors
#[derive(Error, Debug)]
pub enum GenError {
    /// Input error propagated from the core readers
    #[error(transparent)]
    Core(#[from] ms_core::CoreError),

    /// G001: Prompt template failure
    #[error("[G001] Prompt template error: {0}")]
    Template(String),

    /// G002: IO error
    #[error("[G002] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for GenError
pub type GenResult<T> = Result<T, GenError>;
