//! Error types for ms-llm

use thiserror::Error;

/// Text-generation collaborator errors
///
/// These are degradation signals, not run-stoppers: callers fall back to
/// placeholder text and keep generating.
#[derive(Error, Debug)]
pub enum LlmError {
    /// L001: Transport failure (connection, TLS, malformed response body)
    #[error("[L001] Text-generation request failed: {0}")]
    Transport(String),

    /// L002: The service returned an error payload
    #[error("[L002] Text-generation service error: {0}")]
    Service(String),

    /// L003: The response carried no usable content
    #[error("[L003] Text-generation response had no choices")]
    EmptyResponse,
}

/// Result type alias for LlmError
pub type LlmResult<T> = Result<T, LlmError>;
