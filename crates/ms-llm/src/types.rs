//! Wire types for the text-generation service

use serde::{Deserialize, Serialize};

/// Chat-completion request payload
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    /// Model identifier
    pub model: String,

    /// Conversation messages (a single user turn per request)
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    pub temperature: f64,

    /// Nucleus sampling parameter
    pub top_p: f64,

    /// Maximum tokens in the response
    pub max_tokens: u32,
}

/// One chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role (always "user" here)
    pub role: String,

    /// Message content
    pub content: String,
}

/// Chat-completion response payload
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Token accounting, when the service reports it
    #[serde(default)]
    pub usage: Option<Usage>,

    /// Bare token count (some services report this instead of `usage`)
    #[serde(default)]
    pub tokens: Option<u64>,

    /// Error message, when the service reports a failure in-band
    #[serde(default)]
    pub error: Option<ServiceError>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message
    pub message: ChoiceMessage,
}

/// Message content of a completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text
    #[serde(default)]
    pub content: String,
}

/// Token accounting block
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Total tokens consumed by the request
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// In-band error payload.
///
/// Services report errors either as a bare string or as an object with a
/// message field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServiceError {
    /// Plain error string
    Message(String),
    /// Structured error object
    Detailed {
        /// Human-readable error message
        message: String,
    },
}

impl ServiceError {
    /// The error message regardless of shape
    pub fn message(&self) -> &str {
        match self {
            ServiceError::Message(m) => m,
            ServiceError::Detailed { message } => message,
        }
    }
}

impl GenerationResponse {
    /// Total tokens reported by the service, from whichever field is present
    pub fn reported_tokens(&self) -> Option<u64> {
        self.usage
            .as_ref()
            .and_then(|u| u.total_tokens)
            .or(self.tokens)
    }
}

/// Snapshot of an outgoing request for the audit log
#[derive(Debug, Clone)]
pub struct RequestAudit {
    /// Endpoint URL
    pub url: String,

    /// Request headers, including the bearer credential
    pub headers: Vec<String>,

    /// Request payload
    pub payload: serde_json::Value,
}
