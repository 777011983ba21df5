//! Text-generation client trait and HTTP implementation

use crate::error::{LlmError, LlmResult};
use crate::types::{
    ChatMessage, GenerationRequest, GenerationResponse, RequestAudit,
};
use async_trait::async_trait;
use ms_core::LlmConfig;
use std::io::Write;
use std::path::PathBuf;

/// Text-generation abstraction
///
/// Implementations must be Send + Sync for async operation. Calls are
/// synchronous from the caller's perspective: one request at a time, no
/// retry or backoff.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt, returning the completion content
    async fn generate(&self, prompt: &str) -> LlmResult<String>;

    /// Describe the request that `generate` would issue, for audit logging
    fn describe_request(&self, prompt: &str) -> RequestAudit;
}

/// HTTP text-generation client
pub struct HttpTextGenerator {
    config: LlmConfig,
    client: reqwest::Client,
    /// Directory for the token usage log; usage logging is skipped when unset
    logs_dir: Option<PathBuf>,
}

impl HttpTextGenerator {
    /// Create a client from service configuration
    pub fn new(config: LlmConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            logs_dir: None,
        }
    }

    /// Append token usage records to `<logs_dir>/llm_token_usage.log`
    pub fn with_usage_log(mut self, logs_dir: PathBuf) -> Self {
        self.logs_dir = Some(logs_dir);
        self
    }

    fn request_payload(&self, prompt: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
        }
    }

    fn log_token_usage(&self, tokens: u64) {
        let Some(dir) = &self.logs_dir else {
            return;
        };
        if let Err(e) = append_usage_record(dir, tokens) {
            log::warn!("Could not record token usage: {e}");
        }
    }
}

fn append_usage_record(dir: &std::path::Path, tokens: u64) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("llm_token_usage.log"))?;
    writeln!(
        file,
        "{} - tokens_used: {}",
        chrono::Utc::now().to_rfc3339(),
        tokens
    )
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let payload = self.request_payload(prompt);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let body: GenerationResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        if let Some(error) = &body.error {
            return Err(LlmError::Service(error.message().to_string()));
        }

        if let Some(tokens) = body.reported_tokens() {
            self.log_token_usage(tokens);
        }

        body.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)
    }

    fn describe_request(&self, prompt: &str) -> RequestAudit {
        let payload = self.request_payload(prompt);
        RequestAudit {
            url: self.config.api_url.clone(),
            headers: vec![
                "Content-Type: application/json".to_string(),
                format!("Authorization: Bearer {}", self.config.api_key),
            ],
            // GenerationRequest serializes infallibly: plain strings and numbers
            payload: serde_json::to_value(&payload).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
