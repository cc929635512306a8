//! Generation backend seam.
//!
//! The orchestrator talks to the text-completion service through the
//! [`GenerationBackend`] trait: one system instruction plus one user
//! message in, one generated text out. [`OllamaClient`] is the HTTP
//! implementation; tests substitute scripted backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub mod ollama;

pub use ollama::OllamaClient;

/// Default base URL of the local Ollama daemon.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";

/// Default model name.
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Default upper bound on a single generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(360);

/// Default bound on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// A single non-streaming generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// System instruction steering the output
    pub system_prompt: String,
    /// The user's message, passed through unchanged
    pub user_message: String,
}

impl GenerationRequest {
    pub fn new(system_prompt: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_message: user_message.into(),
        }
    }
}

/// Text-completion capability consumed by the orchestrator.
///
/// Each call is independent; no conversation state is kept between calls.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text for the request.
    ///
    /// # Errors
    ///
    /// Fails when the backend is unreachable, answers with a non-success
    /// status, exceeds its timeout, or returns no text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Connection settings for the HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
