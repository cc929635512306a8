//! Ollama chat API client.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{BackendConfig, GenerationBackend, GenerationRequest};
use crate::error::{PlanError, Result};

/// Request body for `POST /api/chat`
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    num_predict: u32,
}

/// Response body of a non-streaming chat call
#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ReplyMessage>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// HTTP client for an Ollama-compatible chat endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    config: BackendConfig,
}

impl OllamaClient {
    /// Creates a client whose every call is bounded by `config.timeout`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PlanError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url.trim_end_matches('/'))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> PlanError {
        if e.is_timeout() {
            PlanError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else {
            PlanError::backend(format!("Request to {} failed", self.chat_url())).with_source(e)
        }
    }
}

#[async_trait]
impl GenerationBackend for OllamaClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_message,
                },
            ],
            stream: false,
            options: ChatOptions {
                num_predict: self.config.max_tokens,
            },
        };

        debug!(
            "POST {} (model {}, {} prompt chars)",
            self.chat_url(),
            self.config.model,
            request.system_prompt.chars().count()
        );

        let response = self
            .client
            .post(self.chat_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(PlanError::BackendStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| PlanError::InvalidResponse(format!("Undecodable chat reply: {e}")))?;

        reply
            .message
            .map(|m| m.content)
            .ok_or_else(|| PlanError::InvalidResponse("Chat reply has no message".to_string()))
    }
}
