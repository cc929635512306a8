//! Builder for creating and configuring Orchestrator instances.

use std::{sync::Arc, time::Duration};

use jiff::civil::Date;

use super::Orchestrator;
use crate::{
    error::Result,
    generation::{BackendConfig, GenerationBackend, OllamaClient},
    prompts::{PromptBuilder, DEFAULT_SUPPLEMENTARY_LIMIT},
};

/// Builder for creating and configuring Orchestrator instances.
#[derive(Clone)]
pub struct OrchestratorBuilder {
    backend_config: BackendConfig,
    backend: Option<Arc<dyn GenerationBackend>>,
    supplementary_limit: usize,
    reference_date: Option<Date>,
}

impl OrchestratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            backend_config: BackendConfig::default(),
            backend: None,
            supplementary_limit: DEFAULT_SUPPLEMENTARY_LIMIT,
            reference_date: None,
        }
    }

    /// Sets the base URL of the Ollama-compatible backend.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.backend_config.base_url = url.into();
        self
    }

    /// Sets the model used for every generation call.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.backend_config.model = model.into();
        self
    }

    /// Sets the upper bound on a single generation call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.backend_config.timeout = timeout;
        self
    }

    /// Sets the bound on generated tokens per call.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.backend_config.max_tokens = max_tokens;
        self
    }

    /// Sets how many characters of attachment text reach the prompts.
    pub fn with_supplementary_limit(mut self, limit: usize) -> Self {
        self.supplementary_limit = limit;
        self
    }

    /// Pins the date stamped into prompts instead of using today.
    pub fn with_reference_date(mut self, date: Option<Date>) -> Self {
        self.reference_date = date;
        self
    }

    /// Uses a caller-supplied backend instead of the HTTP client.
    ///
    /// Backend URL, model, timeout and token settings are ignored when a
    /// backend is supplied.
    pub fn with_backend(mut self, backend: Arc<dyn GenerationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Builds the configured orchestrator.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Configuration` if the HTTP client cannot be built.
    pub fn build(self) -> Result<Orchestrator> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => Arc::new(OllamaClient::new(self.backend_config)?),
        };

        let prompts = PromptBuilder::new().with_supplementary_limit(self.supplementary_limit);

        Ok(Orchestrator::new(backend, prompts, self.reference_date))
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
