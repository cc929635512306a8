//! Error types for the plan generation library.

use thiserror::Error;

/// Comprehensive error type for all orchestrator operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Transport-level failure talking to the generation backend
    #[error("Generation backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The generation backend answered with a non-success status
    #[error("Generation backend returned status {status}: {body}")]
    BackendStatus { status: u16, body: String },
    /// The generation call exceeded its upper-bound timeout
    #[error("Generation backend timed out after {seconds}s")]
    Timeout { seconds: u64 },
    /// The backend reply did not carry generated text
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
    /// No plan session exists for the given identifier
    #[error("Session not found: {id}")]
    SessionNotFound { id: String },
    /// An attached document could not be read
    #[error("Document error: {message}")]
    Document {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating backend transport errors with context.
pub struct BackendErrorBuilder {
    message: String,
}

impl BackendErrorBuilder {
    /// Create a new backend error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> PlanError {
        PlanError::Backend {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating document extraction errors.
pub struct DocumentErrorBuilder {
    message: String,
}

impl DocumentErrorBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the underlying cause attached.
    pub fn with_source<E>(self, source: E) -> PlanError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PlanError::Document {
            message: self.message,
            source: Some(Box::new(source)),
        }
    }

    /// Build the error without an underlying cause.
    pub fn build(self) -> PlanError {
        PlanError::Document {
            message: self.message,
            source: None,
        }
    }
}

impl PlanError {
    /// Creates a builder for backend transport errors.
    pub fn backend(message: impl Into<String>) -> BackendErrorBuilder {
        BackendErrorBuilder::new(message)
    }

    /// Creates a builder for document extraction errors.
    pub fn document(message: impl Into<String>) -> DocumentErrorBuilder {
        DocumentErrorBuilder::new(message)
    }

    /// Creates a session-not-found error for the given identifier.
    pub fn session_not_found(id: impl Into<String>) -> Self {
        PlanError::SessionNotFound { id: id.into() }
    }

    /// Whether this error means the generation backend could not produce
    /// text: unreachable, non-success status, timeout, or an unusable body.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            PlanError::Backend { .. }
                | PlanError::BackendStatus { .. }
                | PlanError::Timeout { .. }
                | PlanError::InvalidResponse(_)
        )
    }
}

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, PlanError>;
