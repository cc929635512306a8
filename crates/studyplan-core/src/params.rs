//! Parameter structures for orchestrator operations
//!
//! Shared by every front-end (HTTP, MCP, terminal). Interface layers add their
//! own framework derives or wrappers and convert into these types; the core
//! only depends on serde, plus schemars behind the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for generating a narrative and structured plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// Free-form request, e.g. "5일 동안 파이썬 공부 계획 짜줘"
    pub message: String,
    /// Reference material to ground the plan in, such as slide deck text
    #[serde(default)]
    pub supplementary_text: Option<String>,
}

impl GeneratePlan {
    /// Plan request without reference material.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            supplementary_text: None,
        }
    }

    /// Attach reference material to the request.
    pub fn with_supplementary_text(mut self, text: Option<String>) -> Self {
        self.supplementary_text = text;
        self
    }
}

/// Parameters for an open-domain question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AskQuestion {
    /// The question to answer
    pub message: String,
}

/// Parameters for operations addressing a stored plan session.
///
/// Used for retrieving the task list and for confirming (discarding) a
/// session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SessionRef {
    /// Identifier returned by plan generation
    pub session_id: String,
}
