//! Response models returned by the orchestrator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DayPlan;

/// Outcome of a plan generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPlan {
    /// Identifier of the session holding this plan
    pub session_id: Uuid,

    /// Narrative plan text
    pub answer: String,

    /// Number of decoded day entries
    pub todo_count: usize,

    /// Decoded day entries
    pub todos: Vec<DayPlan>,
}

/// Outcome of an open-domain question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenDomainAnswer {
    /// Trimmed backend answer
    pub answer: String,
}
