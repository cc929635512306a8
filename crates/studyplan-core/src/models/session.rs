//! Plan session model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DayPlan;

/// Server-side record pairing a generated narrative with its parsed task
/// list, addressed by an opaque identifier until explicitly discarded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSession {
    /// Unique identifier, never reused
    pub id: Uuid,

    /// Prose plan produced by the narrative call
    pub narrative: String,

    /// Decoded day entries, empty when the structured output was unusable
    pub tasks: Vec<DayPlan>,

    /// Timestamp when the session was created (UTC)
    pub created_at: Timestamp,
}
