//! Plan generation orchestrator.
//!
//! The [`Orchestrator`] is the only component with cross-cutting control
//! flow. It composes the day-count detector, the prompt builder, the
//! generation backend, the structured-plan parser and the session store:
//!
//! ```text
//! message ──▶ detect_num_days ──▶ narrative prompt ──▶ backend ──┐
//!    │                                                          │ (sequential)
//!    └──────────────────────────▶ structured prompt ──▶ backend ─┤
//!                                                               ▼
//!                                StructuredPlan::parse ──▶ SessionStore::create
//! ```
//!
//! ## Failure policy
//!
//! - Either generation call fails: the whole request fails, no session is
//!   created. The structured call is not issued after a narrative failure.
//! - Structured output does not decode: the request still succeeds with an
//!   empty task list.
//! - Attachment cannot be read: the plan is generated without reference
//!   material.
//! - Unknown session: `PlanError::SessionNotFound`.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use studyplan_core::{params::GeneratePlan, OrchestratorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = OrchestratorBuilder::new()
//!     .with_base_url("http://127.0.0.1:11434")
//!     .build()?;
//!
//! let plan = orchestrator
//!     .generate_plan(&GeneratePlan::new("5일 동안 파이썬 공부 계획 짜줘"))
//!     .await?;
//! println!("{} days decoded in session {}", plan.todo_count, plan.session_id);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use jiff::{civil::Date, Zoned};

use crate::{generation::GenerationBackend, prompts::PromptBuilder, session::SessionStore};

pub mod builder;
pub mod handlers;

#[cfg(test)]
mod tests;

pub use builder::OrchestratorBuilder;

/// Composes prompt building, generation, decoding and session storage.
///
/// Cheap to share behind an `Arc`; every operation takes `&self`.
pub struct Orchestrator {
    pub(crate) backend: Arc<dyn GenerationBackend>,
    pub(crate) prompts: PromptBuilder,
    pub(crate) sessions: SessionStore,
    pub(crate) reference_date: Option<Date>,
}

impl Orchestrator {
    pub(crate) fn new(
        backend: Arc<dyn GenerationBackend>,
        prompts: PromptBuilder,
        reference_date: Option<Date>,
    ) -> Self {
        Self {
            backend,
            prompts,
            sessions: SessionStore::new(),
            reference_date,
        }
    }

    /// The session store holding generated plans.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Date stamped into prompts: the fixed reference date if one was
    /// configured, otherwise today in the system time zone.
    pub fn reference_date(&self) -> Date {
        self.reference_date
            .unwrap_or_else(|| Zoned::now().date())
    }
}
