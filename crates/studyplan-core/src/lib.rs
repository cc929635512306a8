//! Core library for the study plan generation service.
//!
//! Turns a free-form request such as "5일 동안 파이썬 공부 계획 짜줘",
//! optionally paired with a slide deck, into a prose plan and a structured
//! day-by-day todo list. Both come from a text-generation backend and are
//! kept together in an in-memory session until the client confirms them.
//!
//! # Components
//!
//! - [`day_count`]: day-count detection from free text
//! - [`prompts`]: system prompts for the narrative, structured and Q&A modes
//! - [`generation`]: the backend seam and its Ollama implementation
//! - [`parser`]: structured plan decoding with an explicit empty fallback
//! - [`session`]: process-lifetime session store
//! - [`document`]: slide deck text extraction
//! - [`orchestrator`]: the request flows composing all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use studyplan_core::{params::{GeneratePlan, SessionRef}, OrchestratorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = OrchestratorBuilder::new()
//!     .with_model("llama3.1:8b")
//!     .build()?;
//!
//! let plan = orchestrator
//!     .generate_plan(&GeneratePlan::new("3일 동안 러스트 기초 계획"))
//!     .await?;
//! println!("{}", plan);
//!
//! // Later, once the client has saved the todos
//! orchestrator.confirm_plan(&SessionRef {
//!     session_id: plan.session_id.to_string(),
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod day_count;
pub mod display;
pub mod document;
pub mod error;
pub mod generation;
pub mod models;
pub mod orchestrator;
pub mod params;
pub mod parser;
pub mod prompts;
pub mod session;

// Re-export commonly used types
pub use display::{ConfirmResult, Tasks};
pub use error::{PlanError, Result};
pub use generation::{BackendConfig, GenerationBackend, GenerationRequest, OllamaClient};
pub use models::{
    DayPlan, GeneratedPlan, OpenDomainAnswer, PlanSession, TodoItem, TodoStatus,
};
pub use orchestrator::{Orchestrator, OrchestratorBuilder};
pub use params::{AskQuestion, GeneratePlan, SessionRef};
pub use parser::StructuredPlan;
pub use session::SessionStore;
