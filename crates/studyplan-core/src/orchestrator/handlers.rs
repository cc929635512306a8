//! Request handlers of the Orchestrator.

use log::{debug, info, warn};
use tokio::task;

use super::Orchestrator;
use crate::{
    day_count::detect_num_days,
    document::extract_slide_text,
    error::Result,
    generation::GenerationRequest,
    models::{DayPlan, GeneratedPlan, OpenDomainAnswer, PlanSession},
    params::{AskQuestion, GeneratePlan, SessionRef},
    parser::StructuredPlan,
};

impl Orchestrator {
    /// Generate a narrative plan and its structured task list, and store
    /// both as a new session.
    ///
    /// The narrative call completes before the structured call is issued.
    ///
    /// # Errors
    ///
    /// Returns the backend error if either generation call fails; no session
    /// is created in that case. Undecodable structured output is not an
    /// error: the plan is stored with an empty task list and
    /// `todo_count == 0`.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<GeneratedPlan> {
        let num_days = detect_num_days(&params.message);
        let today = self.reference_date();
        let supplementary = params.supplementary_text.as_deref();

        debug!(
            "Generating {num_days}-day plan for {today} (reference material: {})",
            supplementary.is_some()
        );

        let narrative_request = GenerationRequest::new(
            self.prompts.narrative_prompt(num_days, today, supplementary),
            params.message.as_str(),
        );
        let narrative = self.backend.generate(&narrative_request).await?;
        debug!("Narrative plan received ({} chars)", narrative.chars().count());

        let structured_request = GenerationRequest::new(
            self.prompts
                .structured_plan_prompt(num_days, today, supplementary),
            params.message.as_str(),
        );
        let raw = self.backend.generate(&structured_request).await?;
        let structured = StructuredPlan::parse(&raw);

        match &structured {
            StructuredPlan::Fallback { reason } => {
                warn!("Storing plan with an empty task list: {reason}");
            }
            StructuredPlan::Decoded(days) if days.len() != num_days as usize => {
                warn!(
                    "Requested {num_days} day entries, backend returned {}",
                    days.len()
                );
            }
            StructuredPlan::Decoded(_) => {}
        }

        let tasks = structured.into_tasks();
        let session_id = self.sessions.create(narrative.clone(), tasks.clone());
        info!("Created plan session {session_id} with {} day entries", tasks.len());

        Ok(GeneratedPlan {
            session_id,
            answer: narrative,
            todo_count: tasks.len(),
            todos: tasks,
        })
    }

    /// Generate a plan grounded in the text of an attached slide deck.
    ///
    /// An unreadable attachment does not fail the request; the plan is
    /// generated as if no attachment had been sent.
    ///
    /// # Errors
    ///
    /// Same as [`Orchestrator::generate_plan`].
    pub async fn generate_plan_with_document(
        &self,
        message: &str,
        document: Vec<u8>,
    ) -> Result<GeneratedPlan> {
        let supplementary = self.extract_supplementary_text(document).await;
        let params = GeneratePlan::new(message).with_supplementary_text(supplementary);
        self.generate_plan(&params).await
    }

    /// Extract reference text from a slide deck on the blocking pool.
    ///
    /// Returns `None` when the deck cannot be read or holds no text.
    pub async fn extract_supplementary_text(&self, document: Vec<u8>) -> Option<String> {
        let size = document.len();
        match task::spawn_blocking(move || extract_slide_text(&document)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                debug!(
                    "Extracted {} chars from {size}-byte attachment",
                    text.chars().count()
                );
                Some(text)
            }
            Ok(Ok(_)) => {
                debug!("Attachment contains no slide text");
                None
            }
            Ok(Err(e)) => {
                warn!("Ignoring unreadable attachment: {e}");
                None
            }
            Err(e) => {
                warn!("Attachment extraction task failed: {e}");
                None
            }
        }
    }

    /// Answer a general question. No session is created.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the generation call fails.
    pub async fn answer_open_domain(&self, params: &AskQuestion) -> Result<OpenDomainAnswer> {
        let request = GenerationRequest::new(
            self.prompts.open_domain_prompt(),
            params.message.as_str(),
        );
        let answer = self.backend.generate(&request).await?;

        Ok(OpenDomainAnswer {
            answer: answer.trim().to_string(),
        })
    }

    /// Task list stored for a session.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::SessionNotFound` for unknown or discarded
    /// sessions.
    pub fn session_tasks(&self, params: &SessionRef) -> Result<Vec<DayPlan>> {
        self.sessions.tasks(&params.session_id)
    }

    /// Confirm a plan, discarding its session. Returns the removed session.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::SessionNotFound` for unknown sessions, including
    /// a session that was already confirmed.
    pub fn confirm_plan(&self, params: &SessionRef) -> Result<PlanSession> {
        let session = self.sessions.delete(&params.session_id)?;
        info!("Confirmed plan session {}", session.id);
        Ok(session)
    }
}
