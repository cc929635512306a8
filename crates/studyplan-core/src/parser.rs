//! Decoding of the backend's structured plan output.
//!
//! Decoding is strict about shape (a JSON array of `{day, todos}` objects)
//! and silent about semantics: day numbering, per-day todo counts and field
//! completeness are requested in the prompt, not verified here. Anything that
//! does not decode becomes an explicit [`StructuredPlan::Fallback`], so
//! callers never see a partially decoded plan.

use crate::models::DayPlan;

/// Result of decoding a structured plan.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredPlan {
    /// The text decoded into day entries
    Decoded(Vec<DayPlan>),
    /// The text was unusable; the plan falls back to an empty task list
    Fallback { reason: String },
}

impl StructuredPlan {
    /// Decode raw backend text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use studyplan_core::parser::StructuredPlan;
    ///
    /// let plan = StructuredPlan::parse(r#"[{"day": 1, "todos": []}]"#);
    /// assert_eq!(plan.len(), 1);
    ///
    /// let broken = StructuredPlan::parse("```json\n[]\n```");
    /// assert!(broken.is_fallback());
    /// assert!(broken.into_tasks().is_empty());
    /// ```
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Vec<DayPlan>>(raw) {
            Ok(days) => StructuredPlan::Decoded(days),
            Err(e) => StructuredPlan::fallback(e.to_string()),
        }
    }

    /// An empty plan standing in for output that could not be decoded.
    pub fn fallback(reason: impl Into<String>) -> Self {
        StructuredPlan::Fallback {
            reason: reason.into(),
        }
    }

    /// Whether decoding failed and the plan is the empty fallback.
    pub fn is_fallback(&self) -> bool {
        matches!(self, StructuredPlan::Fallback { .. })
    }

    /// Number of decoded day entries (zero for the fallback).
    pub fn len(&self) -> usize {
        match self {
            StructuredPlan::Decoded(days) => days.len(),
            StructuredPlan::Fallback { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The decoded day entries, or an empty list for the fallback.
    pub fn into_tasks(self) -> Vec<DayPlan> {
        match self {
            StructuredPlan::Decoded(days) => days,
            StructuredPlan::Fallback { .. } => Vec::new(),
        }
    }
}
