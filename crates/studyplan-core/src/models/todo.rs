//! Todo item model definition.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use super::TodoStatus;

/// A single actionable task inside one day of a plan.
///
/// Every field falls back to its default when the backend omits it: the
/// structured decode checks shape, not completeness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TodoItem {
    /// Short task title
    #[serde(default)]
    pub title: String,

    /// Descriptive body of the task
    #[serde(default)]
    pub content: String,

    /// Progress status; always `NOT_STARTED` for freshly generated plans
    #[serde(default, rename = "status_id")]
    pub status: TodoStatus,

    /// Due marker, `YYYY-MM-DD 23:59` on the generation date
    #[serde(default)]
    pub end_time: String,

    /// Time accumulated on the task so far
    #[serde(default, deserialize_with = "deserialize_counter")]
    pub accumulated_time: u64,
}

/// Accepts any non-negative JSON number; `0.0` from a model is as good as `0`.
fn deserialize_counter<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Counter {
        Whole(u64),
        Fractional(f64),
    }

    match Counter::deserialize(deserializer)? {
        Counter::Whole(n) => Ok(n),
        Counter::Fractional(x) if x.is_finite() && x >= 0.0 => Ok(x.round() as u64),
        Counter::Fractional(x) => Err(D::Error::custom(format!(
            "accumulated_time must be a non-negative number, got {x}"
        ))),
    }
}
