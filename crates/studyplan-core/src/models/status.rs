//! Status enumeration for todo items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of todo statuses.
///
/// Generated plans only ever produce [`TodoStatus::NotStarted`]; the other
/// values exist so that decoding tolerates items a client has already
/// progressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    /// Todo has not been started yet
    #[default]
    NotStarted,

    /// Todo is being worked on
    InProgress,

    /// Todo has been completed
    Done,
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NOT_STARTED" | "NOTSTARTED" => Ok(TodoStatus::NotStarted),
            "IN_PROGRESS" | "INPROGRESS" => Ok(TodoStatus::InProgress),
            "DONE" => Ok(TodoStatus::Done),
            _ => Err(format!("Invalid todo status: {s}")),
        }
    }
}

impl TodoStatus {
    /// Wire representation, as carried in `status_id`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "NOT_STARTED",
            TodoStatus::InProgress => "IN_PROGRESS",
            TodoStatus::Done => "DONE",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use studyplan_core::models::TodoStatus;
    ///
    /// assert_eq!(TodoStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TodoStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TodoStatus::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TodoStatus::Done => "✓ Done",
            TodoStatus::InProgress => "➤ In Progress",
            TodoStatus::NotStarted => "○ Not Started",
        }
    }
}
