//! Day plan model definition.

use serde::{Deserialize, Serialize};

use super::TodoItem;

/// One day of a structured plan with its ordered todos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Day number, expected to run 1..=N for an N-day plan
    pub day: u32,

    /// Tasks scheduled for this day
    pub todos: Vec<TodoItem>,
}

impl DayPlan {
    /// Number of todos scheduled for the day.
    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }
}
