//! Markdown formatting for generated plans.
//!
//! Domain models implement [`std::fmt::Display`] directly; the wrappers in
//! this module format collections and operation outcomes. The terminal
//! front-end renders the output with a markdown skin and the MCP server
//! returns it verbatim.

use std::fmt;

use crate::models::{DayPlan, GeneratedPlan, OpenDomainAnswer, PlanSession, TodoItem, TodoStatus};

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checkbox = if self.status == TodoStatus::Done {
            "[x]"
        } else {
            "[ ]"
        };
        write!(f, "- {checkbox} **{}**", self.title)?;
        if !self.content.is_empty() {
            write!(f, ": {}", self.content)?;
        }
        if !self.end_time.is_empty() {
            write!(f, " (due {})", self.end_time)?;
        }
        if self.status == TodoStatus::InProgress {
            write!(f, " {}", self.status.with_icon())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Day {}", self.day)?;
        writeln!(f)?;
        if self.todos.is_empty() {
            writeln!(f, "No todos for this day.")?;
        }
        for todo in &self.todos {
            write!(f, "{todo}")?;
        }
        Ok(())
    }
}

impl fmt::Display for GeneratedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study plan")?;
        writeln!(f)?;
        writeln!(f, "- Session: {}", self.session_id)?;
        writeln!(f, "- Days with todos: {}", self.todo_count)?;
        writeln!(f)?;
        writeln!(f, "{}", self.answer.trim())?;
        writeln!(f)?;
        write!(f, "{}", Tasks(&self.todos))
    }
}

impl fmt::Display for OpenDomainAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.answer)
    }
}

/// Wrapper for displaying a task list.
pub struct Tasks<'a>(pub &'a [DayPlan]);

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No structured todos were generated.");
        }
        for (i, day) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

/// Wrapper for displaying the outcome of confirming a plan.
pub struct ConfirmResult(pub PlanSession);

impl fmt::Display for ConfirmResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let todos: usize = self.0.tasks.iter().map(DayPlan::todo_count).sum();
        writeln!(
            f,
            "Confirmed plan session {} ({} days, {} todos)",
            self.0.id,
            self.0.tasks.len(),
            todos
        )
    }
}
