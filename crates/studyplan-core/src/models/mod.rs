//! Data models for generated plans.
//!
//! A plan is a sequence of [`DayPlan`] entries, each holding ordered
//! [`TodoItem`]s. The serde representation is the wire format shared with
//! the generation backend and with clients: snake_case keys, `status_id`
//! for the status, `SCREAMING_SNAKE_CASE` status values.
//!
//! ```json
//! [
//!   {
//!     "day": 1,
//!     "todos": [
//!       {
//!         "title": "변수와 자료형",
//!         "content": "int, str, list 예제를 직접 실행해 보기",
//!         "status_id": "NOT_STARTED",
//!         "end_time": "2026-10-19 23:59",
//!         "accumulated_time": 0
//!       }
//!     ]
//!   }
//! ]
//! ```
//!
//! Display implementations for these models live in [`crate::display`].

pub mod day_plan;
pub mod generated;
pub mod session;
pub mod status;
pub mod todo;

#[cfg(test)]
mod tests;

pub use day_plan::DayPlan;
pub use generated::{GeneratedPlan, OpenDomainAnswer};
pub use session::PlanSession;
pub use status::TodoStatus;
pub use todo::TodoItem;
