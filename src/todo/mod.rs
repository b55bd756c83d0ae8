//! Deadline-aware todo list.
//!
//! - `TodoStore` owns the items and the single active filter
//! - `Filter` selects which items are visible
//! - `classify` decides overdue / due-soon / safe for both filters and colors
//! - `DeadlineInput` assembles a deadline from separately chosen parts

mod deadline;
mod error;
mod filter;
mod item;
mod store;
mod urgency;

pub use deadline::{sanitize_hours, sanitize_minutes, DeadlineInput, TodoDraft, MAX_HOUR, MAX_MINUTE};
pub use error::TodoError;
pub use filter::{Filter, ParseFilterError};
pub use item::{TodoId, TodoItem};
pub use store::{FilterCounts, TodoRecord, TodoStore};
pub use urgency::{classify, default_due_soon_window, Urgency, DUE_SOON_WINDOW_HOURS};
