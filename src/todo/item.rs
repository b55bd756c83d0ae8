//! Todo items and their identifiers.

use super::urgency::{classify, Urgency};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable, unique identifier of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TodoId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One entry of the todo list.
///
/// Items are created and mutated only by the store. `completed_at` is set
/// exactly while the item is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    text: String,
    deadline: DateTime<Utc>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TodoItem {
    pub(crate) fn new(text: String, deadline: DateTime<Utc>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TodoId::new(),
            text,
            deadline,
            completed: false,
            completed_at: None,
            created_at,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Urgency at `now`; `None` once the item is completed.
    pub fn urgency_at(&self, now: DateTime<Utc>, window: Duration) -> Option<Urgency> {
        if self.completed {
            None
        } else {
            Some(classify(self.deadline, now, window))
        }
    }

    /// Flip completion, stamping or clearing `completed_at`.
    pub(crate) fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(now);
    }

    /// Whether `completed` and `completed_at` agree.
    pub(crate) fn is_consistent(&self) -> bool {
        self.completed == self.completed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn new_item_is_open() {
        let item = TodoItem::new("water plants".to_string(), at(18), at(9));
        assert!(!item.is_completed());
        assert_eq!(item.completed_at(), None);
        assert_eq!(item.created_at(), at(9));
        assert!(item.is_consistent());
    }

    #[test]
    fn toggle_sets_and_clears_completion_time() {
        let mut item = TodoItem::new("call bank".to_string(), at(18), at(9));

        item.toggle(at(10));
        assert!(item.is_completed());
        assert_eq!(item.completed_at(), Some(at(10)));

        item.toggle(at(11));
        assert!(!item.is_completed());
        assert_eq!(item.completed_at(), None);
        assert!(item.is_consistent());
    }

    #[test]
    fn completed_item_has_no_urgency() {
        let mut item = TodoItem::new("file taxes".to_string(), at(8), at(7));
        let window = Duration::hours(24);
        assert_eq!(item.urgency_at(at(9), window), Some(Urgency::Overdue));

        item.toggle(at(9));
        assert_eq!(item.urgency_at(at(9), window), None);
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(TodoId::new(), TodoId::new());
    }

    #[test]
    fn id_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let id = TodoId::from(uuid);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            format!("\"{uuid}\"")
        );
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
