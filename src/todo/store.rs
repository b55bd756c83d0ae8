//! The todo store: items, the active filter, and derived views.

use super::deadline::TodoDraft;
use super::error::TodoError;
use super::filter::Filter;
use super::item::{TodoId, TodoItem};
use super::urgency::{default_due_soon_window, Urgency};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::clock::{Clock, SystemClock};
use crate::config::TodoSettings;
use crate::validation::DraftRules;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Number of items each filter would show at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
    pub overdue: usize,
    pub due_soon: usize,
    pub safe: usize,
}

impl FilterCounts {
    pub fn get(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
            Filter::Overdue => self.overdue,
            Filter::DueSoon => self.due_soon,
            Filter::Safe => self.safe,
        }
    }
}

/// Serializable form of a store, used by checkpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub items: Vec<TodoItem>,
    pub filter: Filter,
}

/// Todo items in insertion order plus one active filter.
///
/// The current instant comes from the store's [`Clock`] every time a view
/// is derived, so two calls may classify differently as time passes. Use
/// the `*_at` variants with one captured `now` for a stable render.
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use uikata::clock::FixedClock;
/// use uikata::todo::{Filter, TodoStore, Urgency};
///
/// let now = Utc.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap();
/// let mut store = TodoStore::with_clock(FixedClock::new(now));
///
/// let id = store.add("submit report", now + Duration::hours(2)).unwrap();
/// store.set_filter(Filter::DueSoon);
///
/// assert_eq!(store.visible_items().len(), 1);
/// assert_eq!(store.urgency(store.get(id).unwrap()), Some(Urgency::DueSoon));
/// ```
#[derive(Debug, Clone)]
pub struct TodoStore<C: Clock = SystemClock> {
    items: Vec<TodoItem>,
    filter: Filter,
    due_soon_window: Duration,
    clock: C,
}

impl TodoStore<SystemClock> {
    /// Empty store on the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TodoStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TodoStore<C> {
    /// Empty store reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: Vec::new(),
            filter: Filter::All,
            due_soon_window: default_due_soon_window(),
            clock,
        }
    }

    /// Empty store with the configured window and starting filter.
    pub fn from_settings(settings: &TodoSettings, clock: C) -> Self {
        Self {
            items: Vec::new(),
            filter: settings.default_filter,
            due_soon_window: settings.due_soon_window(),
            clock,
        }
    }

    /// Add an item with `text` and `deadline`.
    ///
    /// The text is trimmed; whitespace-only text is rejected with
    /// [`TodoError::EmptyText`] and the store is left unchanged.
    #[instrument(skip(self, text), level = "debug")]
    pub fn add(&mut self, text: &str, deadline: DateTime<Utc>) -> Result<TodoId, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Rejected todo with empty text");
            return Err(TodoError::EmptyText);
        }

        let item = TodoItem::new(text.to_string(), deadline, self.clock.now());
        let id = item.id();
        self.items.push(item);
        debug!(%id, count = self.items.len(), "Todo added");
        Ok(id)
    }

    /// Validate a form draft and add it.
    ///
    /// All problems with the draft are reported together in
    /// [`TodoError::Invalid`].
    pub fn add_draft(&mut self, draft: &TodoDraft) -> Result<TodoId, TodoError> {
        let problems = DraftRules::standard().problems(draft);
        if !problems.is_empty() {
            debug!(problems = problems.len(), "Rejected todo draft");
            return Err(TodoError::Invalid(problems));
        }

        let deadline = draft
            .deadline
            .to_datetime()
            .map_err(|problem| TodoError::Invalid(vec![problem]))?;
        self.add(&draft.text, deadline)
    }

    /// Flip completion of `id`. Unknown ids are ignored.
    ///
    /// Completing stamps `completed_at` with the current instant;
    /// reopening clears it. Returns whether an item changed.
    #[instrument(skip(self), level = "debug")]
    pub fn toggle_complete(&mut self, id: TodoId) -> bool {
        let now = self.clock.now();
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.toggle(now);
                debug!(completed = item.is_completed(), "Todo toggled");
                true
            }
            None => {
                debug!("Toggle for unknown todo ignored");
                false
            }
        }
    }

    /// Remove `id` if present. Returns whether an item was removed.
    #[instrument(skip(self), level = "debug")]
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(count = self.items.len(), "Todo deleted");
        } else {
            debug!("Delete for unknown todo ignored");
        }
        removed
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "Filter changed");
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Every item in insertion order, regardless of filter.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn due_soon_window(&self) -> Duration {
        self.due_soon_window
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Items passing the active filter right now, in insertion order.
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        self.visible_items_at(self.clock.now())
    }

    /// Items passing the active filter at `now`, in insertion order.
    pub fn visible_items_at(&self, now: DateTime<Utc>) -> Vec<&TodoItem> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item, now, self.due_soon_window))
            .collect()
    }

    /// Urgency of `item` right now; `None` for completed items.
    pub fn urgency(&self, item: &TodoItem) -> Option<Urgency> {
        self.urgency_at(item, self.clock.now())
    }

    pub fn urgency_at(&self, item: &TodoItem, now: DateTime<Utc>) -> Option<Urgency> {
        item.urgency_at(now, self.due_soon_window)
    }

    /// How many items each filter would show right now.
    pub fn counts(&self) -> FilterCounts {
        self.counts_at(self.clock.now())
    }

    pub fn counts_at(&self, now: DateTime<Utc>) -> FilterCounts {
        let mut counts = FilterCounts {
            all: self.items.len(),
            ..FilterCounts::default()
        };

        for item in &self.items {
            if item.is_completed() {
                counts.completed += 1;
                continue;
            }
            counts.active += 1;
            match self.urgency_at(item, now) {
                Some(Urgency::Overdue) => counts.overdue += 1,
                Some(Urgency::DueSoon) => counts.due_soon += 1,
                Some(Urgency::Safe) => counts.safe += 1,
                None => {}
            }
        }
        counts
    }

    pub fn to_record(&self) -> TodoRecord {
        TodoRecord {
            items: self.items.clone(),
            filter: self.filter,
        }
    }

    /// Rebuild a store on `clock`, checking id uniqueness, non-empty text,
    /// and that completion times match completion flags.
    pub fn from_record(
        record: TodoRecord,
        settings: &TodoSettings,
        clock: C,
    ) -> Result<Self, CheckpointError> {
        let mut seen = HashSet::new();
        for item in &record.items {
            if !seen.insert(item.id()) {
                return Err(CheckpointError::ValidationFailed(format!(
                    "duplicate todo id {}",
                    item.id()
                )));
            }
            if item.text().trim().is_empty() {
                return Err(CheckpointError::ValidationFailed(format!(
                    "todo {} has empty text",
                    item.id()
                )));
            }
            if !item.is_consistent() {
                return Err(CheckpointError::ValidationFailed(format!(
                    "todo {} completion time disagrees with its flag",
                    item.id()
                )));
            }
        }

        Ok(Self {
            items: record.items,
            filter: record.filter,
            due_soon_window: settings.due_soon_window(),
            clock,
        })
    }

    /// Checkpoint stamped with the store's clock.
    pub fn checkpoint(&self) -> Checkpoint<TodoRecord> {
        Checkpoint::at(self.to_record(), self.clock.now())
    }

    pub fn restore(
        checkpoint: Checkpoint<TodoRecord>,
        settings: &TodoSettings,
        clock: C,
    ) -> Result<Self, CheckpointError> {
        Self::from_record(checkpoint.into_payload()?, settings, clock)
    }
}
