//! The single active filter of a todo list.

use super::item::TodoItem;
use super::urgency::Urgency;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which items the list shows.
///
/// Deadline filters only ever match open items, and they classify through
/// the same function as [`TodoItem::urgency_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
    #[serde(alias = "red")]
    Overdue,
    #[serde(alias = "yellow")]
    DueSoon,
    #[serde(alias = "green")]
    Safe,
}

impl Filter {
    /// Every filter, in the order a filter bar lists them.
    pub const ALL: [Filter; 6] = [
        Filter::All,
        Filter::Active,
        Filter::Completed,
        Filter::Overdue,
        Filter::DueSoon,
        Filter::Safe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
            Filter::Overdue => "overdue",
            Filter::DueSoon => "due-soon",
            Filter::Safe => "safe",
        }
    }

    /// The urgency a deadline filter selects, if this is one.
    pub fn urgency(self) -> Option<Urgency> {
        match self {
            Filter::Overdue => Some(Urgency::Overdue),
            Filter::DueSoon => Some(Urgency::DueSoon),
            Filter::Safe => Some(Urgency::Safe),
            Filter::All | Filter::Active | Filter::Completed => None,
        }
    }

    /// Whether `item` passes this filter at `now`.
    pub fn matches(self, item: &TodoItem, now: DateTime<Utc>, window: Duration) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.is_completed(),
            Filter::Completed => item.is_completed(),
            Filter::Overdue | Filter::DueSoon | Filter::Safe => {
                item.urgency_at(now, window) == self.urgency()
            }
        }
    }
}

impl From<Urgency> for Filter {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Overdue => Filter::Overdue,
            Urgency::DueSoon => Filter::DueSoon,
            Urgency::Safe => Filter::Safe,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}'")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    /// Accepts the kebab-case names plus the color aliases `red`,
    /// `yellow`, and `green`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            "overdue" | "red" => Ok(Filter::Overdue),
            "due-soon" | "yellow" => Ok(Filter::DueSoon),
            "safe" | "green" => Ok(Filter::Safe),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}
