//! Deadline urgency classification.
//!
//! [`classify`] is the single source of truth for how close a deadline is.
//! Both the deadline filters and the per-item color go through it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default width of the due-soon window.
pub const DUE_SOON_WINDOW_HOURS: i64 = 24;

pub fn default_due_soon_window() -> Duration {
    Duration::hours(DUE_SOON_WINDOW_HOURS)
}

/// How close an open item is to its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    /// Deadline already passed.
    Overdue,
    /// Deadline within the window, both ends inclusive.
    DueSoon,
    /// Deadline further out than the window.
    Safe,
}

impl Urgency {
    /// Display color used by the classic todo list.
    pub fn color_hex(self) -> &'static str {
        match self {
            Urgency::Overdue => "#ff6b6b",
            Urgency::DueSoon => "#fcc419",
            Urgency::Safe => "#51cf66",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Overdue => f.write_str("overdue"),
            Urgency::DueSoon => f.write_str("due-soon"),
            Urgency::Safe => f.write_str("safe"),
        }
    }
}

/// Classify `deadline` relative to `now`.
///
/// - `deadline < now` is overdue
/// - `0 <= deadline - now <= window` is due soon
/// - `deadline - now > window` is safe
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use uikata::todo::{classify, Urgency};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
/// let window = Duration::hours(24);
///
/// assert_eq!(classify(now - Duration::minutes(1), now, window), Urgency::Overdue);
/// assert_eq!(classify(now, now, window), Urgency::DueSoon);
/// assert_eq!(classify(now + window, now, window), Urgency::DueSoon);
/// assert_eq!(classify(now + Duration::days(3), now, window), Urgency::Safe);
/// ```
pub fn classify(deadline: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> Urgency {
    let remaining = deadline.signed_duration_since(now);
    if remaining < Duration::zero() {
        Urgency::Overdue
    } else if remaining <= window {
        Urgency::DueSoon
    } else {
        Urgency::Safe
    }
}
