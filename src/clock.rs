//! Time sources.
//!
//! Stores that classify deadlines read the current instant through a
//! [`Clock`] instead of calling `Utc::now()` directly, so tests can pin or
//! advance time.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually controlled time.
///
/// Clones share the same instant, so a test can keep one handle while a
/// store owns another.
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use uikata::clock::{Clock, FixedClock};
///
/// let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
/// let clock = FixedClock::new(start);
/// let handle = clock.clone();
///
/// handle.advance(Duration::hours(3));
/// assert_eq!(clock.now(), start + Duration::hours(3));
/// ```
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Replace the current instant.
    pub fn set(&self, now: DateTime<Utc>) {
        let mut guard = self.now.write().unwrap_or_else(|e| e.into_inner());
        *guard = now;
    }

    /// Move the current instant forward (or backward, for negative deltas).
    pub fn advance(&self, delta: Duration) {
        let mut guard = self.now.write().unwrap_or_else(|e| e.into_inner());
        *guard += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
