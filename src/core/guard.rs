//! Guard predicates for accepting or rejecting moves.
//!
//! Guards are pure boolean functions that decide whether an input may
//! proceed. They keep preconditions declarative and free of side effects.

use std::fmt;
use std::sync::Arc;

/// Named pure predicate over `T`.
///
/// A guard passes when its predicate returns `true`. Guards are cheap to
/// clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use uikata::core::Guard;
///
/// let small = Guard::new("small", |n: &u32| *n < 10);
///
/// assert!(small.check(&3));
/// assert!(!small.check(&42));
/// assert_eq!(small.name(), "small");
/// ```
pub struct Guard<T> {
    name: &'static str,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard lets `input` through.
    pub fn check(&self, input: &T) -> bool {
        (self.predicate)(input)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
