//! Core State trait for values that live in a history.
//!
//! Snapshots recorded in a [`Timeline`](super::Timeline) implement this trait,
//! which exposes pure methods for inspecting them without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for snapshot values tracked by a timeline.
///
/// All methods are pure. A snapshot is an immutable value describing
/// the state of an exercise at one point in its history.
///
/// # Required Traits
///
/// - `Clone`: snapshots are copied when a timeline records a new entry
/// - `PartialEq`: snapshots are compared in tests and on restore
/// - `Debug`: snapshots show up in diagnostics
/// - `Serialize` + `Deserialize`: snapshots travel inside checkpoints
///
/// # Example
///
/// ```rust
/// use uikata::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert!(Door::Locked.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name of the snapshot's condition, for display and logging.
    fn name(&self) -> &str;

    /// Check if this snapshot is terminal.
    ///
    /// A terminal snapshot accepts no further moves. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
