//! Snapshot history with a movable cursor.
//!
//! A [`Timeline`] keeps every snapshot an exercise has produced plus the
//! index of the one currently displayed. Recording from a past position
//! discards the snapshots after it, so at most one forward branch exists.

use super::state::State;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered snapshots plus a cursor into them.
///
/// Timelines are immutable: `record` and `jump` return a new timeline and
/// leave the original untouched. The cursor always resolves to an existing
/// snapshot, and index 0 is the snapshot the timeline was created with.
///
/// # Example
///
/// ```rust
/// use uikata::core::{State, Timeline};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Count(u32);
///
/// impl State for Count {
///     fn name(&self) -> &str { "Count" }
/// }
///
/// let timeline = Timeline::new(Count(0))
///     .record(Count(1))
///     .record(Count(2));
/// assert_eq!(timeline.cursor(), 2);
///
/// // Step back and take another branch; Count(2) is discarded.
/// let rewound = timeline.jump(1).unwrap().record(Count(10));
/// assert_eq!(rewound.snapshots(), &[Count(0), Count(1), Count(10)]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Timeline<S: State> {
    snapshots: Vec<S>,
    cursor: usize,
}

impl<S: State> Timeline<S> {
    /// Create a timeline holding only `initial`, with the cursor on it.
    pub fn new(initial: S) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// Rebuild a timeline from raw parts.
    ///
    /// Returns `None` when `snapshots` is empty or `cursor` does not point
    /// at one of them.
    pub fn from_parts(snapshots: Vec<S>, cursor: usize) -> Option<Self> {
        if cursor < snapshots.len() {
            Some(Self { snapshots, cursor })
        } else {
            None
        }
    }

    /// Record `next` after the cursor, returning a new timeline.
    ///
    /// Snapshots beyond the cursor are dropped first, then `next` is
    /// appended and becomes current.
    pub fn record(&self, next: S) -> Self {
        let mut snapshots = self.snapshots[..=self.cursor].to_vec();
        snapshots.push(next);
        let cursor = snapshots.len() - 1;
        Self { snapshots, cursor }
    }

    /// Move the cursor to `index`, returning a new timeline.
    ///
    /// Returns `None` if `index` is past the last snapshot.
    pub fn jump(&self, index: usize) -> Option<Self> {
        if index < self.snapshots.len() {
            Some(Self {
                snapshots: self.snapshots.clone(),
                cursor: index,
            })
        } else {
            None
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &S {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Snapshot at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.snapshots.get(index)
    }

    /// All snapshots in recording order.
    pub fn snapshots(&self) -> &[S] {
        &self.snapshots
    }

    /// Number of recorded snapshots. Never zero.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Snapshots after the cursor: the branch the next `record` discards.
    pub fn future(&self) -> &[S] {
        &self.snapshots[self.cursor + 1..]
    }

    /// Check whether the cursor sits on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }
}

/// Decoding goes through [`Timeline::from_parts`], so a decoded timeline
/// is never empty and its cursor always resolves.
impl<'de, S: State> Deserialize<'de> for Timeline<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(bound = "")]
        struct Parts<S: State> {
            snapshots: Vec<S>,
            cursor: usize,
        }

        let Parts { snapshots, cursor } = Parts::<S>::deserialize(deserializer)?;
        let len = snapshots.len();
        Timeline::from_parts(snapshots, cursor).ok_or_else(|| {
            D::Error::custom(format!("cursor {cursor} outside {len} snapshot(s)"))
        })
    }
}
