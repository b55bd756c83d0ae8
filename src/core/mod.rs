//! Core building blocks shared by the exercises.
//!
//! This module contains the pure functional pieces every state core is
//! assembled from:
//! - Snapshot definitions via the `State` trait
//! - Guard predicates for move acceptance
//! - Immutable timeline of snapshots with a cursor
//!
//! Nothing in this module performs I/O or reads the clock.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::Timeline;
pub use state::State;
