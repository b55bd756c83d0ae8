//! Uikata: pure state cores for small UI exercises
//!
//! Each exercise is an owned state object. A presentation layer calls its
//! operations in response to user intents and renders whatever state comes
//! back; nothing here draws, persists, or spawns anything.
//!
//! # Exercises
//!
//! - **Game**: tic-tac-toe with a snapshot history and time travel
//! - **Todo**: a todo list with deadline urgency and a single active filter
//! - **Counter**: a click counter with a selected display language
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use uikata::clock::FixedClock;
//! use uikata::game::{GameTracker, Mark};
//! use uikata::todo::{Filter, TodoStore};
//!
//! let mut game = GameTracker::new();
//! game.play(4);
//! game.play(0);
//! game.jump_to(1);
//! assert_eq!(game.next_mark(), Mark::O);
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//! let mut todos = TodoStore::with_clock(FixedClock::new(now));
//! todos.add("ship release", now - Duration::hours(1)).unwrap();
//! todos.set_filter(Filter::Overdue);
//! assert_eq!(todos.visible_items().len(), 1);
//! ```

pub mod checkpoint;
pub mod clock;
pub mod config;
pub mod core;
pub mod counter;
pub mod game;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Settings;
pub use counter::{ClickCounter, Language};
pub use game::{Board, GameTracker, Mark, PlayResult};
pub use todo::{Filter, TodoError, TodoId, TodoItem, TodoStore, Urgency};
