//! Tic-tac-toe with move history and time travel.
//!
//! The tracker keeps every board it has shown. Jumping back and playing
//! again discards the boards that came after the jump point.

mod board;
mod rules;
mod tracker;

pub use board::{Board, Cell, Mark, ParseMarkError, CELL_COUNT, WINNING_LINES};
pub use rules::{MoveAttempt, MoveRules, Rejection};
pub use tracker::{GameRecord, GameStatus, GameTracker, HistoryEntry, PlayResult};
