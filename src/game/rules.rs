//! Move acceptance rules.
//!
//! A move is checked against an ordered list of guards before it touches
//! the history. The first guard that fails names the rejection.

use super::board::Board;
use crate::core::{Guard, State};
use thiserror::Error;

/// A proposed move: the board being played on and the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempt {
    pub board: Board,
    pub cell: usize,
}

/// Why a move was refused.
///
/// Rejections are ordinary outcomes, not errors: the presentation layer
/// simply ignores the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Target index is not one of the nine cells.
    #[error("cell is off the board")]
    OutOfBounds,
    /// The displayed board already has a winner or is drawn.
    #[error("game is already over")]
    GameOver,
    /// The target cell already holds a mark.
    #[error("cell is already taken")]
    CellOccupied,
}

#[derive(Clone, Debug)]
struct Rule {
    guard: Guard<MoveAttempt>,
    rejection: Rejection,
}

/// Ordered guards a move must pass.
#[derive(Clone, Debug)]
pub struct MoveRules {
    rules: Vec<Rule>,
}

impl MoveRules {
    /// The standard tic-tac-toe rules.
    ///
    /// Bounds come first so later guards may index the board freely.
    pub fn standard() -> Self {
        Self::empty()
            .require(
                Guard::new("on_board", |m: &MoveAttempt| m.board.cell(m.cell).is_some()),
                Rejection::OutOfBounds,
            )
            .require(
                Guard::new("board_open", |m: &MoveAttempt| !m.board.is_final()),
                Rejection::GameOver,
            )
            .require(
                Guard::new("cell_free", |m: &MoveAttempt| !m.board.is_occupied(m.cell)),
                Rejection::CellOccupied,
            )
    }

    fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    fn require(mut self, guard: Guard<MoveAttempt>, rejection: Rejection) -> Self {
        self.rules.push(Rule { guard, rejection });
        self
    }

    /// First rejection for `attempt`, or `None` if every guard passes.
    pub fn first_violation(&self, attempt: &MoveAttempt) -> Option<Rejection> {
        self.rules
            .iter()
            .find(|rule| !rule.guard.check(attempt))
            .map(|rule| rule.rejection)
    }

    /// Guard names in evaluation order.
    pub fn guard_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.guard.name()).collect()
    }
}

impl Default for MoveRules {
    fn default() -> Self {
        Self::standard()
    }
}
