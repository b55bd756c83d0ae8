//! Game history tracker with time travel.

use super::board::{Board, Mark};
use super::rules::{MoveAttempt, MoveRules, Rejection};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::GameSettings;
use crate::core::{State, Timeline};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Outcome of a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    /// The mark was written and a new snapshot became current.
    Placed { mark: Mark, cursor: usize },
    /// The move was refused; history and cursor are unchanged.
    Rejected(Rejection),
}

impl PlayResult {
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayResult::Placed { .. })
    }
}

/// Status line for the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { next: Mark },
    Won(Mark),
    Draw,
}

/// One row of the move list a presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEntry {
    /// The empty board at index 0.
    Start,
    /// The board after move `n` (1-based, equal to its history index).
    Move(usize),
}

impl HistoryEntry {
    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        match self {
            HistoryEntry::Start => 0,
            HistoryEntry::Move(n) => *n,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Start => f.write_str("Go to game start"),
            HistoryEntry::Move(n) => write!(f, "Go to move #{n}"),
        }
    }
}

/// Serializable form of a tracker, used by checkpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub timeline: Timeline<Board>,
    pub first_mark: Mark,
}

/// Board snapshots plus a cursor into them.
///
/// The next mark is always derived from the cursor's parity, so jumping
/// back to an earlier move hands the turn to whoever would have moved
/// there.
///
/// ```rust
/// use uikata::game::{GameStatus, GameTracker, Mark};
///
/// let mut game = GameTracker::new();
/// for cell in [0, 1, 4, 2, 8] {
///     game.play(cell);
/// }
/// assert_eq!(game.status(), GameStatus::Won(Mark::X));
/// ```
#[derive(Debug, Clone)]
pub struct GameTracker {
    timeline: Timeline<Board>,
    first_mark: Mark,
    rules: MoveRules,
}

impl Default for GameTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTracker {
    /// Start a game on the empty board with X owning even cursors.
    pub fn new() -> Self {
        Self::with_first_mark(Mark::X)
    }

    pub fn with_first_mark(first_mark: Mark) -> Self {
        Self {
            timeline: Timeline::new(Board::new()),
            first_mark,
            rules: MoveRules::standard(),
        }
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::with_first_mark(settings.first_mark)
    }

    /// Play the mark derived from the cursor at `cell`.
    pub fn play(&mut self, cell: usize) -> PlayResult {
        let mark = self.next_mark();
        self.play_as(cell, mark)
    }

    /// Play an explicit `mark` at `cell`.
    ///
    /// Rejected when the displayed board is finished, the cell is taken,
    /// or `cell` is off the board. On success every snapshot after the
    /// cursor is discarded before the new board is appended.
    pub fn play_as(&mut self, cell: usize, mark: Mark) -> PlayResult {
        let board = *self.timeline.current();
        let attempt = MoveAttempt { board, cell };

        if let Some(rejection) = self.rules.first_violation(&attempt) {
            debug!(cell, %mark, cursor = self.cursor(), %rejection, "Move rejected");
            return PlayResult::Rejected(rejection);
        }

        let Some(next) = board.place(cell, mark) else {
            return PlayResult::Rejected(Rejection::CellOccupied);
        };

        let discarded = self.timeline.future().len();
        self.timeline = self.timeline.record(next);
        let cursor = self.cursor();
        debug!(cell, %mark, cursor, discarded, "Move placed");

        PlayResult::Placed { mark, cursor }
    }

    /// Move the cursor to `index` without touching the history.
    ///
    /// Returns `false` and leaves the tracker unchanged when `index` is
    /// past the newest snapshot.
    pub fn jump_to(&mut self, index: usize) -> bool {
        match self.timeline.jump(index) {
            Some(timeline) => {
                self.timeline = timeline;
                debug!(cursor = index, "Jumped in history");
                true
            }
            None => {
                debug!(
                    index,
                    len = self.timeline.snapshot_count(),
                    "Jump out of range ignored"
                );
                false
            }
        }
    }

    /// Throw away all history and start over on the empty board.
    pub fn restart(&mut self) {
        self.timeline = Timeline::new(Board::new());
        debug!("Game restarted");
    }

    pub fn current_board(&self) -> &Board {
        self.timeline.current()
    }

    pub fn cursor(&self) -> usize {
        self.timeline.cursor()
    }

    pub fn history(&self) -> &[Board] {
        self.timeline.snapshots()
    }

    pub fn timeline(&self) -> &Timeline<Board> {
        &self.timeline
    }

    pub fn first_mark(&self) -> Mark {
        self.first_mark
    }

    pub fn next_mark(&self) -> Mark {
        Mark::for_cursor(self.cursor(), self.first_mark)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.current_board().winner()
    }

    pub fn is_draw(&self) -> bool {
        self.current_board().is_draw()
    }

    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.next_mark(),
            },
        }
    }

    /// One entry per snapshot, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        (0..self.timeline.snapshot_count()).map(|i| {
            if i == 0 {
                HistoryEntry::Start
            } else {
                HistoryEntry::Move(i)
            }
        })
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            timeline: self.timeline.clone(),
            first_mark: self.first_mark,
        }
    }

    /// Rebuild a tracker, checking that the history starts empty, that
    /// every snapshot writes exactly one empty cell of its predecessor, and
    /// that nothing follows a finished board.
    ///
    /// The cursor needs no check here: a decoded [`Timeline`] always
    /// resolves its cursor.
    pub fn from_record(record: GameRecord) -> Result<Self, CheckpointError> {
        let snapshots = record.timeline.snapshots();

        if snapshots.first() != Some(&Board::new()) {
            return Err(CheckpointError::ValidationFailed(
                "history must start with the empty board".to_string(),
            ));
        }

        for (i, pair) in snapshots.windows(2).enumerate() {
            if pair[0].is_final() {
                return Err(CheckpointError::ValidationFailed(format!(
                    "snapshot {} follows a finished board",
                    i + 1
                )));
            }
            if pair[1].single_move_from(&pair[0]).is_none() {
                return Err(CheckpointError::ValidationFailed(format!(
                    "snapshot {} is not one move after snapshot {}",
                    i + 1,
                    i
                )));
            }
        }

        Ok(Self {
            timeline: record.timeline,
            first_mark: record.first_mark,
            rules: MoveRules::standard(),
        })
    }

    pub fn checkpoint(&self) -> Checkpoint<GameRecord> {
        Checkpoint::new(self.to_record())
    }

    pub fn restore(checkpoint: Checkpoint<GameRecord>) -> Result<Self, CheckpointError> {
        Self::from_record(checkpoint.into_payload()?)
    }
}
