//! Board representation and outcome checks.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cell indices of the eight winning lines, in scan order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    /// Mark that plays next when the history cursor is at `cursor`.
    ///
    /// Even cursors belong to `first`, odd cursors to its opponent. Turn
    /// ownership is never tracked separately, so jumping back re-derives it.
    pub fn for_cursor(cursor: usize, first: Mark) -> Mark {
        if cursor % 2 == 0 {
            first
        } else {
            first.opponent()
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Error returned when parsing a [`Mark`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mark '{0}', expected X or O")]
pub struct ParseMarkError(String);

impl FromStr for Mark {
    type Err = ParseMarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(ParseMarkError(other.to_string())),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Nine cells in row-major order.
///
/// Boards are `Copy` values; placing a mark produces a new board and leaves
/// the original untouched, which is what lets the history keep every
/// position without aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The empty board every game starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.cell(index).is_some_and(|c| !c.is_empty())
    }

    /// Copy of this board with `mark` written at `index`.
    ///
    /// Returns `None` if `index` is off the board or the cell is taken.
    pub fn place(&self, index: usize, mark: Mark) -> Option<Board> {
        match self.cell(index)? {
            Cell::Empty => {
                let mut cells = self.cells;
                cells[index] = mark.to_cell();
                Some(Board { cells })
            }
            _ => None,
        }
    }

    /// Mark owning the first uniform line in [`WINNING_LINES`] order.
    ///
    /// Two different marks cannot both complete a line in legal play, so
    /// scan order only matters for hand-built boards.
    pub fn winner(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let first = self.cells[a];
            if first != Cell::Empty && first == self.cells[b] && first == self.cells[c] {
                first.mark()
            } else {
                None
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Every cell filled and nobody has won.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// The single move that turns `previous` into this board.
    ///
    /// Returns `None` unless exactly one cell went from empty to a mark and
    /// every other cell is unchanged.
    pub fn single_move_from(&self, previous: &Board) -> Option<(usize, Mark)> {
        let mut changed = self
            .cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before);

        let (index, (now, before)) = changed.next()?;
        if changed.next().is_some() || !before.is_empty() {
            return None;
        }
        now.mark().map(|mark| (index, mark))
    }
}

impl State for Board {
    fn name(&self) -> &str {
        if self.winner().is_some() {
            "Won"
        } else if self.is_full() {
            "Draw"
        } else {
            "InProgress"
        }
    }

    fn is_final(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
