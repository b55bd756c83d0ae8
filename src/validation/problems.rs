//! Problems found in a todo draft.

use thiserror::Error;

/// One reason a draft cannot become a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftProblem {
    #[error("Todo text is empty")]
    EmptyText,

    #[error("{day}.{month}.{year} is not a calendar date")]
    InvalidDate { day: u32, month: u32, year: i32 },
}
