//! Todo store errors.

use crate::validation::DraftProblem;
use thiserror::Error;

/// Errors surfaced to the caller when adding an item.
///
/// The store is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("Todo text must not be empty")]
    EmptyText,

    #[error("Todo draft rejected with {} problem(s)", .0.len())]
    Invalid(Vec<DraftProblem>),
}

impl TodoError {
    /// Every underlying problem, for display next to the form.
    pub fn problems(&self) -> Vec<DraftProblem> {
        match self {
            TodoError::EmptyText => vec![DraftProblem::EmptyText],
            TodoError::Invalid(problems) => problems.clone(),
        }
    }
}
