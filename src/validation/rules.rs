//! Draft rules built on `Validation`.

use crate::todo::TodoDraft;
use crate::validation::problems::DraftProblem;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type DraftCheck =
    Box<dyn Fn(&TodoDraft) -> Validation<(), NonEmptyVec<DraftProblem>> + Send + Sync>;

/// Checks a draft must pass before it becomes a todo item.
/// Uses Validation to accumulate ALL problems.
pub struct DraftRules {
    checks: Vec<DraftCheck>,
}

impl DraftRules {
    /// No checks at all.
    fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Non-empty text and a real calendar date.
    pub fn standard() -> Self {
        Self::new()
            .require_pred(|draft| !draft.text.trim().is_empty(), DraftProblem::EmptyText)
            .require(|draft| match draft.deadline.to_datetime() {
                Ok(_) => Validation::success(()),
                Err(problem) => Validation::fail(problem),
            })
    }

    /// Add a validation check
    fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TodoDraft) -> Validation<(), NonEmptyVec<DraftProblem>> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a predicate check reporting `problem` when it fails
    fn require_pred<F>(mut self, predicate: F, problem: DraftProblem) -> Self
    where
        F: Fn(&TodoDraft) -> bool + Send + Sync + 'static,
    {
        let check = move |draft: &TodoDraft| {
            if predicate(draft) {
                Validation::success(())
            } else {
                Validation::fail(problem.clone())
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check, accumulating ALL failures.
    pub fn enforce(&self, draft: &TodoDraft) -> Validation<(), NonEmptyVec<DraftProblem>> {
        let checks: Vec<Validation<(), NonEmptyVec<DraftProblem>>> =
            self.checks.iter().map(|check| check(draft)).collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every problem with `draft`, in check order. Empty when it is valid.
    pub fn problems(&self, draft: &TodoDraft) -> Vec<DraftProblem> {
        match self.enforce(draft) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }
}

impl Default for DraftRules {
    fn default() -> Self {
        Self::standard()
    }
}
