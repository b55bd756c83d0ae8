//! Accumulating validation of todo drafts.
//!
//! Drafts are checked with Stillwater's `Validation` type so that every
//! problem is reported in one pass: an empty text and an impossible date
//! come back together instead of one at a time.
//!
//! # Example
//!
//! ```rust
//! use uikata::todo::{DeadlineInput, TodoDraft};
//! use uikata::validation::{DraftProblem, DraftRules};
//!
//! let draft = TodoDraft::new("   ", DeadlineInput::default_for(2023).with_date(31, 4, 2023));
//! let problems = DraftRules::standard().problems(&draft);
//!
//! assert_eq!(problems.len(), 2);
//! assert!(problems.contains(&DraftProblem::EmptyText));
//! ```

pub mod problems;
pub mod rules;

pub use problems::DraftProblem;
pub use rules::{DraftCheck, DraftRules};
