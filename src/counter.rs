//! Click counter with a display language.
//!
//! The counter only tracks the number and which language the labels
//! should be shown in; the labels themselves belong to the presentation
//! layer.

use crate::checkpoint::{Checkpoint, CheckpointError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Languages the counter can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}'")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// Number of clicks plus the selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickCounter {
    count: u64,
    language: Language,
}

impl ClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Add one click, saturating at `u64::MAX`.
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        debug!(count = self.count, "Counter incremented");
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
        debug!("Counter reset");
    }

    /// Switch languages. The count is unaffected.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        debug!(%language, "Counter language changed");
    }

    pub fn checkpoint(&self) -> Checkpoint<ClickCounter> {
        Checkpoint::new(*self)
    }

    pub fn restore(checkpoint: Checkpoint<ClickCounter>) -> Result<Self, CheckpointError> {
        checkpoint.into_payload()
    }
}
