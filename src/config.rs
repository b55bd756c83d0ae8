//! Settings for the exercise cores.
//!
//! Every field has a default matching the classic exercises, so an empty
//! TOML document yields [`Settings::default`].
//!
//! ```rust
//! use uikata::config::Settings;
//! use uikata::todo::Filter;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [todo]
//!     due_soon_hours = 48
//!     default_filter = "active"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.todo.due_soon_hours, 48);
//! assert_eq!(settings.todo.default_filter, Filter::Active);
//! assert_eq!(settings.todo.default_hour, 12);
//! ```

use crate::game::Mark;
use crate::todo::Filter;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub todo: TodoSettings,
    pub game: GameSettings,
}

/// Todo list settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoSettings {
    /// Width of the due-soon window ahead of now, in hours.
    pub due_soon_hours: u32,
    /// Filter a fresh store starts with.
    pub default_filter: Filter,
    /// Hour pre-filled in a new deadline form.
    pub default_hour: u32,
    /// Minute pre-filled in a new deadline form.
    pub default_minute: u32,
}

impl Default for TodoSettings {
    fn default() -> Self {
        Self {
            due_soon_hours: 24,
            default_filter: Filter::All,
            default_hour: 12,
            default_minute: 0,
        }
    }
}

impl TodoSettings {
    pub fn due_soon_window(&self) -> Duration {
        Duration::hours(i64::from(self.due_soon_hours))
    }
}

/// Tic-tac-toe settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Mark that plays on even cursors.
    pub first_mark: Mark,
}

impl Settings {
    /// Parse and validate settings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.todo.due_soon_hours == 0 {
            return Err(ConfigError::Invalid {
                field: "todo.due_soon_hours",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.todo.default_hour > 23 {
            return Err(ConfigError::Invalid {
                field: "todo.default_hour",
                reason: format!("{} is not an hour of the day", self.todo.default_hour),
            });
        }
        if self.todo.default_minute > 59 {
            return Err(ConfigError::Invalid {
                field: "todo.default_minute",
                reason: format!("{} is not a minute of the hour", self.todo.default_minute),
            });
        }
        Ok(())
    }
}
