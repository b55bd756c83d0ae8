//! Deadline assembly from form parts.
//!
//! A deadline form offers day, month, and year pickers plus free-text hour
//! and minute boxes. The text boxes are sanitized to digits and clamped
//! into range before everything is combined into one UTC timestamp.

use crate::config::TodoSettings;
use crate::validation::DraftProblem;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_HOUR: u32 = 23;
pub const MAX_MINUTE: u32 = 59;

/// Keep only ASCII digits from `raw` and clamp the number to `max`.
///
/// An input with no digits reads as 0; a number too large to parse reads
/// as `max`.
fn sanitize(raw: &str, max: u32) -> u32 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().map_or(max, |value| value.min(max))
}

/// Sanitize an hour box: `"7a"` becomes 7, `"99"` becomes 23.
pub fn sanitize_hours(raw: &str) -> u32 {
    sanitize(raw, MAX_HOUR)
}

/// Sanitize a minute box: `""` becomes 0, `"75"` becomes 59.
pub fn sanitize_minutes(raw: &str) -> u32 {
    sanitize(raw, MAX_MINUTE)
}

/// Separately chosen deadline parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineInput {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hours: u32,
    pub minutes: u32,
}

impl DeadlineInput {
    /// Form defaults: 1 January of `year`, 12:00.
    pub fn default_for(year: i32) -> Self {
        Self::from_settings(year, &TodoSettings::default())
    }

    /// 1 January of `year` at the configured default time.
    pub fn from_settings(year: i32, settings: &TodoSettings) -> Self {
        Self {
            day: 1,
            month: 1,
            year,
            hours: settings.default_hour.min(MAX_HOUR),
            minutes: settings.default_minute.min(MAX_MINUTE),
        }
    }

    pub fn with_date(mut self, day: u32, month: u32, year: i32) -> Self {
        self.day = day;
        self.month = month;
        self.year = year;
        self
    }

    /// Set the time from raw hour and minute text.
    pub fn with_time_text(mut self, hours: &str, minutes: &str) -> Self {
        self.hours = sanitize_hours(hours);
        self.minutes = sanitize_minutes(minutes);
        self
    }

    /// Set the time from numbers, clamping each into range.
    pub fn with_time(mut self, hours: u32, minutes: u32) -> Self {
        self.hours = hours.min(MAX_HOUR);
        self.minutes = minutes.min(MAX_MINUTE);
        self
    }

    /// Combine the parts into a UTC timestamp.
    ///
    /// Fails when the day, month, and year do not name a calendar date
    /// (31 April, 29 February outside leap years, month 13).
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, DraftProblem> {
        let invalid = || DraftProblem::InvalidDate {
            day: self.day,
            month: self.month,
            year: self.year,
        };

        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| {
                date.and_hms_opt(self.hours.min(MAX_HOUR), self.minutes.min(MAX_MINUTE), 0)
            })
            .ok_or_else(invalid)?;

        Ok(Utc.from_utc_datetime(&naive))
    }
}

/// Text plus deadline parts, as entered in the add form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub text: String,
    pub deadline: DeadlineInput,
}

impl TodoDraft {
    pub fn new(text: impl Into<String>, deadline: DeadlineInput) -> Self {
        Self {
            text: text.into(),
            deadline,
        }
    }
}
