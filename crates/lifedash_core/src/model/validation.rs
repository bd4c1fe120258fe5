//! Field-level checks applied before a record enters a collection.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static CLOCK_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid clock time regex"));

/// Validation failure for a widget record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    EmptyField(&'static str),
    /// A clock field is not `HH:MM` (24h).
    InvalidClockTime { field: &'static str, value: String },
    /// A weekday index is outside `0..=6` (Sunday = 0).
    InvalidWeekday(u8),
    /// An end instant or clock time is not after its start.
    EndNotAfterStart { field: &'static str },
    /// A numeric field is outside its allowed range.
    OutOfRange { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` must not be empty"),
            Self::InvalidClockTime { field, value } => {
                write!(f, "`{field}` must be HH:MM, got `{value}`")
            }
            Self::InvalidWeekday(day) => write!(f, "weekday {day} is outside 0..=6"),
            Self::EndNotAfterStart { field } => write!(f, "`{field}` must be after its start"),
            Self::OutOfRange { field, value } => write!(f, "`{field}` is out of range: {value}"),
        }
    }
}

impl Error for ValidationError {}

/// Returns whether `value` is a 24h `HH:MM` clock time.
pub fn is_clock_time(value: &str) -> bool {
    CLOCK_TIME_RE.is_match(value)
}

pub(crate) fn require_clock_time(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_clock_time(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidClockTime {
            field,
            value: value.to_string(),
        })
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

pub(crate) fn require_weekdays(days: &[u8]) -> Result<(), ValidationError> {
    match days.iter().find(|day| **day > 6) {
        Some(day) => Err(ValidationError::InvalidWeekday(*day)),
        None => Ok(()),
    }
}

/// Minutes since midnight for a validated `HH:MM` value.
pub fn clock_minutes(value: &str) -> Option<u32> {
    if !is_clock_time(value) {
        return None;
    }
    let (hours, minutes) = value.split_once(':')?;
    Some(hours.parse::<u32>().ok()? * 60 + minutes.parse::<u32>().ok()?)
}
