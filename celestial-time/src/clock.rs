//! Wall-clock time of day in `HH:MM` form.
//!
//! Accepted: one or two hour digits (0-23), a colon, exactly two minute
//! digits (00-59), optional surrounding whitespace. `"9:05"`, `"09:05"` and
//! `" 23:59 "` parse; `"24:00"`, `"12:5"`, `"12:60"` and `"noon"` do not.

use crate::{TimeError, TimeResult};
use celestial_core::constants::MINUTES_PER_HOUR;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static CLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})\s*$").unwrap());

/// Serializes as `HH:MM` text; deserializing runs the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> TimeResult<Self> {
        if hour > 23 {
            return Err(TimeError::ParseError(format!(
                "Hour out of range: {}",
                hour
            )));
        }
        if minute > 59 {
            return Err(TimeError::ParseError(format!(
                "Minute out of range: {}",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0 }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Decimal hours since midnight, e.g. `21:30` -> `21.5`.
    pub fn hour_fraction(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / MINUTES_PER_HOUR
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        const MAX_CLOCK_LENGTH: usize = 16;
        if s.len() > MAX_CLOCK_LENGTH {
            return Err(TimeError::ParseError("Input too long".to_string()));
        }

        let caps = CLOCK_REGEX.captures(s).ok_or_else(|| {
            TimeError::ParseError(format!(
                "Invalid clock time: '{}'. Expected HH:MM",
                s.trim()
            ))
        })?;

        let hour: u8 = caps[1]
            .parse()
            .map_err(|_| TimeError::ParseError(format!("Invalid hour: '{}'", &caps[1])))?;
        let minute: u8 = caps[2]
            .parse()
            .map_err(|_| TimeError::ParseError(format!("Invalid minute: '{}'", &caps[2])))?;

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(s: String) -> TimeResult<Self> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
