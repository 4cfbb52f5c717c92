//! Strict parsing of canonical time text into a time of day.

use chrono::NaiveTime;
use std::fmt;
use thiserror::Error;

/// Length of a fully typed `HH:MM` field.
pub const CANONICAL_LEN: usize = 5;

/// Literal out-time meaning midnight at the start of the next day.
pub const END_OF_DAY: &str = "24:00";

/// Why a field could not be read as a real 24-hour time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeTextError {
    #[error("time '{0}' is not fully entered")]
    Incomplete(String),
    #[error("time '{0}' is not in HH:MM form")]
    Malformed(String),
    #[error("time '{0}' is outside 00:00-23:59")]
    OutOfRange(String),
    #[error("24:00 can only be used as an end time")]
    EndOfDayAsStart,
}

/// A clock reading, or the end-of-day sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Clock(NaiveTime),
    EndOfDay,
}

impl TimeOfDay {
    /// Parses an in-time. The end-of-day sentinel is rejected.
    pub fn parse_start(text: &str) -> Result<Self, TimeTextError> {
        if text == END_OF_DAY {
            return Err(TimeTextError::EndOfDayAsStart);
        }
        parse_clock(text).map(TimeOfDay::Clock)
    }

    /// Parses an out-time, accepting the end-of-day sentinel.
    pub fn parse_end(text: &str) -> Result<Self, TimeTextError> {
        if text == END_OF_DAY {
            return Ok(TimeOfDay::EndOfDay);
        }
        parse_clock(text).map(TimeOfDay::Clock)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Clock(time) => write!(f, "{}", time.format("%H:%M")),
            TimeOfDay::EndOfDay => f.write_str(END_OF_DAY),
        }
    }
}

/// Returns true when the text has the full `HH:MM` length.
pub fn is_complete(text: &str) -> bool {
    text.len() == CANONICAL_LEN
}

/// Formats a clock reading as canonical `HH:MM` text.
pub fn to_canonical(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Reads exactly two digits, a colon and two digits as a 24-hour time.
fn parse_clock(text: &str) -> Result<NaiveTime, TimeTextError> {
    if text.len() < CANONICAL_LEN {
        return Err(TimeTextError::Incomplete(text.to_string()));
    }

    let bytes = text.as_bytes();
    let shaped = bytes.len() == CANONICAL_LEN
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return Err(TimeTextError::Malformed(text.to_string()));
    }

    let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeTextError::OutOfRange(text.to_string()))
}
