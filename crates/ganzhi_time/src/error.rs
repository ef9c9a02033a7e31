//! Error types for civil calendar and offset handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation and parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported `MIN_YEAR..=MAX_YEAR` range.
    YearOutOfRange(i32),
    /// Instant (UTC seconds) outside the supported year range.
    InstantOutOfRange(i64),
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the length of the given month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Minute outside 0..=59.
    InvalidMinute(u32),
    /// Second outside 0..=59.
    InvalidSecond(u32),
    /// UTC offset beyond +/-18 hours (value in minutes).
    InvalidOffset(i32),
    /// Text could not be parsed as a date, time or offset.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} outside supported range"),
            Self::InstantOutOfRange(s) => {
                write!(f, "instant {s}s from the Unix epoch outside supported range")
            }
            Self::InvalidMonth(m) => write!(f, "month {m} outside 1..=12"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "day {day} does not exist in {year:04}-{month:02}")
            }
            Self::InvalidHour(h) => write!(f, "hour {h} outside 0..=23"),
            Self::InvalidMinute(m) => write!(f, "minute {m} outside 0..=59"),
            Self::InvalidSecond(s) => write!(f, "second {s} outside 0..=59"),
            Self::InvalidOffset(m) => write!(f, "UTC offset of {m} minutes exceeds 18 hours"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
