//! Error types for instant conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from instant normalization and timestamp conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp is NaN or infinite.
    NonFiniteTimestamp,
    /// Timestamp lies outside the range representable by `chrono`.
    OutOfRange(f64),
    /// Calendar components do not form a valid date/time.
    InvalidCalendar { year: i32, month: u32, day: u32 },
    /// The IANA timezone identifier is not known.
    UnknownTimezone(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteTimestamp => write!(f, "timestamp is not finite"),
            Self::OutOfRange(s) => write!(f, "timestamp {s} s is out of range"),
            Self::InvalidCalendar { year, month, day } => {
                write!(f, "invalid calendar date {year:04}-{month:02}-{day:02}")
            }
            Self::UnknownTimezone(name) => write!(f, "unknown timezone: {name}"),
        }
    }
}

impl Error for TimeError {}
