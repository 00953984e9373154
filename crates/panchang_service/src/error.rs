//! Error types for panchang aggregation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchang_time::TimeError;

/// Errors surfaced by [`PanchangService`](crate::PanchangService).
///
/// Ephemeris misses and failures inside a single day's calculation never
/// appear here; they are replaced by fallback values and reported through
/// [`DailyPanchang::fallbacks`](crate::DailyPanchang::fallbacks).
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Location coordinates are missing, non-finite or out of range.
    InvalidLocation(&'static str),
    /// Calendar or instant conversion failed.
    Time(TimeError),
    /// The aggregate could not be assembled.
    Aggregation(String),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Aggregation(msg) => write!(f, "failed to calculate panchang data: {msg}"),
        }
    }
}

impl Error for PanchangError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
