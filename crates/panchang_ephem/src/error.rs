//! Error types for ephemeris queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors reported by an [`Ephemeris`](crate::Ephemeris) implementation.
///
/// A search that simply finds no event is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch is NaN, infinite or outside the supported span.
    InvalidEpoch(f64),
    /// Observer coordinates are not usable.
    InvalidObserver(&'static str),
    /// Query parameters are not usable.
    InvalidQuery(&'static str),
    /// Failure inside a backend implementation.
    Backend(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch(s) => write!(f, "invalid epoch: {s} s"),
            Self::InvalidObserver(msg) => write!(f, "invalid observer: {msg}"),
            Self::InvalidQuery(msg) => write!(f, "invalid query: {msg}"),
            Self::Backend(msg) => write!(f, "ephemeris backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
