//! Observer location supplied by callers.

use chrono_tz::Tz;
use log::warn;
use panchang_ephem::Observer;
use panchang_time::parse_timezone;

use crate::error::PanchangError;

/// A named place with its IANA timezone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// IANA timezone identifier, e.g. "Asia/Kolkata".
    pub timezone: String,
    pub name: String,
}

impl Location {
    /// Build a validated location.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, PanchangError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
            timezone: timezone.into(),
            name: name.into(),
        };
        loc.validate()?;
        Ok(loc)
    }

    /// Check coordinates are finite and in range.
    ///
    /// The timezone is not checked here; an unknown identifier is
    /// treated as UTC at calculation time.
    pub fn validate(&self) -> Result<(), PanchangError> {
        if !self.latitude_deg.is_finite() {
            return Err(PanchangError::InvalidLocation("latitude is not finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(PanchangError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(PanchangError::InvalidLocation("longitude is not finite"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(PanchangError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(())
    }

    /// Sea-level observer at this location.
    pub fn observer(&self) -> Observer {
        Observer::at_sea_level(self.latitude_deg, self.longitude_deg)
    }

    /// Parsed timezone, UTC if the identifier is unknown.
    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone).unwrap_or_else(|e| {
            warn!("{e} for location '{}', using UTC", self.name);
            Tz::UTC
        })
    }
}
