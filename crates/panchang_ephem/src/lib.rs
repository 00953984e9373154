//! Sun/Moon ephemeris primitives for panchang calculations.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: rise/set search, moon phase and ecliptic
//!   longitude, all keyed by Unix seconds
//! - [`AnalyticEphemeris`], a self-contained low-precision implementation
//!   (Meeus solar theory and the main terms of the lunar series)
//! - Coordinate helpers and a generic sign-change/bisection search

pub mod analytic;
pub mod coords;
pub mod error;
pub mod moon;
pub mod search;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;
pub use search::{Crossing, find_crossing, normalize_to_pm180};

/// Bodies the panchang needs positions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Direction of a horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiseSetDirection {
    /// Body climbs through the target altitude.
    Rise,
    /// Body sinks through the target altitude.
    Set,
}

/// Geographic observer on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Elevation above sea level in meters.
    pub elevation_m: f64,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }

    /// Observer at sea level.
    pub fn at_sea_level(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg, longitude_deg, 0.0)
    }

    /// Check coordinates are finite and in range.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidObserver(
                "latitude must be finite and within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidObserver(
                "longitude must be finite and within [-180, 180]",
            ));
        }
        if !self.elevation_m.is_finite() {
            return Err(EphemerisError::InvalidObserver("elevation must be finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Astronomy primitives consumed by the panchang service.
///
/// All timestamps are Unix seconds (UTC). Implementations must be
/// stateless with respect to queries so that one instance can serve
/// concurrent callers.
pub trait Ephemeris: Send + Sync {
    /// First time at or after `start_unix_s` when `body` crosses
    /// `altitude_deg` in `direction`.
    ///
    /// `Ok(None)` means no crossing inside the implementation's search
    /// window (e.g. polar day or night).
    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        start_unix_s: f64,
        direction: RiseSetDirection,
        altitude_deg: f64,
    ) -> Result<Option<f64>, EphemerisError>;

    /// Moon−Sun ecliptic elongation in degrees, [0, 360).
    fn moon_phase(&self, unix_s: f64) -> Result<f64, EphemerisError>;

    /// Apparent geocentric ecliptic longitude of `body`, degrees [0, 360).
    fn ecliptic_longitude(&self, body: Body, unix_s: f64) -> Result<f64, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        start_unix_s: f64,
        direction: RiseSetDirection,
        altitude_deg: f64,
    ) -> Result<Option<f64>, EphemerisError> {
        (**self).search_rise_set(body, observer, start_unix_s, direction, altitude_deg)
    }

    fn moon_phase(&self, unix_s: f64) -> Result<f64, EphemerisError> {
        (**self).moon_phase(unix_s)
    }

    fn ecliptic_longitude(&self, body: Body, unix_s: f64) -> Result<f64, EphemerisError> {
        (**self).ecliptic_longitude(body, unix_s)
    }
}
