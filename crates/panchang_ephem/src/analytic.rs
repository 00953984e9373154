//! Self-contained analytic Sun/Moon ephemeris.
//!
//! Positions come from [`crate::sun`] and [`crate::moon`]. Rise and set
//! times are found by sampling the body's altitude on a fixed step over
//! the search window and bisecting the first crossing in the requested
//! direction.

use log::debug;
use panchang_time::{local_sidereal_time_rad, unix_seconds_to_jd, unix_seconds_to_tt_centuries};

use crate::coords::{
    altitude_deg, ecliptic_to_equatorial, normalize_360, nutation_deg, true_obliquity_deg,
};
use crate::error::EphemerisError;
use crate::moon::moon_lon_lat_deg;
use crate::search::{Crossing, find_crossing};
use crate::sun::sun_apparent_longitude_deg;
use crate::{Body, Ephemeris, Observer, RiseSetDirection};

/// 1700-01-01T00:00:00Z.
const MIN_UNIX_S: f64 = -8_520_336_000.0;
/// 2300-01-01T00:00:00Z.
const MAX_UNIX_S: f64 = 10_413_792_000.0;

/// Default altitude sampling step in seconds.
const DEFAULT_STEP_S: f64 = 600.0;

/// Bisection stops once the bracket is narrower than this, seconds.
const TIME_TOLERANCE_S: f64 = 1.0;

const MAX_BISECTIONS: usize = 40;

/// Analytic ephemeris with a configurable rise/set search window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    search_window_days: f64,
    step_s: f64,
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticEphemeris {
    /// One-day search window, 10-minute sampling.
    pub fn new() -> Self {
        Self {
            search_window_days: 1.0,
            step_s: DEFAULT_STEP_S,
        }
    }

    /// Override the rise/set search window. Non-positive or non-finite
    /// values keep the current window.
    pub fn with_search_window_days(mut self, days: f64) -> Self {
        if days.is_finite() && days > 0.0 {
            self.search_window_days = days;
        }
        self
    }

    pub fn search_window_days(&self) -> f64 {
        self.search_window_days
    }

    /// Apparent geocentric ecliptic longitude and latitude, degrees.
    pub fn ecliptic_lon_lat(&self, body: Body, unix_s: f64) -> Result<(f64, f64), EphemerisError> {
        check_epoch(unix_s)?;
        let t = unix_seconds_to_tt_centuries(unix_s);
        Ok(match body {
            Body::Sun => (sun_apparent_longitude_deg(t), 0.0),
            Body::Moon => {
                let (lon, lat) = moon_lon_lat_deg(t);
                let (dpsi, _) = nutation_deg(t);
                (normalize_360(lon + dpsi), lat)
            }
        })
    }

    /// Geocentric altitude of the body's center above the observer's
    /// horizon, degrees. No refraction.
    pub fn altitude_deg(
        &self,
        body: Body,
        observer: &Observer,
        unix_s: f64,
    ) -> Result<f64, EphemerisError> {
        let (lon, lat) = self.ecliptic_lon_lat(body, unix_s)?;
        let t = unix_seconds_to_tt_centuries(unix_s);
        let (ra, dec) = ecliptic_to_equatorial(lon, lat, true_obliquity_deg(t));
        let lst = local_sidereal_time_rad(unix_seconds_to_jd(unix_s), observer.longitude_deg);
        Ok(altitude_deg(ra, dec, observer.latitude_rad(), lst))
    }
}

fn check_epoch(unix_s: f64) -> Result<(), EphemerisError> {
    if !unix_s.is_finite() || !(MIN_UNIX_S..=MAX_UNIX_S).contains(&unix_s) {
        return Err(EphemerisError::InvalidEpoch(unix_s));
    }
    Ok(())
}

impl Ephemeris for AnalyticEphemeris {
    fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        start_unix_s: f64,
        direction: RiseSetDirection,
        altitude_target_deg: f64,
    ) -> Result<Option<f64>, EphemerisError> {
        observer.validate()?;
        if !altitude_target_deg.is_finite() || altitude_target_deg.abs() > 90.0 {
            return Err(EphemerisError::InvalidQuery(
                "altitude must be finite and within [-90, 90]",
            ));
        }
        check_epoch(start_unix_s)?;
        let window_s = self.search_window_days * 86_400.0;
        check_epoch(start_unix_s + window_s)?;

        let crossing = match direction {
            RiseSetDirection::Rise => Crossing::Rising,
            RiseSetDirection::Set => Crossing::Falling,
        };
        let max_steps = (window_s / self.step_s).ceil() as usize;
        let height = |t: f64| -> Result<f64, EphemerisError> {
            Ok(self.altitude_deg(body, observer, t)? - altitude_target_deg)
        };
        let found = find_crossing(
            height,
            start_unix_s,
            self.step_s,
            max_steps,
            crossing,
            MAX_BISECTIONS,
            TIME_TOLERANCE_S,
        )?;
        if found.is_none() {
            debug!(
                "no {:?} {} crossing of {altitude_target_deg}° within {} d of {start_unix_s}",
                direction,
                body.name(),
                self.search_window_days
            );
        }
        Ok(found)
    }

    fn moon_phase(&self, unix_s: f64) -> Result<f64, EphemerisError> {
        let moon = self.ecliptic_longitude(Body::Moon, unix_s)?;
        let sun = self.ecliptic_longitude(Body::Sun, unix_s)?;
        Ok(normalize_360(moon - sun))
    }

    fn ecliptic_longitude(&self, body: Body, unix_s: f64) -> Result<f64, EphemerisError> {
        Ok(self.ecliptic_lon_lat(body, unix_s)?.0)
    }
}
