//! Tithi, nakshatra, yoga and karana at an instant.
//!
//! Longitudes are sampled once at the given instant. A failed or
//! non-finite longitude yields the default record (number 1, first table
//! entry, `at .. at + 24 h`, or `at .. at + 12 h` for karana) tagged
//! [`ValueSource::Fallback`]. Windows saturate at the ends of the
//! representable range.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};
use panchang_ephem::{Body, Ephemeris, EphemerisError};
use panchang_time::{add_saturating, to_unix_seconds};
use panchang_vedic::{
    Karana, Nakshatra, Paksha, Yoga, karana_from_elongation, nakshatra_from_longitude,
    normalize_360, tithi_from_elongation, tithi_name, yoga_from_sum,
};

use crate::boundary::segment_window;
use crate::config::BoundaryMode;
use crate::panchang_types::{KaranaInfo, NakshatraInfo, TithiInfo, ValueSource, YogaInfo};

/// Ecliptic longitude, rejecting non-finite values.
fn longitude<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    body: Body,
    unix_s: f64,
) -> Result<f64, EphemerisError> {
    let lon = ephemeris.ecliptic_longitude(body, unix_s)?;
    if !lon.is_finite() {
        return Err(EphemerisError::Backend(format!(
            "{} longitude is not finite",
            body.name()
        )));
    }
    Ok(lon)
}

/// Moon−Sun elongation in [0, 360).
pub fn elongation_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    unix_s: f64,
) -> Result<f64, EphemerisError> {
    let moon = longitude(ephemeris, Body::Moon, unix_s)?;
    let sun = longitude(ephemeris, Body::Sun, unix_s)?;
    Ok(normalize_360(moon - sun + 360.0))
}

/// Moon + Sun longitude sum in [0, 360).
pub fn longitude_sum_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    unix_s: f64,
) -> Result<f64, EphemerisError> {
    let moon = longitude(ephemeris, Body::Moon, unix_s)?;
    let sun = longitude(ephemeris, Body::Sun, unix_s)?;
    Ok(normalize_360(moon + sun))
}

/// Moon longitude in [0, 360).
pub fn moon_longitude_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    unix_s: f64,
) -> Result<f64, EphemerisError> {
    Ok(normalize_360(longitude(ephemeris, Body::Moon, unix_s)?))
}

fn window_after(at: DateTime<Utc>, hours: i64) -> (DateTime<Utc>, DateTime<Utc>) {
    (at, add_saturating(at, TimeDelta::hours(hours)))
}

fn default_window(at: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    window_after(at, 24)
}

pub fn tithi_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    at: DateTime<Utc>,
    mode: BoundaryMode,
) -> TithiInfo {
    match elongation_at(ephemeris, to_unix_seconds(at)) {
        Ok(elong) => {
            let pos = tithi_from_elongation(elong);
            let (start, end) = segment_window(
                |t| elongation_at(ephemeris, t),
                at,
                pos.start_elongation(),
                pos.end_elongation(),
                (
                    add_saturating(at, -TimeDelta::hours(24)),
                    add_saturating(at, TimeDelta::hours(24)),
                ),
                mode,
                "tithi",
            );
            debug!("tithi at {at}: {} ({elong:.3}°)", pos.number);
            TithiInfo {
                number: pos.number,
                name: pos.name,
                paksha: pos.paksha,
                start,
                end,
                source: ValueSource::Computed,
            }
        }
        Err(e) => {
            warn!("tithi at {at}: {e}; using default");
            let (start, end) = default_window(at);
            TithiInfo {
                number: 1,
                name: tithi_name(1),
                paksha: Paksha::Shukla,
                start,
                end,
                source: ValueSource::Fallback,
            }
        }
    }
}

pub fn nakshatra_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    at: DateTime<Utc>,
    mode: BoundaryMode,
) -> NakshatraInfo {
    match moon_longitude_at(ephemeris, to_unix_seconds(at)) {
        Ok(lon) => {
            let pos = nakshatra_from_longitude(lon);
            let (start, end) = segment_window(
                |t| moon_longitude_at(ephemeris, t),
                at,
                pos.start_longitude(),
                pos.end_longitude(),
                default_window(at),
                mode,
                "nakshatra",
            );
            debug!("nakshatra at {at}: {} pada {}", pos.number, pos.pada);
            NakshatraInfo {
                number: pos.number,
                name: pos.nakshatra.name(),
                ruler: pos.nakshatra.ruler(),
                deity: pos.nakshatra.deity(),
                pada: Some(pos.pada),
                start,
                end,
                source: ValueSource::Computed,
            }
        }
        Err(e) => {
            warn!("nakshatra at {at}: {e}; using default");
            let n = Nakshatra::Ashwini;
            let (start, end) = default_window(at);
            NakshatraInfo {
                number: n.number(),
                name: n.name(),
                ruler: n.ruler(),
                deity: n.deity(),
                pada: None,
                start,
                end,
                source: ValueSource::Fallback,
            }
        }
    }
}

pub fn yoga_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    at: DateTime<Utc>,
    mode: BoundaryMode,
) -> YogaInfo {
    match longitude_sum_at(ephemeris, to_unix_seconds(at)) {
        Ok(sum) => {
            let pos = yoga_from_sum(sum);
            let (start, end) = segment_window(
                |t| longitude_sum_at(ephemeris, t),
                at,
                pos.start_sum(),
                pos.end_sum(),
                default_window(at),
                mode,
                "yoga",
            );
            debug!("yoga at {at}: {}", pos.number);
            YogaInfo {
                number: pos.number,
                name: pos.yoga.name(),
                start,
                end,
                source: ValueSource::Computed,
            }
        }
        Err(e) => {
            warn!("yoga at {at}: {e}; using default");
            let (start, end) = default_window(at);
            YogaInfo {
                number: 1,
                name: Yoga::from_number(1).name(),
                start,
                end,
                source: ValueSource::Fallback,
            }
        }
    }
}

pub fn karana_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    at: DateTime<Utc>,
    mode: BoundaryMode,
) -> KaranaInfo {
    match elongation_at(ephemeris, to_unix_seconds(at)) {
        Ok(elong) => {
            let pos = karana_from_elongation(elong);
            let (start, end) = segment_window(
                |t| elongation_at(ephemeris, t),
                at,
                pos.start_elongation(),
                pos.end_elongation(),
                window_after(at, 12),
                mode,
                "karana",
            );
            debug!("karana at {at}: {} (sequence {})", pos.number, pos.sequence);
            KaranaInfo {
                number: pos.number,
                sequence: pos.sequence,
                name: pos.karana.name(),
                start,
                end,
                source: ValueSource::Computed,
            }
        }
        Err(e) => {
            warn!("karana at {at}: {e}; using default");
            let (start, end) = window_after(at, 12);
            KaranaInfo {
                number: 1,
                sequence: 1,
                name: Karana::from_sequence(1).name(),
                start,
                end,
                source: ValueSource::Fallback,
            }
        }
    }
}
