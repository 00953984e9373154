//! Ephemeris adapter: rise/set times and lunar phase with fixed fallbacks.
//!
//! Searches start at the observer's local mean midnight before the
//! requested UTC date. A search miss, an ephemeris error or an unusable
//! timestamp is replaced by a fixed wall-clock time in the location's
//! timezone (sunrise 06:00, sunset 18:00, moonrise 00:00, moonset 12:00)
//! and the lunar phase by 0. Each substitution logs a warning.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use log::{debug, warn};
use panchang_ephem::{Body, Ephemeris, Observer, RiseSetDirection};
use panchang_time::{
    add_saturating, instant_from_unix_seconds, local_clock_time, local_mean_midnight,
    to_unix_seconds, utc_midnight, utc_noon,
};

use crate::config::PanchangConfig;
use crate::location::Location;
use crate::panchang_types::{AstronomicalInfo, AstronomicalSources, ValueSource};

pub const FALLBACK_SUNRISE_HOUR: u32 = 6;
pub const FALLBACK_SUNSET_HOUR: u32 = 18;
pub const FALLBACK_MOONRISE_HOUR: u32 = 0;
pub const FALLBACK_MOONSET_HOUR: u32 = 12;

/// `hour:00` local time on `date`, or `hour:00` UTC if the local time
/// cannot be built.
pub fn fixed_local_time(date: NaiveDate, hour: u32, tz: Tz) -> DateTime<Utc> {
    local_clock_time(date, hour, 0, tz).unwrap_or_else(|e| {
        warn!("{e}; using {hour:02}:00 UTC");
        add_saturating(utc_midnight(date), TimeDelta::hours(i64::from(hour)))
    })
}

struct RiseSetQuery {
    label: &'static str,
    body: Body,
    direction: RiseSetDirection,
    altitude_deg: f64,
    fallback_hour: u32,
}

fn rise_set_or_fallback<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    observer: &Observer,
    start_unix_s: f64,
    query: &RiseSetQuery,
    date: NaiveDate,
    tz: Tz,
) -> (DateTime<Utc>, ValueSource) {
    let found = ephemeris.search_rise_set(
        query.body,
        observer,
        start_unix_s,
        query.direction,
        query.altitude_deg,
    );
    let reason = match found {
        Ok(Some(t)) => match instant_from_unix_seconds(t) {
            Ok(instant) => {
                debug!("{} on {date}: {instant}", query.label);
                return (instant, ValueSource::Computed);
            }
            Err(e) => format!("ephemeris returned an unusable time ({e})"),
        },
        Ok(None) => "no event within the search window".to_string(),
        Err(e) => e.to_string(),
    };
    warn!(
        "{} on {date}: {reason}; using {:02}:00 {}",
        query.label,
        query.fallback_hour,
        tz.name()
    );
    (
        fixed_local_time(date, query.fallback_hour, tz),
        ValueSource::Fallback,
    )
}

/// Lunar phase as a fraction in [0, 1), or 0 on failure.
pub fn lunar_phase_or_fallback<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    unix_s: f64,
) -> (f64, ValueSource) {
    match ephemeris.moon_phase(unix_s) {
        Ok(deg) if deg.is_finite() => {
            let fraction = deg.rem_euclid(360.0) / 360.0;
            (
                if fraction < 1.0 { fraction } else { 0.0 },
                ValueSource::Computed,
            )
        }
        Ok(deg) => {
            warn!("moon phase at {unix_s} is {deg}; using 0");
            (0.0, ValueSource::Fallback)
        }
        Err(e) => {
            warn!("moon phase at {unix_s}: {e}; using 0");
            (0.0, ValueSource::Fallback)
        }
    }
}

/// Sunrise, sunset, moonrise, moonset and lunar phase for the UTC date
/// of `date`. Never fails.
pub fn astronomical_info<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    date: DateTime<Utc>,
    location: &Location,
    config: &PanchangConfig,
) -> AstronomicalInfo {
    let noon = utc_noon(date);
    let day = noon.date_naive();
    let tz = location.tz();
    let observer = location.observer();
    let start = local_mean_midnight(noon, location.longitude_deg);

    let queries = [
        RiseSetQuery {
            label: "sunrise",
            body: Body::Sun,
            direction: RiseSetDirection::Rise,
            altitude_deg: config.sun_altitude_deg,
            fallback_hour: FALLBACK_SUNRISE_HOUR,
        },
        RiseSetQuery {
            label: "sunset",
            body: Body::Sun,
            direction: RiseSetDirection::Set,
            altitude_deg: config.sun_altitude_deg,
            fallback_hour: FALLBACK_SUNSET_HOUR,
        },
        RiseSetQuery {
            label: "moonrise",
            body: Body::Moon,
            direction: RiseSetDirection::Rise,
            altitude_deg: config.moon_altitude_deg,
            fallback_hour: FALLBACK_MOONRISE_HOUR,
        },
        RiseSetQuery {
            label: "moonset",
            body: Body::Moon,
            direction: RiseSetDirection::Set,
            altitude_deg: config.moon_altitude_deg,
            fallback_hour: FALLBACK_MOONSET_HOUR,
        },
    ];
    let [sunrise, sunset, moonrise, moonset] =
        queries.map(|q| rise_set_or_fallback(ephemeris, &observer, start, &q, day, tz));
    let (lunar_phase, phase_source) = lunar_phase_or_fallback(ephemeris, to_unix_seconds(noon));

    AstronomicalInfo {
        sunrise: sunrise.0,
        sunset: sunset.0,
        moonrise: moonrise.0,
        moonset: moonset.0,
        lunar_phase,
        sources: AstronomicalSources {
            sunrise: sunrise.1,
            sunset: sunset.1,
            moonrise: moonrise.1,
            moonset: moonset.1,
            lunar_phase: phase_source,
        },
    }
}
