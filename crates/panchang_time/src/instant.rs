//! Instant normalization and local clock times.
//!
//! The panchang for a date is anchored at 12:00 UTC of that date's UTC
//! calendar day. Rise/set searches start at local mean midnight, and
//! fallback clock times are placed in the location's own timezone.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::SECONDS_PER_DAY;

/// Convert fractional Unix seconds to a UTC instant (millisecond precision).
pub fn instant_from_unix_seconds(unix_s: f64) -> Result<DateTime<Utc>, TimeError> {
    if !unix_s.is_finite() {
        return Err(TimeError::NonFiniteTimestamp);
    }
    let ms = (unix_s * 1000.0).round();
    if ms.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(unix_s));
    }
    DateTime::<Utc>::from_timestamp_millis(ms as i64).ok_or(TimeError::OutOfRange(unix_s))
}

/// Fractional Unix seconds of a UTC instant.
pub fn to_unix_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// 12:00:00.000 UTC on the UTC calendar day containing `instant`.
pub fn utc_noon(instant: DateTime<Utc>) -> DateTime<Utc> {
    utc_at(instant.date_naive(), 12, 0)
}

/// Midnight UTC of a calendar date.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    utc_at(date, 0, 0)
}

fn utc_at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(time))
}

/// Local mean midnight for an east-positive longitude on the UTC day of
/// `instant`, as Unix seconds.
///
/// East of Greenwich this falls before 00:00 UTC, west of it after.
pub fn local_mean_midnight(instant: DateTime<Utc>, longitude_east_deg: f64) -> f64 {
    let midnight = to_unix_seconds(utc_midnight(instant.date_naive()));
    midnight - longitude_east_deg / 360.0 * SECONDS_PER_DAY
}

/// Resolve an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
}

/// The UTC instant of `hour:minute` wall-clock time on `date` in `tz`.
///
/// Ambiguous times (DST fold) resolve to the earlier instant. Times that
/// do not exist locally (DST gap) are shifted forward by the gap.
pub fn local_clock_time(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    tz: Tz,
) -> Result<DateTime<Utc>, TimeError> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::InvalidCalendar {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })?;
    let naive = date.and_time(time);
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return Ok(dt.with_timezone(&Utc));
    }
    // Gap: walk forward a minute at a time until the wall clock exists.
    for step in 1..=180 {
        let Some(shifted) = naive.checked_add_signed(TimeDelta::minutes(step)) else {
            break;
        };
        if let Some(dt) = tz.from_local_datetime(&shifted).earliest() {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    Ok(Utc.from_utc_datetime(&naive))
}

/// All dates of a Gregorian month, in order.
pub fn month_dates(year: i32, month: u32) -> Result<Vec<NaiveDate>, TimeError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(TimeError::InvalidCalendar {
        year,
        month,
        day: 1,
    })?;
    let mut dates = Vec::with_capacity(31);
    let mut d = first;
    while d.month() == month {
        dates.push(d);
        match d.checked_add_days(Days::new(1)) {
            Some(next) => d = next,
            None => break,
        }
    }
    Ok(dates)
}

/// `instant + delta`, pinned to the representable range instead of
/// overflowing.
pub fn add_saturating(instant: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
