//! Julian Date arithmetic.
//!
//! The panchang core works on Unix seconds at its public boundary and on
//! Julian Dates internally. UTC is used as a stand-in for UT1 (the
//! difference is below one second), and a fixed ΔT maps UTC to TT for
//! the analytic Sun/Moon series.

/// Julian Date of J2000.0 (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// TT − UTC in seconds, held constant for the 2000–2030 era.
pub const DELTA_T_SECONDS: f64 = 69.2;

/// Convert Unix seconds (UTC) to a Julian Date (UTC).
pub fn unix_seconds_to_jd(unix_s: f64) -> f64 {
    unix_s / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries of TT since J2000.0 for a Unix timestamp.
pub fn unix_seconds_to_tt_centuries(unix_s: f64) -> f64 {
    let jd_tt = unix_seconds_to_jd(unix_s + DELTA_T_SECONDS);
    (jd_tt - J2000_JD) / DAYS_PER_CENTURY
}
