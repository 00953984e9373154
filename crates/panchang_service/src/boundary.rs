//! Start/end times of angular segments.
//!
//! The approximate mode returns the caller's fixed window. The exact mode
//! searches for the instants where the angle function reaches the
//! segment's start and end values, stepping 6 h at a time away from the
//! sampling instant and bisecting to 1 s.

use chrono::{DateTime, Utc};
use log::warn;
use panchang_ephem::{Crossing, EphemerisError, find_crossing, normalize_to_pm180};
use panchang_time::{instant_from_unix_seconds, to_unix_seconds};

use crate::config::BoundaryMode;

/// Search step, seconds. The fastest segment (karana, ~12 h) spans at
/// least one step.
const STEP_S: f64 = 6.0 * 3600.0;
const MAX_STEPS: usize = 20;
const MAX_BISECTIONS: usize = 50;
const TOLERANCE_S: f64 = 1.0;

/// Find where `f(t) = target_deg`, searching from `t_start` with `step`
/// (negative to search backwards).
fn find_angle_boundary<F>(
    f: &F,
    t_start: f64,
    target_deg: f64,
    step: f64,
) -> Result<Option<f64>, EphemerisError>
where
    F: Fn(f64) -> Result<f64, EphemerisError>,
{
    let wrapped = |t: f64| -> Result<f64, EphemerisError> {
        Ok(normalize_to_pm180(f(t)? - target_deg))
    };
    find_crossing(
        wrapped,
        t_start,
        step,
        MAX_STEPS,
        Crossing::Any,
        MAX_BISECTIONS,
        TOLERANCE_S,
    )
}

fn exact_window<F>(
    f: &F,
    at: DateTime<Utc>,
    start_deg: f64,
    end_deg: f64,
) -> Result<(DateTime<Utc>, DateTime<Utc>), String>
where
    F: Fn(f64) -> Result<f64, EphemerisError>,
{
    let t = to_unix_seconds(at);
    let start = find_angle_boundary(f, t, start_deg, -STEP_S)
        .map_err(|e| e.to_string())?
        .ok_or("start not found")?;
    let end = find_angle_boundary(f, t, end_deg, STEP_S)
        .map_err(|e| e.to_string())?
        .ok_or("end not found")?;
    let start = instant_from_unix_seconds(start).map_err(|e| e.to_string())?;
    let end = instant_from_unix_seconds(end).map_err(|e| e.to_string())?;
    Ok((start, end))
}

/// Start and end of the segment `[start_deg, end_deg)` containing `at`.
///
/// `f` maps Unix seconds to the segment's angle in degrees. In
/// [`BoundaryMode::Exact`] a failed search falls back to `approximate`.
pub fn segment_window<F>(
    f: F,
    at: DateTime<Utc>,
    start_deg: f64,
    end_deg: f64,
    approximate: (DateTime<Utc>, DateTime<Utc>),
    mode: BoundaryMode,
    element: &str,
) -> (DateTime<Utc>, DateTime<Utc>)
where
    F: Fn(f64) -> Result<f64, EphemerisError>,
{
    match mode {
        BoundaryMode::Approximate => approximate,
        BoundaryMode::Exact => exact_window(&f, at, start_deg, end_deg).unwrap_or_else(|e| {
            warn!("{element} boundary search at {at}: {e}; using approximate window");
            approximate
        }),
    }
}
