//! Time handling for panchang calculations.
//!
//! This crate provides:
//! - Unix seconds ↔ Julian Date conversion and Julian centuries of TT
//! - Earth Rotation Angle, GMST and local sidereal time
//! - UTC-noon normalization, local mean midnight and timezone-aware
//!   wall-clock instants for fallback values

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::{
    add_saturating, instant_from_unix_seconds, local_clock_time, local_mean_midnight, month_dates,
    parse_timezone, to_unix_seconds, utc_midnight, utc_noon,
};
pub use julian::{
    DELTA_T_SECONDS, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, unix_seconds_to_jd,
    unix_seconds_to_tt_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};

pub use chrono_tz::Tz;
