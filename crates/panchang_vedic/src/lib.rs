//! Panchang element math and rule tables.
//!
//! This crate provides:
//! - Tithi, nakshatra, yoga and karana lookups from Sun/Moon longitudes
//! - Name, deity and ruler tables for each element
//! - The 30 daylight muhurtas and their classification
//! - Festival rules keyed on tithi, nakshatra or Gregorian date
//! - Named lunar phases
//!
//! Everything here is a pure function of its arguments; no ephemeris
//! access happens in this crate.

pub mod festival;
pub mod karana;
pub mod lunar_phase;
pub mod muhurta;
pub mod nakshatra;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use festival::{
    FESTIVAL_RULES, Festival, FestivalKind, FestivalRule, Trigger, festivals_for,
    festivals_with_rules,
};
pub use karana::{ALL_KARANAS, KARANA_SPAN, Karana, KaranaPosition, karana_from_elongation};
pub use lunar_phase::MoonPhaseName;
pub use muhurta::{
    MUHURTA_COUNT, MUHURTA_NAMES, Muhurta, MuhurtaKind, muhurta_description, muhurta_name,
    muhurtas_for_daylight,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use tithi::{
    Paksha, TITHI_NAMES, TITHI_SPAN, TithiPosition, tithi_from_elongation,
    tithi_from_longitudes, tithi_name,
};
pub use util::normalize_360;
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaPosition, yoga_from_longitudes, yoga_from_sum};
