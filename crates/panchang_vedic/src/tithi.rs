//! Tithi (lunar day) from Moon−Sun elongation.
//!
//! The synodic month is cut into 30 tithis of 12° of elongation each.
//! Tithis 1–15 form the bright half (Shukla paksha), 16–30 the dark half
//! (Krishna paksha). One 15-entry name table serves both halves; the
//! fifteenth name covers both Purnima (15) and Amavasya (30).

use crate::util::{normalize_360, segment_index};

/// Elongation span of one tithi, degrees.
pub const TITHI_SPAN: f64 = 12.0;

/// Tithi names, indexed by `(number - 1) % 15`.
pub const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima/Amavasya",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paksha {
    /// Waxing half, tithis 1–15.
    Shukla,
    /// Waning half, tithis 16–30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// Paksha of a 1-based tithi number. Out-of-range numbers are wrapped
    /// onto [1, 30] first.
    pub const fn of_tithi(number: u8) -> Self {
        let n = if number == 0 { 30 } else { (number - 1) % 30 + 1 };
        if n <= 15 { Self::Shukla } else { Self::Krishna }
    }
}

/// Tithi name for a 1-based number.
pub fn tithi_name(number: u8) -> &'static str {
    TITHI_NAMES[(number.max(1) as usize - 1) % TITHI_NAMES.len()]
}

/// Result of a tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPosition {
    /// 1-based tithi number, [1, 30].
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    /// Degrees of elongation already elapsed in this tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiPosition {
    /// Elongation at which this tithi starts.
    pub fn start_elongation(&self) -> f64 {
        (self.number - 1) as f64 * TITHI_SPAN
    }

    /// Elongation at which this tithi ends, in [12, 360].
    pub fn end_elongation(&self) -> f64 {
        self.number as f64 * TITHI_SPAN
    }
}

/// Tithi from Moon−Sun elongation in degrees (any range).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, 30);
    let number = idx + 1;
    TithiPosition {
        number,
        name: tithi_name(number),
        paksha: Paksha::of_tithi(number),
        degrees_in_tithi: (elong - idx as f64 * TITHI_SPAN).max(0.0),
    }
}

/// Tithi from sidereal or tropical Moon and Sun longitudes.
pub fn tithi_from_longitudes(moon_lon_deg: f64, sun_lon_deg: f64) -> TithiPosition {
    tithi_from_elongation(moon_lon_deg - sun_lon_deg + 360.0)
}
