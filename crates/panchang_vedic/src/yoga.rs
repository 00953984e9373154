//! Yoga from the sum of Sun and Moon longitudes.
//!
//! The sum (mod 360°) is cut into 27 yogas of 13°20′ each.

use crate::util::{normalize_360, segment_index};

/// Span of one yoga in degrees of longitude sum.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkumbha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Yoga for a 1-based number, wrapped onto [1, 27].
    pub const fn from_number(number: u8) -> Self {
        let n = if number == 0 { 27 } else { number };
        ALL_YOGAS[(n as usize - 1) % 27]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 1-based number, [1, 27].
    pub number: u8,
    /// Degrees of longitude sum elapsed in this yoga.
    pub degrees_in_yoga: f64,
}

impl YogaPosition {
    pub fn start_sum(&self) -> f64 {
        self.yoga.index() as f64 * YOGA_SPAN
    }

    pub fn end_sum(&self) -> f64 {
        self.number as f64 * YOGA_SPAN
    }
}

/// Yoga from the Sun+Moon longitude sum in degrees (any range).
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let sum = normalize_360(sum_deg);
    let idx = segment_index(sum, 27);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        number: idx + 1,
        degrees_in_yoga: (sum - idx as f64 * YOGA_SPAN).max(0.0),
    }
}

pub fn yoga_from_longitudes(moon_lon_deg: f64, sun_lon_deg: f64) -> YogaPosition {
    yoga_from_sum(moon_lon_deg + sun_lon_deg)
}
