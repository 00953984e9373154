//! The thirty daylight muhurtas.
//!
//! The interval from sunrise to sunset is split into 30 equal periods.
//! Names come from a fixed 30-entry table; each period is classed as
//! auspicious, inauspicious or neutral by position.

use chrono::{DateTime, TimeDelta, Utc};

/// Muhurtas per sunrise–sunset interval.
pub const MUHURTA_COUNT: usize = 30;

pub const MUHURTA_NAMES: [&str; MUHURTA_COUNT] = [
    "Rudra",
    "Ahi",
    "Mitra",
    "Pitri",
    "Vasu",
    "Vara",
    "Vishvadeva",
    "Vidhi",
    "Satamukhi",
    "Puruhuta",
    "Vahini",
    "Naktanakara",
    "Varuna",
    "Aryaman",
    "Bhaga",
    "Girisha",
    "Ajapada",
    "Ahir-Budhnya",
    "Pushan",
    "Ashvini",
    "Yama",
    "Agni",
    "Vidhatri",
    "Kanda",
    "Aditi",
    "Jiva",
    "Vishnu",
    "Dyumani",
    "Brahma",
    "Samudra",
];

const AUSPICIOUS: [usize; 12] = [0, 1, 4, 6, 8, 10, 13, 15, 20, 22, 25, 27];
const INAUSPICIOUS: [usize; 8] = [3, 7, 11, 14, 18, 21, 24, 28];

const DEFAULT_DESCRIPTION: &str = "Regular muhurta period";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MuhurtaKind {
    Auspicious,
    Inauspicious,
    Neutral,
}

impl MuhurtaKind {
    /// Classification of the muhurta at a 0-based position.
    pub fn of_index(index: usize) -> Self {
        let i = index % MUHURTA_COUNT;
        if AUSPICIOUS.contains(&i) {
            Self::Auspicious
        } else if INAUSPICIOUS.contains(&i) {
            Self::Inauspicious
        } else {
            Self::Neutral
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "auspicious",
            Self::Inauspicious => "inauspicious",
            Self::Neutral => "neutral",
        }
    }
}

pub fn muhurta_name(index: usize) -> &'static str {
    MUHURTA_NAMES[index % MUHURTA_COUNT]
}

pub fn muhurta_description(index: usize) -> &'static str {
    match muhurta_name(index) {
        "Rudra" => "Sacred time dedicated to Lord Shiva",
        "Ahi" => "Time for healing and rejuvenation",
        "Mitra" => "Auspicious for forming friendships and alliances",
        "Pitri" => "Time for ancestral offerings",
        "Vasu" => "Good for material prosperity",
        _ => DEFAULT_DESCRIPTION,
    }
}

/// One daylight muhurta.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Muhurta {
    pub name: &'static str,
    pub kind: MuhurtaKind,
    pub description: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Split `sunrise..sunset` into 30 contiguous muhurtas.
///
/// The first starts at `sunrise`, the last ends at `sunset`, and each
/// end equals the next start. Boundaries are rounded to the millisecond.
/// An empty or inverted interval yields 30 zero-length periods at
/// `sunrise`; callers that need a real daylight window must supply one.
pub fn muhurtas_for_daylight(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Vec<Muhurta> {
    let total_ms = (sunset - sunrise).num_milliseconds().max(0);
    let boundary = |i: usize| {
        sunrise + TimeDelta::milliseconds(total_ms * i as i64 / MUHURTA_COUNT as i64)
    };

    (0..MUHURTA_COUNT)
        .map(|i| Muhurta {
            name: muhurta_name(i),
            kind: MuhurtaKind::of_index(i),
            description: muhurta_description(i),
            start: boundary(i),
            end: boundary(i + 1),
        })
        .collect()
}
