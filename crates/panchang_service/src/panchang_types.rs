//! Types for panchang results.

use chrono::{DateTime, NaiveDate, Utc};
use panchang_vedic::{Festival, MoonPhaseName, Muhurta, Paksha};

/// Whether a value came from the ephemeris or from a fixed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueSource {
    Computed,
    Fallback,
}

impl ValueSource {
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Fields of a [`DailyPanchang`] that can fall back independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanchangField {
    Sunrise,
    Sunset,
    Moonrise,
    Moonset,
    LunarPhase,
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

impl PanchangField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::Moonrise => "moonrise",
            Self::Moonset => "moonset",
            Self::LunarPhase => "lunar_phase",
            Self::Tithi => "tithi",
            Self::Nakshatra => "nakshatra",
            Self::Yoga => "yoga",
            Self::Karana => "karana",
        }
    }
}

/// Tithi (lunar day) with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TithiInfo {
    /// 1-based tithi number (1-30).
    pub number: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: ValueSource,
}

/// Nakshatra of the Moon with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NakshatraInfo {
    /// 1-based nakshatra number (1-27).
    pub number: u8,
    pub name: &'static str,
    pub ruler: &'static str,
    pub deity: &'static str,
    /// Pada (1-4); `None` for the fallback record.
    pub pada: Option<u8>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: ValueSource,
}

/// Yoga with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YogaInfo {
    /// 1-based yoga number (1-27).
    pub number: u8,
    pub name: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: ValueSource,
}

/// Karana (half-tithi) with start/end times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KaranaInfo {
    /// Position in the 8-name cycle (1-8).
    pub number: u8,
    /// Half-tithi sequence within the synodic month (1-60).
    pub sequence: u8,
    pub name: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: ValueSource,
}

/// Provenance of each [`AstronomicalInfo`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AstronomicalSources {
    pub sunrise: ValueSource,
    pub sunset: ValueSource,
    pub moonrise: ValueSource,
    pub moonset: ValueSource,
    pub lunar_phase: ValueSource,
}

/// Rise/set times and lunar phase for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AstronomicalInfo {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub moonrise: DateTime<Utc>,
    pub moonset: DateTime<Utc>,
    /// Moon-Sun elongation as a fraction of the cycle, [0, 1).
    pub lunar_phase: f64,
    pub sources: AstronomicalSources,
}

impl AstronomicalInfo {
    pub fn phase_name(&self) -> MoonPhaseName {
        MoonPhaseName::from_fraction(self.lunar_phase)
    }
}

/// Complete panchang for one date and location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyPanchang {
    /// Requested date normalized to 12:00 UTC.
    pub date: DateTime<Utc>,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub astronomical: AstronomicalInfo,
    pub muhurtas: Vec<Muhurta>,
    pub festivals: Vec<Festival>,
}

impl DailyPanchang {
    /// Calendar date the record was computed for.
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Every field that holds a fallback value, in declaration order.
    pub fn fallbacks(&self) -> Vec<PanchangField> {
        let s = &self.astronomical.sources;
        [
            (PanchangField::Sunrise, s.sunrise),
            (PanchangField::Sunset, s.sunset),
            (PanchangField::Moonrise, s.moonrise),
            (PanchangField::Moonset, s.moonset),
            (PanchangField::LunarPhase, s.lunar_phase),
            (PanchangField::Tithi, self.tithi.source),
            (PanchangField::Nakshatra, self.nakshatra.source),
            (PanchangField::Yoga, self.yoga.source),
            (PanchangField::Karana, self.karana.source),
        ]
        .into_iter()
        .filter(|(_, src)| src.is_fallback())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_fully_computed(&self) -> bool {
        self.fallbacks().is_empty()
    }
}

/// Kind of a [`TimelineEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimelineEventKind {
    Sunrise,
    Sunset,
    Moonrise,
    Moonset,
    TithiStart,
    NakshatraStart,
    YogaStart,
    KaranaStart,
}

impl TimelineEventKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::Moonrise => "moonrise",
            Self::Moonset => "moonset",
            Self::TithiStart => "tithi",
            Self::NakshatraStart => "nakshatra",
            Self::YogaStart => "yoga",
            Self::KaranaStart => "karana",
        }
    }
}

/// One entry of a multi-day event timeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimelineEvent {
    pub time: DateTime<Utc>,
    pub kind: TimelineEventKind,
    pub name: String,
    pub description: Option<String>,
}
