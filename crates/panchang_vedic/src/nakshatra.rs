//! Nakshatra (lunar mansion) of the Moon.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13°20′
//! (13.3333...°) each, and each nakshatra into 4 padas of 3°20′.
//! Every nakshatra has a presiding deity and a ruling graha; the rulers
//! cycle through the nine-graha Vimshottari order.

use crate::util::{normalize_360, segment_index};

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 360/108 degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Graha lords in nakshatra order; repeats every nine nakshatras.
const RULERS: [&str; 9] = [
    "Ketu", "Venus", "Sun", "Moon", "Mars", "Rahu", "Jupiter", "Saturn", "Mercury",
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Sarpa",
            Self::Magha => "Pitru",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitri",
            Self::Chitra => "Vishwakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirrti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishwadevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishta => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Ajaikapada",
            Self::UttaraBhadrapada => "Ahirbudhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Ruling graha.
    pub const fn ruler(self) -> &'static str {
        RULERS[self.index() as usize % 9]
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Nakshatra for a 1-based number, wrapped onto [1, 27].
    pub const fn from_number(number: u8) -> Self {
        let n = if number == 0 { 27 } else { number };
        ALL_NAKSHATRAS[(n as usize - 1) % 27]
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 1-based number, [1, 27].
    pub number: u8,
    /// Pada (quarter) within the nakshatra, 1–4.
    pub pada: u8,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

impl NakshatraPosition {
    /// Moon longitude at which this nakshatra starts.
    pub fn start_longitude(&self) -> f64 {
        self.nakshatra.index() as f64 * NAKSHATRA_SPAN
    }

    /// Moon longitude at which this nakshatra ends, in (0, 360].
    pub fn end_longitude(&self) -> f64 {
        self.number as f64 * NAKSHATRA_SPAN
    }
}

/// Nakshatra and pada from the Moon's ecliptic longitude.
pub fn nakshatra_from_longitude(moon_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(moon_lon_deg);
    let idx = segment_index(lon, 27);
    let degrees_in_nakshatra = (lon - idx as f64 * NAKSHATRA_SPAN).max(0.0);
    let pada_idx = (degrees_in_nakshatra / PADA_SPAN).floor() as u8;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        number: idx + 1,
        pada: pada_idx.min(3) + 1,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ordered() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(Nakshatra::from_number(i as u8 + 1), *n);
        }
    }

    #[test]
    fn ashwini_at_zero() {
        let p = nakshatra_from_longitude(0.0);
        assert_eq!(p.nakshatra, Nakshatra::Ashwini);
        assert_eq!(p.number, 1);
        assert_eq!(p.pada, 1);
        assert_eq!(p.nakshatra.ruler(), "Ketu");
        assert_eq!(p.nakshatra.deity(), "Ashwini Kumaras");
    }

    #[test]
    fn revati_at_end() {
        let p = nakshatra_from_longitude(359.99);
        assert_eq!(p.nakshatra, Nakshatra::Revati);
        assert_eq!(p.number, 27);
        assert_eq!(p.pada, 4);
        assert_eq!(p.nakshatra.ruler(), "Mercury");
        assert_eq!(p.nakshatra.deity(), "Pushan");
    }

    #[test]
    fn rulers_cycle_every_nine() {
        assert_eq!(Nakshatra::Magha.ruler(), "Ketu");
        assert_eq!(Nakshatra::Mula.ruler(), "Ketu");
        assert_eq!(Nakshatra::Rohini.ruler(), "Moon");
        assert_eq!(Nakshatra::Shravana.ruler(), "Moon");
        assert_eq!(Nakshatra::Swati.ruler(), "Rahu");
        assert_eq!(Nakshatra::UttaraBhadrapada.ruler(), "Saturn");
    }

    #[test]
    fn number_formula() {
        // floor(lon * 27 / 360) + 1
        for i in 0..3600 {
            let lon = i as f64 * 0.1;
            let expected = (lon * 27.0 / 360.0).floor() as u8 + 1;
            let p = nakshatra_from_longitude(lon);
            assert_eq!(p.number, expected.min(27), "lon = {lon}");
            assert!((1..=4).contains(&p.pada));
        }
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(3.4).pada, 2);
        assert_eq!(nakshatra_from_longitude(6.7).pada, 3);
        assert_eq!(nakshatra_from_longitude(10.1).pada, 4);
    }

    #[test]
    fn names_with_spaces() {
        assert_eq!(Nakshatra::PurvaPhalguni.name(), "Purva Phalguni");
        assert_eq!(Nakshatra::Dhanishta.name(), "Dhanishta");
    }

    #[test]
    fn longitude_bounds() {
        let p = nakshatra_from_longitude(20.0);
        assert_eq!(p.nakshatra, Nakshatra::Bharani);
        assert!((p.start_longitude() - NAKSHATRA_SPAN).abs() < 1e-12);
        assert!((p.end_longitude() - 2.0 * NAKSHATRA_SPAN).abs() < 1e-12);
    }
}
