//! Karana (half-tithi) from Moon−Sun elongation.
//!
//! Each 6° of elongation is one karana, giving 60 per synodic month. The
//! names cycle through an 8-entry table by sequence number.

use crate::util::{normalize_360, segment_index};

/// Elongation span of one karana, degrees.
pub const KARANA_SPAN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garija,
    Vanija,
    Vishti,
    Shakuni,
}

pub const ALL_KARANAS: [Karana; 8] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garija,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garija => "Garija",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Karana named by a 1-based sequence number, `(sequence - 1) % 8`.
    pub const fn from_sequence(sequence: u8) -> Self {
        let s = if sequence == 0 { 1 } else { sequence };
        ALL_KARANAS[(s as usize - 1) % 8]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// Position in the 8-name cycle, [1, 8].
    pub number: u8,
    /// Half-tithi sequence in the synodic month, [1, 60].
    pub sequence: u8,
    pub degrees_in_karana: f64,
}

impl KaranaPosition {
    pub fn start_elongation(&self) -> f64 {
        (self.sequence - 1) as f64 * KARANA_SPAN
    }

    pub fn end_elongation(&self) -> f64 {
        self.sequence as f64 * KARANA_SPAN
    }
}

/// Karana from Moon−Sun elongation in degrees (any range).
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    let idx = segment_index(elong, 60);
    let sequence = idx + 1;
    let karana = Karana::from_sequence(sequence);
    KaranaPosition {
        karana,
        number: karana.index() + 1,
        sequence,
        degrees_in_karana: (elong - idx as f64 * KARANA_SPAN).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_karana() {
        let k = karana_from_elongation(0.0);
        assert_eq!(k.sequence, 1);
        assert_eq!(k.number, 1);
        assert_eq!(k.karana, Karana::Bava);
    }

    #[test]
    fn name_cycle_wraps_after_eight() {
        let k = karana_from_elongation(48.0);
        assert_eq!(k.sequence, 9);
        assert_eq!(k.number, 1);
        assert_eq!(k.karana, Karana::Bava);
        let k = karana_from_elongation(45.0);
        assert_eq!(k.sequence, 8);
        assert_eq!(k.karana, Karana::Shakuni);
    }

    #[test]
    fn last_karana() {
        let k = karana_from_elongation(359.0);
        assert_eq!(k.sequence, 60);
        assert_eq!(k.number, 4);
        assert_eq!(k.karana, Karana::Taitila);
    }

    #[test]
    fn ranges() {
        for i in -500..500 {
            let k = karana_from_elongation(i as f64 * 0.83);
            assert!((1..=8).contains(&k.number));
            assert!((1..=60).contains(&k.sequence));
            assert_eq!(k.number, (k.sequence - 1) % 8 + 1);
        }
    }

    #[test]
    fn elongation_bounds() {
        let k = karana_from_elongation(100.0);
        assert_eq!(k.sequence, 17);
        assert_eq!(k.start_elongation(), 96.0);
        assert_eq!(k.end_elongation(), 102.0);
    }
}
