//! Named phases of the Moon from the 0–1 lunar phase fraction.

/// Eight principal and intermediate phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const ALL_PHASES: [MoonPhaseName; 8] = [
    MoonPhaseName::NewMoon,
    MoonPhaseName::WaxingCrescent,
    MoonPhaseName::FirstQuarter,
    MoonPhaseName::WaxingGibbous,
    MoonPhaseName::FullMoon,
    MoonPhaseName::WaningGibbous,
    MoonPhaseName::LastQuarter,
    MoonPhaseName::WaningCrescent,
];

impl MoonPhaseName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase for a fraction of the synodic cycle (0 = new, 0.5 = full).
    ///
    /// The four principal phases are exact points: only 0, 0.25, 0.5 and
    /// 0.75 read as new, first quarter, full and last quarter. Everything
    /// strictly between two of them is the intermediate phase, so 0.1 and
    /// 0.2499 are both a waxing crescent. Values outside [0, 1) wrap; NaN
    /// reads as new moon.
    pub fn from_fraction(fraction: f64) -> Self {
        if !fraction.is_finite() {
            return Self::NewMoon;
        }
        let f = fraction.rem_euclid(1.0);
        let quarter = (f * 4.0).floor();
        let idx = if f * 4.0 == quarter {
            2 * quarter as usize
        } else {
            2 * quarter as usize + 1
        };
        ALL_PHASES[idx % 8]
    }
}
