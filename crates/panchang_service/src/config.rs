//! Configuration for panchang calculation.

/// How element start/end times are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryMode {
    /// Fixed windows around the sampling instant: tithi ±24 h, nakshatra
    /// and yoga +24 h, karana +12 h.
    #[default]
    Approximate,
    /// Bisect the longitude function for the true segment boundaries,
    /// keeping the fixed window when the search fails.
    Exact,
}

/// Parameters for [`PanchangService`](crate::PanchangService).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanchangConfig {
    pub boundary_mode: BoundaryMode,
    /// Sun-center altitude at sunrise/sunset, degrees. Default: -0.8333
    /// (34′ refraction + 16′ semidiameter).
    pub sun_altitude_deg: f64,
    /// Moon-center altitude at moonrise/moonset, degrees. Default: +0.125
    /// (parallax less refraction and semidiameter).
    pub moon_altitude_deg: f64,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            boundary_mode: BoundaryMode::Approximate,
            sun_altitude_deg: -0.8333,
            moon_altitude_deg: 0.125,
        }
    }
}

impl PanchangConfig {
    pub fn with_boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary_mode = mode;
        self
    }
}
