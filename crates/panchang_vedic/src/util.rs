//! Shared utility functions for panchang element math.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-20 % 360 + 360 rounds to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// 0-based segment index of `deg` on a circle cut into `count` equal
/// segments, clamped to `count - 1`.
pub(crate) fn segment_index(deg: f64, count: u8) -> u8 {
    let idx = (normalize_360(deg) * count as f64 / 360.0).floor();
    if idx.is_nan() || idx < 0.0 {
        0
    } else {
        (idx as u8).min(count - 1)
    }
}
