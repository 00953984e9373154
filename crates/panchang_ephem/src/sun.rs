//! Low-precision solar longitude (Meeus ch. 25), good to ~0.01°.

use crate::coords::normalize_360;

/// Geometric mean longitude and mean anomaly of the Sun, degrees.
fn mean_elements(t: f64) -> (f64, f64) {
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35_999.05029 * t - 0.0001537 * t * t;
    (l0, m)
}

/// Equation of center, degrees.
fn equation_of_center(t: f64, m_deg: f64) -> f64 {
    let m = m_deg.to_radians();
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// True geometric longitude of the Sun, mean equinox of date, degrees [0, 360).
pub fn sun_true_longitude_deg(t: f64) -> f64 {
    let (l0, m) = mean_elements(t);
    normalize_360(l0 + equation_of_center(t, m))
}

/// Apparent longitude of the Sun (aberration and nutation applied),
/// degrees [0, 360).
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(sun_true_longitude_deg(t) - 0.00569 - 0.00478 * omega.sin())
}
