//! Ecliptic/equatorial conversion, obliquity, nutation and altitude.
//!
//! Low-accuracy expressions from Meeus, Astronomical Algorithms
//! (ch. 13 and ch. 22). Angles in degrees unless the name says `_rad`.

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Longitude of the Moon's mean ascending node, degrees.
pub fn lunar_node_longitude_deg(t: f64) -> f64 {
    normalize_360(125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0)
}

/// Nutation in longitude and obliquity (Δψ, Δε), degrees.
///
/// Four-term series, accurate to about 0.5″ in Δψ.
pub fn nutation_deg(t: f64) -> (f64, f64) {
    let omega = lunar_node_longitude_deg(t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi_arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin()
        - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps_arcsec = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos()
        + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();
    (dpsi_arcsec / 3600.0, deps_arcsec / 3600.0)
}

/// Mean obliquity of the ecliptic (IAU 1980), degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_deg(t).1
}

/// Ecliptic (λ, β) to equatorial (α, δ), radians. α in [0, 2π).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lambda = lon_deg.to_radians();
    let beta = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let (sin_l, cos_l) = lambda.sin_cos();
    let (sin_e, cos_e) = eps.sin_cos();

    let ra = (sin_l * cos_e - beta.tan() * sin_e).atan2(cos_l);
    let dec = (beta.sin() * cos_e + beta.cos() * sin_e * sin_l).clamp(-1.0, 1.0).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

/// Altitude above the horizon, degrees, from equatorial coordinates,
/// observer latitude and local sidereal time (all radians).
pub fn altitude_deg(ra_rad: f64, dec_rad: f64, latitude_rad: f64, lst_rad: f64) -> f64 {
    let hour_angle = lst_rad - ra_rad;
    let sin_h = latitude_rad.sin() * dec_rad.sin()
        + latitude_rad.cos() * dec_rad.cos() * hour_angle.cos();
    sin_h.clamp(-1.0, 1.0).asin().to_degrees()
}
