//! Geocentric lunar longitude and latitude.
//!
//! Main periodic terms of the Meeus ch. 47 series (ELP-2000/82 based).
//! Truncated to the terms above ~0.002° in longitude and ~0.003° in
//! latitude; the result is good to a few hundredths of a degree, which is
//! well inside the 12° tithi and 13°20′ nakshatra segments.

use crate::coords::normalize_360;

/// One periodic term: multipliers of (D, M, M′, F) and the coefficient in
/// units of 1e-6 degree.
type Term = (i8, i8, i8, i8, f64);

#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 34] = [
    (0,  0,  1,  0, 6_288_774.0),
    (2,  0, -1,  0, 1_274_027.0),
    (2,  0,  0,  0,   658_314.0),
    (0,  0,  2,  0,   213_618.0),
    (0,  1,  0,  0,  -185_116.0),
    (0,  0,  0,  2,  -114_332.0),
    (2,  0, -2,  0,    58_793.0),
    (2, -1, -1,  0,    57_066.0),
    (2,  0,  1,  0,    53_322.0),
    (2, -1,  0,  0,    45_758.0),
    (0,  1, -1,  0,   -40_923.0),
    (1,  0,  0,  0,   -34_720.0),
    (0,  1,  1,  0,   -30_383.0),
    (2,  0,  0, -2,    15_327.0),
    (0,  0,  1,  2,   -12_528.0),
    (0,  0,  1, -2,    10_980.0),
    (4,  0, -1,  0,    10_675.0),
    (0,  0,  3,  0,    10_034.0),
    (4,  0, -2,  0,     8_548.0),
    (2,  1, -1,  0,    -7_888.0),
    (2,  1,  0,  0,    -6_766.0),
    (1,  0, -1,  0,    -5_163.0),
    (1,  1,  0,  0,     4_987.0),
    (2, -1,  1,  0,     4_036.0),
    (2,  0,  2,  0,     3_994.0),
    (4,  0,  0,  0,     3_861.0),
    (2,  0, -3,  0,     3_665.0),
    (0,  1, -2,  0,    -2_689.0),
    (2,  0, -1,  2,    -2_602.0),
    (2, -1, -2,  0,     2_390.0),
    (1,  0,  1,  0,    -2_348.0),
    (2, -2,  0,  0,     2_236.0),
    (0,  1,  2,  0,    -2_120.0),
    (0,  2,  0,  0,    -2_069.0),
];

#[rustfmt::skip]
const LATITUDE_TERMS: [Term; 14] = [
    (0,  0,  0,  1, 5_128_122.0),
    (0,  0,  1,  1,   280_602.0),
    (0,  0,  1, -1,   277_693.0),
    (2,  0,  0, -1,   173_237.0),
    (2,  0, -1,  1,    55_413.0),
    (2,  0, -1, -1,    46_271.0),
    (2,  0,  0,  1,    32_573.0),
    (0,  0,  2,  1,    17_198.0),
    (2,  0,  1, -1,     9_266.0),
    (0,  0,  2, -1,     8_822.0),
    (2, -1,  0, -1,     8_216.0),
    (2,  0, -2, -1,     4_324.0),
    (2,  0,  1,  1,     4_200.0),
    (2,  1,  0, -1,    -3_359.0),
];

/// Fundamental arguments (L′, D, M, M′, F) in degrees and the
/// eccentricity factor E.
struct Arguments {
    l_prime: f64,
    d: f64,
    m: f64,
    m_prime: f64,
    f: f64,
    e: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            l_prime: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
            d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
            m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            m_prime: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
            f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    fn sum(&self, terms: &[Term]) -> f64 {
        terms
            .iter()
            .map(|&(cd, cm, cmp, cf, coef)| {
                let arg = (cd as f64 * self.d
                    + cm as f64 * self.m
                    + cmp as f64 * self.m_prime
                    + cf as f64 * self.f)
                    .to_radians();
                let ecc = match cm.unsigned_abs() {
                    1 => self.e,
                    2 => self.e * self.e,
                    _ => 1.0,
                };
                coef * ecc * arg.sin()
            })
            .sum()
    }
}

/// Geocentric ecliptic longitude and latitude of the Moon, mean equinox
/// of date, degrees. Longitude in [0, 360).
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn moon_lon_lat_deg(t: f64) -> (f64, f64) {
    let a = Arguments::at(t);
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let l_prime = a.l_prime.to_radians();
    let m_prime = a.m_prime.to_radians();
    let f = a.f.to_radians();

    let sigma_l = a.sum(&LONGITUDE_TERMS)
        + 3958.0 * a1.sin()
        + 1962.0 * (l_prime - f).sin()
        + 318.0 * a2.sin();
    let sigma_b = a.sum(&LATITUDE_TERMS) - 2235.0 * l_prime.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (l_prime - m_prime).sin()
        - 115.0 * (l_prime + m_prime).sin();

    (normalize_360(a.l_prime + sigma_l / 1e6), sigma_b / 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 47.a: 1992-Apr-12 0h TD.
    const T_47A: f64 = -0.077_221_081_451;

    #[test]
    fn longitude_example_47a() {
        let (lon, _) = moon_lon_lat_deg(T_47A);
        assert!((lon - 133.162_655).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn latitude_example_47a() {
        let (_, lat) = moon_lon_lat_deg(T_47A);
        assert!((lat + 3.229_126).abs() < 0.05, "lat = {lat}");
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        for i in 0..200 {
            let t = 0.2 + i as f64 * 0.0005;
            let (_, lat) = moon_lon_lat_deg(t);
            assert!(lat.abs() < 5.4, "lat = {lat} at t = {t}");
        }
    }

    #[test]
    fn advances_about_13_degrees_per_day() {
        let day = 1.0 / 36_525.0;
        let (a, _) = moon_lon_lat_deg(0.24);
        let (b, _) = moon_lon_lat_deg(0.24 + day);
        let rate = (b - a).rem_euclid(360.0);
        assert!((11.5..15.5).contains(&rate), "rate = {rate}");
    }
}
