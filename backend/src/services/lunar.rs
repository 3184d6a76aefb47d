//! Geocentric ecliptic longitude of the Moon.
//!
//! Low-precision lunar theory from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 47: mean elements as polynomials in T, the 60 periodic terms of
//! Table 47.A for longitude, and the three additive terms for Venus, Jupiter
//! and the Earth's flattening. Accuracy is around 10″ in longitude, which is
//! far finer than the 13°20′ sectors this service buckets into.
//!
//! The time argument is used as given; no ΔT is applied to UTC input.

use qtty::Degrees;

use crate::models::sector::normalize_degrees;
use crate::models::JulianDay;

/// Mean elements of the lunar orbit at a given instant, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude of the Moon (L′).
    pub mean_longitude: f64,
    /// Mean elongation of the Moon (D).
    pub elongation: f64,
    /// Mean anomaly of the Sun (M).
    pub sun_anomaly: f64,
    /// Mean anomaly of the Moon (M′).
    pub moon_anomaly: f64,
    /// Argument of latitude of the Moon (F).
    pub latitude_argument: f64,
    /// Eccentricity factor of the Earth's orbit (E), dimensionless.
    pub eccentricity: f64,
    /// Venus perturbation argument (A1).
    pub a1: f64,
    /// Jupiter perturbation argument (A2).
    pub a2: f64,
}

impl LunarArguments {
    /// Evaluate the mean elements at Julian centuries `t` since J2000.0.
    ///
    /// Angles are left unreduced; they only ever feed `sin`.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
            a1: 119.75 + 131.849 * t,
            a2: 53.09 + 479_264.290 * t,
        }
    }
}

// Table 47.A, longitude column. [D, M, M', F, coefficient in 1e-6 degrees]
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 60] = [
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
    (2, -2, -1,  0,     2_048.0),
    (2,  0,  1, -2,    -1_773.0),
    (2,  0,  0,  2,    -1_595.0),
    (4, -1, -1,  0,     1_215.0),
    (0,  0,  2,  2,    -1_110.0),
    (3,  0, -1,  0,      -892.0),
    (2,  1,  1,  0,      -810.0),
    (4, -1, -2,  0,       759.0),
    (0,  2, -1,  0,      -713.0),
    (2,  2, -1,  0,      -700.0),
    (2,  1, -2,  0,       691.0),
    (2, -1,  0, -2,       596.0),
    (4,  0,  1,  0,       549.0),
    (0,  0,  4,  0,       537.0),
    (4, -1,  0,  0,       520.0),
    (1,  0, -2,  0,      -487.0),
    (2,  1,  0, -2,      -399.0),
    (0,  0,  2, -2,      -381.0),
    (1,  1,  1,  0,       351.0),
    (3,  0, -2,  0,      -340.0),
    (4,  0, -3,  0,       330.0),
    (2, -1,  2,  0,       327.0),
    (0,  2,  1,  0,      -323.0),
    (1,  1, -1,  0,       299.0),
    (2,  0,  3,  0,       294.0),
    (2,  0, -1, -2,         0.0),
];

/// Sum of the periodic longitude terms (Σl), in units of 1e-6 degrees.
pub fn longitude_perturbation(args: &LunarArguments) -> f64 {
    let e = args.eccentricity;

    let periodic: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(d, m, mp, f, coeff)| {
            let angle = d as f64 * args.elongation
                + m as f64 * args.sun_anomaly
                + mp as f64 * args.moon_anomaly
                + f as f64 * args.latitude_argument;
            let scale = match m.abs() {
                0 => 1.0,
                1 => e,
                _ => e * e,
            };
            coeff * scale * angle.to_radians().sin()
        })
        .sum();

    let additive = 3_958.0 * args.a1.to_radians().sin()
        + 1_962.0 * (args.mean_longitude - args.latitude_argument).to_radians().sin()
        + 318.0 * args.a2.to_radians().sin();

    periodic + additive
}

/// Geocentric ecliptic longitude of the Moon, unnormalized.
///
/// The result tracks the mean longitude polynomial and can lie far outside
/// `[0, 360)`; wrap it with [`normalize_degrees`] before use.
pub fn moon_longitude(jd: JulianDay) -> Degrees {
    let args = LunarArguments::at(jd.centuries_since_j2000());
    Degrees::new(args.mean_longitude + longitude_perturbation(&args) / 1e6)
}

/// Geocentric ecliptic longitude of the Moon in `[0, 360)`.
pub fn moon_longitude_normalized(jd: JulianDay) -> Degrees {
    Degrees::new(normalize_degrees(moon_longitude(jd).value()))
}
