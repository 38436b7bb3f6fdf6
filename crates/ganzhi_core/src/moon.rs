//! Apparent geocentric longitude of the Moon.
//!
//! Fundamental arguments from the ELP-2000/82 fit with the 25 largest
//! longitude terms plus the Venus, Jupiter and flattening additive terms.
//! Error stays within a few hundredths of a degree, far finer than the 30°
//! buckets the chart places the Moon into.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 47 (Table 47.A).
//! Public domain.

/// Longitude terms: multiples of (D, M, M′, F) and coefficient in 1e-6 degrees.
#[rustfmt::skip]
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 25] = [
    (0, 0, 1, 0, 6_288_774.0), (2, 0, -1, 0, 1_274_027.0), (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0), (0, 1, 0, 0, -185_116.0), (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0), (2, -1, -1, 0, 57_066.0), (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0), (0, 1, -1, 0, -40_923.0), (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0), (2, 0, 0, -2, 15_327.0), (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0), (4, 0, -1, 0, 10_675.0), (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0), (2, 1, -1, 0, -7_888.0), (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0), (1, 1, 0, 0, 4_987.0), (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
];

/// Apparent ecliptic longitude of the Moon (of date), degrees in [0, 360).
///
/// `jde` is a Julian Ephemeris Day (TT).
pub fn apparent_longitude_deg(jde: f64) -> f64 {
    let t = (jde - 2_451_545.0) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let mut sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, coeff)| {
            let arg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
            let ecc = match cm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            coeff * ecc * arg.to_radians().sin()
        })
        .sum();

    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    sum += 3_958.0 * a1.to_radians().sin()
        + 1_962.0 * (lp - f).to_radians().sin()
        + 318.0 * a2.to_radians().sin();

    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let nutation = -0.004_778 * omega.sin();

    (lp + sum / 1e6 + nutation).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12.0 TD: apparent λ = 133.162655°
        let lon = apparent_longitude_deg(2_448_724.5);
        assert!((lon - 133.1627).abs() < 0.01, "λ = {lon}");
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let a = apparent_longitude_deg(2_460_000.5);
        let b = apparent_longitude_deg(2_460_001.5);
        let step = (b - a).rem_euclid(360.0);
        assert!((11.5..15.5).contains(&step), "step = {step}");
    }
}
