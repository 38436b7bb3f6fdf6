//! Apparent geocentric longitude of the Sun.
//!
//! Low-accuracy solar theory (geometric mean longitude + equation of centre,
//! corrected for nutation and aberration). Error about 0.01°, which is
//! roughly a quarter of an hour of solar motion.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 25. Public domain.

/// Apparent ecliptic longitude of the Sun (of date), degrees in [0, 360).
///
/// `jde` is a Julian Ephemeris Day (TT).
pub fn apparent_longitude_deg(jde: f64) -> f64 {
    let t = (jde - 2_451_545.0) / 36_525.0;
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();
    (l0 + c - 0.00569 - 0.00478 * omega.sin()).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: apparent λ = 199.90895° (low-accuracy method)
        let lon = apparent_longitude_deg(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.002, "λ = {lon}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let a = apparent_longitude_deg(2_460_000.5);
        let b = apparent_longitude_deg(2_460_001.5);
        let step = (b - a).rem_euclid(360.0);
        assert!((0.95..1.03).contains(&step), "step = {step}");
    }
}
