//! ΔT = TT − UT, in seconds.
//!
//! Piecewise model:
//! - before 948 CE and 948–1600: Stephenson & Houlden (1986) parabolas
//! - 1620–1992: Meeus's biennial table with three-point interpolation
//! - 1992–2010: interpolation through 56.86 / 63.83 / 70.0 s
//! - 2010–2050: Espenak & Meeus polynomial
//! - after 2050: Morrison & Stephenson long-term parabola, blended until 2150
//!
//! Typical error is well under a minute over 1900–2100, small against the
//! few-minute accuracy of the analytic series that consume it.

use ganzhi_time::J2000_JD;

const TERMS: usize = 187;

/// Biennial ΔT from 1620 to 1992, seconds (Meeus, Astronomical Algorithms).
#[rustfmt::skip]
const DELTA_T_TABLE: [f64; TERMS] = [
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
];

const JD_948: f64 = 2_067_314.5;
const JD_1600: f64 = 2_305_447.5;
const JD_1620: f64 = 2_312_752.5;
const JD_1992: f64 = 2_448_622.5;
const JD_2010: f64 = 2_455_197.5;

fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - J2000_JD) / 365.25
}

fn ancient(jd: f64) -> f64 {
    let c = (jd - JD_948) / 36_525.0;
    1_830.0 - 405.0 * c + 46.5 * c * c
}

fn medieval(jd: f64) -> f64 {
    let c = (jd - 2_396_758.5) / 36_525.0;
    22.5 * c * c
}

fn tabulated(jd: f64) -> f64 {
    let step = 730.5;
    let i = (((jd - JD_1620) / step).max(0.0) as usize).min(TERMS - 3);
    let a = DELTA_T_TABLE[i + 1] - DELTA_T_TABLE[i];
    let b = DELTA_T_TABLE[i + 2] - DELTA_T_TABLE[i + 1];
    let c = b - a;
    // n in [-1, 0): interpolate around the middle tabulated point
    let n = (jd - (JD_1620 + step * (i + 1) as f64)) / step;
    DELTA_T_TABLE[i + 1] + n / 2.0 * (a + b + n * c)
}

fn recent(jd: f64) -> f64 {
    const DT: [f64; 3] = [56.86, 63.83, 70.0];
    let a = DT[1] - DT[0];
    let b = DT[2] - DT[1];
    let c = b - a;
    let n = (jd - 2_451_544.5) / 3_652.5;
    DT[1] + n / 2.0 * (a + b + n * c)
}

fn modern(year: f64) -> f64 {
    if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (year - 1820.0) / 100.0;
        let long_term = -20.0 + 32.0 * u * u;
        if year < 2150.0 {
            long_term - 0.5628 * (2150.0 - year)
        } else {
            long_term
        }
    }
}

/// ΔT in seconds for a UT Julian Date.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    match jd_ut {
        jd if jd < JD_948 => ancient(jd),
        jd if jd < JD_1600 => medieval(jd),
        jd if jd < JD_1992 => tabulated(jd),
        jd if jd <= JD_2010 => recent(jd),
        jd => modern(decimal_year(jd)),
    }
}
