//! Julian Date and Julian Day Number conversions.
//!
//! All calendar inputs are proleptic Gregorian. Julian Dates are plain `f64`
//! day counts; the time scale (UT or TT) is whatever the caller supplies.
//!
//! Source: Meeus, *Astronomical Algorithms*, 2nd ed., ch. 7. Public domain.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of 1970-Jan-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// JDN minus `NaiveDate::num_days_from_ce` (0001-01-01 is JDN 1 721 426).
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Julian Day Number (integer day count, noon-based) of a civil date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}

/// Convert a Gregorian calendar date with fractional day to a Julian Date.
///
/// `day` may carry a fraction: 1.5 is the 1st at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (f64::from(y) / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * (f64::from(m) + 1.0)).floor() + day + b
        - 1524.5
}

/// Julian Date (UT) of a UTC instant.
pub fn datetime_to_jd(dt: DateTime<Utc>) -> f64 {
    let secs = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant of a Julian Date, rounded to the millisecond.
///
/// Returns `None` if the date is outside chrono's representable range.
pub fn jd_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > 9.0e18 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn jdn_spot_values() {
        let d = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        assert_eq!(julian_day_number(d), 2_448_027);
        let d = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        assert_eq!(julian_day_number(d), 2_415_021);
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(julian_day_number(d), 2_451_545);
    }

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn sputnik_launch() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6);
    }

    #[test]
    fn january_uses_previous_year_branch() {
        // Meeus example 7.b territory: 1988 Jan 27.0 = JD 2447187.5
        assert_eq!(calendar_to_jd(1988, 1, 27.0), 2_447_187.5);
    }

    #[test]
    fn datetime_matches_calendar() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 4, 8, 27, 0).unwrap();
        let expected = calendar_to_jd(2024, 2, 4.0 + (8.0 + 27.0 / 60.0) / 24.0);
        assert!((datetime_to_jd(dt) - expected).abs() < 1e-8);
    }

    #[test]
    fn jd_to_datetime_inverts() {
        let dt = Utc.with_ymd_and_hms(1990, 5, 15, 2, 30, 0).unwrap();
        let back = jd_to_datetime(datetime_to_jd(dt)).unwrap();
        assert_eq!(back.hour(), 2);
        assert_eq!(back.minute(), 30);
        assert!((back - dt).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn jd_to_datetime_rejects_nan() {
        assert!(jd_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }
}
