//! Equation of time and true (apparent) solar time.
//!
//! True solar time here is the civil wall clock plus three terms: the
//! longitude offset (longitude / 15 hours), the distance from the zone's
//! reference meridian (4 minutes per degree) and the equation of time. The
//! first two both measure longitude, so the result runs roughly
//! `longitude / 15` hours ahead of astronomical apparent solar time. This is
//! a known approximation kept for compatibility with published charts; the
//! palace and star rules downstream are calibrated against it.
//!
//! Equation of time: USNO low-precision solar coordinates, good to about
//! a minute over 1800–2200. Public domain.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{J2000_JD, datetime_to_jd};

/// Equation of time in minutes (apparent minus mean solar time).
///
/// Positive when the sundial runs ahead of the clock (early November peaks
/// near +16 min, mid-February dips near −14 min).
pub fn equation_of_time_minutes(jd_ut: f64) -> f64 {
    // Coefficients are per day, not per century.
    let d = jd_ut - J2000_JD;
    let g = (357.5291 + 0.98560028 * d).rem_euclid(360.0).to_radians();
    let q = (280.459 + 0.98564736 * d).rem_euclid(360.0);
    let e = (23.439 - 0.00000036 * d).to_radians();

    let l = (q + 1.9146 * g.sin() + 0.0199 * (2.0 * g).sin()).to_radians();
    let ra = (e.cos() * l.sin())
        .atan2(l.cos())
        .to_degrees()
        .rem_euclid(360.0);

    let mut diff = q - ra;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff < -180.0 {
        diff += 360.0;
    }
    diff * 4.0
}

/// A civil instant with its true-solar-time correction broken down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrueSolarTime {
    /// The instant on the UTC axis.
    pub utc: DateTime<Utc>,
    /// Wall-clock time in the birth zone.
    pub civil: NaiveDateTime,
    /// Longitude / 15 hours, in minutes.
    pub longitude_offset_minutes: f64,
    /// Zone meridian implied by the UTC offset (offset hours × 15°).
    pub reference_meridian_deg: f64,
    /// (longitude − reference meridian) × 4 minutes.
    pub longitude_correction_minutes: f64,
    /// Equation of time at the instant.
    pub equation_of_time_minutes: f64,
    /// Apparent local solar time.
    pub solar: NaiveDateTime,
}

impl TrueSolarTime {
    /// Total shift from civil to true solar time, in minutes.
    pub fn total_correction_minutes(&self) -> f64 {
        self.longitude_offset_minutes
            + self.longitude_correction_minutes
            + self.equation_of_time_minutes
    }
}

/// Compute true solar time for a UTC instant observed at `longitude_deg`.
///
/// `utc_offset_seconds` is the zone offset in force at the instant (DST
/// included). Rejects non-finite or out-of-range longitudes.
pub fn true_solar_time(
    utc: DateTime<Utc>,
    utc_offset_seconds: i32,
    longitude_deg: f64,
) -> Result<TrueSolarTime, TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::InvalidLongitude(longitude_deg));
    }

    let civil = utc
        .naive_utc()
        .checked_add_signed(TimeDelta::seconds(i64::from(utc_offset_seconds)))
        .ok_or(TimeError::OutOfRange)?;

    let longitude_offset_minutes = longitude_deg / 15.0 * 60.0;
    let reference_meridian_deg = f64::from(utc_offset_seconds) / 3600.0 * 15.0;
    let longitude_correction_minutes = (longitude_deg - reference_meridian_deg) * 4.0;
    let eot = equation_of_time_minutes(datetime_to_jd(utc));

    let shift_minutes = longitude_offset_minutes + longitude_correction_minutes + eot;
    let shift_ms = (shift_minutes * 60_000.0).round() as i64;
    let solar = civil
        .checked_add_signed(TimeDelta::milliseconds(shift_ms))
        .ok_or(TimeError::OutOfRange)?;

    Ok(TrueSolarTime {
        utc,
        civil,
        longitude_offset_minutes,
        reference_meridian_deg,
        longitude_correction_minutes,
        equation_of_time_minutes: eot,
        solar,
    })
}
