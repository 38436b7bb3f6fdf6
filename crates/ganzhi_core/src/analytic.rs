//! Built-in analytic ephemeris.
//!
//! Converts between UT (what callers hold) and TT (what the series expect)
//! with [`crate::delta_t_seconds`], and refuses epochs outside the window
//! where the series are trustworthy.

use ganzhi_time::{J2000_JD, SECONDS_PER_DAY, gmst_hours};

use crate::delta_t::delta_t_seconds;
use crate::{Body, Ephemeris, EphemerisError, Season, moon, seasons, sun};

/// Closed-form Sun/Moon/season ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticEphemeris {
    min_year: i32,
    max_year: i32,
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self {
            min_year: 1000,
            max_year: 3000,
        }
    }
}

impl AnalyticEphemeris {
    /// Ephemeris valid for 1000–3000 CE.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ephemeris restricted to `min_year..=max_year`.
    ///
    /// Mostly useful to exercise the out-of-range paths of callers.
    pub fn with_year_range(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    fn check_year(&self, year: i32) -> Result<(), EphemerisError> {
        if (self.min_year..=self.max_year).contains(&year) {
            Ok(())
        } else {
            Err(EphemerisError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            })
        }
    }

    fn check_jd(&self, jd_ut: f64) -> Result<(), EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::InvalidEpoch(jd_ut));
        }
        let year = 2000.0 + (jd_ut - J2000_JD) / 365.25;
        if year < f64::from(self.min_year) || year >= f64::from(self.max_year) + 1.0 {
            return Err(EphemerisError::EpochOutOfRange { jd: jd_ut });
        }
        Ok(())
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn solstice_or_equinox(&self, year: i32, season: Season) -> Result<f64, EphemerisError> {
        self.check_year(year)?;
        let jde = seasons::season_jde(year, season);
        // ΔT changes by well under a second across this step
        Ok(jde - delta_t_seconds(jde) / SECONDS_PER_DAY)
    }

    fn planet_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError> {
        self.check_jd(jd_ut)?;
        let jde = jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY;
        Ok(match body {
            Body::Sun => sun::apparent_longitude_deg(jde),
            Body::Moon => moon::apparent_longitude_deg(jde),
        })
    }

    fn sidereal_time(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.check_jd(jd_ut)?;
        Ok(gmst_hours(jd_ut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_time::calendar_to_jd;

    #[test]
    fn equinox_2024_utc() {
        // 2024-03-20 03:06 UTC
        let jd = AnalyticEphemeris::new()
            .solstice_or_equinox(2024, Season::MarchEquinox)
            .unwrap();
        let expected = calendar_to_jd(2024, 3, 20.0 + (3.0 + 6.0 / 60.0) / 24.0);
        assert!((jd - expected).abs() * 1440.0 < 3.0, "off by {} min", (jd - expected) * 1440.0);
    }

    #[test]
    fn sun_at_equinox_near_zero() {
        let eph = AnalyticEphemeris::new();
        let jd = eph.solstice_or_equinox(2024, Season::MarchEquinox).unwrap();
        let lon = eph.planet_longitude(jd, Body::Sun).unwrap();
        let err = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(err.abs() < 0.02, "λ = {lon}");
    }

    #[test]
    fn year_out_of_range() {
        let err = AnalyticEphemeris::new()
            .solstice_or_equinox(3500, Season::JuneSolstice)
            .unwrap_err();
        assert_eq!(err, EphemerisError::YearOutOfRange { year: 3500, min: 1000, max: 3000 });
    }

    #[test]
    fn epoch_out_of_range() {
        let eph = AnalyticEphemeris::with_year_range(1950, 2050);
        let jd = calendar_to_jd(1900, 1, 1.0);
        assert!(matches!(
            eph.planet_longitude(jd, Body::Moon),
            Err(EphemerisError::EpochOutOfRange { .. })
        ));
        assert!(eph.sidereal_time(jd).is_err());
    }

    #[test]
    fn nan_epoch_rejected() {
        assert!(matches!(
            AnalyticEphemeris::new().sidereal_time(f64::NAN),
            Err(EphemerisError::InvalidEpoch(_))
        ));
    }

    #[test]
    fn new_moon_sun_moon_conjunct() {
        // New moon 2024-01-11 11:57 UTC
        let eph = AnalyticEphemeris::new();
        let jd = calendar_to_jd(2024, 1, 11.0 + (11.0 + 57.0 / 60.0) / 24.0);
        let sun = eph.planet_longitude(jd, Body::Sun).unwrap();
        let moon = eph.planet_longitude(jd, Body::Moon).unwrap();
        assert!((sun - moon).abs() < 0.1, "sun {sun}, moon {moon}");
    }
}
