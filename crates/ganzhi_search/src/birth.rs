//! Birth input and its resolution to a UTC instant.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use ganzhi_base::Gender;
use ganzhi_time::{ZoneResolver, datetime_to_jd};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;

/// Geographic location of the birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
}

impl Default for GeoLocation {
    /// 120°E, 30°N.
    fn default() -> Self {
        Self {
            longitude_deg: 120.0,
            latitude_deg: 30.0,
        }
    }
}

impl GeoLocation {
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
        }
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(SearchError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(SearchError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        Ok(())
    }
}

/// Civil birth moment, zone, gender and optional location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Wall-clock date-time in `timezone`.
    pub local: NaiveDateTime,
    /// IANA zone name, e.g. `Asia/Shanghai`.
    pub timezone: String,
    pub gender: Gender,
    pub location: Option<GeoLocation>,
}

impl BirthInput {
    pub fn new(local: NaiveDateTime, timezone: impl Into<String>, gender: Gender) -> Self {
        Self {
            local,
            timezone: timezone.into(),
            gender,
            location: None,
        }
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Supplied location, or 120°E / 30°N.
    pub fn location(&self) -> GeoLocation {
        self.location.unwrap_or_default()
    }

    /// Check the fields that do not need a zone database.
    pub fn validate(&self) -> Result<(), SearchError> {
        let year = self.local.year();
        if !(1..=9998).contains(&year) {
            return Err(SearchError::InvalidInput(format!(
                "year {year} outside 1..=9998"
            )));
        }
        if self.timezone.trim().is_empty() {
            return Err(SearchError::InvalidInput("empty time zone".into()));
        }
        self.location().validate()
    }
}

/// A birth pinned to an absolute instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBirth {
    pub input: BirthInput,
    pub utc: DateTime<Utc>,
    /// Zone offset from UTC at the birth instant, seconds.
    pub offset_seconds: i32,
    /// Julian Date (UT) of the birth instant.
    pub jd_ut: f64,
}

impl ResolvedBirth {
    pub fn location(&self) -> GeoLocation {
        self.input.location()
    }

    pub fn local(&self) -> NaiveDateTime {
        self.input.local
    }
}

/// Validate `input` and resolve its wall-clock time through `zones`.
///
/// Unknown zones and local times inside a daylight-saving gap are reported as
/// [`SearchError::InvalidInput`].
pub fn resolve_birth(
    input: &BirthInput,
    zones: &dyn ZoneResolver,
) -> Result<ResolvedBirth, SearchError> {
    input.validate()?;
    let resolved = zones
        .resolve(&input.timezone, input.local)
        .map_err(|e| SearchError::InvalidInput(e.to_string()))?;
    debug!(
        local = %input.local,
        zone = %input.timezone,
        utc = %resolved.utc,
        offset_s = resolved.offset_seconds,
        "resolved birth instant"
    );
    Ok(ResolvedBirth {
        input: input.clone(),
        utc: resolved.utc,
        offset_seconds: resolved.offset_seconds,
        jd_ut: datetime_to_jd(resolved.utc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ganzhi_time::IanaZoneResolver;

    fn local(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn default_location() {
        let b = BirthInput::new(local(1990, 5, 15, 10, 30), "Asia/Shanghai", Gender::Male);
        assert_eq!(b.location(), GeoLocation::new(120.0, 30.0));
    }

    #[test]
    fn resolves_shanghai() {
        let b = BirthInput::new(local(1990, 5, 15, 10, 30), "Asia/Shanghai", Gender::Male);
        let r = resolve_birth(&b, &IanaZoneResolver).unwrap();
        // China daylight time (UTC+9) was in force
        assert_eq!(r.utc.to_rfc3339(), "1990-05-15T01:30:00+00:00");
        assert_eq!(r.offset_seconds, 9 * 3600);
        assert!((r.jd_ut - 2_448_026.562_5).abs() < 1e-6);
        assert_eq!(r.local(), b.local);
    }

    #[test]
    fn rejects_bad_coordinates() {
        let b = BirthInput::new(local(1990, 5, 15, 10, 30), "Asia/Shanghai", Gender::Male)
            .with_location(GeoLocation::new(f64::NAN, 0.0));
        assert!(matches!(b.validate(), Err(SearchError::InvalidInput(_))));
        let b = b.with_location(GeoLocation::new(100.0, 91.0));
        assert!(matches!(b.validate(), Err(SearchError::InvalidInput(_))));
    }

    #[test]
    fn rejects_unknown_zone_and_gap() {
        let b = BirthInput::new(local(1990, 5, 15, 10, 30), "Nowhere/City", Gender::Female);
        assert!(matches!(
            resolve_birth(&b, &IanaZoneResolver),
            Err(SearchError::InvalidInput(_))
        ));
        let gap = BirthInput::new(local(2024, 3, 10, 2, 30), "America/New_York", Gender::Female);
        assert!(matches!(
            resolve_birth(&gap, &IanaZoneResolver),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_year_zero() {
        let b = BirthInput::new(local(0, 6, 1, 12, 0), "UTC", Gender::Male);
        assert!(matches!(b.validate(), Err(SearchError::InvalidInput(_))));
    }
}
