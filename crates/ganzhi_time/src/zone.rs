//! Civil time ↔ UTC resolution for named time zones.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::TimeError;

/// A wall-clock time pinned to the UTC axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedInstant {
    /// The instant in UTC.
    pub utc: DateTime<Utc>,
    /// Zone offset in force at the instant, seconds east of UTC.
    pub offset_seconds: i32,
}

/// Converts a civil time in a named zone to a UTC instant.
pub trait ZoneResolver: Send + Sync {
    /// Resolve `local` in `zone`.
    ///
    /// Implementations must reject local times that do not exist (DST gaps)
    /// and should pick the earlier instant when the local time is ambiguous.
    fn resolve(&self, zone: &str, local: NaiveDateTime) -> Result<ResolvedInstant, TimeError>;
}

/// Resolver backed by the IANA tz database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaZoneResolver;

impl IanaZoneResolver {
    /// Parse a zone name, e.g. `"Asia/Shanghai"`.
    pub fn parse_zone(zone: &str) -> Result<Tz, TimeError> {
        zone.parse::<Tz>()
            .map_err(|_| TimeError::UnknownZone(zone.to_string()))
    }
}

impl ZoneResolver for IanaZoneResolver {
    fn resolve(&self, zone: &str, local: NaiveDateTime) -> Result<ResolvedInstant, TimeError> {
        let tz = Self::parse_zone(zone)?;
        let dt = match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, latest) => {
                tracing::debug!(%local, zone, %earliest, %latest, "ambiguous local time, taking earliest");
                earliest
            }
            LocalResult::None => return Err(TimeError::NonexistentLocalTime(local.to_string())),
        };
        Ok(ResolvedInstant {
            utc: dt.with_timezone(&Utc),
            offset_seconds: dt.offset().fix().local_minus_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn shanghai_is_utc_plus_eight() {
        let r = IanaZoneResolver
            .resolve("Asia/Shanghai", local(2024, 5, 15, 10, 30))
            .unwrap();
        assert_eq!(r.offset_seconds, 8 * 3600);
        assert_eq!(r.utc.hour(), 2);
        assert_eq!(r.utc.minute(), 30);
    }

    #[test]
    fn shanghai_may_1990_is_daylight_time() {
        // 1990 DST ran from 15 April to 16 September
        let r = IanaZoneResolver
            .resolve("Asia/Shanghai", local(1990, 5, 15, 10, 30))
            .unwrap();
        assert_eq!(r.offset_seconds, 9 * 3600);
        assert_eq!((r.utc.hour(), r.utc.minute()), (1, 30));
        let winter = IanaZoneResolver
            .resolve("Asia/Shanghai", local(1990, 12, 15, 10, 30))
            .unwrap();
        assert_eq!(winter.offset_seconds, 8 * 3600);
    }

    #[test]
    fn china_dst_1988_applied() {
        // China observed DST 1986–1991; July 1988 was UTC+9.
        let r = IanaZoneResolver
            .resolve("Asia/Shanghai", local(1988, 7, 1, 12, 0))
            .unwrap();
        assert_eq!(r.offset_seconds, 9 * 3600);
    }

    #[test]
    fn unknown_zone_rejected() {
        let err = IanaZoneResolver
            .resolve("Mars/Olympus_Mons", local(2000, 1, 1, 0, 0))
            .unwrap_err();
        assert_eq!(err, TimeError::UnknownZone("Mars/Olympus_Mons".into()));
    }

    #[test]
    fn dst_gap_rejected() {
        // 2024-03-10 02:30 does not exist in New York.
        let err = IanaZoneResolver
            .resolve("America/New_York", local(2024, 3, 10, 2, 30))
            .unwrap_err();
        assert!(matches!(err, TimeError::NonexistentLocalTime(_)));
    }

    #[test]
    fn dst_overlap_takes_earliest() {
        // 2024-11-03 01:30 happens twice in New York; the first is EDT (-4h).
        let r = IanaZoneResolver
            .resolve("America/New_York", local(2024, 11, 3, 1, 30))
            .unwrap();
        assert_eq!(r.offset_seconds, -4 * 3600);
        assert_eq!(r.utc.hour(), 5);
    }
}
