//! Error types for calendar and time-zone conversions.

use thiserror::Error;

/// Errors from date arithmetic, zone resolution, or lunar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Zone name is not in the IANA database.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
    /// Wall-clock time falls in a daylight-saving gap.
    #[error("local time {0} does not exist in the requested zone")]
    NonexistentLocalTime(String),
    /// Calendar fields do not form a valid Gregorian date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Longitude is NaN or outside [-180, 180].
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// Date lies outside the lunar table.
    #[error("date {year:04}-{month:02}-{day:02} is outside the lunar table range")]
    LunarOutOfRange { year: i32, month: u32, day: u32 },
    /// Arithmetic left the representable date-time range.
    #[error("date-time arithmetic overflowed")]
    OutOfRange,
}
