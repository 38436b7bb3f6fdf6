//! Calendar and time-scale primitives for sexagenary chart computation.
//!
//! This crate provides:
//! - Julian Day / Julian Day Number arithmetic on proleptic Gregorian dates
//! - Greenwich mean and local sidereal time
//! - Equation of time and true (apparent) solar time
//! - The [`ZoneResolver`] collaborator with an IANA database implementation
//! - The [`LunarCalendar`] collaborator with a table-driven implementation
//!   covering lunar years 1900–2100

pub mod error;
pub mod julian;
pub mod lunar;
pub mod sidereal;
pub mod solar_time;
pub mod zone;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, datetime_to_jd, jd_to_centuries,
    jd_to_datetime, julian_day_number,
};
pub use lunar::{LunarCalendar, LunarDate, TableLunarCalendar};
pub use sidereal::{earth_rotation_angle_rad, gmst_hours, gmst_rad, local_sidereal_hours};
pub use solar_time::{TrueSolarTime, equation_of_time_minutes, true_solar_time};
pub use zone::{IanaZoneResolver, ResolvedInstant, ZoneResolver};
