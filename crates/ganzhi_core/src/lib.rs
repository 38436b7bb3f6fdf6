//! Ephemeris contract consumed by the chart engine.
//!
//! The chart engine never talks to an ephemeris implementation directly; it
//! goes through the narrow [`Ephemeris`] trait so that a high-precision
//! kernel-backed provider can be swapped in. [`AnalyticEphemeris`] is the
//! built-in provider: closed-form series for the Sun and Moon plus the
//! equinox/solstice instants, good to a few minutes of time over 1000–3000 CE.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod analytic;
pub mod delta_t;
pub mod moon;
pub mod seasons;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use delta_t::delta_t_seconds;

/// Bodies whose apparent geocentric longitude the engine asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// The four cardinal points of the tropical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

/// All seasons in calendar order.
pub const ALL_SEASONS: [Season; 4] = [
    Season::MarchEquinox,
    Season::JuneSolstice,
    Season::SeptemberEquinox,
    Season::DecemberSolstice,
];

impl Season {
    /// Apparent solar longitude at the event, degrees.
    pub const fn longitude_deg(self) -> f64 {
        match self {
            Self::MarchEquinox => 0.0,
            Self::JuneSolstice => 90.0,
            Self::SeptemberEquinox => 180.0,
            Self::DecemberSolstice => 270.0,
        }
    }

    /// 0-based index in calendar order.
    pub const fn index(self) -> u8 {
        match self {
            Self::MarchEquinox => 0,
            Self::JuneSolstice => 1,
            Self::SeptemberEquinox => 2,
            Self::DecemberSolstice => 3,
        }
    }
}

/// Errors reported by an ephemeris provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Calendar year outside the provider's validity window.
    #[error("year {year} outside ephemeris range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// Julian Date outside the provider's validity window.
    #[error("epoch out of range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
    /// Julian Date is NaN or infinite.
    #[error("invalid epoch: {0}")]
    InvalidEpoch(f64),
    /// Backend-specific failure (I/O, kernel lookup, remote service).
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}

/// Astronomical collaborator used by the solar-term provider and the
/// ZiWei palace engine. All epochs are UT Julian Dates.
pub trait Ephemeris: Send + Sync {
    /// UT Julian Date of an equinox or solstice in `year`.
    fn solstice_or_equinox(&self, year: i32, season: Season) -> Result<f64, EphemerisError>;

    /// Apparent geocentric ecliptic longitude of `body`, degrees in [0, 360).
    fn planet_longitude(&self, jd_ut: f64, body: Body) -> Result<f64, EphemerisError>;

    /// Greenwich sidereal time in hours, [0, 24).
    fn sidereal_time(&self, jd_ut: f64) -> Result<f64, EphemerisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_indices_sequential() {
        for (i, s) in ALL_SEASONS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(s.longitude_deg(), 90.0 * i as f64);
        }
    }

    #[test]
    fn error_display() {
        let e = EphemerisError::YearOutOfRange { year: 500, min: 1000, max: 3000 };
        assert_eq!(e.to_string(), "year 500 outside ephemeris range 1000..=3000");
    }
}
