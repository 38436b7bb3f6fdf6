//! Error type for chart assembly.

use ganzhi_core::EphemerisError;
use ganzhi_time::TimeError;
use thiserror::Error;

/// Errors from birth resolution and chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Birth input failed validation.
    #[error("invalid birth input: {0}")]
    InvalidInput(String),
    /// Time-zone resolution or time arithmetic failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// The ephemeris could not supply a value the chart cannot do without.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// The lunar calendar could not convert the birth date.
    #[error("lunar conversion failed: {0}")]
    LunarConversion(TimeError),
    /// Search configuration is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// No node solar term brackets the birth instant.
    #[error("no node solar term found {0}")]
    TermNotFound(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_time_error() {
        let e: SearchError = TimeError::UnknownZone("Mars/Base".into()).into();
        assert_eq!(e.to_string(), "time error: unknown time zone: Mars/Base");
    }

    #[test]
    fn lunar_is_distinct_from_time() {
        let e = SearchError::LunarConversion(TimeError::OutOfRange);
        assert!(matches!(e, SearchError::LunarConversion(_)));
        assert!(e.to_string().starts_with("lunar conversion failed"));
    }
}
