//! Top-level error type for chart requests.

use ganzhi_config::ConfigError;
use ganzhi_search::SearchError;
use thiserror::Error;

use crate::registry::AlgorithmKind;

/// Errors surfaced to callers of the chart engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed birth data: bad date, unknown zone, local time in a DST gap,
    /// coordinates out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The ephemeris could not supply a value the chart depends on.
    #[error("ephemeris unavailable: {0}")]
    EphemerisUnavailable(String),
    /// The lunar calendar could not convert the birth date.
    #[error("lunar conversion failed: {0}")]
    LunarConversionFailed(String),
    /// No algorithm registered under the requested version.
    #[error("no {kind} algorithm registered for version '{version}'")]
    AlgorithmNotFound { kind: AlgorithmKind, version: String },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The global engine was used before `init`.
    #[error("engine not initialized; call ganzhi_rs::init() first")]
    NotInitialized,
    /// `init` was called twice.
    #[error("engine already initialized")]
    AlreadyInitialized,
}

impl From<SearchError> for ChartError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidInput(msg) => Self::InvalidInput(msg),
            SearchError::Time(t) => Self::InvalidInput(t.to_string()),
            SearchError::Ephemeris(eph) => Self::EphemerisUnavailable(eph.to_string()),
            SearchError::TermNotFound(what) => {
                Self::EphemerisUnavailable(format!("no node solar term {what}"))
            }
            SearchError::LunarConversion(t) => Self::LunarConversionFailed(t.to_string()),
            SearchError::InvalidConfig(msg) => Self::Config(ConfigError::ValidationFailed {
                field: "solar_terms".to_string(),
                message: msg.to_string(),
            }),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
