//! Configuration sections, one per TOML table.

use ganzhi_search::{GeoLocation, HourBasis, SolarTermConfig};
use serde::{Deserialize, Serialize};

/// Registry version used when none is requested.
pub const DEFAULT_ALGORITHM_VERSION: &str = "v1.0";

/// `[bazi]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaziSection {
    pub default_version: String,
    /// `utc` (default) or `civil`.
    pub hour_basis: HourBasis,
}

impl Default for BaziSection {
    fn default() -> Self {
        Self {
            default_version: DEFAULT_ALGORITHM_VERSION.to_string(),
            hour_basis: HourBasis::Utc,
        }
    }
}

/// `[ziwei]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiweiSection {
    pub default_version: String,
}

impl Default for ZiweiSection {
    fn default() -> Self {
        Self {
            default_version: DEFAULT_ALGORITHM_VERSION.to_string(),
        }
    }
}

/// `[location]`: used when a request carries no location or zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSection {
    /// Degrees east. Default: 120.0.
    pub longitude: f64,
    /// Degrees north. Default: 30.0.
    pub latitude: f64,
    /// IANA zone. Default: `Asia/Shanghai`.
    pub timezone: String,
}

impl Default for LocationSection {
    fn default() -> Self {
        let geo = GeoLocation::default();
        Self {
            longitude: geo.longitude_deg,
            latitude: geo.latitude_deg,
            timezone: "Asia/Shanghai".to_string(),
        }
    }
}

impl LocationSection {
    pub fn geo(&self) -> GeoLocation {
        GeoLocation::new(self.longitude, self.latitude)
    }
}

/// `[solar_terms]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarTermsSection {
    pub refine: bool,
    pub refine_window_days: f64,
    pub max_iterations: u32,
    pub convergence_days: f64,
}

impl Default for SolarTermsSection {
    fn default() -> Self {
        let c = SolarTermConfig::default();
        Self {
            refine: c.refine,
            refine_window_days: c.refine_window_days,
            max_iterations: c.max_iterations,
            convergence_days: c.convergence_days,
        }
    }
}

impl SolarTermsSection {
    pub fn to_search_config(&self) -> SolarTermConfig {
        SolarTermConfig {
            refine: self.refine,
            refine_window_days: self.refine_window_days,
            max_iterations: self.max_iterations,
            convergence_days: self.convergence_days,
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing_subscriber::EnvFilter` directive used when `GANZHI_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}
