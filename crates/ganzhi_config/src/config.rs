//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use ganzhi_search::{BaziConfig, HourBasis};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::sections::{BaziSection, LocationSection, LoggingSection, SolarTermsSection, ZiweiSection};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ganzhi.toml";

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GANZHI_*`)
/// 3. Config file (explicit path, or `ganzhi.toml` if present)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GanzhiConfig {
    pub bazi: BaziSection,
    pub ziwei: ZiweiSection,
    pub location: LocationSection,
    pub solar_terms: SolarTermsSection,
    pub logging: LoggingSection,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bazi_version: Option<String>,
    pub ziwei_version: Option<String>,
    pub hour_basis: Option<HourBasis>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub timezone: Option<String>,
    pub refine: Option<bool>,
    pub log_filter: Option<String>,
}

impl GanzhiConfig {
    /// Load configuration reading `GANZHI_*` from the process environment.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, cli, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    ///
    /// An explicit `path` must exist; without one, `ganzhi.toml` in the
    /// working directory is used when present.
    pub fn load_with_env(
        path: Option<&Path>,
        cli: Option<&CliOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if !p.exists() => {
                return Err(ConfigError::FileNotFound {
                    path: p.display().to_string(),
                });
            }
            Some(p) => Self::from_file(p)?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(&default)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env);
        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }
        config.validate()?;
        debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Parse a config file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bazi.default_version.trim().is_empty() {
            return Err(ConfigError::invalid("bazi.default_version", "must not be empty"));
        }
        if self.ziwei.default_version.trim().is_empty() {
            return Err(ConfigError::invalid("ziwei.default_version", "must not be empty"));
        }
        let loc = &self.location;
        if !loc.longitude.is_finite() || !(-180.0..=180.0).contains(&loc.longitude) {
            return Err(ConfigError::invalid(
                "location.longitude",
                "must be between -180 and 180",
            ));
        }
        if !loc.latitude.is_finite() || !(-90.0..=90.0).contains(&loc.latitude) {
            return Err(ConfigError::invalid(
                "location.latitude",
                "must be between -90 and 90",
            ));
        }
        if loc.timezone.trim().is_empty() {
            return Err(ConfigError::invalid("location.timezone", "must not be empty"));
        }
        self.solar_terms
            .to_search_config()
            .validate()
            .map_err(|msg| ConfigError::invalid("solar_terms", msg))?;
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::invalid("logging.filter", "must not be empty"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `GANZHI_BAZI_HOUR_BASIS`, `GANZHI_LOCATION_LONGITUDE`, etc.
    /// Unparseable values are logged and skipped.
    pub fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("GANZHI_BAZI_VERSION") {
            self.bazi.default_version = v;
        }
        if let Some(v) = env("GANZHI_BAZI_HOUR_BASIS") {
            match v.parse::<HourBasis>() {
                Ok(b) => self.bazi.hour_basis = b,
                Err(e) => warn!(key = "GANZHI_BAZI_HOUR_BASIS", error = %e, "ignoring env override"),
            }
        }
        if let Some(v) = env("GANZHI_ZIWEI_VERSION") {
            self.ziwei.default_version = v;
        }
        if let Some(v) = parsed::<f64>(&env, "GANZHI_LOCATION_LONGITUDE") {
            self.location.longitude = v;
        }
        if let Some(v) = parsed::<f64>(&env, "GANZHI_LOCATION_LATITUDE") {
            self.location.latitude = v;
        }
        if let Some(v) = env("GANZHI_LOCATION_TIMEZONE") {
            self.location.timezone = v;
        }
        if let Some(v) = parsed::<bool>(&env, "GANZHI_SOLAR_TERMS_REFINE") {
            self.solar_terms.refine = v;
        }
        if let Some(v) = parsed::<f64>(&env, "GANZHI_SOLAR_TERMS_REFINE_WINDOW_DAYS") {
            self.solar_terms.refine_window_days = v;
        }
        if let Some(v) = env("GANZHI_LOGGING_FILTER") {
            self.logging.filter = v;
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.bazi_version {
            self.bazi.default_version = v.clone();
        }
        if let Some(ref v) = cli.ziwei_version {
            self.ziwei.default_version = v.clone();
        }
        if let Some(v) = cli.hour_basis {
            self.bazi.hour_basis = v;
        }
        if let Some(v) = cli.longitude {
            self.location.longitude = v;
        }
        if let Some(v) = cli.latitude {
            self.location.latitude = v;
        }
        if let Some(ref v) = cli.timezone {
            self.location.timezone = v.clone();
        }
        if let Some(v) = cli.refine {
            self.solar_terms.refine = v;
        }
        if let Some(ref v) = cli.log_filter {
            self.logging.filter = v.clone();
        }
    }

    /// Settings for BaZi chart computation.
    pub fn bazi_config(&self) -> BaziConfig {
        BaziConfig {
            hour_basis: self.bazi.hour_basis,
            solar_terms: self.solar_terms.to_search_config(),
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parsed<T: std::str::FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable env override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_are_valid() {
        let c = GanzhiConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.bazi.default_version, "v1.0");
        assert_eq!(c.location.timezone, "Asia/Shanghai");
        assert_eq!(c.bazi_config(), BaziConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = GanzhiConfig::from_toml(
            r#"
[bazi]
hour_basis = "civil"

[location]
longitude = 116.4
"#,
        )
        .unwrap();
        assert_eq!(c.bazi.hour_basis, HourBasis::Civil);
        assert_eq!(c.bazi.default_version, "v1.0");
        assert_eq!(c.location.longitude, 116.4);
        assert_eq!(c.location.latitude, 30.0);
        assert!(c.solar_terms.refine);
    }

    #[test]
    fn env_overrides_skip_garbage() {
        let mut c = GanzhiConfig::default();
        c.apply_env_overrides(|key| match key {
            "GANZHI_LOCATION_LONGITUDE" => Some("not-a-number".into()),
            "GANZHI_LOCATION_LATITUDE" => Some(" 39.9 ".into()),
            "GANZHI_BAZI_HOUR_BASIS" => Some("sideways".into()),
            "GANZHI_SOLAR_TERMS_REFINE" => Some("false".into()),
            _ => None,
        });
        assert_eq!(c.location.longitude, 120.0);
        assert_eq!(c.location.latitude, 39.9);
        assert_eq!(c.bazi.hour_basis, HourBasis::Utc);
        assert!(!c.solar_terms.refine);
    }

    #[test]
    fn cli_beats_env() {
        let cli = CliOverrides {
            hour_basis: Some(HourBasis::Civil),
            ..Default::default()
        };
        let c = GanzhiConfig::load_with_env(None, Some(&cli), |key| {
            (key == "GANZHI_BAZI_HOUR_BASIS").then(|| "utc".to_string())
        })
        .unwrap();
        assert_eq!(c.bazi.hour_basis, HourBasis::Civil);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut c = GanzhiConfig::default();
        c.location.latitude = 95.0;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::ValidationFailed { ref field, .. }) if field == "location.latitude"
        ));

        let mut c = GanzhiConfig::default();
        c.solar_terms.refine_window_days = -1.0;
        assert!(c.validate().is_err());

        let mut c = GanzhiConfig::default();
        c.bazi.default_version = "  ".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_explicit_file() {
        let r = GanzhiConfig::load_with_env(Some(Path::new("/nonexistent/ganzhi.toml")), None, no_env);
        assert!(matches!(r, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn toml_round_trip() {
        let c = GanzhiConfig::default();
        let text = c.to_toml().unwrap();
        assert!(text.contains("[solar_terms]"));
        assert_eq!(GanzhiConfig::from_toml(&text).unwrap(), c);
    }
}
