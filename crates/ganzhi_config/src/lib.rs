//! Configuration for the ganzhi chart engine.
//! TOML-based, layered resolution: CLI > env > file > defaults.

pub mod config;
pub mod error;
pub mod sections;

pub use config::{CliOverrides, DEFAULT_CONFIG_FILE, GanzhiConfig};
pub use error::ConfigError;
pub use sections::{
    BaziSection, DEFAULT_ALGORITHM_VERSION, LocationSection, LoggingSection, SolarTermsSection,
    ZiweiSection,
};
