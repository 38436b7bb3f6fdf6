//! Convenience facade for the ganzhi BaZi/ZiWei chart engine.
//!
//! Provides a global singleton engine and high-level functions that accept a
//! civil birth time directly, removing the need to wire up the ephemeris,
//! lunar calendar and time-zone collaborators by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ganzhi_rs::*;
//!
//! init(GanzhiConfig::default()).expect("engine init");
//!
//! let local = "1990-05-15T10:30:00".parse().unwrap();
//! let input = BirthInput::new(local, "Asia/Shanghai", Gender::Male);
//! let report = compute_bazi(&input).unwrap();
//! println!("{}", report.chart.pillars); // 庚午 癸巳 庚辰 丁丑
//! ```

pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;
pub mod logging;
pub mod registry;
pub mod report;

pub use convenience::{
    compute_bazi, compute_bazi_version, compute_ziwei, compute_ziwei_version, lunar_date,
    solar_terms, true_solar_time,
};
pub use engine::{ChartEngine, Collaborators};
pub use error::ChartError;
pub use global::{init, init_with, is_initialized};
pub use logging::{LOG_ENV, init_tracing};
pub use registry::{AlgorithmKind, BUILTIN_VERSION, BaziFn, Registry, ZiweiFn};
pub use report::{BaziReport, BirthSummary, ZiweiReport};

// Re-export the types callers need to build requests and read results.
pub use ganzhi_base::{
    Branch, Bureau, Direction, Element, FortuneLevel, Gender, MajorStar, MinorStar, Palace,
    Pillar, SolarTerm, StarSlot, Stem,
};
pub use ganzhi_config::{CliOverrides, ConfigError, GanzhiConfig};
pub use ganzhi_core::{AnalyticEphemeris, Body, Ephemeris, EphemerisError, Season};
pub use ganzhi_search::{
    BaziChart, BirthInput, GeoLocation, HourBasis, SolarTermEntry, SolarTermTable, TermSource,
    ZiweiChart,
};
pub use ganzhi_time::{
    IanaZoneResolver, LunarCalendar, LunarDate, TableLunarCalendar, TrueSolarTime, ZoneResolver,
};
