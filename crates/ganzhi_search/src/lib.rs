//! Chart assembly over pluggable time, ephemeris and calendar collaborators.
//!
//! This crate provides:
//! - Birth resolution from a wall-clock time and IANA zone to a UT instant
//! - Solar-term tables: anchor estimates refined against solar longitude
//! - BaZi four-pillars charts with elemental analysis and luck start
//! - ZiWei Doushu charts with major limits and annual fortune

pub mod bazi;
pub mod bazi_types;
pub mod birth;
pub mod error;
pub mod solar_term_types;
pub mod solar_terms;
pub mod ziwei;
pub mod ziwei_types;

pub use bazi::{compute_bazi_chart, governing_node, luck_start};
pub use bazi_types::{BaziChart, BaziConfig, HourBasis, LuckStart};
pub use birth::{BirthInput, GeoLocation, ResolvedBirth, resolve_birth};
pub use error::SearchError;
pub use solar_term_types::{SolarTermConfig, SolarTermEntry, SolarTermTable, TermSource};
pub use solar_terms::{
    anchor_of, node_terms_around, node_terms_of, solar_term, solar_term_table, start_of_spring,
};
pub use ziwei::compute_ziwei_chart;
pub use ziwei_types::{PalaceStars, ZiweiChart};
