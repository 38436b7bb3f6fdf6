//! Versioned algorithm registry.
//!
//! Each (kind, version) pair maps to a plain function pointer. The built-in
//! set is registered at engine construction; callers may add more.

use std::collections::BTreeMap;
use std::fmt;

use ganzhi_core::Ephemeris;
use ganzhi_search::{
    BaziChart, BaziConfig, ResolvedBirth, SearchError, ZiweiChart, compute_bazi_chart,
    compute_ziwei_chart,
};
use ganzhi_time::LunarCalendar;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Version string of the built-in algorithms.
pub const BUILTIN_VERSION: &str = "v1.0";

/// Chart family a registered algorithm computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bazi,
    Ziwei,
}

impl AlgorithmKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bazi => "bazi",
            Self::Ziwei => "ziwei",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A BaZi algorithm.
pub type BaziFn = fn(
    &ResolvedBirth,
    &dyn Ephemeris,
    &dyn LunarCalendar,
    &BaziConfig,
) -> Result<BaziChart, SearchError>;

/// A ZiWei algorithm; the last argument is the annual-fortune query year.
pub type ZiweiFn = fn(
    &ResolvedBirth,
    &dyn Ephemeris,
    &dyn LunarCalendar,
    Option<i32>,
) -> Result<ZiweiChart, SearchError>;

/// Lookup table from version to algorithm, per kind.
#[derive(Clone, Default)]
pub struct Registry {
    bazi: BTreeMap<String, BaziFn>,
    ziwei: BTreeMap<String, ZiweiFn>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("bazi", &self.versions(AlgorithmKind::Bazi))
            .field("ziwei", &self.versions(AlgorithmKind::Ziwei))
            .finish()
    }
}

impl Registry {
    /// Registry holding the built-in `v1.0` algorithms.
    pub fn with_builtin() -> Self {
        let mut r = Self::default();
        r.register_bazi(BUILTIN_VERSION, compute_bazi_chart);
        r.register_ziwei(BUILTIN_VERSION, compute_ziwei_chart);
        r
    }

    /// Register (or replace) a BaZi algorithm.
    pub fn register_bazi(&mut self, version: impl Into<String>, f: BaziFn) {
        self.bazi.insert(version.into(), f);
    }

    /// Register (or replace) a ZiWei algorithm.
    pub fn register_ziwei(&mut self, version: impl Into<String>, f: ZiweiFn) {
        self.ziwei.insert(version.into(), f);
    }

    pub fn bazi(&self, version: &str) -> Result<BaziFn, ChartError> {
        self.bazi
            .get(version)
            .copied()
            .ok_or_else(|| not_found(AlgorithmKind::Bazi, version))
    }

    pub fn ziwei(&self, version: &str) -> Result<ZiweiFn, ChartError> {
        self.ziwei
            .get(version)
            .copied()
            .ok_or_else(|| not_found(AlgorithmKind::Ziwei, version))
    }

    pub fn contains(&self, kind: AlgorithmKind, version: &str) -> bool {
        match kind {
            AlgorithmKind::Bazi => self.bazi.contains_key(version),
            AlgorithmKind::Ziwei => self.ziwei.contains_key(version),
        }
    }

    /// Registered versions of `kind`, sorted.
    pub fn versions(&self, kind: AlgorithmKind) -> Vec<&str> {
        match kind {
            AlgorithmKind::Bazi => self.bazi.keys().map(String::as_str).collect(),
            AlgorithmKind::Ziwei => self.ziwei.keys().map(String::as_str).collect(),
        }
    }
}

fn not_found(kind: AlgorithmKind, version: &str) -> ChartError {
    ChartError::AlgorithmNotFound {
        kind,
        version: version.to_string(),
    }
}
