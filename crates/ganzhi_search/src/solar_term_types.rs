//! Types for solar-term search.

use chrono::{DateTime, Utc};
use ganzhi_base::SolarTerm;
use ganzhi_time::jd_to_datetime;
use serde::{Deserialize, Serialize};

/// How a term instant was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermSource {
    /// Refined against the ephemeris's solar longitude.
    Ephemeris,
    /// Anchor plus a fixed 15-day multiple, unrefined.
    Estimated,
    /// Anchor unavailable: 15th of the nominal month, 00:00 UT.
    Fallback,
}

/// One solar term of one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarTermEntry {
    pub term: SolarTerm,
    /// Julian Date (UT) of the term.
    pub jd_ut: f64,
    pub source: TermSource,
}

impl SolarTermEntry {
    /// The term instant as a UTC date-time.
    pub fn utc(&self) -> Option<DateTime<Utc>> {
        jd_to_datetime(self.jd_ut)
    }
}

/// All 24 terms of one calendar year, in [`SolarTerm`] order.
///
/// 小寒 and 大寒 fall in January of `year`, before 立春, so entries are
/// monotonic except across that rollover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarTermTable {
    pub year: i32,
    pub entries: Vec<SolarTermEntry>,
}

impl SolarTermTable {
    /// Entry for `term`.
    pub fn get(&self, term: SolarTerm) -> Option<&SolarTermEntry> {
        self.entries.get(term.index() as usize)
    }

    /// The 12 node terms.
    pub fn nodes(&self) -> impl Iterator<Item = &SolarTermEntry> {
        self.entries.iter().filter(|e| e.term.is_node())
    }

    /// Entries sorted by time.
    pub fn chronological(&self) -> Vec<SolarTermEntry> {
        let mut v = self.entries.clone();
        v.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));
        v
    }
}

/// Solar-term search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarTermConfig {
    /// Refine anchor estimates by bisection on solar longitude.
    pub refine: bool,
    /// Half-width of the bisection bracket around the estimate, days.
    pub refine_window_days: f64,
    /// Maximum bisection iterations.
    pub max_iterations: u32,
    /// Stop when the bracket is narrower than this, days.
    pub convergence_days: f64,
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            refine: true,
            refine_window_days: 4.0,
            max_iterations: 60,
            convergence_days: 1e-6,
        }
    }
}

impl SolarTermConfig {
    /// Unrefined anchors only.
    pub fn estimated() -> Self {
        Self {
            refine: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.refine_window_days.is_finite() || self.refine_window_days <= 0.0 {
            return Err("refine_window_days must be positive");
        }
        if self.refine_window_days > 15.0 {
            return Err("refine_window_days must not exceed 15");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}
