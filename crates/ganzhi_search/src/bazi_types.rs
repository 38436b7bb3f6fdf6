//! Types for BaZi (four pillars) chart assembly.

use std::fmt;
use std::str::FromStr;

use ganzhi_base::{Branch, Direction, ElementalProfile, FourPillars, SolarTerm, TenGods};
use ganzhi_time::LunarDate;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::solar_term_types::{SolarTermConfig, SolarTermEntry};

/// Clock the hour pillar is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourBasis {
    /// Wall-clock time in the birth zone.
    Civil,
    /// The birth instant on the UTC axis.
    #[default]
    Utc,
}

impl HourBasis {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Civil => "civil",
            Self::Utc => "utc",
        }
    }
}

impl fmt::Display for HourBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HourBasis {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civil" | "local" => Ok(Self::Civil),
            "utc" => Ok(Self::Utc),
            other => Err(SearchError::InvalidInput(format!("unknown hour basis '{other}'"))),
        }
    }
}

/// Settings for [`compute_bazi_chart`](crate::bazi::compute_bazi_chart).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BaziConfig {
    pub hour_basis: HourBasis,
    pub solar_terms: SolarTermConfig,
}

impl BaziConfig {
    pub fn with_hour_basis(mut self, hour_basis: HourBasis) -> Self {
        self.hour_basis = hour_basis;
        self
    }
}

/// When the first luck period begins: three days to the node term = one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuckStart {
    pub direction: Direction,
    /// Node term reached from the birth instant.
    pub term: SolarTerm,
    pub term_jd_ut: f64,
    /// |birth − term| in days.
    pub days: f64,
    /// `days / 3`, rounded to two decimals.
    pub years: f64,
}

/// A complete four-pillars chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziChart {
    pub pillars: FourPillars,
    /// Year whose pillar is used (civil year − 1 before 立春).
    pub sexagenary_year: i32,
    pub start_of_spring: SolarTermEntry,
    /// Node term that opened the birth month, if one was resolved.
    pub month_term: Option<SolarTermEntry>,
    pub hour_basis: HourBasis,
    /// Birth hour in [23:00, 24:00) on the hour basis.
    pub late_zi: bool,
    pub profile: ElementalProfile,
    pub ten_gods: TenGods,
    pub zodiac: String,
    /// Lunar date of the civil birth date; `None` outside the lunar table.
    pub lunar: Option<LunarDate>,
    /// 命宫; 子 when the lunar date is unavailable.
    pub destiny_palace: Branch,
    pub destiny_explanation: String,
    pub luck_start: LuckStart,
}
