//! The 24 solar terms (二十四节气).
//!
//! Terms sit every 15° of apparent solar longitude, starting from 立春 at 315°.
//! Even positions (立春, 惊蛰, 清明, ...) are the 12 node terms (节) that open
//! the BaZi months; odd positions are the mid-month terms (中气).

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

/// One of the 24 solar terms, in year order from 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolarTerm {
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    ClearAndBright,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
}

/// All 24 terms, 立春 first.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::ClearAndBright,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
];

const NAMES: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

const NOMINAL_MONTHS: [u32; 24] = [
    2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 1, 1,
];

impl SolarTerm {
    /// 0-based index (立春=0 .. 大寒=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at `index` mod 24.
    pub const fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// Chinese name.
    pub const fn name(self) -> &'static str {
        NAMES[self.index() as usize]
    }

    /// Apparent solar longitude at the term, degrees: (315 + 15k) mod 360.
    pub const fn longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// Gregorian month the term normally falls in.
    pub const fn nominal_month(self) -> u32 {
        NOMINAL_MONTHS[self.index() as usize]
    }

    /// Whether this is a node term (节) that opens a BaZi month.
    pub const fn is_node(self) -> bool {
        self.index() % 2 == 0
    }

    /// Month branch opened by this node term (立春 → 寅, 小寒 → 丑).
    ///
    /// `None` for mid-month terms.
    pub const fn month_branch(self) -> Option<Branch> {
        if self.is_node() {
            Some(Branch::from_index(self.index() / 2 + 2))
        } else {
            None
        }
    }

    /// Mid-month term (中气) of Gregorian `month` (1 → 大寒, 3 → 春分, 12 → 冬至).
    pub const fn mid_term_of_month(month: u32) -> Self {
        // 大寒 is index 23; each month advances two terms
        Self::from_index(((23 + 2 * (month.saturating_sub(1) % 12)) % 24) as u8)
    }

    /// Parse a Chinese term name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SOLAR_TERMS.iter().copied().find(|t| t.name() == name)
    }
}

/// The 12 node terms in year order.
pub fn node_terms() -> impl Iterator<Item = SolarTerm> {
    ALL_SOLAR_TERMS.into_iter().filter(|t| t.is_node())
}
