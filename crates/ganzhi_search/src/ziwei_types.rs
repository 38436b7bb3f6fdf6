//! Types for ZiWei Doushu chart assembly.

use ganzhi_base::{
    AnnualFortune, Branch, Bureau, MajorLimitSchedule, MajorStarChart, MinorStar, MinorStarChart,
    Palace, Pillar, StarSlot,
};
use ganzhi_time::{LunarDate, TrueSolarTime};
use serde::Serialize;

/// Everything sitting in one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceStars {
    pub palace: Palace,
    /// Major stars in placement order, or a single vacant slot.
    pub major: Vec<StarSlot>,
    pub minor: Vec<MinorStar>,
}

/// A complete ZiWei chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZiweiChart {
    pub true_solar_time: TrueSolarTime,
    pub lunar: LunarDate,
    pub lunar_year_pillar: Pillar,
    /// Hour branch of the true solar time.
    pub hour_branch: Branch,
    pub local_sidereal_hours: f64,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    pub life_palace: Palace,
    pub body_palace: Palace,
    pub major_stars: MajorStarChart,
    pub minor_stars: MinorStarChart,
    /// All twelve palaces in ring order.
    pub palaces: Vec<PalaceStars>,
    pub bureau: Bureau,
    pub major_limits: MajorLimitSchedule,
    pub annual_fortune: AnnualFortune,
}

impl ZiweiChart {
    pub fn palace(&self, palace: Palace) -> &PalaceStars {
        &self.palaces[palace.index() as usize]
    }

    /// Number of major-star placements across the ring.
    pub fn major_placements(&self) -> usize {
        self.palaces
            .iter()
            .flat_map(|p| &p.major)
            .filter(|s| s.star().is_some())
            .count()
    }
}
