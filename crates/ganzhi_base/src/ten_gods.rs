//! Ten gods (十神): the relation of each pillar stem to the day master.

use serde::{Deserialize, Serialize};

use crate::pillar::FourPillars;
use crate::stem::Stem;

/// One of the ten relations between the day stem and another stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Companion,
    /// 劫财: same element, opposite polarity.
    RobWealth,
    /// 食神: generated by the day master, same polarity.
    EatingGod,
    /// 伤官: generated by the day master, opposite polarity.
    HurtingOfficer,
    /// 偏财: overcome by the day master, same polarity.
    IndirectWealth,
    /// 正财: overcome by the day master, opposite polarity.
    DirectWealth,
    /// 七杀: overcomes the day master, same polarity.
    SevenKillings,
    /// 正官: overcomes the day master, opposite polarity.
    DirectOfficer,
    /// 偏印: generates the day master, same polarity.
    IndirectResource,
    /// 正印: generates the day master, opposite polarity.
    DirectResource,
}

impl TenGod {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }
}

use TenGod::{
    Companion as BJ, DirectOfficer as ZG, DirectResource as ZY, DirectWealth as ZC,
    EatingGod as SS, HurtingOfficer as SG, IndirectResource as PY, IndirectWealth as PC,
    RobWealth as JC, SevenKillings as QS,
};

/// Rows: day stem 甲..癸. Columns: other stem 甲..癸.
#[rustfmt::skip]
const TABLE: [[TenGod; 10]; 10] = [
    [BJ, JC, SS, SG, PC, ZC, QS, ZG, PY, ZY],
    [JC, BJ, SG, SS, ZC, PC, ZG, QS, ZY, PY],
    [PY, ZY, BJ, JC, SS, SG, PC, ZC, QS, ZG],
    [ZY, PY, JC, BJ, SG, SS, ZC, PC, ZG, QS],
    [QS, ZG, PY, ZY, BJ, JC, SS, SG, PC, ZC],
    [ZG, QS, ZY, PY, JC, BJ, SG, SS, ZC, PC],
    [PC, ZC, QS, ZG, PY, ZY, BJ, JC, SS, SG],
    [ZC, PC, ZG, QS, ZY, PY, JC, BJ, SG, SS],
    [SS, SG, PC, ZC, QS, ZG, PY, ZY, BJ, JC],
    [SG, SS, ZC, PC, ZG, QS, ZY, PY, JC, BJ],
];

/// Relation of `other` to the day master `day`.
pub const fn ten_god(day: Stem, other: Stem) -> TenGod {
    TABLE[day.index() as usize][other.index() as usize]
}

/// Ten god of each pillar stem, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGods {
    pub year: TenGod,
    pub month: TenGod,
    pub day: TenGod,
    pub hour: TenGod,
}

impl TenGods {
    /// Relations in chart order.
    pub const fn as_array(&self) -> [TenGod; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

/// Ten gods for all four pillar stems. The day pillar is always 比肩.
pub const fn ten_gods(pillars: &FourPillars) -> TenGods {
    let dm = pillars.day_master();
    TenGods {
        year: ten_god(dm, pillars.year.stem),
        month: ten_god(dm, pillars.month.stem),
        day: ten_god(dm, pillars.day.stem),
        hour: ten_god(dm, pillars.hour.stem),
    }
}
