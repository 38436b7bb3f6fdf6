//! Major-limit (大限) schedule: twelve decade-like periods walking the palace ring.

use serde::{Deserialize, Serialize};

use crate::bureau::Bureau;
use crate::gender::Direction;
use crate::palace::Palace;
use crate::stem::Stem;

/// One period of the schedule. Ages are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorLimit {
    pub palace: Palace,
    pub start_age: u32,
    pub end_age: u32,
    pub duration: u32,
}

/// Twelve consecutive major-limit periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorLimitSchedule {
    pub direction: Direction,
    pub periods: Vec<MajorLimit>,
}

/// Starting age: bureau base plus the day-stem adjustment (stem index mod 5).
pub const fn limit_start_age(bureau: Bureau, day_stem: Stem) -> u32 {
    bureau.base_start_age() + (day_stem.index() % 5) as u32
}

/// Build the schedule starting at the life palace.
pub fn major_limit_schedule(
    bureau: Bureau,
    life: Palace,
    direction: Direction,
    day_stem: Stem,
) -> MajorLimitSchedule {
    let duration = bureau.period_years();
    let start = limit_start_age(bureau, day_stem);
    let periods = (0..12u32)
        .map(|i| {
            let start_age = start + i * duration;
            MajorLimit {
                palace: life.step(direction.step() * i as i32),
                start_age,
                end_age: start_age + duration - 1,
                duration,
            }
        })
        .collect();
    MajorLimitSchedule { direction, periods }
}
