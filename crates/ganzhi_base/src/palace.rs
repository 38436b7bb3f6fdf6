//! The twelve ZiWei palaces (十二宫), in ring order starting from 命宫.

use serde::{Deserialize, Serialize};

/// One of the twelve palace positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Palace {
    Life,
    Siblings,
    Spouse,
    Children,
    Wealth,
    Health,
    Travel,
    Friends,
    Career,
    Property,
    Fortune,
    Parents,
}

/// All palaces in ring order.
pub const ALL_PALACES: [Palace; 12] = [
    Palace::Life,
    Palace::Siblings,
    Palace::Spouse,
    Palace::Children,
    Palace::Wealth,
    Palace::Health,
    Palace::Travel,
    Palace::Friends,
    Palace::Career,
    Palace::Property,
    Palace::Fortune,
    Palace::Parents,
];

impl Palace {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "命宫",
            Self::Siblings => "兄弟",
            Self::Spouse => "夫妻",
            Self::Children => "子女",
            Self::Wealth => "财帛",
            Self::Health => "疾厄",
            Self::Travel => "迁移",
            Self::Friends => "交友",
            Self::Career => "事业",
            Self::Property => "田宅",
            Self::Fortune => "福德",
            Self::Parents => "父母",
        }
    }

    /// 0-based ring position.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Palace at ring position `index` mod 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_PALACES[(index % 12) as usize]
    }

    /// Palace `steps` positions away around the ring (negative = backwards).
    pub const fn step(self, steps: i32) -> Self {
        Self::from_index((self.index() as i32 + steps).rem_euclid(12) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_wraps_both_ways() {
        assert_eq!(Palace::Parents.step(1), Palace::Life);
        assert_eq!(Palace::Life.step(-1), Palace::Parents);
        assert_eq!(Palace::Wealth.step(12), Palace::Wealth);
        assert_eq!(Palace::from_index(14), Palace::Spouse);
    }

    #[test]
    fn names_in_order() {
        let names: Vec<&str> = ALL_PALACES.iter().map(|p| p.name()).collect();
        assert_eq!(names[0], "命宫");
        assert_eq!(names[8], "事业");
        assert_eq!(names[11], "父母");
    }
}
