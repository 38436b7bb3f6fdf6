//! The ten heavenly stems (天干).
//!
//! Each consecutive pair shares an element; even positions are yang.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (甲 = 0).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at `index` mod 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem `steps` positions later in the cycle.
    pub const fn offset(self, steps: u8) -> Self {
        Self::from_index(self.index() + steps % 10)
    }

    /// Element of the stem (甲乙木, 丙丁火, 戊己土, 庚辛金, 壬癸水).
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Parse a single Chinese stem character.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_pairwise() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity() {
        assert_eq!(Stem::Geng.polarity(), Polarity::Yang);
        assert_eq!(Stem::Xin.polarity(), Polarity::Yin);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Ren.offset(3), Stem::Yi);
        assert_eq!(Stem::Jia.offset(10), Stem::Jia);
    }

    #[test]
    fn parse_name() {
        assert_eq!(Stem::from_name("庚"), Some(Stem::Geng));
        assert_eq!(Stem::from_name("子"), None);
    }
}
