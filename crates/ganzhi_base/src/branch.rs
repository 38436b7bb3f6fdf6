//! The twelve earthly branches (地支), their zodiac animals and hidden stems.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (子 = 0).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Weighted hidden stems (藏干) per branch, indexed by branch. Weights sum to 1.0.
const HIDDEN_STEMS: [&[(Stem, f64)]; 12] = [
    &[(Stem::Gui, 1.0)],
    &[(Stem::Ji, 0.6), (Stem::Gui, 0.25), (Stem::Xin, 0.15)],
    &[(Stem::Jia, 0.7), (Stem::Bing, 0.2), (Stem::Wu, 0.1)],
    &[(Stem::Yi, 1.0)],
    &[(Stem::Wu, 0.6), (Stem::Yi, 0.25), (Stem::Gui, 0.15)],
    &[(Stem::Bing, 0.7), (Stem::Geng, 0.2), (Stem::Wu, 0.1)],
    &[(Stem::Ding, 0.7), (Stem::Ji, 0.3)],
    &[(Stem::Ji, 0.6), (Stem::Ding, 0.25), (Stem::Yi, 0.15)],
    &[(Stem::Geng, 0.7), (Stem::Ren, 0.2), (Stem::Wu, 0.1)],
    &[(Stem::Xin, 1.0)],
    &[(Stem::Wu, 0.6), (Stem::Xin, 0.25), (Stem::Ding, 0.15)],
    &[(Stem::Ren, 0.7), (Stem::Jia, 0.3)],
];

impl Branch {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin romanisation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index` mod 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch governing a clock hour (0..=23). 23:00 and 00:00 both map to 子.
    pub const fn from_hour(hour: u32) -> Self {
        Self::from_index((((hour % 24) + 1) / 2 % 12) as u8)
    }

    /// Primary element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Zi | Self::Hai => Element::Water,
        }
    }

    /// Yin/yang polarity.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal (生肖), Chinese.
    pub const fn zodiac(self) -> &'static str {
        match self {
            Self::Zi => "鼠",
            Self::Chou => "牛",
            Self::Yin => "虎",
            Self::Mao => "兔",
            Self::Chen => "龙",
            Self::Si => "蛇",
            Self::Wu => "马",
            Self::Wei => "羊",
            Self::Shen => "猴",
            Self::You => "鸡",
            Self::Xu => "狗",
            Self::Hai => "猪",
        }
    }

    /// Zodiac animal, English.
    pub const fn zodiac_english(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// Weighted hidden stems, main qi first.
    pub const fn hidden_stems(self) -> &'static [(Stem, f64)] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Parse a single Chinese branch character.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_weights_sum_to_one() {
        for b in ALL_BRANCHES {
            let sum: f64 = b.hidden_stems().iter().map(|(_, w)| w).sum();
            assert!((sum - 1.0).abs() < 1e-12, "{}: {sum}", b.name());
        }
    }

    #[test]
    fn main_qi_matches_branch_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems()[0].0.element(), b.element(), "{}", b.name());
        }
    }

    #[test]
    fn hour_branches() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
        assert_eq!(Branch::from_hour(10), Branch::Si);
        assert_eq!(Branch::from_hour(11), Branch::Wu);
        assert_eq!(Branch::from_hour(22), Branch::Hai);
    }

    #[test]
    fn zodiac() {
        assert_eq!(Branch::Wu.zodiac(), "马");
        assert_eq!(Branch::Chen.zodiac_english(), "Dragon");
    }

    #[test]
    fn parse_name() {
        assert_eq!(Branch::from_name("辰"), Some(Branch::Chen));
        assert_eq!(Branch::from_name("甲"), None);
    }
}
