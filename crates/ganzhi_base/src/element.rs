//! The five elements (五行) and yin/yang polarity.
//!
//! Generating cycle: 木 → 火 → 土 → 金 → 水 → 木.
//! Overcoming cycle: 木 → 土 → 水 → 火 → 金 → 木.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (木火土金水).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Chinese name (木, 火, 土, 金, 水).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index in generating order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at `index` mod 5.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// The element this one generates (生).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element generating this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one overcomes (克).
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element overcoming this one.
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Chinese name (阳 / 阴).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    /// Polarity of the 0-based position `index` in a stem or branch cycle.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn overcoming_cycle() {
        assert_eq!(Element::Wood.overcomes(), Element::Earth);
        assert_eq!(Element::Earth.overcomes(), Element::Water);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
        assert_eq!(Element::Fire.overcomes(), Element::Metal);
        assert_eq!(Element::Metal.overcomes(), Element::Wood);
    }

    #[test]
    fn inverse_relations() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn indices_round_trip() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i as u8), *e);
        }
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Polarity::from_index(0), Polarity::Yang);
        assert_eq!(Polarity::from_index(7), Polarity::Yin);
    }
}
