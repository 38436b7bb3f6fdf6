//! Five-element bureau (五行局) and the simplified nayin (纳音) element.
//!
//! The nayin element here uses (stem·12 + branch) mod 5 over
//! [金, 火, 木, 水, 土] rather than the 30-pair nayin table. The two agree on
//! some pairs only; charts depend on this rule, so it is kept as is.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::pillar::Pillar;
use crate::star::MajorStar;
use crate::ziwei::MajorStarChart;

const NAYIN_CYCLE: [Element; 5] = [
    Element::Metal,
    Element::Fire,
    Element::Wood,
    Element::Water,
    Element::Earth,
];

/// Simplified nayin element of a pillar.
pub const fn nayin_element(pillar: Pillar) -> Element {
    let k = (pillar.stem.index() as u32 * 12 + pillar.branch.index() as u32) % 5;
    NAYIN_CYCLE[k as usize]
}

/// One of the five bureaus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bureau {
    /// 水二局
    Water2,
    /// 木三局
    Wood3,
    /// 金四局
    Metal4,
    /// 土五局
    Earth5,
    /// 火六局
    Fire6,
}

impl Bureau {
    pub const fn from_element(element: Element) -> Self {
        match element {
            Element::Water => Self::Water2,
            Element::Wood => Self::Wood3,
            Element::Metal => Self::Metal4,
            Element::Earth => Self::Earth5,
            Element::Fire => Self::Fire6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// Bureau number (2..=6).
    pub const fn number(self) -> u32 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Length of each major-limit period in years.
    pub const fn period_years(self) -> u32 {
        self.number() + 4
    }

    /// Starting age before the day-stem adjustment.
    pub const fn base_start_age(self) -> u32 {
        2 * self.number()
    }
}

/// Bureau from the nayin element, falling back to the element of the first
/// major star sharing 紫微's palace.
pub fn determine_bureau(nayin: Option<Element>, majors: &MajorStarChart) -> Bureau {
    let element = nayin.unwrap_or_else(|| {
        majors
            .slots(majors.palace_of(MajorStar::ZiWei))
            .first()
            .and_then(|s| s.star())
            .map_or(Element::Earth, MajorStar::element)
    });
    Bureau::from_element(element)
}
