//! Annual fortune (流年运势): the year's palace, its stars, and a level score.
//!
//! Scoring:
//! non-vacant major stars + 2·auspicious − 2·sha + relation bonus, where the
//! bonus is 相生 +2, 比和 +1, 被生 0, 平 0, 被克 −1, 相克 −2.
//! Levels: ≥ 5 大吉, ≥ 2 吉, ≥ 0 平, else 凶.

use serde::{Deserialize, Serialize};

use crate::bureau::Bureau;
use crate::element::Element;
use crate::palace::Palace;
use crate::star::{MinorStar, StarSlot};
use crate::stem::Stem;
use crate::ziwei::{MajorStarChart, MinorStarChart};

/// Relation of the year's element to the bureau element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    /// 比和: same element.
    Same,
    /// 相生: the year generates the bureau.
    Generates,
    /// 相克: the year overcomes the bureau.
    Overcomes,
    /// 被生: the bureau generates the year.
    GeneratedBy,
    /// 被克: the bureau overcomes the year.
    OvercomeBy,
    /// 平: no element to compare.
    Neutral,
}

impl ElementRelation {
    /// Relation between optional elements; `Neutral` if either is missing.
    pub fn between(year: Option<Element>, bureau: Option<Element>) -> Self {
        match (year, bureau) {
            (Some(y), Some(b)) if y == b => Self::Same,
            (Some(y), Some(b)) if y.generates() == b => Self::Generates,
            (Some(y), Some(b)) if y.overcomes() == b => Self::Overcomes,
            (Some(y), Some(b)) if b.generates() == y => Self::GeneratedBy,
            (Some(_), Some(_)) => Self::OvercomeBy,
            _ => Self::Neutral,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "比和",
            Self::Generates => "相生",
            Self::Overcomes => "相克",
            Self::GeneratedBy => "被生",
            Self::OvercomeBy => "被克",
            Self::Neutral => "平",
        }
    }

    /// Score contribution of the relation.
    pub const fn bonus(self) -> i32 {
        match self {
            Self::Generates => 2,
            Self::Same => 1,
            Self::GeneratedBy | Self::Neutral => 0,
            Self::OvercomeBy => -1,
            Self::Overcomes => -2,
        }
    }
}

/// Coarse fortune level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FortuneLevel {
    /// 凶
    Challenging,
    /// 平
    Average,
    /// 吉
    Good,
    /// 大吉
    Excellent,
}

impl FortuneLevel {
    pub const fn from_score(score: i32) -> Self {
        if score >= 5 {
            Self::Excellent
        } else if score >= 2 {
            Self::Good
        } else if score >= 0 {
            Self::Average
        } else {
            Self::Challenging
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "大吉",
            Self::Good => "吉",
            Self::Average => "平",
            Self::Challenging => "凶",
        }
    }

    const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "诸事顺遂，宜积极进取",
            Self::Good => "整体向好，把握机遇",
            Self::Average => "平稳守成，循序渐进",
            Self::Challenging => "多有阻滞，宜谨慎行事",
        }
    }
}

/// Fortune of one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualFortune {
    pub year: i32,
    pub palace: Palace,
    pub year_stem: Stem,
    pub major_stars: Vec<StarSlot>,
    pub auspicious_stars: Vec<MinorStar>,
    pub sha_stars: Vec<MinorStar>,
    pub relation: ElementRelation,
    pub score: i32,
    pub level: FortuneLevel,
    pub narrative: String,
}

/// Palace ruling a calendar year: ring position `year mod 12`.
pub const fn year_palace(year: i32) -> Palace {
    Palace::from_index(year.rem_euclid(12) as u8)
}

/// Stem of a calendar year: (year − 4) mod 10.
///
/// This is the sexagenary stem proper (1984 甲, 1990 庚). Some published
/// tools count `(year − 1900) mod 10` from 甲 instead, which lands six stems
/// off (1900 is 庚, not 甲); the relation to the bureau element follows the
/// real stem here.
pub const fn year_stem(year: i32) -> Stem {
    Stem::from_index((year - 4).rem_euclid(10) as u8)
}

fn join_names<T>(items: &[T], name: impl Fn(&T) -> &'static str) -> String {
    if items.is_empty() {
        return "无".to_string();
    }
    items.iter().map(name).collect::<Vec<_>>().join("、")
}

/// Annual fortune for `year`.
pub fn annual_fortune(
    year: i32,
    majors: &MajorStarChart,
    minors: &MinorStarChart,
    bureau: Bureau,
) -> AnnualFortune {
    let palace = year_palace(year);
    let stem = year_stem(year);
    let major_stars = majors.slots(palace);
    let (sha_stars, auspicious_stars): (Vec<MinorStar>, Vec<MinorStar>) =
        minors.stars_in(palace).into_iter().partition(|s| s.is_sha());
    let relation = ElementRelation::between(Some(stem.element()), Some(bureau.element()));

    let majors_count = major_stars.iter().filter(|s| s.star().is_some()).count() as i32;
    let score = majors_count + 2 * auspicious_stars.len() as i32 - 2 * sha_stars.len() as i32
        + relation.bonus();
    let level = FortuneLevel::from_score(score);

    let narrative = format!(
        "{year}年流年落{palace}，主星{majors}，吉星{good}，煞星{bad}；流年{stem}{ye}与{bureau}{rel}，运势{level}：{summary}。",
        palace = palace.name(),
        majors = join_names(&major_stars, |s| s.name()),
        good = join_names(&auspicious_stars, |s| s.name()),
        bad = join_names(&sha_stars, |s| s.name()),
        stem = stem.name(),
        ye = stem.element().name(),
        bureau = bureau.name(),
        rel = relation.name(),
        level = level.name(),
        summary = level.summary(),
    );

    AnnualFortune {
        year,
        palace,
        year_stem: stem,
        major_stars,
        auspicious_stars,
        sha_stars,
        relation,
        score,
        level,
        narrative,
    }
}
