//! Five-element profile (五行) of a four-pillar chart and balance advice.
//!
//! Each pillar stem contributes 1.0 to its element; each branch contributes
//! its hidden stems' weights. The totals are normalised to sum to 1.0.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Weight above which an element counts as strong.
pub const STRONG_THRESHOLD: f64 = 0.25;
/// Weight below which an element counts as weak.
pub const WEAK_THRESHOLD: f64 = 0.15;

/// Normalised element weights of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementalProfile {
    /// Weights indexed by [`Element::index`].
    pub weights: [f64; 5],
    pub day_master: Element,
    pub strong: Vec<Element>,
    pub weak: Vec<Element>,
    pub advice: Advice,
}

impl ElementalProfile {
    /// Weight of one element.
    pub fn weight(&self, element: Element) -> f64 {
        self.weights[element.index() as usize]
    }

    /// Sum of all weights: 1.0 for any real chart.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// One piece of balance advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdviceItem {
    /// Weak day master with a weak generator: strengthen the generator.
    StrengthenGenerator { day_master: Element, generator: Element },
    /// Overly strong day master with weak output: strengthen the output.
    ReleaseThroughOutput { day_master: Element, output: Element },
    /// Weak day master under a strong suppressor: strengthen the generator.
    ResolveSuppression {
        day_master: Element,
        suppressor: Element,
        generator: Element,
    },
    /// Dominant element to hold back.
    RestrainExcess { element: Element },
    /// Deficient element to build up.
    ReinforceDeficit { element: Element },
}

impl AdviceItem {
    /// Chinese advice sentence.
    pub fn text(&self) -> String {
        match *self {
            Self::StrengthenGenerator { day_master: d, generator: g } => format!(
                "日主{d}弱，且{g}（生{d}者）弱，建议加强{g}元素：{}",
                generator_tips(g),
                d = d.name(),
                g = g.name(),
            ),
            Self::ReleaseThroughOutput { day_master: d, output: o } => format!(
                "日主{d}过旺，且{o}（{d}生者）弱，建议加强{o}元素：{}",
                output_tips(o),
                d = d.name(),
                o = o.name(),
            ),
            Self::ResolveSuppression { day_master: d, suppressor: s, generator: g } => format!(
                "日主{d}弱，且{s}（克{d}者）强，建议加强{g}元素以化解克制：{}",
                resolve_tips(g),
                d = d.name(),
                s = s.name(),
                g = g.name(),
            ),
            Self::RestrainExcess { element } => {
                format!("您的{}元素过旺，建议适当抑制：{}", element.name(), restrain_tips(element))
            }
            Self::ReinforceDeficit { element } => {
                format!("您的{}元素过弱，建议加强：{}", element.name(), reinforce_tips(element))
            }
        }
    }
}

/// Balance advice: zero items means the chart is balanced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Advice {
    pub items: Vec<AdviceItem>,
}

const BALANCED_TEXT: &str = "您的五行较为平衡，运势顺畅，保持当前生活方式即可。";

impl Advice {
    pub fn is_balanced(&self) -> bool {
        self.items.is_empty()
    }

    /// Full advice text; items are space-separated.
    pub fn text(&self) -> String {
        if self.items.is_empty() {
            return BALANCED_TEXT.to_string();
        }
        self.items.iter().map(AdviceItem::text).collect::<Vec<_>>().join(" ")
    }
}

const fn generator_tips(e: Element) -> &'static str {
    match e {
        Element::Wood => "接触自然，佩戴绿色饰品，东方发展",
        Element::Fire => "参与社交，穿戴红色衣物，南方发展",
        Element::Earth => "亲近大地，使用黄色物品，中部地区发展",
        Element::Metal => "佩戴金属饰品，白色衣物，西方发展",
        Element::Water => "多接触水，黑色/蓝色衣物，北方发展",
    }
}

const fn output_tips(e: Element) -> &'static str {
    match e {
        Element::Wood => "培养创造力，接触艺术，东方发展",
        Element::Fire => "参与公益活动，分享知识，南方发展",
        Element::Earth => "从事教育工作，分享经验，中部发展",
        Element::Metal => "培养逻辑思维，学习新技能，西方发展",
        Element::Water => "参与社交活动，拓展人脉，北方发展",
    }
}

const fn resolve_tips(e: Element) -> &'static str {
    match e {
        Element::Wood => "多接触植物，佩戴绿色饰品",
        Element::Fire => "多晒太阳，穿戴红色衣物",
        Element::Earth => "亲近大地，使用黄色物品",
        Element::Metal => "佩戴金属饰品，白色衣物",
        Element::Water => "多喝水，黑色/蓝色衣物",
    }
}

const fn restrain_tips(e: Element) -> &'static str {
    match e {
        Element::Wood => "接触金属元素，培养耐心，避免冲动",
        Element::Fire => "接触水元素，保持冷静，避免急躁",
        Element::Earth => "接触木元素，保持灵活，避免固执",
        Element::Metal => "接触火元素，避免固执，培养变通",
        Element::Water => "接触土元素，保持务实，避免空想",
    }
}

const fn reinforce_tips(e: Element) -> &'static str {
    match e {
        Element::Wood => "多接触植物，佩戴绿色饰品，东方发展",
        Element::Fire => "多晒太阳，穿戴红色衣物，南方发展",
        Element::Earth => "亲近大地，使用黄色物品，中部发展",
        Element::Metal => "佩戴金属饰品，白色衣物，西方发展",
        Element::Water => "多喝水，黑色/蓝色衣物，北方发展",
    }
}

/// Raw (unnormalised) element totals of a chart.
pub fn element_totals(pillars: &FourPillars) -> [f64; 5] {
    let mut totals = [0.0; 5];
    for p in pillars.as_array() {
        totals[p.stem.element().index() as usize] += 1.0;
        for &(stem, weight) in p.branch.hidden_stems() {
            totals[stem.element().index() as usize] += weight;
        }
    }
    totals
}

/// Advice decision tree over normalised `weights` for `day_master`.
pub fn advise(weights: &[f64; 5], day_master: Element) -> Advice {
    let w = |e: Element| weights[e.index() as usize];
    let d = w(day_master);
    let generator = day_master.generated_by();
    let output = day_master.generates();
    let suppressor = day_master.overcome_by();

    let mut items = Vec::new();
    if d < 0.2 && w(generator) < 0.15 {
        items.push(AdviceItem::StrengthenGenerator { day_master, generator });
    } else if d > 0.3 && w(output) < 0.15 {
        items.push(AdviceItem::ReleaseThroughOutput { day_master, output });
    } else if d < 0.2 && w(suppressor) > 0.25 {
        items.push(AdviceItem::ResolveSuppression {
            day_master,
            suppressor,
            generator,
        });
    } else {
        // Ties go to the earlier element in 木火土金水 order.
        let mut strongest = Element::Wood;
        let mut weakest = Element::Wood;
        for e in ALL_ELEMENTS {
            if w(e) > w(strongest) {
                strongest = e;
            }
            if w(e) < w(weakest) {
                weakest = e;
            }
        }
        if w(strongest) > 0.3 {
            items.push(AdviceItem::RestrainExcess { element: strongest });
        }
        if w(weakest) < 0.1 {
            items.push(AdviceItem::ReinforceDeficit { element: weakest });
        }
    }
    Advice { items }
}

/// Full elemental profile of a chart.
pub fn elemental_profile(pillars: &FourPillars) -> ElementalProfile {
    let totals = element_totals(pillars);
    let sum: f64 = totals.iter().sum();
    let weights = if sum > 0.0 {
        totals.map(|t| t / sum)
    } else {
        totals
    };
    let day_master = pillars.day_master().element();
    let strong = ALL_ELEMENTS
        .into_iter()
        .filter(|e| weights[e.index() as usize] > STRONG_THRESHOLD)
        .collect();
    let weak = ALL_ELEMENTS
        .into_iter()
        .filter(|e| weights[e.index() as usize] < WEAK_THRESHOLD)
        .collect();
    ElementalProfile {
        advice: advise(&weights, day_master),
        weights,
        day_master,
        strong,
        weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::pillar::Pillar;
    use crate::stem::Stem;

    fn almanac_chart() -> FourPillars {
        let p = |s, b| Pillar::new(s, b).unwrap();
        FourPillars {
            year: p(Stem::Geng, Branch::Wu),
            month: p(Stem::Xin, Branch::Si),
            day: p(Stem::Geng, Branch::Chen),
            hour: p(Stem::Xin, Branch::Si),
        }
    }

    #[test]
    fn totals_count_stems_and_hidden_stems() {
        let t = element_totals(&almanac_chart());
        // 4 metal stems + 庚 in 巳 twice
        assert!((t[Element::Metal.index() as usize] - 4.4).abs() < 1e-12);
        // 丁 .7 in 午 + 丙 .7 twice in 巳
        assert!((t[Element::Fire.index() as usize] - 2.1).abs() < 1e-12);
        let sum: f64 = t.iter().sum();
        assert!((sum - 8.0).abs() < 1e-12);
    }

    #[test]
    fn weights_sum_to_one() {
        let p = elemental_profile(&almanac_chart());
        assert!((p.total() - 1.0).abs() < 1e-9);
        assert_eq!(p.day_master, Element::Metal);
        assert!(p.strong.contains(&Element::Metal));
        assert!(p.weak.contains(&Element::Wood));
    }

    #[test]
    fn strong_metal_releases_through_water() {
        // Metal 0.55, water 0.01875
        let p = elemental_profile(&almanac_chart());
        assert_eq!(
            p.advice.items,
            vec![AdviceItem::ReleaseThroughOutput {
                day_master: Element::Metal,
                output: Element::Water
            }]
        );
        assert!(p.advice.text().starts_with("日主金过旺，且水（金生者）弱，建议加强水元素："));
    }

    #[test]
    fn weak_day_master_weak_generator() {
        let weights = [0.1, 0.5, 0.1, 0.2, 0.1];
        let a = advise(&weights, Element::Wood);
        assert_eq!(
            a.items,
            vec![AdviceItem::StrengthenGenerator {
                day_master: Element::Wood,
                generator: Element::Water
            }]
        );
        assert!(a.text().ends_with("多接触水，黑色/蓝色衣物，北方发展"));
    }

    #[test]
    fn weak_day_master_strong_suppressor() {
        // Wood weak, water (generator) fine, metal strong
        let weights = [0.15, 0.1, 0.15, 0.35, 0.25];
        let a = advise(&weights, Element::Wood);
        assert_eq!(
            a.items,
            vec![AdviceItem::ResolveSuppression {
                day_master: Element::Wood,
                suppressor: Element::Metal,
                generator: Element::Water
            }]
        );
    }

    #[test]
    fn fallback_restrain_and_reinforce() {
        let weights = [0.35, 0.25, 0.2, 0.15, 0.05];
        let a = advise(&weights, Element::Fire);
        assert_eq!(
            a.items,
            vec![
                AdviceItem::RestrainExcess { element: Element::Wood },
                AdviceItem::ReinforceDeficit { element: Element::Water },
            ]
        );
        assert_eq!(a.text().matches("您的").count(), 2);
    }

    #[test]
    fn balanced_text() {
        let a = advise(&[0.2; 5], Element::Earth);
        assert!(a.is_balanced());
        assert_eq!(a.text(), BALANCED_TEXT);
    }
}
