//! ZiWei Doushu palace and star placement arithmetic.
//!
//! Everything here is a pure function of already-resolved inputs: local
//! sidereal time, lunar month, stems and branches, and the Sun/Moon apparent
//! longitudes. Palace positions are indices into the ring of
//! [`Palace`](crate::palace::Palace)s.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::gender::Gender;
use crate::palace::Palace;
use crate::solar_term::SolarTerm;
use crate::star::{ALL_MAJOR_STARS, ALL_MINOR_STARS, MajorStar, MinorStar, StarSlot};
use crate::stem::Stem;
use crate::util::normalize_360;

/// 紫微 start position per lunar-year stem (甲..癸).
const ZIWEI_START: [u8; 10] = [11, 6, 2, 9, 3, 0, 8, 4, 7, 1];
/// 文昌 start per day stem.
const WENCHANG_START: [u8; 10] = [0, 5, 10, 3, 8, 1, 6, 11, 4, 9];
/// 右弼 start per year stem.
const YOUBI_START: [u8; 10] = [0, 11, 10, 9, 8, 7, 6, 5, 4, 3];
/// 天魁 per year stem.
const TIANKUI: [u8; 10] = [11, 10, 1, 0, 11, 10, 5, 4, 3, 2];
/// 天钺 per year stem.
const TIANYUE: [u8; 10] = [1, 0, 11, 10, 1, 0, 7, 6, 5, 4];
/// 禄存 base per stem.
const LUCUN: [u8; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

/// Order in which major stars are listed inside a palace.
const PLACEMENT_ORDER: [MajorStar; 14] = [
    MajorStar::ZiWei,
    MajorStar::TianFu,
    MajorStar::TaiYang,
    MajorStar::TaiYin,
    MajorStar::TianJi,
    MajorStar::WuQu,
    MajorStar::TianTong,
    MajorStar::LianZhen,
    MajorStar::TanLang,
    MajorStar::JuMen,
    MajorStar::TianXiang,
    MajorStar::TianLiang,
    MajorStar::QiSha,
    MajorStar::PoJun,
];

const fn ring(index: u32) -> Palace {
    Palace::from_index((index % 12) as u8)
}

/// Mid-month term of `month` and its life-palace correction in hours.
///
/// 大寒 0.5 h for January, rising 0.5 h per month to 冬至 6.0 h for December.
pub const fn life_palace_correction(month: u32) -> (SolarTerm, f64) {
    let m = (month.saturating_sub(1) % 12) + 1;
    (SolarTerm::mid_term_of_month(m), 0.5 * m as f64)
}

/// Life palace (命宫) from local sidereal time and the true-solar month.
pub fn life_palace(lst_hours: f64, true_solar_month: u32) -> Palace {
    let (_, correction) = life_palace_correction(true_solar_month);
    let idx = ((lst_hours + correction) / 2.0).floor() as i64;
    Palace::from_index(idx.rem_euclid(12) as u8)
}

/// Body palace (身宫): life + lunar month + gender shift + hour branch.
pub const fn body_palace(life: Palace, lunar_month: u8, gender: Gender, hour: Branch) -> Palace {
    let shift = match gender {
        Gender::Male => 0,
        Gender::Female => 6,
    };
    ring(life.index() as u32 + lunar_month as u32 + shift + hour.index() as u32)
}

/// 紫微 palace: stem start plus (lunar month − 1).
pub const fn ziwei_palace(year_stem: Stem, lunar_month: u8) -> Palace {
    let m = lunar_month.saturating_sub(1) as u32;
    ring(ZIWEI_START[year_stem.index() as usize] as u32 + m)
}

/// Palace of a luminary: life palace advanced by its 30° sign.
pub fn luminary_palace(life: Palace, longitude_deg: f64) -> Palace {
    let sign = (normalize_360(longitude_deg) / 30.0).floor() as u32;
    ring(life.index() as u32 + sign)
}

/// Inputs to major-star placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MajorStarInputs {
    pub life: Palace,
    pub lunar_month: u8,
    pub lunar_year_stem: Stem,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
}

/// Palace of each of the 14 major stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorStarChart {
    /// Indexed by [`MajorStar::index`].
    pub positions: [Palace; 14],
}

impl MajorStarChart {
    pub const fn palace_of(&self, star: MajorStar) -> Palace {
        self.positions[star.index() as usize]
    }

    /// Stars in `palace` in placement order, or a single [`StarSlot::Vacant`].
    pub fn slots(&self, palace: Palace) -> Vec<StarSlot> {
        let stars: Vec<StarSlot> = PLACEMENT_ORDER
            .iter()
            .filter(|s| self.palace_of(**s) == palace)
            .map(|s| StarSlot::Major(*s))
            .collect();
        if stars.is_empty() { vec![StarSlot::Vacant] } else { stars }
    }
}

/// Place the 14 major stars.
pub fn place_major_stars(inputs: &MajorStarInputs) -> MajorStarChart {
    let l = inputs.life.index() as u32;
    let m = inputs.lunar_month.saturating_sub(1) as u32;
    let z = ziwei_palace(inputs.lunar_year_stem, inputs.lunar_month).index() as u32;
    let t = z + 4;
    let tanlang = z + m;

    let mut positions = [Palace::Life; 14];
    for star in ALL_MAJOR_STARS {
        positions[star.index() as usize] = match star {
            MajorStar::ZiWei => ring(z),
            MajorStar::TianFu => ring(t),
            MajorStar::TaiYang => luminary_palace(inputs.life, inputs.sun_longitude_deg),
            MajorStar::TaiYin => luminary_palace(inputs.life, inputs.moon_longitude_deg),
            MajorStar::TianJi => ring(l + 2),
            MajorStar::WuQu => ring(l + 5),
            MajorStar::TianTong | MajorStar::LianZhen => ring(l + 7),
            MajorStar::TanLang => ring(tanlang),
            MajorStar::JuMen => ring(tanlang + 1),
            MajorStar::TianXiang => ring(t + 1),
            MajorStar::TianLiang => ring(t + 2),
            MajorStar::QiSha => ring(z + 6),
            MajorStar::PoJun => ring(z + 7),
        };
    }
    MajorStarChart { positions }
}

/// Inputs to minor-star placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinorStarInputs {
    /// Hour branch of true solar time.
    pub hour: Branch,
    /// Day-pillar stem.
    pub day_stem: Stem,
    pub year_stem: Stem,
    pub year_branch: Branch,
    pub lunar_month: u8,
}

/// Palace of each of the 14 minor stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorStarChart {
    /// Indexed by [`MinorStar::index`].
    pub positions: [Palace; 14],
}

impl MinorStarChart {
    pub const fn palace_of(&self, star: MinorStar) -> Palace {
        self.positions[star.index() as usize]
    }

    /// Minor stars located in `palace`, canonical order.
    pub fn stars_in(&self, palace: Palace) -> Vec<MinorStar> {
        ALL_MINOR_STARS
            .into_iter()
            .filter(|s| self.palace_of(*s) == palace)
            .collect()
    }
}

/// Year-branch triad group: 申子辰=0, 巳酉丑=1, 寅午戌=2, 亥卯未=3.
const fn triad(branch: Branch) -> u8 {
    branch.index() % 4
}

/// Place the 14 minor stars.
pub fn place_minor_stars(inputs: &MinorStarInputs) -> MinorStarChart {
    let h = inputs.hour.index() as u32;
    let m = inputs.lunar_month.saturating_sub(1) as u32;
    let ds = inputs.day_stem.index() as usize;
    let ys = inputs.year_stem.index() as usize;

    let wenchang = WENCHANG_START[ds] as u32 + h;
    let qingyang = LUCUN[ys] as u32 + 1;
    let dikong = 11 + 12 - h;
    let tianma = match triad(inputs.year_branch) {
        0 => 2,
        1 => 11,
        2 => 8,
        _ => 5,
    };
    let huoxing = match triad(inputs.year_branch) {
        0 => 2,
        1 => 3,
        2 => 1,
        _ => 9,
    } + h;
    let lingxing = if triad(inputs.year_branch) == 2 { 3 } else { 10 } + h;

    let mut positions = [Palace::Life; 14];
    for star in ALL_MINOR_STARS {
        positions[star.index() as usize] = ring(match star {
            MinorStar::WenChang => wenchang,
            MinorStar::WenQu => wenchang + 2,
            MinorStar::ZuoFu => ys as u32 + m,
            MinorStar::YouBi => YOUBI_START[ys] as u32 + m,
            MinorStar::TianKui => TIANKUI[ys] as u32,
            MinorStar::TianYue => TIANYUE[ys] as u32,
            MinorStar::LuCun => LUCUN[ds] as u32 + h,
            MinorStar::TianMa => tianma,
            MinorStar::QingYang => qingyang,
            MinorStar::TuoLuo => qingyang + 1,
            MinorStar::HuoXing => huoxing,
            MinorStar::LingXing => lingxing,
            MinorStar::DiKong => dikong,
            MinorStar::DiJie => dikong + 6,
        });
    }
    MinorStarChart { positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::ALL_PALACES;

    fn major_inputs() -> MajorStarInputs {
        MajorStarInputs {
            life: Palace::Wealth,
            lunar_month: 4,
            lunar_year_stem: Stem::Geng,
            sun_longitude_deg: 54.0,
            moon_longitude_deg: 292.3,
        }
    }

    #[test]
    fn corrections_rise_by_half_hour() {
        assert_eq!(life_palace_correction(1), (SolarTerm::MajorCold, 0.5));
        assert_eq!(life_palace_correction(3), (SolarTerm::SpringEquinox, 1.5));
        assert_eq!(life_palace_correction(12), (SolarTerm::WinterSolstice, 6.0));
    }

    #[test]
    fn life_palace_wraps() {
        // (23.5 + 2.5) / 2 = 13 -> 1
        assert_eq!(life_palace(23.5, 5), Palace::Siblings);
        // negative sidereal time from western longitudes
        assert_eq!(life_palace(-1.0, 1), Palace::Parents);
        assert_eq!(life_palace(-3.0, 1), Palace::Fortune);
        assert_eq!(life_palace(0.0, 1), Palace::Life);
    }

    #[test]
    fn body_palace_gender_shift() {
        let male = body_palace(Palace::Life, 4, Gender::Male, Branch::Si);
        let female = body_palace(Palace::Life, 4, Gender::Female, Branch::Si);
        assert_eq!(male, Palace::from_index(9));
        assert_eq!(female, Palace::from_index(3));
    }

    #[test]
    fn ziwei_start_table() {
        assert_eq!(ziwei_palace(Stem::Jia, 1), Palace::Parents);
        assert_eq!(ziwei_palace(Stem::Geng, 4), Palace::from_index(11));
        assert_eq!(ziwei_palace(Stem::Ji, 12), Palace::from_index(11));
    }

    #[test]
    fn major_star_offsets() {
        let chart = place_major_stars(&major_inputs());
        let z = chart.palace_of(MajorStar::ZiWei);
        assert_eq!(z, Palace::from_index(11));
        assert_eq!(chart.palace_of(MajorStar::TianFu), z.step(4));
        assert_eq!(chart.palace_of(MajorStar::QiSha), z.step(6));
        assert_eq!(chart.palace_of(MajorStar::PoJun), z.step(7));
        assert_eq!(chart.palace_of(MajorStar::TanLang), z.step(3));
        assert_eq!(chart.palace_of(MajorStar::JuMen), z.step(4));
        assert_eq!(chart.palace_of(MajorStar::TianXiang), z.step(5));
        assert_eq!(chart.palace_of(MajorStar::TianLiang), z.step(6));
        assert_eq!(chart.palace_of(MajorStar::TianJi), Palace::Health.step(1));
        assert_eq!(
            chart.palace_of(MajorStar::TianTong),
            chart.palace_of(MajorStar::LianZhen)
        );
        // Sun in sign 1, Moon in sign 9
        assert_eq!(chart.palace_of(MajorStar::TaiYang), Palace::Health);
        assert_eq!(chart.palace_of(MajorStar::TaiYin), Palace::from_index(1));
    }

    #[test]
    fn fourteen_placements_and_vacant_fill() {
        let chart = place_major_stars(&major_inputs());
        let mut placed = 0;
        for p in ALL_PALACES {
            let slots = chart.slots(p);
            assert!(!slots.is_empty());
            if slots == [StarSlot::Vacant] {
                continue;
            }
            assert!(!slots.contains(&StarSlot::Vacant));
            placed += slots.len();
        }
        assert_eq!(placed, 14);
    }

    #[test]
    fn slot_order_follows_placement() {
        let chart = place_major_stars(&major_inputs());
        let z = chart.palace_of(MajorStar::ZiWei);
        assert_eq!(chart.slots(z)[0], StarSlot::Major(MajorStar::ZiWei));
    }

    #[test]
    fn minor_stars_traditional_tables() {
        let chart = place_minor_stars(&MinorStarInputs {
            hour: Branch::Si,
            day_stem: Stem::Geng,
            year_stem: Stem::Geng,
            year_branch: Branch::Wu,
            lunar_month: 4,
        });
        let at = |s| chart.palace_of(s).index();
        assert_eq!(at(MinorStar::WenChang), 11);
        assert_eq!(at(MinorStar::WenQu), 1);
        assert_eq!(at(MinorStar::ZuoFu), 9);
        assert_eq!(at(MinorStar::YouBi), 9);
        assert_eq!(at(MinorStar::TianKui), 5);
        assert_eq!(at(MinorStar::TianYue), 7);
        assert_eq!(at(MinorStar::LuCun), 1);
        assert_eq!(at(MinorStar::TianMa), 8);
        assert_eq!(at(MinorStar::QingYang), 9);
        assert_eq!(at(MinorStar::TuoLuo), 10);
        assert_eq!(at(MinorStar::HuoXing), 6);
        assert_eq!(at(MinorStar::LingXing), 8);
        assert_eq!(at(MinorStar::DiKong), 6);
        assert_eq!(at(MinorStar::DiJie), 0);
    }

    #[test]
    fn every_minor_star_in_one_palace() {
        let chart = place_minor_stars(&MinorStarInputs {
            hour: Branch::Hai,
            day_stem: Stem::Gui,
            year_stem: Stem::Jia,
            year_branch: Branch::Zi,
            lunar_month: 12,
        });
        let total: usize = ALL_PALACES.iter().map(|p| chart.stars_in(*p).len()).sum();
        assert_eq!(total, 14);
    }
}
