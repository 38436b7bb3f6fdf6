//! Rule tables and pure arithmetic for BaZi and ZiWei Doushu charts.
//!
//! This crate provides:
//! - Stems, branches, the five elements and hidden stems
//! - Sexagenary pillars and the four-pillar chart
//! - The 24 solar terms catalogue
//! - Ten gods, elemental profile and balance advice, destiny palace
//! - ZiWei palaces, star placement, bureau, major limits and annual fortune
//!
//! Nothing here touches an ephemeris or a clock; callers resolve instants,
//! solar terms and lunar dates first and pass the results in.

pub mod branch;
pub mod bureau;
pub mod destiny;
pub mod element;
pub mod fortune;
pub mod gender;
pub mod major_limit;
pub mod palace;
pub mod pillar;
pub mod solar_term;
pub mod star;
pub mod stem;
pub mod ten_gods;
pub mod util;
pub mod wuxing;
pub mod ziwei;

pub use branch::{ALL_BRANCHES, Branch};
pub use bureau::{Bureau, determine_bureau, nayin_element};
pub use destiny::{destiny_explanation, destiny_palace};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use fortune::{AnnualFortune, ElementRelation, FortuneLevel, annual_fortune, year_palace};
pub use gender::{Direction, Gender};
pub use major_limit::{MajorLimit, MajorLimitSchedule, limit_start_age, major_limit_schedule};
pub use palace::{ALL_PALACES, Palace};
pub use pillar::{
    FourPillars, Pillar, day_pillar, hour_pillar, month_pillar, rat_hour_stem, tiger_month_stem,
    year_pillar,
};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, node_terms};
pub use star::{ALL_MAJOR_STARS, ALL_MINOR_STARS, MajorStar, MinorStar, StarSlot};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{TenGod, TenGods, ten_god, ten_gods};
pub use util::{normalize_360, normalize_pm180};
pub use wuxing::{Advice, AdviceItem, ElementalProfile, elemental_profile};
pub use ziwei::{
    MajorStarChart, MajorStarInputs, MinorStarChart, MinorStarInputs, body_palace, life_palace,
    life_palace_correction, place_major_stars, place_minor_stars,
};
