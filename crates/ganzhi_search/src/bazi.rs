//! Four-pillars chart assembly.
//!
//! The year turns at 立春 and the month at each node term, both looked up in
//! solar-term tables of the adjacent calendar years. The day follows the civil
//! date; the hour is read on the configured [`HourBasis`] (the UTC clock
//! unless told otherwise), with late 子 (23:00–24:00) taking its stem from
//! the next civil day.

use chrono::{Datelike, Timelike};
use ganzhi_base::{
    Branch, Direction, FourPillars, SolarTerm, day_pillar, destiny_explanation, destiny_palace,
    elemental_profile, hour_pillar, month_pillar, ten_gods, year_pillar,
};
use ganzhi_core::Ephemeris;
use ganzhi_time::LunarCalendar;
use tracing::{debug, warn};

use crate::bazi_types::{BaziChart, BaziConfig, HourBasis, LuckStart};
use crate::birth::ResolvedBirth;
use crate::error::SearchError;
use crate::solar_term_types::{SolarTermEntry, SolarTermTable};
use crate::solar_terms::{node_terms_of, solar_term_table};

/// Most recent node term at or before `jd_ut`.
pub fn governing_node(nodes: &[SolarTermEntry], jd_ut: f64) -> Option<SolarTermEntry> {
    nodes.iter().rev().find(|e| e.jd_ut <= jd_ut).copied()
}

/// Luck-start metadata from the node terms around the birth.
///
/// Forward charts count to the first node after the birth, backward charts
/// to the last node before it.
pub fn luck_start(
    nodes: &[SolarTermEntry],
    jd_ut: f64,
    direction: Direction,
) -> Result<LuckStart, SearchError> {
    let node = match direction {
        Direction::Forward => nodes.iter().find(|e| e.jd_ut > jd_ut),
        Direction::Backward => nodes.iter().rev().find(|e| e.jd_ut < jd_ut),
    }
    .ok_or(SearchError::TermNotFound(match direction {
        Direction::Forward => "after the birth instant",
        Direction::Backward => "before the birth instant",
    }))?;

    let days = (node.jd_ut - jd_ut).abs();
    Ok(LuckStart {
        direction,
        term: node.term,
        term_jd_ut: node.jd_ut,
        days,
        years: (days / 3.0 * 100.0).round() / 100.0,
    })
}

/// Compute the four-pillars chart of a resolved birth.
pub fn compute_bazi_chart(
    birth: &ResolvedBirth,
    eph: &dyn Ephemeris,
    lunar: &dyn LunarCalendar,
    config: &BaziConfig,
) -> Result<BaziChart, SearchError> {
    config
        .solar_terms
        .validate()
        .map_err(SearchError::InvalidConfig)?;

    let local = birth.local();
    let civil_year = local.year();
    let jd = birth.jd_ut;

    let tables: Vec<SolarTermTable> = (civil_year - 1..=civil_year + 1)
        .map(|y| solar_term_table(eph, y, &config.solar_terms))
        .collect();
    let start_of_spring = tables[1]
        .get(SolarTerm::StartOfSpring)
        .copied()
        .ok_or(SearchError::TermNotFound("for 立春"))?;

    // Year
    let sexagenary_year = if jd < start_of_spring.jd_ut {
        civil_year - 1
    } else {
        civil_year
    };
    let year = year_pillar(sexagenary_year);

    // Month
    let month_nodes = node_terms_of(&tables[..2]);
    let month_term = governing_node(&month_nodes, jd);
    let month_branch = month_term
        .and_then(|e| e.term.month_branch())
        .unwrap_or_else(|| Branch::from_index((local.month() - 1) as u8));
    let month = month_pillar(year.stem, month_branch);

    // Day
    let date = local.date();
    let day = day_pillar(date);

    // Hour
    let hour = match config.hour_basis {
        HourBasis::Civil => local.hour(),
        HourBasis::Utc => birth.utc.hour(),
    };
    let late_zi = hour == 23;
    let hour_branch = Branch::from_hour(hour);
    let hour_day_stem = if late_zi {
        let next = date
            .succ_opt()
            .ok_or_else(|| SearchError::InvalidInput(format!("no day after {date}")))?;
        day_pillar(next).stem
    } else {
        day.stem
    };
    let hour = hour_pillar(hour_day_stem, hour_branch);

    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };

    // Only the destiny palace needs the lunar month; the pillars stand without it.
    let lunar_date = match lunar.to_lunar(civil_year, local.month(), local.day()) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!(
                date = %local.date(),
                error = %e,
                "lunar conversion failed, destiny palace falls back to 子"
            );
            None
        }
    };
    let destiny = lunar_date
        .map(|d| destiny_palace(d.month, Branch::from_hour(local.hour())))
        .unwrap_or(Branch::Zi);

    let direction = Direction::for_birth(birth.input.gender, year.stem.polarity());
    let nodes = node_terms_of(&tables);
    let luck = luck_start(&nodes, jd, direction)?;

    debug!(
        pillars = %pillars,
        sexagenary_year,
        late_zi,
        basis = %config.hour_basis,
        "bazi chart computed"
    );

    Ok(BaziChart {
        pillars,
        sexagenary_year,
        start_of_spring,
        month_term,
        hour_basis: config.hour_basis,
        late_zi,
        profile: elemental_profile(&pillars),
        ten_gods: ten_gods(&pillars),
        zodiac: year.branch.zodiac().to_string(),
        lunar: lunar_date,
        destiny_palace: destiny,
        destiny_explanation: destiny_explanation(destiny).to_string(),
        luck_start: luck,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::birth::{BirthInput, resolve_birth};
    use crate::solar_term_types::TermSource;
    use chrono::{NaiveDate, NaiveDateTime};
    use ganzhi_base::{Gender, Stem};
    use ganzhi_core::AnalyticEphemeris;
    use ganzhi_time::{IanaZoneResolver, TableLunarCalendar};

    fn local(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn chart(input: BirthInput, config: &BaziConfig) -> BaziChart {
        let birth = resolve_birth(&input, &IanaZoneResolver).unwrap();
        compute_bazi_chart(&birth, &AnalyticEphemeris::new(), &TableLunarCalendar, config).unwrap()
    }

    fn entry(term: SolarTerm, jd_ut: f64) -> SolarTermEntry {
        SolarTermEntry {
            term,
            jd_ut,
            source: TermSource::Ephemeris,
        }
    }

    #[test]
    fn governing_node_picks_latest_not_after() {
        let nodes = [
            entry(SolarTerm::StartOfSpring, 10.0),
            entry(SolarTerm::AwakeningOfInsects, 40.0),
        ];
        assert_eq!(governing_node(&nodes, 5.0), None);
        assert_eq!(governing_node(&nodes, 10.0).map(|e| e.term), Some(SolarTerm::StartOfSpring));
        assert_eq!(
            governing_node(&nodes, 55.0).map(|e| e.term),
            Some(SolarTerm::AwakeningOfInsects)
        );
    }

    #[test]
    fn luck_start_three_days_per_year() {
        let nodes = [
            entry(SolarTerm::StartOfSpring, 100.0),
            entry(SolarTerm::AwakeningOfInsects, 130.0),
        ];
        let fwd = luck_start(&nodes, 110.0, Direction::Forward).unwrap();
        assert_eq!(fwd.term, SolarTerm::AwakeningOfInsects);
        assert_eq!(fwd.years, 6.67);
        let back = luck_start(&nodes, 110.0, Direction::Backward).unwrap();
        assert_eq!(back.term, SolarTerm::StartOfSpring);
        assert_eq!(back.years, 3.33);
        assert!(matches!(
            luck_start(&nodes, 140.0, Direction::Forward),
            Err(SearchError::TermNotFound(_))
        ));
    }

    #[test]
    fn reference_chart() {
        let c = chart(
            BirthInput::new(local(1990, 5, 15, 10, 30), "Asia/Shanghai", Gender::Male),
            &BaziConfig::default(),
        );
        assert_eq!(c.pillars.to_string(), "庚午 癸巳 庚辰 丁丑");
        assert_eq!(c.zodiac, "马");
        assert_eq!(c.month_term.map(|e| e.term), Some(SolarTerm::StartOfSummer));
        assert_eq!(c.lunar.map(|d| (d.month, d.day)), Some((4, 21)));
        assert_eq!(c.destiny_palace, Branch::Yin);
        assert_eq!(c.luck_start.direction, Direction::Forward);
        assert_eq!(c.luck_start.term, SolarTerm::GrainInEar);
        assert!((7.1..7.35).contains(&c.luck_start.years), "{}", c.luck_start.years);
    }

    #[test]
    fn late_zi_uses_next_day_stem() {
        let c = chart(
            BirthInput::new(local(2024, 2, 10, 23, 30), "Asia/Shanghai", Gender::Female),
            &BaziConfig::default().with_hour_basis(HourBasis::Civil),
        );
        assert!(c.late_zi);
        // 2024-02-10 甲辰, 2024-02-11 乙巳 → 丙子
        assert_eq!(c.pillars.day.name(), "甲辰");
        assert_eq!(c.pillars.hour.branch, Branch::Zi);
        assert_eq!(c.pillars.hour.stem, Stem::Bing);
    }

    #[test]
    fn default_basis_reads_utc_hour() {
        let input = BirthInput::new(local(1990, 5, 15, 10, 30), "Asia/Shanghai", Gender::Male);
        let utc = chart(input.clone(), &BaziConfig::default());
        // 01:30 UTC (CDT, UTC+9) → 丑
        assert_eq!(utc.hour_basis, HourBasis::Utc);
        assert_eq!(utc.pillars.hour.branch, Branch::Chou);
        assert_eq!(utc.pillars.day.name(), "庚辰");
        let civil = chart(input, &BaziConfig::default().with_hour_basis(HourBasis::Civil));
        assert_eq!(civil.pillars.hour.branch, Branch::Si);
        assert_eq!(civil.pillars.day, utc.pillars.day);
    }

    #[test]
    fn january_birth_before_spring_uses_previous_year() {
        let c = chart(
            BirthInput::new(local(2024, 1, 20, 12, 0), "Asia/Shanghai", Gender::Male),
            &BaziConfig::default(),
        );
        assert_eq!(c.sexagenary_year, 2023);
        assert_eq!(c.pillars.year.name(), "癸卯");
        // 小寒 opened an 丑 month; five tigers from 癸 → 乙丑
        assert_eq!(c.pillars.month.name(), "乙丑");
        // yang male rule: 癸 is yin → backward
        assert_eq!(c.luck_start.direction, Direction::Backward);
        assert_eq!(c.luck_start.term, SolarTerm::MinorCold);
    }

    #[test]
    fn pillars_survive_dates_outside_lunar_table() {
        let c = chart(
            BirthInput::new(local(1899, 6, 1, 12, 0), "Asia/Shanghai", Gender::Male),
            &BaziConfig::default(),
        );
        assert_eq!(c.lunar, None);
        assert_eq!(c.destiny_palace, Branch::Zi);
        assert_eq!(c.pillars.year.name(), "己亥");
        assert!((c.profile.weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);

        let late = chart(
            BirthInput::new(local(2150, 6, 1, 12, 0), "Asia/Shanghai", Gender::Female),
            &BaziConfig::default(),
        );
        assert_eq!(late.lunar, None);
        assert_eq!(late.pillars.year.name(), "庚戌");
    }

    #[test]
    fn rejects_invalid_term_config() {
        let birth = resolve_birth(
            &BirthInput::new(local(1990, 5, 15, 10, 30), "Asia/Shanghai", Gender::Male),
            &IanaZoneResolver,
        )
        .unwrap();
        let mut config = BaziConfig::default();
        config.solar_terms.max_iterations = 0;
        assert!(matches!(
            compute_bazi_chart(&birth, &AnalyticEphemeris::new(), &TableLunarCalendar, &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
