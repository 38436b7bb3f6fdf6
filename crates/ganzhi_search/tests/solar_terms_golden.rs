//! Golden-value tests for solar-term instants (UT).
//!
//! Reference instants from the published Chinese almanac, converted from
//! Beijing time and rounded to the minute.

use ganzhi_base::SolarTerm;
use ganzhi_core::AnalyticEphemeris;
use ganzhi_search::{
    SolarTermConfig, TermSource, node_terms_around, solar_term_table, start_of_spring,
};
use ganzhi_time::calendar_to_jd;

/// Allowed error: the solar theory is good to ~0.01° (~15 min).
const TOLERANCE_MIN: f64 = 20.0;

fn expected_jd(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    calendar_to_jd(
        year,
        month,
        f64::from(day) + (f64::from(hour) + f64::from(minute) / 60.0) / 24.0,
    )
}

fn assert_term(year: i32, term: SolarTerm, month: u32, day: u32, hour: u32, minute: u32) {
    let table = solar_term_table(&AnalyticEphemeris::new(), year, &SolarTermConfig::default());
    let entry = table.get(term).expect("term present");
    assert_eq!(entry.source, TermSource::Ephemeris);
    let off_min = (entry.jd_ut - expected_jd(year, month, day, hour, minute)) * 1440.0;
    assert!(
        off_min.abs() < TOLERANCE_MIN,
        "{year} {}: off by {off_min:.1} min",
        term.name()
    );
}

#[test]
fn start_of_spring_2024() {
    // 2024-02-04 16:27 CST
    assert_term(2024, SolarTerm::StartOfSpring, 2, 4, 8, 27);
    let e = start_of_spring(&AnalyticEphemeris::new(), 2024, &SolarTermConfig::default());
    assert_eq!(e.utc().map(|d| d.format("%Y-%m-%d").to_string()), Some("2024-02-04".into()));
}

#[test]
fn minor_cold_2024_precedes_spring() {
    // 2024-01-06 04:49 CST
    assert_term(2024, SolarTerm::MinorCold, 1, 5, 20, 49);
}

#[test]
fn node_terms_2024() {
    // 清明 04-04 15:02, 芒种 06-05 12:10, 立秋 08-07 08:09, 立冬 11-07 06:20 (CST)
    assert_term(2024, SolarTerm::ClearAndBright, 4, 4, 7, 2);
    assert_term(2024, SolarTerm::GrainInEar, 6, 5, 4, 10);
    assert_term(2024, SolarTerm::StartOfAutumn, 8, 7, 0, 9);
    assert_term(2024, SolarTerm::StartOfWinter, 11, 6, 22, 20);
}

#[test]
fn seasonal_anchors_2024() {
    assert_term(2024, SolarTerm::SpringEquinox, 3, 20, 3, 6);
    assert_term(2024, SolarTerm::WinterSolstice, 12, 21, 9, 21);
}

#[test]
fn estimated_terms_within_three_days() {
    let eph = AnalyticEphemeris::new();
    let refined = solar_term_table(&eph, 2024, &SolarTermConfig::default());
    let estimated = solar_term_table(&eph, 2024, &SolarTermConfig::estimated());
    for (r, e) in refined.entries.iter().zip(&estimated.entries) {
        assert_eq!(r.term, e.term);
        assert!((r.jd_ut - e.jd_ut).abs() < 3.0, "{}", r.term.name());
    }
}

#[test]
fn node_terms_cover_three_years() {
    let nodes = node_terms_around(&AnalyticEphemeris::new(), 1990, &SolarTermConfig::default());
    assert_eq!(nodes.len(), 36);
    assert_eq!(nodes[0].term, SolarTerm::MinorCold);
    let first = nodes[0].utc().expect("in range");
    assert_eq!(first.format("%Y-%m").to_string(), "1989-01");
    assert_eq!(nodes[35].term, SolarTerm::MajorSnow);
}
