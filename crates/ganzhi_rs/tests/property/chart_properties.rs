use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use ganzhi_rs::*;
use proptest::prelude::*;

static ENGINE: LazyLock<ChartEngine> =
    LazyLock::new(|| ChartEngine::new(GanzhiConfig::default()).expect("default config is valid"));

fn local(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, 0))
        .expect("strategy yields valid dates")
}

/// Births whose years the lunar table covers.
fn birth_strategy() -> impl Strategy<Value = BirthInput> {
    births_in(1901..2099)
}

fn births_in(years: std::ops::Range<i32>) -> impl Strategy<Value = BirthInput> {
    (
        years,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        prop::bool::ANY,
        -179.0f64..179.0,
        -60.0f64..60.0,
    )
        .prop_map(|(y, m, d, h, mi, male, lon, lat)| {
            let gender = if male { Gender::Male } else { Gender::Female };
            BirthInput::new(local(y, m, d, h, mi), "UTC", gender)
                .with_location(GeoLocation::new(lon, lat))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn bazi_pillars_valid_and_weights_normalized(input in births_in(1700..2300)) {
        let chart = ENGINE.compute_bazi(&input).unwrap().chart;
        for p in chart.pillars.as_array() {
            prop_assert!(Pillar::new(p.stem, p.branch).is_some(), "bad pillar {}", p);
        }
        let sum: f64 = chart.profile.weights.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(chart.luck_start.years >= 0.0 && chart.luck_start.years <= 11.0);
    }

    #[test]
    fn bazi_deterministic(input in births_in(1700..2300)) {
        let a = ENGINE.compute_bazi(&input).unwrap();
        let b = ENGINE.compute_bazi(&input).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn late_zi_shares_next_day_stem(y in 1901i32..2099, m in 1u32..=12, d in 1u32..=27) {
        let late_at = local(y, m, d, 23, 30);
        let early_at = late_at + Duration::minutes(40);
        let late = ENGINE
            .compute_bazi(&BirthInput::new(late_at, "UTC", Gender::Male))
            .unwrap()
            .chart;
        let early = ENGINE
            .compute_bazi(&BirthInput::new(early_at, "UTC", Gender::Male))
            .unwrap()
            .chart;
        prop_assert!(late.late_zi);
        prop_assert_eq!(late.pillars.hour.branch, Branch::Zi);
        prop_assert_eq!(early.pillars.hour.branch, Branch::Zi);
        prop_assert_eq!(late.pillars.day.offset(1), early.pillars.day);
        prop_assert_eq!(late.pillars.hour.stem, early.pillars.hour.stem);
    }

    #[test]
    fn ziwei_ring_complete(input in birth_strategy()) {
        let chart = ENGINE.compute_ziwei(&input, None).unwrap().chart;
        prop_assert_eq!(chart.palaces.len(), 12);
        for (i, p) in chart.palaces.iter().enumerate() {
            prop_assert_eq!(p.palace.index() as usize, i);
            prop_assert!(!p.major.is_empty());
        }
        prop_assert_eq!(chart.major_placements(), 14);
        let minors: usize = chart.palaces.iter().map(|p| p.minor.len()).sum();
        prop_assert_eq!(minors, 14);
    }

    #[test]
    fn major_limits_monotonic(input in birth_strategy()) {
        let chart = ENGINE.compute_ziwei(&input, None).unwrap().chart;
        let schedule = &chart.major_limits;
        prop_assert_eq!(schedule.periods.len(), 12);
        prop_assert_eq!(schedule.periods[0].palace, chart.life_palace);
        let step = schedule.direction.step();
        for w in schedule.periods.windows(2) {
            prop_assert!(w[1].start_age > w[0].start_age);
            prop_assert_eq!(w[1].start_age, w[0].end_age + 1);
            prop_assert_eq!(w[0].duration, w[1].duration);
            prop_assert_eq!(w[1].palace, w[0].palace.step(step));
        }
        prop_assert_eq!(schedule.periods[0].duration, chart.bureau.period_years());
    }
}
