use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::Gender;
use ganzhi_core::AnalyticEphemeris;
use ganzhi_search::{
    BaziConfig, BirthInput, ResolvedBirth, SolarTermConfig, compute_bazi_chart,
    compute_ziwei_chart, resolve_birth, solar_term_table,
};
use ganzhi_time::{IanaZoneResolver, TableLunarCalendar};

fn reference_birth() -> ResolvedBirth {
    let local = NaiveDate::from_ymd_opt(1990, 5, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .expect("valid date");
    resolve_birth(
        &BirthInput::new(local, "Asia/Shanghai", Gender::Male),
        &IanaZoneResolver,
    )
    .expect("should resolve")
}

fn solar_term_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let mut group = c.benchmark_group("solar_terms");
    group.bench_function("table_refined", |b| {
        b.iter(|| solar_term_table(&eph, black_box(2024), &SolarTermConfig::default()))
    });
    group.bench_function("table_estimated", |b| {
        b.iter(|| solar_term_table(&eph, black_box(2024), &SolarTermConfig::estimated()))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let birth = reference_birth();
    let config = BaziConfig::default();

    let mut group = c.benchmark_group("charts");
    group.sample_size(50);
    group.bench_function("bazi", |b| {
        b.iter(|| {
            compute_bazi_chart(black_box(&birth), &eph, &TableLunarCalendar, &config)
                .expect("chart should compute")
        })
    });
    group.bench_function("ziwei", |b| {
        b.iter(|| {
            compute_ziwei_chart(black_box(&birth), &eph, &TableLunarCalendar, None)
                .expect("chart should compute")
        })
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, chart_bench);
criterion_main!(benches);
