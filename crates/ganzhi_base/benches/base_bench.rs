use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::{
    Branch, FourPillars, MajorStarInputs, MinorStarInputs, Palace, Stem, day_pillar,
    elemental_profile, hour_pillar, month_pillar, place_major_stars, place_minor_stars,
    year_pillar,
};

fn pillar_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap_or_default();
    let mut group = c.benchmark_group("pillars");
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(date))));
    group.bench_function("four_pillars_profile", |b| {
        b.iter(|| {
            let year = year_pillar(black_box(1990));
            let day = day_pillar(date);
            let chart = FourPillars {
                year,
                month: month_pillar(year.stem, Branch::Si),
                day,
                hour: hour_pillar(day.stem, Branch::Si),
            };
            elemental_profile(&chart)
        })
    });
    group.finish();
}

fn ziwei_bench(c: &mut Criterion) {
    let majors = MajorStarInputs {
        life: Palace::Wealth,
        lunar_month: 4,
        lunar_year_stem: Stem::Geng,
        sun_longitude_deg: 54.0,
        moon_longitude_deg: 292.3,
    };
    let minors = MinorStarInputs {
        hour: Branch::Si,
        day_stem: Stem::Geng,
        year_stem: Stem::Geng,
        year_branch: Branch::Wu,
        lunar_month: 4,
    };
    let mut group = c.benchmark_group("ziwei");
    group.bench_function("major_stars", |b| b.iter(|| place_major_stars(black_box(&majors))));
    group.bench_function("minor_stars", |b| b.iter(|| place_minor_stars(black_box(&minors))));
    group.finish();
}

criterion_group!(benches, pillar_bench, ziwei_bench);
criterion_main!(benches);
