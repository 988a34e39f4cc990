use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_rs::{
    CycleContext, DaYunTimeline, EngineConfig, Gender, Pillar, ShiKeChart, Stem, chart_text,
    timeline_text,
};

fn chart_bench(c: &mut Criterion) {
    let config = EngineConfig::default();
    let hour = Pillar::from_ordinal(2);
    let ke = Pillar::from_ordinal(26);

    let mut group = c.benchmark_group("chart");
    group.bench_function("from_ganzhi", |b| {
        b.iter(|| ShiKeChart::from_ganzhi(black_box(hour), black_box(ke), &config))
    });
    if let Ok(chart) = ShiKeChart::from_ganzhi(hour, ke, &config) {
        group.bench_function("next", |b| b.iter(|| black_box(&chart).next()));
        group.bench_function("text", |b| b.iter(|| chart_text(black_box(&chart), &config)));
    }
    group.finish();
}

fn timeline_bench(c: &mut Criterion) {
    let config = EngineConfig::default();
    let ctx = CycleContext {
        birth_year: 1990,
        year_stem: Stem::Geng,
        gender: Gender::Male,
        first_dayun: Pillar::from_ordinal(3),
        start_age: 3,
    };

    let mut group = c.benchmark_group("timeline");
    group.bench_function("build_8", |b| {
        b.iter(|| DaYunTimeline::build(black_box(ctx), &config))
    });
    if let Ok(t) = DaYunTimeline::build(ctx, &config) {
        group.bench_function("text", |b| {
            b.iter(|| timeline_text(black_box(&t), &config, Some(2024)))
        });
    }
    group.finish();
}

criterion_group!(benches, chart_bench, timeline_bench);
criterion_main!(benches);
