use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sizhu_ganzhi::{FourPillarChart, annotate_chart, annotate_palaces, day_pillar, nayin};

fn rules_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ganzhi_rules");
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(2_451_545))));
    group.bench_function("nayin", |b| {
        let p = day_pillar(2_451_545);
        b.iter(|| nayin(black_box(p)))
    });
    group.finish();
}

fn annotate_bench(c: &mut Criterion) {
    let chart: FourPillarChart = "己卯 丙子 戊午 戊午".parse().expect("valid chart");
    let mut group = c.benchmark_group("ganzhi_annotate");
    group.bench_function("annotate_chart", |b| b.iter(|| annotate_chart(black_box(&chart))));
    group.bench_function("annotate_palaces", |b| {
        b.iter(|| annotate_palaces(black_box(&chart)))
    });
    group.finish();
}

criterion_group!(benches, rules_bench, annotate_bench);
criterion_main!(benches);
