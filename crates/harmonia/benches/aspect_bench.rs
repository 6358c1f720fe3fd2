use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harmonia::aspects::AspectDetector;
use harmonia::chart::{Body, Chart, ALL_PLANETS};
use harmonia::reference::ReferenceTables;
use harmonia::synastry::SynastryScorer;

fn spread_bodies(offset: f64) -> Vec<Body> {
    ALL_PLANETS
        .iter()
        .enumerate()
        .map(|(i, planet)| {
            let lon = (offset + i as f64 * 31.0) % 360.0;
            Body::new(*planet, lon, (i % 12) as u8 + 1, lon % 30.0).unwrap()
        })
        .collect()
}

fn bench_match_separation(c: &mut Criterion) {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);

    c.bench_function("match_separation", |b| {
        b.iter(|| detector.match_separation(black_box(118.5)))
    });
}

fn bench_detect(c: &mut Criterion) {
    let tables = ReferenceTables::standard();
    let detector = AspectDetector::new(tables);
    let bodies = spread_bodies(0.0);

    c.bench_function("detect", |b| b.iter(|| detector.detect(black_box(&bodies))));
}

fn bench_calculate_connection(c: &mut Criterion) {
    let tables = ReferenceTables::standard();
    let scorer = SynastryScorer::new(tables).unwrap();
    let chart_a = Chart::new(None, spread_bodies(0.0)).unwrap();
    let chart_b = Chart::new(None, spread_bodies(17.0)).unwrap();

    c.bench_function("calculate_connection", |b| {
        b.iter(|| scorer.calculate_connection(black_box(&chart_a), black_box(&chart_b)))
    });
}

criterion_group!(benches, bench_match_separation, bench_detect, bench_calculate_connection);
criterion_main!(benches);
