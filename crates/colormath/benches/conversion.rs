use colormath::opt::MatchOptions;
use colormath::{named, ColorModel, ContrastAlgorithm, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn run_benchmarks(c: &mut Criterion) {
    let indigo = Rgb::new(75.0, 0.0, 130.0);
    let candidates: Vec<Rgb> = named::all().collect();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("rgb-to-hsl", |b| b.iter(|| black_box(indigo).to_hsl()));
    group.bench_function("rgb-to-lab", |b| b.iter(|| black_box(indigo).to_lab()));
    group.bench_function("lab-to-rgb", |b| {
        let lab = indigo.to_lab();
        b.iter(|| black_box(lab).to_rgb())
    });
    group.finish();

    let mut group = c.benchmark_group("difference");
    for algorithm in [
        ContrastAlgorithm::Naive,
        ContrastAlgorithm::DeltaE94,
        ContrastAlgorithm::DeltaE2000,
    ] {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(indigo).contrast(&Rgb::RED, algorithm))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("closest-match");
    for algorithm in [ContrastAlgorithm::DeltaE94, ContrastAlgorithm::DeltaE2000] {
        let options = MatchOptions::builder().algorithm(algorithm).build();
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| black_box(indigo).closest_match(&candidates, &options))
        });
    }
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
