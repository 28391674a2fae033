use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cvkit_geometry::Point2i;
use cvkit_ransac::{extract_lines, fit_line_ransac, LineRansacParams};
use rand::prelude::*;
use rand::SeedableRng;

/// Generate `n` points, 70% on y = 2x + 3 and the rest uniform noise.
fn generate_line_data(n: usize) -> Vec<Point2i> {
    let mut rng = StdRng::seed_from_u64(0);
    let on_line = n * 7 / 10;
    let mut points = (0..on_line as i64)
        .map(|x| Point2i::new(x, 2 * x + 3))
        .collect::<Vec<_>>();
    let extent = on_line.max(1) as i64;
    for _ in on_line..n {
        points.push(Point2i::new(
            rng.random_range(0..extent),
            rng.random_range(0..2 * extent + 3),
        ));
    }
    points.shuffle(&mut rng);
    points
}

fn bench_fit_line_ransac(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_line_ransac");
    for &n in &[100, 1000, 10000] {
        let points = generate_line_data(n);
        let params = LineRansacParams {
            max_iterations: 5000,
            min_inliers: n * 6 / 10,
            distance_threshold: 1.0,
            random_seed: Some(0),
            refine: false,
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let _ = std::hint::black_box(fit_line_ransac(&points, &params));
            });
        });
    }
    group.finish();
}

fn bench_extract_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_lines");
    for &n in &[1000, 10000] {
        let points = generate_line_data(n);
        let params = LineRansacParams {
            max_iterations: 1000,
            min_inliers: n / 10,
            distance_threshold: 2.0,
            random_seed: Some(0),
            refine: true,
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let _ = std::hint::black_box(extract_lines(&points, &params, 4));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit_line_ransac, bench_extract_lines);
criterion_main!(benches);
