//! Criterion benchmarks for QuickHull on random clouds.
//! Focus sizes: n in {100, 1_000, 10_000, 100_000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p quickhull

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use quickhull::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use quickhull::hull::{build_hull, build_hull_with, HullCfg};

fn cloud(n: usize, shape: CloudShape, seed: u64) -> Vec<quickhull::Point> {
    let cfg = CloudCfg {
        count: n,
        shape,
        grid: None,
    };
    draw_cloud(cfg, ReplayToken::new(seed, n as u64))
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("quickhull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("disk", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Disk { radius: 1.0 }, 43),
                |pts| {
                    let _hull = build_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("square_same_x", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Square { half_width: 1.0 }, 44),
                |pts| {
                    let _hull = build_hull_with(&pts, HullCfg::same_x()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
