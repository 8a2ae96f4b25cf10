//! Criterion benchmarks for duct routing: suggestion per cursor move and a
//! full begin/hover/commit gesture.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ductgeom::duct::{suggest_possible_leg_placement, DuctRouter};
use ductgeom::geom::{KernelCfg, Point};
use ductgeom::rand::{draw_duct_polyline, PolylineCfg, ReplayToken};

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    let cfg = KernelCfg::default();
    let points = draw_duct_polyline(PolylineCfg::default(), ReplayToken::new(2025, 0));
    let last = *points.last().unwrap();
    group.bench_function(BenchmarkId::new("suggest", points.len()), |b| {
        b.iter(|| {
            suggest_possible_leg_placement(last + nalgebra::vector![150.0, 90.0], &points, &cfg, 1.0)
        })
    });
    for &legs in &[8usize, 64] {
        group.bench_with_input(BenchmarkId::new("gesture", legs), &legs, |b, &legs| {
            b.iter_batched(
                || DuctRouter::new(cfg),
                |mut router| {
                    router.begin(Point::origin());
                    let mut cursor = Point::new(120.0, 0.0);
                    for k in 0..legs {
                        cursor += nalgebra::vector![60.0 + k as f64, 45.0];
                        router.hover(cursor, 1.0);
                        router.commit();
                    }
                    router.finish()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
