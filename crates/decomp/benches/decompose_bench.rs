//! Criterion benchmarks for the convex-decomposition engine.
//! Focus: comb polygons with an increasing tooth count, since each tooth
//! adds two reflex vertices and grows both the catalog and the DP table.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use decomp::{DecompCfg, Engine, InputVertex};

/// A comb with `teeth` square teeth on top of a base rectangle, each tooth
/// separated by a notch (two reflex vertices per notch).
fn comb_polygon(teeth: usize) -> Vec<InputVertex> {
    let tooth_w = 1.0;
    let gap_w = 1.0;
    let base_h = 2.0;
    let tooth_h = 1.0;
    let width = teeth as f64 * tooth_w + (teeth.saturating_sub(1)) as f64 * gap_w;

    let mut pts: Vec<(f64, f64)> = Vec::new();
    pts.push((0.0, 0.0));
    pts.push((width, 0.0));

    for t in (0..teeth).rev() {
        let x0 = t as f64 * (tooth_w + gap_w);
        let x1 = x0 + tooth_w;
        pts.push((x1, base_h));
        pts.push((x1, base_h + tooth_h));
        pts.push((x0, base_h + tooth_h));
        pts.push((x0, base_h));
    }

    pts.into_iter()
        .enumerate()
        .map(|(id, (x, y))| InputVertex { id, x, y })
        .collect()
}

fn bench_comb(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_comb");
    for &teeth in &[1usize, 2, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("teeth", teeth), &teeth, |b, &teeth| {
            b.iter_batched(
                || Engine::new(comb_polygon(teeth), DecompCfg::default()).unwrap(),
                |engine| {
                    let _pieces = engine.decompose().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_comb);
criterion_main!(benches);
