//! Benchmarks for the 3-coloring solver on adder-reduction graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use npcompute::prelude::*;

fn adder_graph(n: usize, a: u64, b: u64) -> ThreeColorGraph {
    let mut g = ThreeColorGraph::new();
    let ra = Const::new(&mut g, a, n).unwrap();
    let rb = Const::new(&mut g, b, n).unwrap();
    add(&mut g, &ra, &rb, None).unwrap();
    g
}

/// Solver throughput on adders of increasing bit width, a fixed operand
/// pair per width chosen to avoid the trivially-zero corner case.
fn bench_adder_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver_adder_width");

    for n in [1usize, 2, 3, 4].iter() {
        let max = 1u64 << n;
        let a = max / 2;
        let b = max - 1;
        let g = adder_graph(*n, a, b);
        let solver = Solver::new();

        group.bench_with_input(BenchmarkId::new("bits", n), n, |bencher, _| {
            bencher.iter(|| solver.solve(black_box(&g)))
        });
    }

    group.finish();
}

/// Solver performance on an unsatisfiable graph (4-clique), which should
/// be rejected by the cheap clique check before backtracking starts.
fn bench_unsatisfiable_clique(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver_unsatisfiable");

    let mut g = ThreeColorGraph::new();
    let v: Vec<_> = (0..4).map(|_| g.add_free_vertex()).collect();
    for i in 0..4 {
        for j in (i + 1)..4 {
            g.add_edge(v[i], v[j]).unwrap();
        }
    }
    let solver = Solver::new();

    group.bench_function("4-clique", |b| b.iter(|| solver.solve(black_box(&g))));

    group.finish();
}

criterion_group!(benches, bench_adder_widths, bench_unsatisfiable_clique);
criterion_main!(benches);
