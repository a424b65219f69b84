// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for breadcrumb resolution.
//!
//! Measures:
//! - Ancestor chain search (hit deep in the tree, and a miss)
//! - Full segment construction including sibling lists

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_trellis::ui::breadcrumbs::{build_segments, find_ancestor_chain, NavigationNode};
use std::hint::black_box;

/// Builds a complete tree `fanout` wide and `depth` deep.
///
/// Paths look like `/n0/n3/n1`.
fn generate_forest(fanout: usize, depth: usize) -> Vec<NavigationNode> {
    fn level(prefix: &str, fanout: usize, depth: usize) -> Vec<NavigationNode> {
        if depth == 0 {
            return Vec::new();
        }
        (0..fanout)
            .map(|i| {
                let path = format!("{prefix}/n{i}");
                NavigationNode::new(format!("n{i}"), format!("Node {i}"))
                    .with_children(level(&path, fanout, depth - 1))
                    .with_path(path)
            })
            .collect()
    }
    level("", fanout, depth)
}

/// Path of the last node visited in pre-order, the worst case for the search.
fn last_path(fanout: usize, depth: usize) -> String {
    (0..depth).map(|_| format!("/n{}", fanout - 1)).collect()
}

fn bench_find_ancestor_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadcrumbs");

    for (fanout, depth) in [(4, 4), (8, 4), (6, 6)] {
        let forest = generate_forest(fanout, depth);
        let target = last_path(fanout, depth);
        let label = format!("{fanout}x{depth}");

        group.bench_with_input(
            BenchmarkId::new("find_ancestor_chain_hit", &label),
            &target,
            |b, target| b.iter(|| black_box(find_ancestor_chain(&forest, black_box(target)))),
        );
        group.bench_with_input(
            BenchmarkId::new("find_ancestor_chain_miss", &label),
            &"/missing",
            |b, target| b.iter(|| black_box(find_ancestor_chain(&forest, black_box(target)))),
        );
    }

    group.finish();
}

fn bench_build_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadcrumbs");

    let forest = generate_forest(8, 5);
    let target = last_path(8, 5);
    group.bench_function("build_segments", |b| {
        b.iter(|| black_box(build_segments(&forest, black_box(&target))));
    });

    group.finish();
}

criterion_group!(benches, bench_find_ancestor_chain, bench_build_segments);
criterion_main!(benches);
