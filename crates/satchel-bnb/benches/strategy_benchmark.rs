// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use satchel_bnb::best_first::BestFirstSolver;
use satchel_bnb::bfs::BreadthFirstSolver;
use satchel_bnb::dfs::DepthFirstSolver;
use satchel_bnb::monitor::no_op::NoOperationMonitor;
use satchel_model::item::Item;
use satchel_model::model::{Model, ModelBuilder};
use std::hint::black_box;

/// Uncorrelated instance with capacity at half the total weight.
fn random_model(seed: u64, num_items: usize) -> Model<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = ModelBuilder::preallocated(0, num_items);
    let mut total_weight = 0;
    for _ in 0..num_items {
        let weight = rng.random_range(1..=100);
        let value = rng.random_range(1..=100);
        total_weight += weight;
        builder.add_item(weight, value);
    }
    builder.set_capacity(total_weight / 2);
    builder.build()
}

fn bench_pruning_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("pruning_strategies");

    for num_items in [10usize, 20, 30, 40] {
        let model = random_model(0xC0FFEE, num_items);
        group.throughput(Throughput::Elements(num_items as u64));

        let mut dfs = DepthFirstSolver::preallocated(num_items);
        group.bench_with_input(BenchmarkId::new("DFS", num_items), &model, |b, model| {
            b.iter(|| {
                let outcome = dfs.solve(black_box(model), &mut NoOperationMonitor::new());
                black_box(outcome.max_profit())
            })
        });

        let mut best = BestFirstSolver::preallocated(num_items);
        group.bench_with_input(
            BenchmarkId::new("Best-First", num_items),
            &model,
            |b, model| {
                b.iter(|| {
                    let outcome = best.solve(black_box(model), &mut NoOperationMonitor::new());
                    black_box(outcome.max_profit())
                })
            },
        );
    }
    group.finish();
}

fn bench_exhaustive_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_bfs");

    // The full tree doubles per item; keep this small.
    for num_items in [8usize, 12, 16] {
        let model = random_model(0xBF5, num_items);
        let nodes = (1u64 << (num_items + 1)) - 1;
        group.throughput(Throughput::Elements(nodes));

        let mut bfs = BreadthFirstSolver::preallocated(num_items);
        group.bench_with_input(BenchmarkId::new("BFS", num_items), &model, |b, model| {
            b.iter(|| {
                let outcome = bfs.solve(black_box(model), &mut NoOperationMonitor::new());
                black_box(outcome.nodes_visited())
            })
        });
    }
    group.finish();
}

fn bench_model_build(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let items: Vec<Item<u64>> = (0..10_000)
        .map(|_| Item::new(rng.random_range(0..=1_000), rng.random_range(0..=1_000)))
        .collect();

    c.bench_function("model_build_10k", |b| {
        b.iter(|| Model::from_items(black_box(5_000u64), items.iter().copied()))
    });
}

criterion_group!(
    benches,
    bench_pruning_strategies,
    bench_exhaustive_bfs,
    bench_model_build
);
criterion_main!(benches);
