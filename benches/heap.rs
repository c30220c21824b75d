// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{thread_rng, Rng};

use weighted_heap::{Mode, Node, WeightedHeap};

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn random_nodes(count: usize) -> Vec<Node<u64, ()>> {
    let mut rng = thread_rng();
    (0..count).map(|_| Node::new(rng.gen(), ())).collect()
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for &size in SIZES {
        let nodes = random_nodes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &nodes, |b, nodes| {
            b.iter(|| {
                let mut heap = WeightedHeap::with_capacity(Mode::Min, nodes.len());
                for node in nodes {
                    heap.push(node.weight, node.payload);
                }
                heap
            });
        });
    }
    group.finish();
}

fn bench_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");
    for &size in SIZES {
        let nodes = random_nodes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &nodes, |b, nodes| {
            b.iter_batched(
                || {
                    let mut heap = WeightedHeap::from_nodes(nodes.clone(), Mode::Min);
                    heap.reset();
                    heap
                },
                |mut heap| {
                    while heap.pop().is_ok() {}
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset");
    for &size in SIZES {
        let nodes = random_nodes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &nodes, |b, nodes| {
            b.iter_batched(
                || nodes.clone(),
                |nodes| {
                    let mut heap = WeightedHeap::from_nodes(nodes, Mode::Max);
                    heap.reset();
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_pop, bench_reset);
criterion_main!(benches);
