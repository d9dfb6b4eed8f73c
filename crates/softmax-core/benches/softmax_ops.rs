// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the softmax kernel in both stability modes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use softmax_core::{softmax_into, SoftmaxTransform, Stability};

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.37).sin() * 8.0).collect()
}

fn bench_softmax_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax_alloc");
    for &n in &[16usize, 256, 4096] {
        let input = ramp(n);
        group.throughput(Throughput::Elements(n as u64));
        for mode in Stability::ALL {
            let t = SoftmaxTransform::new(mode);
            group.bench_with_input(BenchmarkId::new(mode.as_str(), n), &input, |b, x| {
                b.iter(|| t.apply(black_box(x)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_softmax_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("softmax_into");
    for &n in &[16usize, 256, 4096] {
        let input = ramp(n);
        let mut output = vec![0.0; n];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| softmax_into(black_box(&input), &mut output, Stability::MaxShifted).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_softmax_alloc, bench_softmax_into);
criterion_main!(benches);
