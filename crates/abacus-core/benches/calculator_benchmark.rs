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

use abacus_core::calculator::Calculator;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// LCG constants, used here only as arbitrary non-trivial operands.
const A: i32 = 1_664_525;
const B: i32 = 1_013_904_223;

fn bench_operations(c: &mut Criterion) {
    let calculator = Calculator::<i32>::new();

    let mut group = c.benchmark_group("calculator");

    group.bench_function("add", |bench| {
        bench.iter(|| calculator.add(black_box(A), black_box(B)))
    });
    group.bench_function("subtract", |bench| {
        bench.iter(|| calculator.subtract(black_box(A), black_box(B)))
    });
    group.bench_function("multiply", |bench| {
        bench.iter(|| calculator.multiply(black_box(A), black_box(B)))
    });
    group.bench_function("divide", |bench| {
        bench.iter(|| calculator.divide(black_box(B), black_box(A)))
    });
    group.bench_function("divide_by_zero", |bench| {
        bench.iter(|| calculator.divide(black_box(B), black_box(0)))
    });

    group.finish();
}

criterion_group!(benches, bench_operations);
criterion_main!(benches);
