// ============================================================================
// Stack Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Push/Pop - Raw LIFO throughput at different capacities
// 2. Positional - pick/roll cost as a function of depth
// 3. RPN Sequences - Mixed primitive sequences as an evaluator would issue them
// 4. Numeric - Determinant and inverse of small matrices
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rpn_stack::numeric::{Matrix4d, Matrix4i};
use rpn_stack::prelude::*;
use std::hint::black_box;

fn filled(capacity: usize) -> Stack<u64> {
    let mut stack = Stack::new(capacity);
    for i in 0..capacity as u64 {
        stack.push(i).unwrap();
    }
    stack
}

// ============================================================================
// Push/Pop Benchmarks
// ============================================================================

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for capacity in [16usize, 1024, 65536].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            capacity,
            |b, &capacity| {
                let mut stack = Stack::new(capacity);
                b.iter(|| {
                    for i in 0..capacity as u64 {
                        stack.push(black_box(i)).unwrap();
                    }
                    while let Ok(v) = stack.pop() {
                        black_box(v);
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Positional Benchmarks
// pick copies one element, roll shifts `depth` elements
// ============================================================================

fn benchmark_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    for depth in [1usize, 16, 256].iter() {
        group.bench_with_input(BenchmarkId::new("pick", depth), depth, |b, &depth| {
            let mut stack = filled(depth + 1);
            stack.allocate(depth + 2);
            b.iter(|| {
                stack.pick(black_box(depth)).unwrap();
                stack.drop().unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("roll", depth), depth, |b, &depth| {
            let mut stack = filled(depth + 1);
            b.iter(|| stack.roll(black_box(depth)).unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// RPN Sequence Benchmarks
// ============================================================================

fn benchmark_rpn_sequence(c: &mut Criterion) {
    c.bench_function("rpn_sequence", |b| {
        let mut stack = filled(3);
        stack.allocate(8);
        b.iter(|| {
            stack.dup().unwrap();
            stack.rot().unwrap();
            stack.over().unwrap();
            stack.swap().unwrap();
            stack.tuck().unwrap();
            stack.nip().unwrap();
            stack.drop().unwrap();
            stack.drop().unwrap();
            black_box(stack.peek().unwrap());
        });
    });
}

// ============================================================================
// Numeric Benchmarks
// ============================================================================

fn benchmark_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix4");

    let mi = Matrix4i::new([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
    group.bench_function("determinant_i32", |b| {
        b.iter(|| black_box(black_box(mi).determinant()))
    });

    let md: Matrix4d = mi.cast();
    group.bench_function("inverse_f64", |b| {
        b.iter(|| black_box(black_box(md).inverse()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_pop,
    benchmark_positional,
    benchmark_rpn_sequence,
    benchmark_matrix
);
criterion_main!(benches);
