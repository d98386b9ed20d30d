//! Benchmarks for canonical product and sum assembly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use altair::prelude::*;

/// Builds the product x0^1 * x1^2 * ... * x(n-1)^n one factor at a time.
fn assemble_product(n: usize) -> Expr {
    let mut acc = Expr::integer(1);
    for k in 0..n {
        let sym = Expr::symbol(&format!("x{k}"));
        let factor = pow(&sym, &Expr::integer(i64::try_from(k).unwrap() + 1)).unwrap();
        acc = mul(&acc, &factor).unwrap();
    }
    acc
}

/// Builds the sum of k*xk for k in 0..n.
fn assemble_sum(n: usize) -> Expr {
    let mut acc = Expr::integer(0);
    for k in 0..n {
        let sym = Expr::symbol(&format!("x{k}"));
        let term = mul(&Expr::integer(i64::try_from(k).unwrap() + 1), &sym).unwrap();
        acc = add(&acc, &term);
    }
    acc
}

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_product");
    for size in [8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| black_box(assemble_product(n)));
        });
    }
    group.finish();
}

fn bench_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_sum");
    for size in [8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            b.iter(|| black_box(assemble_sum(n)));
        });
    }
    group.finish();
}

fn bench_numeric_folding(c: &mut Criterion) {
    c.bench_function("rational_coefficient_fold", |b| {
        b.iter(|| {
            let mut acc = Expr::integer(1);
            for k in 1..64i64 {
                let r = Expr::number(Number::rational(k, k + 1).unwrap());
                acc = mul(&acc, &r).unwrap();
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_products, bench_sums, bench_numeric_folding);
criterion_main!(benches);
