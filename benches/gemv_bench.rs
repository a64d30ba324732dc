//! GEMV benchmarks for zgemv-rs
//!
//! Compares the row-major `ConjTrans` path (vector conjugation) against the
//! column-major `ConjTrans` engine call on the same logical matrix, and against
//! conjugating the whole matrix up front.
//!
//! Run with: cargo bench --bench gemv_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use zgemv_rs::{zgemv, Layout, Transpose};

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn bench_conj_trans(c: &mut Criterion) {
    let mut group = c.benchmark_group("zgemv_conj_trans");
    group.sample_size(20);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let alpha = Complex64::new(0.5, -1.0);
    let beta = Complex64::new(1.0, 0.25);

    for size in [64usize, 256, 1024] {
        group.throughput(Throughput::Elements((size * size) as u64));

        let mut rng = StdRng::seed_from_u64(42);
        let a_row = random_vec(&mut rng, size * size);
        let x = random_vec(&mut rng, size);
        let y_template = random_vec(&mut rng, size);

        // Same logical matrix in column-major order.
        let mut a_col = vec![Complex64::new(0.0, 0.0); size * size];
        for i in 0..size {
            for j in 0..size {
                a_col[i + j * size] = a_row[i * size + j];
            }
        }

        group.bench_with_input(BenchmarkId::new("row_major", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut y = y_template.clone();
                zgemv(
                    Layout::RowMajor,
                    Transpose::ConjTrans,
                    n,
                    n,
                    alpha,
                    &a_row,
                    n,
                    &x,
                    1,
                    beta,
                    &mut y,
                    1,
                )
                .unwrap();
                y
            })
        });

        group.bench_with_input(BenchmarkId::new("col_major", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut y = y_template.clone();
                zgemv(
                    Layout::ColMajor,
                    Transpose::ConjTrans,
                    n,
                    n,
                    alpha,
                    &a_col,
                    n,
                    &x,
                    1,
                    beta,
                    &mut y,
                    1,
                )
                .unwrap();
                y
            })
        });

        group.bench_with_input(
            BenchmarkId::new("row_major_conj_matrix", size),
            &size,
            |bench, &n| {
                bench.iter(|| {
                    let a_conj: Vec<Complex64> = a_row.iter().map(|v| v.conj()).collect();
                    let mut y = y_template.clone();
                    zgemv(
                        Layout::RowMajor,
                        Transpose::Trans,
                        n,
                        n,
                        alpha,
                        &a_conj,
                        n,
                        &x,
                        1,
                        beta,
                        &mut y,
                        1,
                    )
                    .unwrap();
                    y
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_conj_trans);
criterion_main!(benches);
