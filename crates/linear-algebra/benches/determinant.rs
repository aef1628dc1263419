use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use linear_algebra::{DMatrix, Mat4};

fn random_dmatrix(rng: &mut fastrand::Rng, n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |_, _| rng.f64() * 10.0 - 5.0)
}

fn determinant(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(0xde7e_4411_a47e_0003);

    let fixed = Mat4::<f64>::from_fn(|_, _| rng.f64() * 10.0 - 5.0);
    c.bench_function("mat4 determinant", |b| {
        b.iter(|| black_box(fixed).determinant())
    });
    c.bench_function("mat4 triangular determinant", |b| {
        b.iter(|| black_box(fixed).triangular_determinant())
    });
    c.bench_function("mat4 invert", |b| b.iter(|| black_box(fixed).try_invert()));

    for n in [4, 6, 8] {
        let m = random_dmatrix(&mut rng, n);
        c.bench_function(&format!("dmatrix{n} determinant"), |b| {
            b.iter(|| black_box(&m).determinant())
        });
        c.bench_function(&format!("dmatrix{n} cofactor determinant"), |b| {
            b.iter(|| black_box(&m).cofactor_determinant())
        });
    }
}

criterion_group!(benches, determinant);
criterion_main!(benches);
