// benches/vector_ops.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use vecalg::prelude::*;

const BATCH_SIZE: usize = 1_000;

/// Generate a batch of random polar vectors.
fn random_polars(n: usize) -> Vec<PolarVec2> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| PolarVec2::new(rng.gen_range(0.0..50.0), rng.gen_range(-10.0..10.0)))
        .collect()
}

/// Benchmark polar addition, which round-trips through Cartesian form.
fn bench_polar_add(c: &mut Criterion) {
    let ps = random_polars(BATCH_SIZE + 1);

    c.bench_function("polar add × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut acc = ps[0];
            for p in &ps[1..] {
                acc = black_box(&acc).add(black_box(p));
            }
            black_box(acc)
        })
    });

    c.bench_function("polar dot (closed form) × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut acc = 0.0;
            for pair in ps.windows(2) {
                acc += black_box(&pair[0]).dot(black_box(&pair[1]));
            }
            black_box(acc)
        })
    });
}

/// Benchmark complex multiplication and root extraction.
fn bench_complex(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let zs: Vec<Complex> = (0..BATCH_SIZE)
        .map(|_| Complex::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();

    c.bench_function("complex multiply × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut acc = Complex::new(1.0, 0.0);
            for z in &zs {
                acc = black_box(&acc).multiply(black_box(z));
            }
            black_box(acc)
        })
    });

    let z = Complex::new(3.0, 4.0);
    c.bench_function("complex 8th roots", |bencher| {
        bencher.iter(|| black_box(black_box(&z).roots(8)))
    });
}

/// Benchmark the 3D cross product.
fn bench_cross(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let vs: Vec<Vec3> = (0..BATCH_SIZE + 1)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            )
        })
        .collect();

    c.bench_function("vec3 cross × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut acc = vs[0];
            for v in &vs[1..] {
                acc = black_box(&acc).cross(black_box(v));
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_polar_add, bench_complex, bench_cross);
criterion_main!(benches);
