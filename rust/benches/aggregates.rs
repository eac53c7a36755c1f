use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use xvqm::{xang, xint, XMat4, XQuat, XVec3};

mod native;

const DIMENSIONS: usize = 1536;

fn random_points(count: usize) -> Vec<XVec3> {
    native::generate_random_signed(count * 3)
        .chunks_exact(3)
        .map(|c| XVec3::new(c[0], c[1], c[2]))
        .collect()
}

pub fn transform_benchmark(c: &mut Criterion) {
    let points = random_points(DIMENSIONS);
    let rotation = XQuat::axis_angle(XVec3::new(xint::ONE, xint::ONE, xint::ZERO), xang::DEG45);
    let model = XMat4::rot_trans(rotation, XVec3::new(xint::ONE, xint::ZERO, xint::ONE));

    let mut group = c.benchmark_group("Point Transforms");

    for i in 0..=5 {
        group.bench_with_input(BenchmarkId::new("xvqm apply_mat4", i), &i, |b, _| {
            b.iter(|| points.iter().map(|p| p.apply_mat4(&model)).collect::<Vec<_>>())
        });
        group.bench_with_input(BenchmarkId::new("xvqm apply_quat", i), &i, |b, _| {
            b.iter(|| points.iter().map(|p| p.apply_quat(rotation)).collect::<Vec<_>>())
        });
        group.bench_with_input(BenchmarkId::new("xvqm normal", i), &i, |b, _| {
            b.iter(|| points.iter().map(|p| p.normal()).collect::<Vec<_>>())
        });
    }
}

pub fn matrix_benchmark(c: &mut Criterion) {
    let a = XMat4::perspective(
        xang(700),
        xint::from_int(16),
        xint::from_int(9),
        xint::ONE,
        xint::from_int(100),
    );
    let b = XMat4::rotation(XVec3::new(xint::ZERO, xint::ONE, xint::ZERO), xang(300));
    let floats = (a.0.map(|v| v.to_f32()), b.0.map(|v| v.to_f32()));

    let mut group = c.benchmark_group("Matrix Algebra");

    for i in 0..=5 {
        group.bench_with_input(BenchmarkId::new("xvqm mul", i), &i, |bench, _| {
            bench.iter(|| a * b)
        });
        group.bench_with_input(BenchmarkId::new("Rust Native mul", i), &i, |bench, _| {
            bench.iter(|| native::mat4_mul_cpu(&floats.0, &floats.1))
        });
        group.bench_with_input(BenchmarkId::new("xvqm invert", i), &i, |bench, _| {
            bench.iter(|| (a * b).invert())
        });
        group.bench_with_input(BenchmarkId::new("xvqm slerp", i), &i, |bench, _| {
            let from = XQuat::IDENTITY;
            let to = XQuat::axis_angle(XVec3::new(xint::ZERO, xint::ZERO, xint::ONE), xang::DEG90);
            bench.iter(|| from.slerp(to, xint::HALF))
        });
    }
}

criterion_group!(benches, transform_benchmark, matrix_benchmark);
criterion_main!(benches);
