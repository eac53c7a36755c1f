#![allow(unused)]
use rand::Rng;
use xvqm::{xang, xint};

pub(crate) fn generate_random_angles(count: usize) -> Vec<xang> {
    (0..count)
        .map(|_| xang(rand::thread_rng().gen_range(0..4096)))
        .collect()
}

/// Positive values in `(0, 64)`, so every transcendental stays in its domain.
pub(crate) fn generate_random_positive(count: usize) -> Vec<xint> {
    (0..count)
        .map(|_| xint(rand::thread_rng().gen_range(1..64 << 16)))
        .collect()
}

/// Values in `[-8, 8)`, inside the non-saturating range of `exp`.
pub(crate) fn generate_random_signed(count: usize) -> Vec<xint> {
    (0..count)
        .map(|_| xint(rand::thread_rng().gen_range(-8 << 16..8 << 16)))
        .collect()
}

pub(crate) fn generate_random_unit(count: usize) -> Vec<xint> {
    (0..count)
        .map(|_| xint(rand::thread_rng().gen_range(-(1 << 16)..=1 << 16)))
        .collect()
}

pub(crate) fn to_radians(angles: &[xang]) -> Vec<f32> {
    angles.iter().map(|angle| angle.to_f32()).collect()
}

pub(crate) fn to_floats(values: &[xint]) -> Vec<f32> {
    values.iter().map(|value| value.to_f32()).collect()
}

pub(crate) fn map_cpu(inputs: &[f32], outputs: &mut [f32], f: impl Fn(f32) -> f32) -> Option<()> {
    if inputs.len() != outputs.len() {
        return None;
    }
    for (output, &input) in outputs.iter_mut().zip(inputs) {
        *output = f(input);
    }
    Some(())
}

/// Column-major 4×4 float product, the baseline for `XMat4 * XMat4`.
pub(crate) fn mat4_mul_cpu(a: &[f32; 16], b: &[f32; 16]) -> [f32; 16] {
    let mut out = [0.0; 16];
    for column in 0..4 {
        for row in 0..4 {
            out[column * 4 + row] = (0..4).map(|k| b[column * 4 + k] * a[k * 4 + row]).sum();
        }
    }
    out
}
