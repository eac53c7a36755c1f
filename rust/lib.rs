//! # xvqm - Deterministic Fixed-Point Vectors, Quaternions, and Matrices
//!
//! * Q16.16 fixed-point scalars with 32-bit wrapping arithmetic and no floating point on the hot path.
//! * Angles quantized to 4096 units per turn, with table-driven sine, cosine and tangent.
//! * Polynomial `atan2`, `exp`, `log`, `pow` and a bit-by-bit `sqrt`, all bit-reproducible.
//! * Column-major `XMat2`, `XMat3x2`, `XMat3`, `XMat4`, plus `XVec2..4` and `XQuat`.
//! * `no_std` compatible; `std`, `serde` and `log` are optional features.
//!
//! Every operation is a pure function of its inputs, so two machines running the same
//! sequence of calls produce identical bits. That makes the crate suitable for lockstep
//! simulations, replays and consensus-sensitive game state.
//!
//! ## Scalars
//!
//! - [`xint`] wraps an `i32` with 16 fractional bits; `xint::ONE.0 == 65536`.
//! - [`xang`] wraps an `i32` where `4096` is one full turn. Lookups reduce it modulo 4096.
//!
//! Degenerate inputs never panic. Division by zero saturates to [`xint::MAX`] or [`xint::MIN`],
//! the logarithm of a non-positive value is [`xint::MIN`], and a singular matrix inverts to
//! `None`. With the `log` feature these cases are reported at `trace` level.
//!
//! # Example
//!
//! ```rust
//! use xvqm::{xang, xint, XQuat, XVec3};
//!
//! let a = xint::from_int(3);
//! let b = xint::from_int(4);
//! assert_eq!(a.mul(a).add(b.mul(b)).sqrt(), xint::from_int(5));
//!
//! assert_eq!(xang::DEG90.sin(), xint::ONE);
//! assert_eq!(xang::DEG180.cos(), xint::NEG_ONE);
//!
//! let turn = XQuat::axis_angle(XVec3::new(xint::ZERO, xint::ZERO, xint::ONE), xang::DEG180);
//! let flipped = XVec3::new(xint::ONE, xint::ZERO, xint::ZERO).apply_quat(turn);
//! assert!(flipped.x() < xint::ZERO);
//! ```
//!
//! # Batch Kernels
//!
//! The [`Trigonometry`] and [`Transcendental`] traits evaluate whole slices:
//!
//! - `sin`, `cos`, `tan` map `&[xang]` into `&mut [xint]`.
//! - `atan` maps `&[xint]` into `&mut [xang]`.
//! - `sqrt`, `exp`, `log` map `&[xint]` into `&mut [xint]`.
//!
//! Each returns `None` when the input and output lengths differ.
//!
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![allow(non_camel_case_types)]

/// Reports a degenerate input that resolved to a documented fallback value.
#[cfg(feature = "log")]
macro_rules! trace_degenerate {
    ($($arg:tt)*) => {
        log::trace!(target: "xvqm", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_degenerate {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

mod layout;
mod lut;
mod matrix;
mod numerics;
mod quat;
mod scalars;
mod vector;

pub use layout::LayoutError;
pub use lut::{SIN_LUT, TAN_LUT};
pub use matrix::{XMat2, XMat3, XMat3x2, XMat4};
pub use numerics::{ATan, Cos, Exp, Log, Sin, Sqrt, Tan, Transcendental, Trigonometry};
pub use quat::{EulerOrder, XQuat};
pub use scalars::{xang, xint};
pub use vector::{XVec2, XVec3, XVec4};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface() {
        let mut out = [xint::ZERO; 2];
        assert!(<xang as Sin>::sin(&[xang::DEG0, xang::DEG90], &mut out).is_some());
        assert_eq!(out, [xint::ZERO, xint::ONE]);
        assert!(<xint as Sqrt>::sqrt(&[xint::from_int(4)], &mut out).is_none());
        assert_eq!(SIN_LUT.len(), 4096);
        assert_eq!(TAN_LUT.len(), 2048);
    }

    #[test]
    fn test_pipeline_is_reproducible() {
        let transform = || {
            let model = XMat4::rot_trans(
                XQuat::euler([xang(300), xang(-700), xang(1500)], EulerOrder::Zyx),
                XVec3::new(xint::from_int(4), xint::ZERO, xint::from_int(-2)),
            );
            let view = XMat4::look_at(
                XVec3::new(xint::from_int(10), xint::from_int(5), xint::from_int(10)),
                XVec3::ZERO,
                XVec3::new(xint::ZERO, xint::ONE, xint::ZERO),
            );
            let projection = XMat4::perspective(
                xang(700),
                xint::from_int(16),
                xint::from_int(9),
                xint::ONE,
                xint::from_int(100),
            );
            projection * view * model
        };
        let point = XVec3::new(xint::HALF, xint::ONE, xint::from_int(-1));
        let first = point.apply_mat4(&transform());
        let second = point.apply_mat4(&transform());
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_layout() {
        let v = XVec3::new(xint::ONE, xint::HALF, xint::from_int(-2));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[65536,32768,-131072]");
        assert_eq!(serde_json::from_str::<XVec3>(&json).unwrap(), v);

        let m = XMat2::IDENTITY;
        assert_eq!(serde_json::to_string(&m).unwrap(), "[65536,0,0,65536]");
        let order: EulerOrder = serde_json::from_str("\"Zyx\"").unwrap();
        assert_eq!(order, EulerOrder::Zyx);
    }
}
