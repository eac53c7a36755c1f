//! Flat storage shared by the vector, quaternion and matrix types.
//!
//! Every aggregate is a `#[repr(transparent)]` wrapper over `[xint; N]`. Matrices store their
//! components column by column, so `XMat4[12..15]` is the translation column, the same order
//! the floating-point counterparts use. The [`flat_storage`] macro gives each type:
//!
//! - conversions from and to `[xint; N]`, raw `[i32; N]` bits, and `TryFrom<&[xint]>`
//! - slice access and indexing
//! - component-wise `Add`, `Sub` and `Neg`, all wrapping
//!
//! With the `serde` feature the types serialize as the flat array itself.

use crate::scalars::xint;

/// Errors raised when an aggregate is built from loosely typed storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The source slice does not hold exactly one value per component.
    LengthMismatch { expected: usize, got: usize },
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::LengthMismatch { expected, got } => {
                write!(f, "expected {} components, got {}", expected, got)
            }
        }
    }
}

/// Sum of component-wise products, in component order.
#[inline(always)]
pub(crate) fn dot(a: &[xint], b: &[xint]) -> xint {
    a.iter()
        .zip(b)
        .fold(xint::ZERO, |sum, (&x, &y)| sum.add(x.mul(y)))
}

/// Scales to unit length. Zero-length input is returned unchanged.
#[inline(always)]
pub(crate) fn normalize<const N: usize>(components: [xint; N]) -> [xint; N] {
    let len2 = dot(&components, &components);
    if len2.0 <= 0 {
        return components;
    }
    let len = len2.sqrt();
    if len.0 <= 0 {
        return components;
    }
    let inverse = xint::ONE.div(len);
    components.map(|c| c.mul(inverse))
}

#[inline(always)]
pub(crate) fn zip_map<const N: usize>(
    a: [xint; N],
    b: [xint; N],
    mut f: impl FnMut(xint, xint) -> xint,
) -> [xint; N] {
    let mut out = a;
    for (slot, rhs) in out.iter_mut().zip(b) {
        *slot = f(*slot, rhs);
    }
    out
}

macro_rules! flat_storage {
    ($name:ident, $len:literal) => {
        impl $name {
            /// Number of `xint` components.
            pub const LEN: usize = $len;

            #[inline(always)]
            pub fn from_bits(bits: [i32; $len]) -> Self {
                $name(bits.map(xint))
            }

            #[inline(always)]
            pub fn to_bits(self) -> [i32; $len] {
                self.0.map(|component| component.0)
            }

            #[inline(always)]
            pub fn as_slice(&self) -> &[xint] {
                &self.0
            }

            #[inline(always)]
            pub fn as_mut_slice(&mut self) -> &mut [xint] {
                &mut self.0
            }

            /// Applies `f` to every component.
            #[inline(always)]
            pub fn map(self, f: impl FnMut(xint) -> xint) -> Self {
                $name(self.0.map(f))
            }

            /// Multiplies component by component.
            #[inline(always)]
            pub fn comp_mul(self, other: Self) -> Self {
                $name($crate::layout::zip_map(self.0, other.0, xint::mul))
            }
        }

        impl From<[xint; $len]> for $name {
            #[inline(always)]
            fn from(components: [xint; $len]) -> Self {
                $name(components)
            }
        }

        impl From<$name> for [xint; $len] {
            #[inline(always)]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<&[xint]> for $name {
            type Error = $crate::layout::LayoutError;

            fn try_from(slice: &[xint]) -> Result<Self, Self::Error> {
                <[xint; $len]>::try_from(slice).map($name).map_err(|_| {
                    $crate::layout::LayoutError::LengthMismatch {
                        expected: $len,
                        got: slice.len(),
                    }
                })
            }
        }

        impl AsRef<[xint]> for $name {
            #[inline(always)]
            fn as_ref(&self) -> &[xint] {
                &self.0
            }
        }

        impl core::ops::Index<usize> for $name {
            type Output = xint;
            #[inline(always)]
            fn index(&self, index: usize) -> &xint {
                &self.0[index]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut xint {
                &mut self.0[index]
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            #[inline(always)]
            fn add(self, rhs: Self) -> Self::Output {
                $name($crate::layout::zip_map(self.0, rhs.0, xint::add))
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            #[inline(always)]
            fn sub(self, rhs: Self) -> Self::Output {
                $name($crate::layout::zip_map(self.0, rhs.0, xint::sub))
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            #[inline(always)]
            fn neg(self) -> Self::Output {
                self.map(xint::neg)
            }
        }
    };
}

pub(crate) use flat_storage;
