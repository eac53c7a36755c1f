//! Q16.16 fixed-point and quantized-angle scalar types.
//!
//! This module provides the two scalar types everything else is built from:
//!
//! - [`xint`]: a signed Q16.16 fixed-point number, 16 integer and 16 fractional bits in an `i32`
//! - [`xang`]: an angle quantized to 4096 units per revolution, so `xang(4096)` is a full turn
//!
//! All `xint` arithmetic wraps with 32-bit two's-complement semantics. Nothing saturates,
//! except the explicitly documented degenerate cases (division by zero), so results are
//! bit-identical on every platform.
//!
//! Conversions from `f32`/`f64` round to the nearest representable value and need the
//! `std` feature; conversions towards floating point are always available.

#![allow(non_camel_case_types)]

// region: xint Type

/// A Q16.16 fixed-point number.
///
/// The underlying `i32` is the raw bit pattern: the represented value is `bits / 65536`.
/// The range is roughly `±32768.0` with a resolution of `1 / 65536`.
///
/// # Examples
///
/// ```
/// use xvqm::xint;
///
/// let three = xint::from_int(3);
/// assert_eq!(three * three, xint::from_int(9));
/// assert_eq!(xint::ONE.0, 65536);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct xint(pub i32);

impl xint {
    /// Zero.
    pub const ZERO: Self = xint(0);
    /// One, `65536` in raw bits.
    pub const ONE: Self = xint(1 << 16);
    /// Negative one.
    pub const NEG_ONE: Self = xint(-(1 << 16));
    /// One half.
    pub const HALF: Self = xint(1 << 15);
    /// Smallest positive value, `1 / 65536`.
    pub const EPSILON: Self = xint(1);
    /// Largest representable value. Also the saturation result of [`xint::exp`].
    pub const MAX: Self = xint(i32::MAX);
    /// Smallest representable value. Also the "negative infinity" sentinel of
    /// [`xint::log`] and [`xint::pow`].
    pub const MIN: Self = xint(i32::MIN);
    /// Number of fractional bits.
    pub const FRACTION_BITS: u32 = 16;

    const FRACTION_MASK: i32 = 0x0000_FFFF;
    const INTEGER_MASK: i32 = !Self::FRACTION_MASK;

    #[inline(always)]
    pub const fn from_bits(bits: i32) -> Self {
        xint(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> i32 {
        self.0
    }

    /// Converts an integer, wrapping if it does not fit in 16 integer bits.
    #[inline(always)]
    pub const fn from_int(value: i32) -> Self {
        xint(value.wrapping_mul(Self::ONE.0))
    }

    /// Truncates towards negative infinity.
    #[inline(always)]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRACTION_BITS
    }

    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }

    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::ONE.0 as f64
    }

    /// Rounds to the nearest representable value. Out-of-range inputs saturate.
    #[cfg(any(test, feature = "std"))]
    #[inline(always)]
    pub fn from_f32(value: f32) -> Self {
        xint((value * Self::ONE.0 as f32).round() as i32)
    }

    /// Rounds to the nearest representable value. Out-of-range inputs saturate.
    #[cfg(any(test, feature = "std"))]
    #[inline(always)]
    pub fn from_f64(value: f64) -> Self {
        xint((value * Self::ONE.0 as f64).round() as i32)
    }

    #[inline(always)]
    pub const fn add(self, rhs: Self) -> Self {
        xint(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    pub const fn sub(self, rhs: Self) -> Self {
        xint(self.0.wrapping_sub(rhs.0))
    }

    /// Full 64-bit product shifted back by 16 bits; the high bits are discarded.
    #[inline(always)]
    pub const fn mul(self, rhs: Self) -> Self {
        xint(((self.0 as i64 * rhs.0 as i64) >> Self::FRACTION_BITS) as i32)
    }

    /// Fixed-point quotient truncated towards zero, or `None` for a zero divisor.
    #[inline(always)]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        let numerator = (self.0 as i64) << Self::FRACTION_BITS;
        Some(xint((numerator / rhs.0 as i64) as i32))
    }

    /// Fixed-point quotient truncated towards zero.
    ///
    /// A zero divisor saturates to [`xint::MAX`] for a non-negative dividend and to
    /// [`xint::MIN`] otherwise. Use [`xint::checked_div`] to detect it instead.
    #[inline(always)]
    pub fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => {
                trace_degenerate!("xint::div({}) by zero saturates", self.0);
                if self.0 >= 0 {
                    Self::MAX
                } else {
                    Self::MIN
                }
            }
        }
    }

    /// Truncating remainder whose sign follows the dividend, or `None` for a zero divisor.
    #[inline(always)]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        Some(xint(self.0.wrapping_rem(rhs.0)))
    }

    /// Truncating remainder whose sign follows the dividend. A zero divisor yields zero.
    #[inline(always)]
    pub const fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(rhs) {
            Some(remainder) => remainder,
            None => Self::ZERO,
        }
    }

    #[inline(always)]
    pub const fn neg(self) -> Self {
        xint(self.0.wrapping_neg())
    }

    /// Absolute value; `xint::MIN` wraps onto itself.
    #[inline(always)]
    pub const fn abs(self) -> Self {
        xint(self.0.wrapping_abs())
    }

    #[inline(always)]
    pub const fn min(self, other: Self) -> Self {
        if self.0 > other.0 {
            other
        } else {
            self
        }
    }

    #[inline(always)]
    pub const fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Clamps into `[min, max]`. Unlike [`Ord::clamp`] this never panics: when
    /// `min > max` the lower bound is checked first.
    #[inline(always)]
    pub const fn clamp(self, min: Self, max: Self) -> Self {
        if self.0 < min.0 {
            min
        } else if self.0 > max.0 {
            max
        } else {
            self
        }
    }

    #[inline(always)]
    pub const fn floor(self) -> Self {
        xint(self.0 & Self::INTEGER_MASK)
    }

    #[inline(always)]
    pub const fn ceil(self) -> Self {
        let carry = if self.0 & Self::FRACTION_MASK == 0 { 0 } else { Self::ONE.0 };
        xint((self.0 & Self::INTEGER_MASK).wrapping_add(carry))
    }

    /// Rounds half-way values towards positive infinity.
    #[inline(always)]
    pub const fn round(self) -> Self {
        self.add(Self::HALF).floor()
    }

    /// Linear interpolation `self + (other - self) * t`, entirely in fixed point.
    #[inline(always)]
    pub const fn lerp(self, other: Self, t: Self) -> Self {
        self.add(other.sub(self).mul(t))
    }

    #[inline(always)]
    pub const fn frac(self) -> Self {
        xint(self.0 & Self::FRACTION_MASK)
    }
}

#[cfg(any(test, feature = "std"))]
impl core::fmt::Display for xint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}

impl From<i16> for xint {
    #[inline(always)]
    fn from(value: i16) -> Self {
        xint::from_int(value as i32)
    }
}

impl From<xint> for f64 {
    #[inline(always)]
    fn from(value: xint) -> Self {
        value.to_f64()
    }
}

impl core::ops::Add for xint {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        xint::add(self, rhs)
    }
}

impl core::ops::Sub for xint {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        xint::sub(self, rhs)
    }
}

impl core::ops::Mul for xint {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        xint::mul(self, rhs)
    }
}

impl core::ops::Div for xint {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        xint::div(self, rhs)
    }
}

impl core::ops::Rem for xint {
    type Output = Self;
    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        xint::rem(self, rhs)
    }
}

impl core::ops::Neg for xint {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self::Output {
        xint::neg(self)
    }
}

impl core::ops::AddAssign for xint {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = xint::add(*self, rhs);
    }
}

impl core::ops::SubAssign for xint {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = xint::sub(*self, rhs);
    }
}

impl core::ops::MulAssign for xint {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = xint::mul(*self, rhs);
    }
}

impl core::ops::DivAssign for xint {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = xint::div(*self, rhs);
    }
}

// endregion: xint Type

// region: xang Type

/// An angle quantized to 4096 units per revolution.
///
/// `xang(1024)` is a quarter turn. Values outside `[0, 4096)` are legal and are folded
/// with [`xang::wrap`] wherever a table is indexed, so negative angles behave as
/// expected. Functions that produce angles return values inside `[0, 4096)`.
///
/// # Examples
///
/// ```
/// use xvqm::{xang, xint};
///
/// assert_eq!(xang::DEG90.sin(), xint::ONE);
/// assert_eq!(xang(-1024).wrap(), xang::DEG270);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct xang(pub i32);

impl xang {
    pub const DEG0: Self = xang(0x0000);
    pub const DEG45: Self = xang(0x0200);
    pub const DEG90: Self = xang(0x0400);
    pub const DEG135: Self = xang(0x0600);
    pub const DEG180: Self = xang(0x0800);
    pub const DEG225: Self = xang(0x0A00);
    pub const DEG270: Self = xang(0x0C00);
    pub const DEG315: Self = xang(0x0E00);
    /// One full revolution. Never produced by [`xang::wrap`].
    pub const FULL: Self = xang(0x1000);

    /// Folds into `[0, 4096)`. Negative angles wrap to the positive range.
    #[inline(always)]
    pub const fn wrap(self) -> Self {
        xang(((self.0 as u32) % (Self::FULL.0 as u32)) as i32)
    }

    /// The table index for this angle, always in `0..4096`.
    #[inline(always)]
    pub(crate) const fn index(self) -> usize {
        self.wrap().0 as usize
    }

    #[inline(always)]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 * core::f32::consts::TAU / Self::FULL.0 as f32
    }

    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 * core::f64::consts::TAU / Self::FULL.0 as f64
    }

    /// Quantizes radians to the nearest unit.
    #[cfg(any(test, feature = "std"))]
    #[inline(always)]
    pub fn from_f32(radians: f32) -> Self {
        xang((radians * Self::FULL.0 as f32 / core::f32::consts::TAU).round() as i32).wrap()
    }

    /// Quantizes radians to the nearest unit, reducing modulo a full turn first so that
    /// large inputs keep their precision.
    #[cfg(any(test, feature = "std"))]
    #[inline(always)]
    pub fn from_f64(radians: f64) -> Self {
        let reduced = radians % core::f64::consts::TAU;
        xang((reduced * Self::FULL.0 as f64 / core::f64::consts::TAU).round() as i32).wrap()
    }

    #[cfg(any(test, feature = "std"))]
    #[inline(always)]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_f64(degrees.to_radians())
    }

    #[inline(always)]
    pub fn to_degrees(self) -> f64 {
        self.0 as f64 * 360.0 / Self::FULL.0 as f64
    }
}

#[cfg(any(test, feature = "std"))]
impl core::fmt::Display for xang {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}°", self.to_degrees())
    }
}

impl core::ops::Add for xang {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        xang(self.0.wrapping_add(rhs.0))
    }
}

impl core::ops::Sub for xang {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        xang(self.0.wrapping_sub(rhs.0))
    }
}

impl core::ops::Neg for xang {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self::Output {
        xang(self.0.wrapping_neg())
    }
}

/// Scales an angle by a fixed-point factor, e.g. `t * omega` when interpolating.
impl core::ops::Mul<xint> for xang {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: xint) -> Self::Output {
        xang(xint(self.0).mul(rhs).0)
    }
}

// endregion: xang Type

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn constants() {
        assert_eq!(xint::ONE.0, 65536);
        assert_eq!(xint::NEG_ONE.0, -65536);
        assert_eq!(xint::MAX.0, i32::MAX);
        assert_eq!(xint::MIN.0, i32::MIN);
        assert_eq!(xang::FULL.0, 4096);
        assert_eq!(xang::DEG90.0, 1024);
        assert_eq!(xang::DEG315.0, 0xE00);
    }

    #[test]
    fn mul_integers_exact() {
        assert_eq!(xint::from_int(3) * xint::from_int(3), xint::from_int(9));
        assert_eq!(xint::from_int(-4) * xint::HALF, xint::from_int(-2));
        assert_eq!(xint::from_int(7).mul(xint::ONE), xint::from_int(7));
    }

    #[test]
    fn add_sub_wrap() {
        assert_eq!(xint::MAX + xint::EPSILON, xint::MIN);
        assert_eq!(xint::MIN - xint::EPSILON, xint::MAX);
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..10_000 {
            let a = xint(rng.gen());
            let b = xint(rng.gen());
            assert_eq!((a + b) - b, a, "{:?} {:?}", a, b);
        }
    }

    #[test]
    fn mul_div_identity_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let a = xint(rng.gen());
            assert_eq!(a.mul(xint::ONE).div(xint::ONE), a);
        }
    }

    #[test]
    fn div_truncates_towards_zero() {
        assert_eq!(xint::from_int(1) / xint::from_int(3), xint(21845));
        assert_eq!(xint::from_int(-1) / xint::from_int(3), xint(-21845));
        assert_eq!(xint::from_int(6) / xint::from_int(-2), xint::from_int(-3));
    }

    #[test]
    fn div_by_zero_saturates() {
        assert_eq!(xint::ONE / xint::ZERO, xint::MAX);
        assert_eq!(xint::ZERO / xint::ZERO, xint::MAX);
        assert_eq!(xint::NEG_ONE / xint::ZERO, xint::MIN);
        assert_eq!(xint::ONE.checked_div(xint::ZERO), None);
        assert_eq!(xint::ONE.checked_div(xint::ONE), Some(xint::ONE));
    }

    #[test]
    fn rem_follows_dividend() {
        let seven = xint::from_int(7);
        let two = xint::from_int(2);
        assert_eq!(seven % two, xint::ONE);
        assert_eq!(-seven % two, xint::NEG_ONE);
        assert_eq!(seven % -two, xint::ONE);
        assert_eq!(xint::MIN % xint(-1), xint::ZERO);
        assert_eq!(seven % xint::ZERO, xint::ZERO);
        assert_eq!(seven.checked_rem(xint::ZERO), None);
    }

    #[test]
    fn abs_neg_wrap_at_min() {
        assert_eq!(xint::MIN.abs(), xint::MIN);
        assert_eq!(-xint::MIN, xint::MIN);
        assert_eq!(xint::NEG_ONE.abs(), xint::ONE);
    }

    #[test]
    fn rounding() {
        let a = xint(0x0002_8000); // 2.5
        assert_eq!(a.floor(), xint::from_int(2));
        assert_eq!(a.ceil(), xint::from_int(3));
        assert_eq!(a.round(), xint::from_int(3));
        assert_eq!(xint::from_int(4).ceil(), xint::from_int(4));

        let b = xint(-0x0002_8000); // -2.5
        assert_eq!(b.floor(), xint::from_int(-3));
        assert_eq!(b.ceil(), xint::from_int(-2));
        assert_eq!(b.round(), xint::from_int(-2));
        assert_eq!(b.frac(), xint::HALF);
    }

    #[test]
    fn min_max_clamp() {
        let lo = xint::from_int(-1);
        let hi = xint::from_int(1);
        assert_eq!(xint::from_int(5).clamp(lo, hi), hi);
        assert_eq!(xint::from_int(-5).clamp(lo, hi), lo);
        assert_eq!(xint::HALF.clamp(lo, hi), xint::HALF);
        assert_eq!(lo.min(hi), lo);
        assert_eq!(lo.max(hi), hi);
    }

    #[test]
    fn lerp_endpoints() {
        let a = xint::from_int(2);
        let b = xint::from_int(10);
        assert_eq!(a.lerp(b, xint::ZERO), a);
        assert_eq!(a.lerp(b, xint::ONE), b);
        assert_eq!(a.lerp(b, xint::HALF), xint::from_int(6));
    }

    #[test]
    fn int_conversions() {
        assert_eq!(xint::from_int(-3).to_int(), -3);
        assert_eq!(xint(-1).to_int(), -1);
        assert_eq!(xint::HALF.to_int(), 0);
        assert_eq!(xint::from(12i16), xint::from_int(12));
    }

    #[test]
    fn float_conversions() {
        assert_eq!(xint::HALF.to_f32(), 0.5);
        assert_eq!(xint(-98304).to_f64(), -1.5);
        assert_eq!(xint::from_f32(0.25), xint(16384));
        assert_eq!(xint::from_f64(-1.5), xint(-98304));
        assert_eq!(xint::from_f64(1.0 / 131072.0), xint(1));
        assert_eq!(xint::from_f64(1e12), xint::MAX);
    }

    #[test]
    fn display_real_values() {
        assert_eq!(xint::HALF.to_string(), "0.5");
        assert_eq!(xint(-98304).to_string(), "-1.5");
        assert_eq!(xang::DEG90.to_string(), "90°");
    }

    #[test]
    fn wrap_folds_negative_angles() {
        assert_eq!(xang(-1).wrap(), xang(4095));
        assert_eq!(xang(4096).wrap(), xang::DEG0);
        assert_eq!(xang(i32::MIN).wrap(), xang(0));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let a = xang(rng.gen_range(-1_000_000..1_000_000));
            let w = a.wrap();
            assert!((0..4096).contains(&w.0));
            assert_eq!(xang(a.0 + 4096).wrap(), w);
        }
    }

    #[test]
    fn angle_conversions() {
        assert!((xang::DEG90.to_f64() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(xang::from_f64(core::f64::consts::PI), xang::DEG180);
        assert_eq!(xang::from_f64(-core::f64::consts::FRAC_PI_2), xang::DEG270);
        assert_eq!(xang::from_f64(5.0 * core::f64::consts::TAU + 0.0), xang::DEG0);
        assert_eq!(xang::from_f32(core::f32::consts::FRAC_PI_4), xang::DEG45);
        assert_eq!(xang::from_degrees(270.0), xang::DEG270);
        assert_eq!(xang::DEG135.to_degrees(), 135.0);
    }

    #[test]
    fn angle_arithmetic() {
        assert_eq!((xang::DEG270 + xang::DEG180).wrap(), xang::DEG90);
        assert_eq!((-xang::DEG90).wrap(), xang::DEG270);
        assert_eq!(xang::DEG180 * xint::HALF, xang::DEG90);
    }
}
