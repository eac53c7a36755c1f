//! Fixed-point transcendental functions.
//!
//! Every function here is a pure, deterministic integer computation:
//!
//! - **Trigonometry**: [`xang::sin`], [`xang::cos`], [`xang::tan`] are single lookups into the
//!   embedded tables in [`crate::lut`], no interpolation.
//! - **Inverse trigonometry**: [`xint::atan2`] is a cubic minimax fit in the ratio
//!   `(x - |y|) / (x + |y|)`; [`xint::atan`], [`xint::asin`], [`xint::acos`] are built on it.
//! - **Exponential and logarithm**: [`xint::exp`] splits `a · log2(e)` into an integer shift and a
//!   Q0.32 fraction evaluated by a degree-4 polynomial; [`xint::log`] combines the bit length of
//!   the integer part with a cubic fit of the mantissa in `(1, 2]`.
//! - **Roots and powers**: [`xint::sqrt`] builds the floor square root one bit at a time;
//!   [`xint::pow`] squares-and-multiplies the integer part of the exponent and handles the
//!   fraction as `2^(fraction · log2(base))`.
//!
//! Out-of-domain inputs never fail. They resolve to documented sentinels instead:
//! [`xint::MIN`] for `log` of non-positive values and `pow` of zero, [`xint::MAX`] or zero
//! for `exp` outside `±681391 / 65536`.
//!
//! Slice-wise kernels are exposed through the [`Sin`], [`Cos`], [`Tan`], [`ATan`], [`Sqrt`],
//! [`Exp`] and [`Log`] traits, which return `None` when the input and output lengths differ.

use crate::lut::{SIN_LUT, TAN_LUT};
use crate::scalars::{xang, xint};

// region: Lookup Trigonometry

impl xang {
    /// Sine by direct table lookup. `sin(DEG90)` is exactly [`xint::ONE`].
    #[inline(always)]
    pub fn sin(self) -> xint {
        xint(SIN_LUT[self.index()])
    }

    /// Cosine as a quarter-turn shifted sine, so `cos(a) == sin(a + DEG90)` bit for bit.
    #[inline(always)]
    pub fn cos(self) -> xint {
        (self + xang::DEG90).sin()
    }

    /// Tangent by direct table lookup, folded by its half-turn period.
    ///
    /// At `DEG90` and `DEG270` the table holds [`xint::MIN`] as a stand-in for the
    /// asymptote; neighbouring entries are large but finite.
    #[inline(always)]
    pub fn tan(self) -> xint {
        xint(TAN_LUT[self.index() & (TAN_LUT.len() - 1)])
    }
}

// endregion: Lookup Trigonometry

// region: Inverse Trigonometry

const ATAN2_OFFSET_RIGHT: xint = xint(0x0200);
const ATAN2_OFFSET_LEFT: xint = xint(0x0600);
const ATAN2_CUBIC: xint = xint(0x0080);
const ATAN2_LINEAR: xint = xint(0x0280);

// Beyond these |y| with x == 1 the ratio degenerates to ±1 and the fit loses the last unit.
const ATAN2_STEEP_BELOW: i32 = -42_722_234;
const ATAN2_STEEP_ABOVE: i32 = 42_722_235;

// Inputs this close to zero take the exact answer instead of the amplified fit.
const ARC_NEAR_ZERO: i32 = 51;

impl xint {
    /// Four-quadrant arctangent of `self / x`, with `self` as the `y` coordinate.
    ///
    /// Returns an angle in `[0, 4096)`, with `atan2(0, 0) == 0`.
    pub fn atan2(self, x: xint) -> xang {
        let y = self;
        if y.0 == 0 && x.0 == 0 {
            return xang::DEG0;
        }
        if x == xint::ONE {
            if y.0 <= ATAN2_STEEP_BELOW {
                return xang(0x0C01);
            }
            if y.0 >= ATAN2_STEEP_ABOVE {
                return xang(0x03FF);
            }
        }

        let abs_y = y.abs();
        let (numerator, denominator, offset) = if x.0 >= 0 {
            (x.sub(abs_y), x.add(abs_y), ATAN2_OFFSET_RIGHT)
        } else {
            (x.add(abs_y), abs_y.sub(x), ATAN2_OFFSET_LEFT)
        };
        if denominator.0 == 0 {
            return xang::DEG0;
        }
        let r = numerator.div(denominator);
        let r3 = r.mul(r).mul(r);
        let angle = ATAN2_CUBIC.mul(r3).sub(ATAN2_LINEAR.mul(r)).add(offset).0;

        if y.0 < 0 && angle != 0 {
            xang(xang::FULL.0 - angle)
        } else if y.0 < 0 {
            xang::DEG0
        } else {
            xang(angle)
        }
    }

    /// Arctangent, `atan2(self, 1)`.
    #[inline(always)]
    pub fn atan(self) -> xang {
        self.atan2(xint::ONE)
    }

    /// Arcsine. Inputs at or beyond `±1` clamp to `DEG270`/`DEG90`.
    pub fn asin(self) -> xang {
        if self.0 <= xint::NEG_ONE.0 {
            return xang::DEG270;
        }
        if self.0 >= xint::ONE.0 {
            return xang::DEG90;
        }
        if self.0 > -ARC_NEAR_ZERO && self.0 < ARC_NEAR_ZERO {
            return xang::DEG0;
        }
        let cosine = xint::ONE.sub(self.mul(self)).sqrt();
        self.div(cosine).atan()
    }

    /// Arccosine. Inputs at or beyond `±1` clamp to `DEG180`/`DEG0`.
    pub fn acos(self) -> xang {
        if self.0 <= xint::NEG_ONE.0 {
            return xang::DEG180;
        }
        if self.0 >= xint::ONE.0 {
            return xang::DEG0;
        }
        if self.0 > -ARC_NEAR_ZERO && self.0 < ARC_NEAR_ZERO {
            return xang::DEG90;
        }
        let sine = xint::ONE.sub(self.mul(self)).sqrt();
        let angle = sine.div(self).atan();
        if self.0 < 0 {
            (angle + xang::DEG180).wrap()
        } else {
            angle
        }
    }
}

// endregion: Inverse Trigonometry

// region: Exponential and Logarithm

// 2^f on [0, 1): Q33.31 coefficients, evaluated against a Q0.32 fraction.
const EXP2_C0: i64 = 0x8000_0000;
const EXP2_C1: i64 = 0x58B4_5A41;
const EXP2_C2: i64 = 0x1EEB_1ABA;
const EXP2_C3: i64 = 0x069F_8E50;
const EXP2_C4: i64 = 0x01C0_FCB2;

/// log2(e) in Q32.32.
const LOG2_E: i64 = 0x1_7154_7653;
/// ln(2) in Q16.16.
const LN_2: xint = xint(0xB172);

/// Largest magnitude `exp` evaluates; beyond it the result saturates.
const EXP_LIMIT: i32 = 681_391;

// log2 of a mantissa in (1, 2].
const LOG2_C1: xint = xint(0x0001_6C40);
const LOG2_C2: xint = xint(-0x0000_9503);
const LOG2_C3: xint = xint(0x0000_28C2);

// ln(1 / 65536) and ln(2 / 65536), too small for the general path.
const LOG_OF_EPSILON: xint = xint(-0x000B_1721);
const LOG_OF_TWO_EPSILON: xint = xint(-0x000A_65AF);

/// Q33.31 by Q0.32 product, kept at Q33.31.
#[inline(always)]
fn mul31(accumulator: i64, fraction: i64) -> i64 {
    ((accumulator as u64).wrapping_mul(fraction as u64) >> 32) as i64
}

/// `2^fraction` for a Q0.32 fraction, in Q33.31.
#[inline(always)]
fn exp2_fraction(fraction: i64) -> i64 {
    let mut result = EXP2_C4;
    result = EXP2_C3 + mul31(result, fraction);
    result = EXP2_C2 + mul31(result, fraction);
    result = EXP2_C1 + mul31(result, fraction);
    EXP2_C0 + mul31(result, fraction)
}

/// `2^a` for a Q32.32 exponent, in Q16.16.
fn exp2(a: i64) -> xint {
    let whole = a >> 32;
    let fraction = exp2_fraction(a & 0xFFFF_FFFF);
    // The polynomial is Q33.31, so a whole part of 15 is already aligned to Q16.16.
    let shifted = if whole < 15 {
        u32::try_from(15 - whole)
            .ok()
            .and_then(|shift| fraction.checked_shr(shift))
            .unwrap_or(0)
    } else {
        u32::try_from(whole - 15)
            .ok()
            .and_then(|shift| fraction.checked_shl(shift))
            .unwrap_or(0)
    };
    xint(shifted as i32)
}

/// Bit length of the integer word.
#[inline(always)]
fn bit_length(word: i32) -> i32 {
    32 - (word as u32).leading_zeros() as i32
}

/// log2 of a mantissa in `(1, 2]`.
#[inline(always)]
fn log2_mantissa(mantissa: xint) -> xint {
    let f = mantissa.sub(xint::ONE);
    let mut result = LOG2_C3;
    result = LOG2_C2.add(result.mul(f));
    result = LOG2_C1.add(result.mul(f));
    result.mul(f)
}

/// log2 for arguments of at least one.
fn log2(a: xint) -> xint {
    let exponent = bit_length(a.to_int()) - 1;
    let scale = 1i32.checked_shl((exponent + 16) as u32).unwrap_or(0);
    let mantissa = a.div(xint(scale));
    xint::from_int(exponent).add(log2_mantissa(mantissa))
}

impl xint {
    /// Natural exponential.
    ///
    /// `exp(0)` is exactly [`xint::ONE`]. Inputs above `681391 / 65536` saturate to
    /// [`xint::MAX`], inputs below its negation flush to zero.
    pub fn exp(self) -> xint {
        if self.0 == 0 {
            return xint::ONE;
        }
        if self.0 > EXP_LIMIT {
            trace_degenerate!("xint::exp({}) saturates high", self.0);
            return xint::MAX;
        }
        if self.0 < -EXP_LIMIT {
            trace_degenerate!("xint::exp({}) flushes to zero", self.0);
            return xint::ZERO;
        }
        let magnitude = self.abs().0 as i64;
        let result = exp2((LOG2_E * magnitude) >> 16);
        if self.0 < 0 {
            xint::ONE.div(result)
        } else {
            result
        }
    }

    /// Natural logarithm. Non-positive inputs return [`xint::MIN`] as negative infinity.
    pub fn log(self) -> xint {
        if self.0 <= 0 {
            trace_degenerate!("xint::log({}) is out of domain", self.0);
            return xint::MIN;
        }
        match self.0 {
            1 => return LOG_OF_EPSILON,
            2 => return LOG_OF_TWO_EPSILON,
            _ => {}
        }
        let below_one = self.0 < xint::ONE.0;
        let argument = if below_one { xint::ONE.div(self) } else { self };
        let result = log2(argument).mul(LN_2);
        if below_one {
            result.neg()
        } else {
            result
        }
    }

    /// Floor square root at Q16.16 resolution: the largest `r` with `r · r <= self`.
    ///
    /// Negative inputs return `-sqrt(|self|)`.
    pub fn sqrt(self) -> xint {
        // r in Q16.16 squares to Q32.32, so compare against the input widened the same way.
        let target = (self.0.unsigned_abs() as u64) << xint::FRACTION_BITS;
        let mut root = 0u64;
        let mut bit = 1u64 << 23;
        while bit != 0 {
            let candidate = root | bit;
            if candidate * candidate <= target {
                root = candidate;
            }
            bit >>= 1;
        }
        let root = xint(root as i32);
        if self.0 < 0 {
            root.neg()
        } else {
            root
        }
    }

    /// Raises `self` to a fixed-point power.
    ///
    /// Negative bases return `-pow(|self|, exponent)`; a zero base returns [`xint::MIN`].
    pub fn pow(self, exponent: xint) -> xint {
        if self.0 < 0 {
            if self == xint::MIN {
                trace_degenerate!("xint::pow(MIN, {}) has no representable magnitude", exponent.0);
                return xint::MIN;
            }
            return self.neg().pow(exponent).neg();
        }
        if self.0 == 0 {
            trace_degenerate!("xint::pow(0, {}) is out of domain", exponent.0);
            return xint::MIN;
        }

        let mut base = self;
        let mut exponent = exponent;
        let mut flip = false;
        if exponent.0 < 0 {
            exponent = exponent.neg();
            if base.0 < xint::ONE.0 {
                base = xint::ONE.div(base);
            } else {
                flip = true;
            }
        } else if base.0 < xint::ONE.0 {
            base = xint::ONE.div(base);
            flip = true;
        }

        let mut result = xint::ONE;
        let mut square = base;
        let mut whole = exponent.to_int() as u32;
        while whole != 0 {
            if whole & 1 != 0 {
                result = result.mul(square);
            }
            whole >>= 1;
            square = square.mul(square);
        }

        let fraction = exponent.frac().0 as i64;
        if fraction != 0 {
            result = result.mul(exp2(fraction * log2(base).0 as i64));
        }
        if flip {
            xint::ONE.div(result)
        } else {
            result
        }
    }
}

// endregion: Exponential and Logarithm

// region: Sin

/// Computes **element-wise sine** of a slice of angles.
pub trait Sin: Sized {
    fn sin(inputs: &[Self], outputs: &mut [xint]) -> Option<()>;
}

impl Sin for xang {
    fn sin(inputs: &[Self], outputs: &mut [xint]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.sin();
        }
        Some(())
    }
}

// endregion: Sin

// region: Cos

/// Computes **element-wise cosine** of a slice of angles.
pub trait Cos: Sized {
    fn cos(inputs: &[Self], outputs: &mut [xint]) -> Option<()>;
}

impl Cos for xang {
    fn cos(inputs: &[Self], outputs: &mut [xint]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.cos();
        }
        Some(())
    }
}

// endregion: Cos

// region: Tan

/// Computes **element-wise tangent** of a slice of angles.
pub trait Tan: Sized {
    fn tan(inputs: &[Self], outputs: &mut [xint]) -> Option<()>;
}

impl Tan for xang {
    fn tan(inputs: &[Self], outputs: &mut [xint]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.tan();
        }
        Some(())
    }
}

// endregion: Tan

// region: ATan

/// Computes **element-wise arctangent** (inverse tangent) of a slice.
pub trait ATan: Sized {
    fn atan(inputs: &[Self], outputs: &mut [xang]) -> Option<()>;
}

impl ATan for xint {
    fn atan(inputs: &[Self], outputs: &mut [xang]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.atan();
        }
        Some(())
    }
}

// endregion: ATan

// region: Sqrt

/// Computes **element-wise square root** of a slice.
pub trait Sqrt: Sized {
    fn sqrt(inputs: &[Self], outputs: &mut [Self]) -> Option<()>;
}

impl Sqrt for xint {
    fn sqrt(inputs: &[Self], outputs: &mut [Self]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.sqrt();
        }
        Some(())
    }
}

// endregion: Sqrt

// region: Exp

/// Computes **element-wise natural exponential** of a slice.
pub trait Exp: Sized {
    fn exp(inputs: &[Self], outputs: &mut [Self]) -> Option<()>;
}

impl Exp for xint {
    fn exp(inputs: &[Self], outputs: &mut [Self]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.exp();
        }
        Some(())
    }
}

// endregion: Exp

// region: Log

/// Computes **element-wise natural logarithm** of a slice.
pub trait Log: Sized {
    fn log(inputs: &[Self], outputs: &mut [Self]) -> Option<()>;
}

impl Log for xint {
    fn log(inputs: &[Self], outputs: &mut [Self]) -> Option<()> {
        if inputs.len() != outputs.len() {
            return None;
        }
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = input.log();
        }
        Some(())
    }
}

// endregion: Log

// region: Convenience Trait Aliases

/// `Trigonometry` bundles the table-driven functions: Sin, Cos, and Tan.
pub trait Trigonometry: Sin + Cos + Tan {}
impl<T: Sin + Cos + Tan> Trigonometry for T {}

/// `Transcendental` bundles the approximated functions: ATan, Sqrt, Exp, and Log.
pub trait Transcendental: ATan + Sqrt + Exp + Log {}
impl<T: ATan + Sqrt + Exp + Log> Transcendental for T {}

// endregion: Convenience Trait Aliases

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::TAU;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn fixed(value: f64) -> xint {
        xint::from_f64(value)
    }

    /// Distance between two angles in units, accounting for wraparound.
    fn angle_error(result: xang, radians: f64) -> f64 {
        let expected = (radians / TAU * 4096.0).rem_euclid(4096.0);
        let difference = (result.0 as f64 - expected).abs();
        difference.min(4096.0 - difference)
    }

    #[test]
    fn sin_quarter_turn_is_one() {
        assert_eq!(xang::DEG90.sin(), xint::ONE);
        assert_eq!(xang::DEG270.sin(), xint::NEG_ONE);
        assert_eq!(xang::DEG0.sin(), xint::ZERO);
        assert_eq!(xang(-1024).sin(), xint::NEG_ONE);
        assert_eq!(xang(4096 + 1024).sin(), xint::ONE);
    }

    #[test]
    fn cos_is_shifted_sin() {
        for a in -4096..8192 {
            let angle = xang(a);
            assert_eq!(angle.cos(), xang(a + 1024).sin());
        }
        assert_eq!(xang::DEG0.cos(), xint::ONE);
        assert_eq!(xang::DEG180.cos(), xint::NEG_ONE);
    }

    #[test]
    fn sin_cos_pythagorean() {
        for a in 0..4096 {
            let s = xang(a).sin().0 as i64;
            let c = xang(a).cos().0 as i64;
            let norm = ((s * s + c * c) as f64).sqrt();
            assert!((norm - 65536.0).abs() <= 8.0, "angle {} norm {}", a, norm);
        }
    }

    #[test]
    fn tan_landmarks() {
        assert_eq!(xang::DEG0.tan(), xint::ZERO);
        assert_eq!(xang::DEG45.tan(), xint::ONE);
        assert_eq!(xang::DEG225.tan(), xint::ONE);
        assert_eq!(xang::DEG90.tan(), xint::MIN);
        assert_eq!(xang::DEG270.tan(), xint::MIN);
        assert_eq!(xang(-512).tan(), xang::DEG135.tan());
    }

    #[test]
    fn tan_matches_sin_over_cos() {
        for a in 0..4096 {
            let angle = xang(a);
            let c = angle.cos().0 as f64;
            if c.abs() < 2048.0 {
                continue;
            }
            let ratio = angle.sin().0 as f64 / c * 65536.0;
            let tan = angle.tan().0 as f64;
            assert!(
                (tan - ratio).abs() <= 1e-3 * ratio.abs().max(65536.0),
                "angle {}: {} vs {}",
                a,
                tan,
                ratio
            );
        }
    }

    #[test]
    fn atan2_axes_and_diagonals() {
        assert_eq!(xint::ZERO.atan2(xint::ONE), xang::DEG0);
        assert_eq!(xint::ZERO.atan2(xint::ZERO), xang::DEG0);
        assert_eq!(xint::ONE.atan2(xint::ZERO), xang::DEG90);
        assert_eq!(xint::ZERO.atan2(xint::NEG_ONE), xang::DEG180);
        assert_eq!(xint::NEG_ONE.atan2(xint::ZERO), xang::DEG270);
        assert_eq!(xint::ONE.atan2(xint::ONE), xang::DEG45);
        assert_eq!(xint::NEG_ONE.atan2(xint::NEG_ONE), xang::DEG225);
    }

    #[test]
    fn atan2_quadrants_golden() {
        let three = xint::from_int(3);
        let four = xint::from_int(4);
        assert_eq!(three.atan2(four), xang(421));
        assert_eq!((-three).atan2(four), xang(3675));
        assert_eq!(three.atan2(-four), xang(1627));
        assert_eq!((-three).atan2(-four), xang(2469));
    }

    #[test]
    fn atan2_steep_limits() {
        assert_eq!(xint(42_722_235).atan2(xint::ONE), xang(1023));
        assert_eq!(xint(-42_722_234).atan2(xint::ONE), xang(3073));
        assert_eq!(xint(42_722_234).atan2(xint::ONE), xang(1024));
        assert_eq!(xint(-42_722_233).atan2(xint::ONE), xang(3072));
        assert_eq!(xint::MIN.atan2(xint::MIN), xang::DEG0);
    }

    #[test]
    fn atan2_accuracy() {
        let mut rng = StdRng::seed_from_u64(0xA7A2);
        for _ in 0..20_000 {
            let y = xint(rng.gen_range(-20 * 65536..20 * 65536));
            let x = xint(rng.gen_range(-20 * 65536..20 * 65536));
            let result = y.atan2(x);
            assert!((0..4096).contains(&result.0));
            let error = angle_error(result, (y.0 as f64).atan2(x.0 as f64));
            assert!(error <= 8.0, "atan2({}, {}) = {} off by {}", y.0, x.0, result.0, error);
        }
    }

    #[test]
    fn atan_is_atan2_against_one() {
        assert_eq!(xint::ONE.atan(), xang::DEG45);
        assert_eq!(xint::NEG_ONE.atan(), xang::DEG315);
        assert_eq!(fixed(0.75).atan(), fixed(0.75).atan2(xint::ONE));
    }

    #[test]
    fn asin_acos_boundaries() {
        assert_eq!(xint::ONE.acos(), xang::DEG0);
        assert_eq!(xint::NEG_ONE.acos(), xang::DEG180);
        assert_eq!(xint::from_int(5).acos(), xang::DEG0);
        assert_eq!(xint::ONE.asin(), xang::DEG90);
        assert_eq!(xint::NEG_ONE.asin(), xang::DEG270);
        assert_eq!(xint::ZERO.acos(), xang::DEG90);
        assert_eq!(xint::ZERO.asin(), xang::DEG0);
        assert_eq!(xint(50).asin(), xang::DEG0);
        assert_eq!(xint(-50).acos(), xang::DEG90);
    }

    #[test]
    fn asin_acos_golden() {
        assert_eq!(xint::HALF.acos(), xang(681));
        assert_eq!((-xint::HALF).acos(), xang(1367));
        assert_eq!(xint::HALF.asin(), xang(343));
        assert_eq!((-xint::HALF).asin(), xang(3753));
        assert_eq!(fixed(0.9).acos(), xang(295));
        assert_eq!(fixed(-0.9).asin(), xang(3367));
    }

    #[test]
    fn asin_acos_accuracy() {
        for raw in (-65536..=65536).step_by(37) {
            let a = xint(raw);
            let value = raw as f64 / 65536.0;
            assert!(angle_error(a.asin(), value.asin()) <= 8.0, "asin {}", raw);
            assert!(angle_error(a.acos(), value.acos()) <= 8.0, "acos {}", raw);
        }
    }

    #[test]
    fn exp_golden() {
        assert_eq!(xint::ZERO.exp(), xint::ONE);
        assert_eq!(xint::ONE.exp(), xint(178145));
        assert_eq!(xint::NEG_ONE.exp(), xint(24109));
        assert_eq!(xint::from_int(2).exp(), xint(484250));
        assert_eq!(xint::from_int(10).exp(), xint(1443529951));
        assert_eq!(xint::HALF.exp(), xint(108050));
        assert_eq!(fixed(-2.5).exp(), xint(5379));
    }

    #[test]
    fn exp_saturates() {
        assert_eq!(xint(681_391).exp(), xint(2147470397));
        assert_eq!(xint(681_392).exp(), xint::MAX);
        assert_eq!(xint::MAX.exp(), xint::MAX);
        assert_eq!(xint(-681_391).exp(), xint(2));
        assert_eq!(xint(-681_392).exp(), xint::ZERO);
        assert_eq!(xint::MIN.exp(), xint::ZERO);
    }

    #[test]
    fn exp_accuracy() {
        let mut rng = StdRng::seed_from_u64(0xE4);
        for _ in 0..20_000 {
            let a = xint(rng.gen_range(-8 * 65536..10 * 65536));
            let expected = a.to_f64().exp() * 65536.0;
            let error = (a.exp().0 as f64 - expected).abs() / expected.max(65536.0);
            assert!(error < 1e-4, "exp({}) = {} vs {}", a.0, a.exp().0, expected);
        }
    }

    #[test]
    fn log_golden() {
        assert_eq!(xint::ONE.log(), xint::ZERO);
        assert_eq!(xint::from_int(2).log(), xint(45426));
        assert_eq!(xint::HALF.log(), xint(-45426));
        assert_eq!(xint::from_int(100).log(), xint(301833));
        assert_eq!(xint(1).log(), xint(-726817));
        assert_eq!(xint(2).log(), xint(-681391));
        assert_eq!(xint(3).log(), xint(-654837));
    }

    #[test]
    fn log_sentinel() {
        assert_eq!(xint::ZERO.log(), xint::MIN);
        assert_eq!(xint::NEG_ONE.log(), xint::MIN);
        assert_eq!(xint::MIN.log(), xint::MIN);
    }

    #[test]
    fn log_accuracy() {
        let mut rng = StdRng::seed_from_u64(0x106);
        for _ in 0..20_000 {
            let a = xint(rng.gen_range(655..i32::MAX));
            let expected = a.to_f64().ln() * 65536.0;
            let error = (a.log().0 as f64 - expected).abs();
            assert!(error <= 48.0, "log({}) = {} vs {}", a.0, a.log().0, expected);
        }
    }

    #[test]
    fn exp_log_round_trip() {
        let a = fixed(3.7);
        let round_trip = a.log().exp();
        assert_eq!(round_trip, xint(242328));
        assert!((round_trip.0 - a.0).abs() < 256);
    }

    #[test]
    fn sqrt_exact_squares() {
        assert_eq!(xint::from_int(4).sqrt(), xint::from_int(2));
        assert_eq!(xint::ONE.sqrt(), xint::ONE);
        assert_eq!(xint::ZERO.sqrt(), xint::ZERO);
        assert_eq!(fixed(0.25).sqrt(), xint::HALF);
        assert_eq!(xint::from_int(2).sqrt(), xint(92681));
        assert_eq!(xint(1).sqrt(), xint(256));
        assert_eq!(xint::MAX.sqrt(), xint(11863283));
    }

    #[test]
    fn sqrt_mirrors_negative() {
        assert_eq!(xint::from_int(-4).sqrt(), xint::from_int(-2));
        assert_eq!(xint::MIN.sqrt(), xint(-11863283));
    }

    #[test]
    fn sqrt_is_tight_floor() {
        let mut rng = StdRng::seed_from_u64(0x5027);
        for _ in 0..20_000 {
            let a: i32 = rng.gen_range(0..=i32::MAX);
            let r = xint(a).sqrt().0 as i64;
            let target = (a as i64) << 16;
            assert!(r * r <= target, "sqrt({}) = {} too large", a, r);
            assert!((r + 1) * (r + 1) > target, "sqrt({}) = {} too small", a, r);
        }
    }

    #[test]
    fn pow_golden() {
        let two = xint::from_int(2);
        let three = xint::from_int(3);
        assert_eq!(two.pow(three), xint::from_int(8));
        assert_eq!(two.pow(xint::HALF), xint(92681));
        assert_eq!(three.pow(xint::ONE), three);
        assert_eq!(three.pow(xint::ZERO), xint::ONE);
        assert_eq!(xint::HALF.pow(two), fixed(0.25));
        assert_eq!(xint::HALF.pow(-two), xint::from_int(4));
        assert_eq!(two.pow(xint::NEG_ONE), xint::HALF);
        assert_eq!(xint::from_int(4).pow(xint::HALF), two);
        assert_eq!(xint::from_int(10).pow(fixed(1.5)), xint(2072330));
        assert_eq!(fixed(1.5).pow(fixed(2.5)), xint(180648));
    }

    #[test]
    fn pow_sign_and_sentinels() {
        assert_eq!(xint::from_int(-2).pow(xint::from_int(3)), xint::from_int(-8));
        assert_eq!(xint::ZERO.pow(xint::ONE), xint::MIN);
        assert_eq!(xint::MIN.pow(xint::ONE), xint::MIN);
        assert_eq!(xint::MAX.pow(xint::ZERO), xint::ONE);
    }

    #[test]
    fn pow_identities() {
        let mut rng = StdRng::seed_from_u64(0x90);
        for _ in 0..5_000 {
            let a = xint(rng.gen_range(256..64 * 65536));
            assert_eq!(a.pow(xint::ZERO), xint::ONE);
            let error = (a.pow(xint::ONE).0 - a.0).abs() as f64 / (a.0 as f64).max(65536.0);
            assert!(error < 1e-3, "pow({}, 1) = {}", a.0, a.pow(xint::ONE).0);
        }
    }

    #[test]
    fn pow_accuracy() {
        let mut rng = StdRng::seed_from_u64(0xB0B);
        for _ in 0..5_000 {
            let a = xint(rng.gen_range(65536 / 4..16 * 65536));
            let b = xint(rng.gen_range(-2 * 65536..3 * 65536));
            let expected = a.to_f64().powf(b.to_f64()) * 65536.0;
            if expected >= 1000.0 * 65536.0 {
                continue;
            }
            let error = (a.pow(b).0 as f64 - expected).abs() / expected.max(65536.0);
            assert!(error < 2e-3, "pow({}, {}) = {} vs {}", a.0, b.0, a.pow(b).0, expected);
        }
    }

    #[test]
    fn batch_kernels() {
        let angles = [xang::DEG0, xang::DEG90, xang(-1024), xang::DEG45];
        let mut values = [xint::ZERO; 4];
        <xang as Sin>::sin(&angles, &mut values).unwrap();
        assert_eq!(values, [xint::ZERO, xint::ONE, xint::NEG_ONE, xang::DEG45.sin()]);
        <xang as Cos>::cos(&angles, &mut values).unwrap();
        assert_eq!(values[0], xint::ONE);
        <xang as Tan>::tan(&angles, &mut values).unwrap();
        assert_eq!(values[3], xint::ONE);

        let inputs = [xint::ZERO, xint::ONE, xint::from_int(4)];
        let mut outputs = [xint::ZERO; 3];
        <xint as Sqrt>::sqrt(&inputs, &mut outputs).unwrap();
        assert_eq!(outputs, [xint::ZERO, xint::ONE, xint::from_int(2)]);
        <xint as Exp>::exp(&inputs, &mut outputs).unwrap();
        assert_eq!(outputs[0], xint::ONE);
        <xint as Log>::log(&inputs, &mut outputs).unwrap();
        assert_eq!(outputs[0], xint::MIN);

        let mut directions = [xang::DEG0; 3];
        <xint as ATan>::atan(&inputs, &mut directions).unwrap();
        assert_eq!(directions[1], xang::DEG45);
    }

    #[test]
    fn batch_length_mismatch() {
        let angles = [xang::DEG0; 3];
        let mut values = [xint::ZERO; 2];
        assert!(<xang as Sin>::sin(&angles, &mut values).is_none());
        let inputs = [xint::ONE; 2];
        let mut outputs = [xint::ZERO; 3];
        assert!(<xint as Sqrt>::sqrt(&inputs, &mut outputs).is_none());
    }

    fn bundled<T: Trigonometry>(inputs: &[T], outputs: &mut [xint]) -> Option<()> {
        T::sin(inputs, outputs)
    }

    #[test]
    fn trait_aliases() {
        let mut out = [xint::ZERO];
        assert!(bundled(&[xang::DEG90], &mut out).is_some());
        assert_eq!(out[0], xint::ONE);
    }
}
