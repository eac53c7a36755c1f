//! Fixed-point quaternions stored as `[x, y, z, w]`.

use crate::layout::{self, flat_storage};
use crate::scalars::{xang, xint};
use crate::vector::XVec3;

/// A rotation quaternion `[x, y, z, w]` with the scalar part last.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XQuat(pub [xint; 4]);

flat_storage!(XQuat, 4);

impl Default for XQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Order in which per-axis Euler rotations are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EulerOrder {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl EulerOrder {
    pub const ALL: [EulerOrder; 6] = [
        EulerOrder::Xyz,
        EulerOrder::Xzy,
        EulerOrder::Yxz,
        EulerOrder::Yzx,
        EulerOrder::Zxy,
        EulerOrder::Zyx,
    ];

    /// For each output component `x, y, z, w`, whether the cross term is added.
    const fn adds(self) -> [bool; 4] {
        match self {
            EulerOrder::Xyz => [true, false, true, false],
            EulerOrder::Xzy => [false, false, true, true],
            EulerOrder::Yxz => [true, false, false, true],
            EulerOrder::Yzx => [true, true, false, false],
            EulerOrder::Zxy => [false, true, true, false],
            EulerOrder::Zyx => [false, true, false, true],
        }
    }
}

impl XQuat {
    pub const IDENTITY: Self = XQuat([xint::ZERO, xint::ZERO, xint::ZERO, xint::ONE]);

    #[inline(always)]
    pub const fn new(x: xint, y: xint, z: xint, w: xint) -> Self {
        XQuat([x, y, z, w])
    }

    /// Rotation of `angle` around `axis`, which need not be normalized.
    #[inline(always)]
    pub fn axis_angle(axis: XVec3, angle: xang) -> Self {
        Self::naxis_angle(axis.normal(), angle)
    }

    /// Rotation of `angle` around a unit `axis`.
    pub fn naxis_angle(axis: XVec3, angle: xang) -> Self {
        let half = xang(angle.0 >> 1);
        let s = half.sin();
        XQuat([axis.0[0].mul(s), axis.0[1].mul(s), axis.0[2].mul(s), half.cos()])
    }

    /// Shortest rotation taking direction `from` onto direction `to`.
    #[inline(always)]
    pub fn between(from: XVec3, to: XVec3) -> Self {
        Self::nbetween(from.normal(), to.normal())
    }

    /// Shortest rotation between two unit vectors. Opposite vectors pick a half turn
    /// around an axis perpendicular to `from`.
    pub fn nbetween(from: XVec3, to: XVec3) -> Self {
        let r = from.dot(to).add(xint::ONE);
        let [fx, fy, fz] = from.0;
        let axis = if r.0 <= 0 {
            if fx.abs() > fz.abs() {
                XVec3([fy.neg(), fx, xint::ZERO])
            } else {
                XVec3([xint::ZERO, fz.neg(), fy])
            }
        } else {
            from.cross(to)
        };
        XQuat([axis.0[0], axis.0[1], axis.0[2], r]).normal()
    }

    /// Composes rotations around the x, y and z axes in the given `order`.
    pub fn euler(rotation: [xang; 3], order: EulerOrder) -> Self {
        let [(sx, cx), (sy, cy), (sz, cz)] = rotation.map(|angle| {
            let half = xang(angle.0 >> 1);
            (half.sin(), half.cos())
        });
        let direct = [
            sx.mul(cy).mul(cz),
            cx.mul(sy).mul(cz),
            cx.mul(cy).mul(sz),
            cx.mul(cy).mul(cz),
        ];
        let cross = [
            cx.mul(sy).mul(sz),
            sx.mul(cy).mul(sz),
            sx.mul(sy).mul(cz),
            sx.mul(sy).mul(sz),
        ];
        let adds = order.adds();
        XQuat(core::array::from_fn(|i| {
            if adds[i] {
                direct[i].add(cross[i])
            } else {
                direct[i].sub(cross[i])
            }
        }))
    }

    #[inline(always)]
    pub fn dot(self, other: Self) -> xint {
        layout::dot(&self.0, &other.0)
    }

    /// Hamilton product: applying the result rotates by `other` first, then by `self`.
    pub fn mul(self, other: Self) -> Self {
        let [ax, ay, az, aw] = self.0;
        let [bx, by, bz, bw] = other.0;
        XQuat([
            ax.mul(bw).add(aw.mul(bx)).add(ay.mul(bz)).sub(az.mul(by)),
            ay.mul(bw).add(aw.mul(by)).add(az.mul(bx)).sub(ax.mul(bz)),
            az.mul(bw).add(aw.mul(bz)).add(ax.mul(by)).sub(ay.mul(bx)),
            aw.mul(bw).sub(ax.mul(bx)).sub(ay.mul(by)).sub(az.mul(bz)),
        ])
    }

    /// Multiplicative inverse. A zero quaternion maps to zero.
    pub fn invert(self) -> Self {
        let [x, y, z, w] = self.0;
        let dot = self.dot(self);
        let inverse = if dot.0 != 0 {
            xint::ONE.div(dot)
        } else {
            trace_degenerate!("XQuat::invert of a zero quaternion");
            xint::ZERO
        };
        XQuat([
            x.neg().mul(inverse),
            y.neg().mul(inverse),
            z.neg().mul(inverse),
            w.mul(inverse),
        ])
    }

    #[inline(always)]
    pub fn lerp(self, other: Self, t: xint) -> Self {
        XQuat(layout::zip_map(self.0, other.0, |a, b| a.lerp(b, t)))
    }

    /// Normalized linear interpolation.
    #[inline(always)]
    pub fn nlerp(self, other: Self, t: xint) -> Self {
        self.lerp(other, t).normal()
    }

    #[inline(always)]
    pub fn normal(self) -> Self {
        XQuat(layout::normalize(self.0))
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Falls back to linear weights when the quaternions are parallel, or when the arc is
    /// too short for its sine to register.
    pub fn slerp(self, other: Self, t: xint) -> Self {
        let mut other = other;
        let mut cosine = self.dot(other);
        if cosine.0 < 0 {
            cosine = cosine.neg();
            other = -other;
        }

        let mut weights = (xint::ONE.sub(t), t);
        if cosine < xint::ONE {
            let omega = cosine.acos();
            let sine = omega.sin();
            if sine.0 != 0 {
                weights = (
                    (omega * xint::ONE.sub(t)).sin().div(sine),
                    (omega * t).sin().div(sine),
                );
            }
        }

        let (w0, w1) = weights;
        XQuat(layout::zip_map(self.0, other.0, |a, b| {
            w0.mul(a).add(w1.mul(b))
        }))
    }
}

impl core::ops::Mul for XQuat {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        XQuat::mul(self, rhs)
    }
}

impl core::ops::MulAssign for XQuat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
