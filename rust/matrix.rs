//! Column-major fixed-point matrices.
//!
//! - [`XMat2`] is a 2-D linear map, columns `[a0 a1] [a2 a3]`.
//! - [`XMat3x2`] is a 2-D affine map, columns `[a b] [c d] [tx ty]`, with an implied
//!   bottom row of `[0 0 1]`.
//! - [`XMat3`] is a 3-D linear map or a 2-D homogeneous transform.
//! - [`XMat4`] is a 3-D homogeneous transform, with the translation in `[12..15]`.
//!
//! Products compose right to left: `(a * b)` applied to a vector applies `b` first. The
//! builder methods follow the same convention, so `m.translate(v)` is `m * translation(v)`.
//! Inversion returns `None` when the fixed-point determinant is exactly zero.

use crate::layout::flat_storage;
use crate::quat::XQuat;
use crate::scalars::{xang, xint};
use crate::vector::{XVec2, XVec3};

/// A 2×2 column-major matrix.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XMat2(pub [xint; 4]);

/// A 2-D affine transform stored as three columns of two.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XMat3x2(pub [xint; 6]);

/// A 3×3 column-major matrix.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XMat3(pub [xint; 9]);

/// A 4×4 column-major matrix.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XMat4(pub [xint; 16]);

flat_storage!(XMat2, 4);
flat_storage!(XMat3x2, 6);
flat_storage!(XMat3, 9);
flat_storage!(XMat4, 16);

const O: xint = xint::ZERO;
const I: xint = xint::ONE;

/// Square column-major product; element `(row, column)` sums `b[column][k] * a[k][row]`.
#[inline(always)]
fn product<const N: usize, const LEN: usize>(a: &[xint; LEN], b: &[xint; LEN]) -> [xint; LEN] {
    core::array::from_fn(|i| {
        let (column, row) = (i / N, i % N);
        (0..N).fold(xint::ZERO, |sum, k| {
            sum.add(b[column * N + k].mul(a[k * N + row]))
        })
    })
}

#[inline(always)]
fn transposed<const N: usize, const LEN: usize>(a: &[xint; LEN]) -> [xint; LEN] {
    core::array::from_fn(|i| a[(i % N) * N + i / N])
}

/// Upper 3×3 block of the rotation matrix for `q`, column-major.
fn rotation_basis(q: XQuat) -> [xint; 9] {
    let [x, y, z, w] = q.0;
    let (x2, y2, z2) = (
        xint(x.0.wrapping_shl(1)),
        xint(y.0.wrapping_shl(1)),
        xint(z.0.wrapping_shl(1)),
    );
    let (xx, yx, yy) = (x.mul(x2), y.mul(x2), y.mul(y2));
    let (zx, zy, zz) = (z.mul(x2), z.mul(y2), z.mul(z2));
    let (wx, wy, wz) = (w.mul(x2), w.mul(y2), w.mul(z2));
    [
        I.sub(yy.add(zz)),
        yx.add(wz),
        zx.sub(wy),
        yx.sub(wz),
        I.sub(xx.add(zz)),
        zy.add(wx),
        zx.add(wy),
        zy.sub(wx),
        I.sub(xx.add(yy)),
    ]
}

/// Reciprocal of a determinant, or `None` for a singular matrix.
#[inline(always)]
fn inverse_det(det: xint, kind: &str) -> Option<xint> {
    if det.0 == 0 {
        trace_degenerate!("{}::invert of a singular matrix", kind);
        return None;
    }
    Some(I.div(det))
}

// region: XMat2

impl XMat2 {
    pub const IDENTITY: Self = XMat2([I, O, O, I]);

    pub fn adjoint(self) -> Self {
        let [a0, a1, a2, a3] = self.0;
        XMat2([a3, a1.neg(), a2.neg(), a0])
    }

    #[inline(always)]
    pub fn det(self) -> xint {
        let [a0, a1, a2, a3] = self.0;
        a0.mul(a3).sub(a2.mul(a1))
    }

    pub fn invert(self) -> Option<Self> {
        let [a0, a1, a2, a3] = self.0;
        let d = inverse_det(self.det(), "XMat2")?;
        Some(XMat2([a3.mul(d), a1.mul(d).neg(), a2.mul(d).neg(), a0.mul(d)]))
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        XMat2(product::<2, 4>(&self.0, &other.0))
    }

    /// Post-multiplies by a rotation of `angle`.
    pub fn rotate(self, angle: xang) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let (s, c) = (angle.sin(), angle.cos());
        XMat2([
            a0.mul(c).add(a2.mul(s)),
            a1.mul(c).add(a3.mul(s)),
            a0.mul(s.neg()).add(a2.mul(c)),
            a1.mul(s.neg()).add(a3.mul(c)),
        ])
    }

    pub fn rotation(angle: xang) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        XMat2([c, s, s.neg(), c])
    }

    pub fn scale(self, factors: XVec2) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [bx, by] = factors.0;
        XMat2([a0.mul(bx), a1.mul(bx), a2.mul(by), a3.mul(by)])
    }

    pub fn scaling(factors: XVec2) -> Self {
        XMat2([factors.0[0], O, O, factors.0[1]])
    }

    #[inline(always)]
    pub fn transpose(self) -> Self {
        XMat2(transposed::<2, 4>(&self.0))
    }
}

// endregion: XMat2

// region: XMat3x2

impl XMat3x2 {
    pub const IDENTITY: Self = XMat3x2([I, O, O, I, O, O]);

    /// Determinant of the linear part.
    #[inline(always)]
    pub fn det(self) -> xint {
        let [a0, a1, a2, a3, _, _] = self.0;
        a0.mul(a3).sub(a2.mul(a1))
    }

    pub fn invert(self) -> Option<Self> {
        let [a00, a01, a10, a11, a20, a21] = self.0;
        let d = inverse_det(a00.mul(a11).sub(a01.mul(a10)), "XMat3x2")?;
        Some(XMat3x2([
            a11.mul(d),
            a01.neg().mul(d),
            a10.neg().mul(d),
            a00.mul(d),
            a21.mul(a10).sub(a11.mul(a20)).mul(d),
            a21.neg().mul(a00).add(a01.mul(a20)).mul(d),
        ]))
    }

    pub fn mul(self, other: Self) -> Self {
        let [a00, a01, a10, a11, a20, a21] = self.0;
        let [b00, b01, b10, b11, b20, b21] = other.0;
        XMat3x2([
            b00.mul(a00).add(b01.mul(a10)),
            b00.mul(a01).add(b01.mul(a11)),
            b10.mul(a00).add(b11.mul(a10)),
            b10.mul(a01).add(b11.mul(a11)),
            b20.mul(a00).add(b21.mul(a10)).add(a20),
            b20.mul(a01).add(b21.mul(a11)).add(a21),
        ])
    }

    pub fn rotate(self, angle: xang) -> Self {
        let [a00, a01, a10, a11, a20, a21] = self.0;
        let (s, c) = (angle.sin(), angle.cos());
        XMat3x2([
            c.mul(a00).add(s.mul(a10)),
            c.mul(a01).add(s.mul(a11)),
            c.mul(a10).sub(s.mul(a00)),
            c.mul(a11).sub(s.mul(a01)),
            a20,
            a21,
        ])
    }

    pub fn rotation(angle: xang) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        XMat3x2([c, s, s.neg(), c, O, O])
    }

    pub fn scale(self, factors: XVec2) -> Self {
        let [a0, a1, a2, a3, a4, a5] = self.0;
        let [bx, by] = factors.0;
        XMat3x2([bx.mul(a0), bx.mul(a1), by.mul(a2), by.mul(a3), a4, a5])
    }

    pub fn scaling(factors: XVec2) -> Self {
        XMat3x2([factors.0[0], O, O, factors.0[1], O, O])
    }

    pub fn translate(self, offset: XVec2) -> Self {
        let [a00, a01, a10, a11, a20, a21] = self.0;
        let [bx, by] = offset.0;
        XMat3x2([
            a00,
            a01,
            a10,
            a11,
            bx.mul(a00).add(by.mul(a10)).add(a20),
            bx.mul(a01).add(by.mul(a11)).add(a21),
        ])
    }

    pub fn translation(offset: XVec2) -> Self {
        XMat3x2([I, O, O, I, offset.0[0], offset.0[1]])
    }
}

// endregion: XMat3x2

// region: XMat3

impl XMat3 {
    pub const IDENTITY: Self = XMat3([I, O, O, O, I, O, O, O, I]);

    pub fn adjoint(self) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.0;
        XMat3([
            a11.mul(a22).sub(a12.mul(a21)),
            a02.mul(a21).sub(a01.mul(a22)),
            a01.mul(a12).sub(a02.mul(a11)),
            a12.mul(a20).sub(a10.mul(a22)),
            a00.mul(a22).sub(a02.mul(a20)),
            a02.mul(a10).sub(a00.mul(a12)),
            a10.mul(a21).sub(a11.mul(a20)),
            a01.mul(a20).sub(a00.mul(a21)),
            a00.mul(a11).sub(a01.mul(a10)),
        ])
    }

    /// First-column cofactors, shared by [`XMat3::det`] and [`XMat3::invert`].
    #[inline(always)]
    fn cofactors(&self) -> [xint; 3] {
        let [_, _, _, a10, a11, a12, a20, a21, a22] = self.0;
        [
            a22.mul(a11).sub(a12.mul(a21)),
            a22.neg().mul(a10).add(a12.mul(a20)),
            a21.mul(a10).sub(a11.mul(a20)),
        ]
    }

    pub fn det(self) -> xint {
        let [a00, a01, a02, ..] = self.0;
        let [b01, b11, b21] = self.cofactors();
        a00.mul(b01).add(a01.mul(b11)).add(a02.mul(b21))
    }

    pub fn invert(self) -> Option<Self> {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.0;
        let [b01, b11, b21] = self.cofactors();
        let d = inverse_det(self.det(), "XMat3")?;
        Some(XMat3([
            b01.mul(d),
            a22.neg().mul(a01).add(a02.mul(a21)).mul(d),
            a12.mul(a01).sub(a02.mul(a11)).mul(d),
            b11.mul(d),
            a22.mul(a00).sub(a02.mul(a20)).mul(d),
            a12.neg().mul(a00).add(a02.mul(a10)).mul(d),
            b21.mul(d),
            a21.neg().mul(a00).add(a01.mul(a20)).mul(d),
            a11.mul(a00).sub(a01.mul(a10)).mul(d),
        ]))
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        XMat3(product::<3, 9>(&self.0, &other.0))
    }

    /// Rotation matrix of a unit quaternion.
    #[inline(always)]
    pub fn from_quat(q: XQuat) -> Self {
        XMat3(rotation_basis(q))
    }

    /// Post-multiplies by a 2-D rotation of `angle` around the z axis.
    pub fn rotate(self, angle: xang) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.0;
        let (s, c) = (angle.sin(), angle.cos());
        XMat3([
            c.mul(a00).add(s.mul(a10)),
            c.mul(a01).add(s.mul(a11)),
            c.mul(a02).add(s.mul(a12)),
            c.mul(a10).sub(s.mul(a00)),
            c.mul(a11).sub(s.mul(a01)),
            c.mul(a12).sub(s.mul(a02)),
            a20,
            a21,
            a22,
        ])
    }

    pub fn rotation(angle: xang) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        XMat3([c, s, O, s.neg(), c, O, O, O, I])
    }

    pub fn scale(self, factors: XVec2) -> Self {
        let [bx, by] = factors.0;
        let a = self.0;
        XMat3([
            bx.mul(a[0]),
            bx.mul(a[1]),
            bx.mul(a[2]),
            by.mul(a[3]),
            by.mul(a[4]),
            by.mul(a[5]),
            a[6],
            a[7],
            a[8],
        ])
    }

    pub fn scaling(factors: XVec2) -> Self {
        XMat3([factors.0[0], O, O, O, factors.0[1], O, O, O, I])
    }

    pub fn translate(self, offset: XVec2) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.0;
        let [bx, by] = offset.0;
        XMat3([
            a00,
            a01,
            a02,
            a10,
            a11,
            a12,
            bx.mul(a00).add(by.mul(a10)).add(a20),
            bx.mul(a01).add(by.mul(a11)).add(a21),
            bx.mul(a02).add(by.mul(a12)).add(a22),
        ])
    }

    pub fn translation(offset: XVec2) -> Self {
        XMat3([I, O, O, O, I, O, offset.0[0], offset.0[1], I])
    }

    #[inline(always)]
    pub fn transpose(self) -> Self {
        XMat3(transposed::<3, 9>(&self.0))
    }
}

// endregion: XMat3

// region: XMat4

/// Returns `v` scaled to unit length, or `None` when the length quantizes to zero.
fn unit(v: XVec3) -> Option<XVec3> {
    let len2 = v.len2();
    if len2.0 == 0 {
        return None;
    }
    let len = len2.sqrt();
    if len.0 == 0 {
        return None;
    }
    Some(v.scale(I.div(len)))
}

/// Expands a 3×3 minor along one column: `p·|P| − q·|Q| + r·|R|`, where each 2×2
/// determinant `[m0, m1, m2, m3]` is `m0·m1 − m2·m3`.
#[inline(always)]
fn cofactor(terms: [(xint, [xint; 4]); 3]) -> xint {
    let [p, q, r] = terms.map(|(scale, [m0, m1, m2, m3])| scale.mul(m0.mul(m1).sub(m2.mul(m3))));
    p.sub(q).add(r)
}

#[inline(always)]
fn double(a: xint) -> xint {
    xint(a.0.wrapping_shl(1))
}

impl XMat4 {
    pub const IDENTITY: Self = XMat4([I, O, O, O, O, I, O, O, O, O, I, O, O, O, O, I]);

    pub fn adjoint(self) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;
        XMat4([
            cofactor([(a11, [a22, a33, a23, a32]), (a21, [a12, a33, a13, a32]), (a31, [a12, a23, a13, a22])]),
            cofactor([(a01, [a22, a33, a23, a32]), (a21, [a02, a33, a03, a32]), (a31, [a02, a23, a03, a22])]).neg(),
            cofactor([(a01, [a12, a33, a13, a32]), (a11, [a02, a33, a03, a32]), (a31, [a02, a13, a03, a12])]),
            cofactor([(a01, [a12, a23, a13, a22]), (a11, [a02, a23, a03, a22]), (a21, [a02, a13, a03, a12])]).neg(),
            cofactor([(a10, [a22, a33, a23, a32]), (a20, [a12, a33, a13, a32]), (a30, [a12, a23, a13, a22])]).neg(),
            cofactor([(a00, [a22, a33, a23, a32]), (a20, [a02, a33, a03, a32]), (a30, [a02, a23, a03, a22])]),
            cofactor([(a00, [a12, a33, a13, a32]), (a10, [a02, a33, a03, a32]), (a30, [a02, a13, a03, a12])]).neg(),
            cofactor([(a00, [a12, a23, a13, a22]), (a10, [a02, a23, a03, a22]), (a20, [a02, a13, a03, a12])]),
            cofactor([(a10, [a21, a33, a23, a31]), (a20, [a11, a33, a13, a31]), (a30, [a11, a23, a13, a21])]),
            cofactor([(a00, [a21, a33, a23, a31]), (a20, [a01, a33, a03, a31]), (a30, [a01, a23, a03, a21])]).neg(),
            cofactor([(a00, [a11, a33, a13, a31]), (a10, [a01, a33, a03, a31]), (a30, [a01, a13, a03, a11])]),
            cofactor([(a00, [a11, a23, a13, a21]), (a10, [a01, a23, a03, a21]), (a20, [a01, a13, a03, a11])]).neg(),
            cofactor([(a10, [a21, a32, a22, a31]), (a20, [a11, a32, a12, a31]), (a30, [a11, a22, a12, a21])]).neg(),
            cofactor([(a00, [a21, a32, a22, a31]), (a20, [a01, a32, a02, a31]), (a30, [a01, a22, a02, a21])]),
            cofactor([(a00, [a11, a32, a12, a31]), (a10, [a01, a32, a02, a31]), (a30, [a01, a12, a02, a11])]).neg(),
            cofactor([(a00, [a11, a22, a12, a21]), (a10, [a01, a22, a02, a21]), (a20, [a01, a12, a02, a11])]),
        ])
    }

    /// The twelve 2×2 minors of the top and bottom row pairs, shared by
    /// [`XMat4::det`] and [`XMat4::invert`].
    fn minors(&self) -> [xint; 12] {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;
        [
            a00.mul(a11).sub(a01.mul(a10)),
            a00.mul(a12).sub(a02.mul(a10)),
            a00.mul(a13).sub(a03.mul(a10)),
            a01.mul(a12).sub(a02.mul(a11)),
            a01.mul(a13).sub(a03.mul(a11)),
            a02.mul(a13).sub(a03.mul(a12)),
            a20.mul(a31).sub(a21.mul(a30)),
            a20.mul(a32).sub(a22.mul(a30)),
            a20.mul(a33).sub(a23.mul(a30)),
            a21.mul(a32).sub(a22.mul(a31)),
            a21.mul(a33).sub(a23.mul(a31)),
            a22.mul(a33).sub(a23.mul(a32)),
        ]
    }

    pub fn det(self) -> xint {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        b00.mul(b11)
            .sub(b01.mul(b10))
            .add(b02.mul(b09))
            .add(b03.mul(b08))
            .sub(b04.mul(b07))
            .add(b05.mul(b06))
    }

    pub fn invert(self) -> Option<Self> {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.0;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        let d = inverse_det(self.det(), "XMat4")?;
        Some(XMat4([
            a11.mul(b11).sub(a12.mul(b10)).add(a13.mul(b09)).mul(d),
            a02.mul(b10).sub(a01.mul(b11)).sub(a03.mul(b09)).mul(d),
            a31.mul(b05).sub(a32.mul(b04)).add(a33.mul(b03)).mul(d),
            a22.mul(b04).sub(a21.mul(b05)).sub(a23.mul(b03)).mul(d),
            a12.mul(b08).sub(a10.mul(b11)).sub(a13.mul(b07)).mul(d),
            a00.mul(b11).sub(a02.mul(b08)).add(a03.mul(b07)).mul(d),
            a32.mul(b02).sub(a30.mul(b05)).sub(a33.mul(b01)).mul(d),
            a20.mul(b05).sub(a22.mul(b02)).add(a23.mul(b01)).mul(d),
            a10.mul(b10).sub(a11.mul(b08)).add(a13.mul(b06)).mul(d),
            a01.mul(b08).sub(a00.mul(b10)).sub(a03.mul(b06)).mul(d),
            a30.mul(b04).sub(a31.mul(b02)).add(a33.mul(b00)).mul(d),
            a21.mul(b02).sub(a20.mul(b04)).sub(a23.mul(b00)).mul(d),
            a11.mul(b07).sub(a10.mul(b09)).sub(a12.mul(b06)).mul(d),
            a00.mul(b09).sub(a01.mul(b07)).add(a02.mul(b06)).mul(d),
            a31.mul(b01).sub(a30.mul(b03)).sub(a32.mul(b00)).mul(d),
            a20.mul(b03).sub(a21.mul(b01)).add(a22.mul(b00)).mul(d),
        ]))
    }

    /// Perspective projection for the view volume bounded by the given planes.
    pub fn frustum(left: xint, right: xint, bottom: xint, top: xint, near: xint, far: xint) -> Self {
        let rl = I.div(right.sub(left));
        let tb = I.div(top.sub(bottom));
        let nf = I.div(near.sub(far));
        XMat4([
            double(near).mul(rl),
            O,
            O,
            O,
            O,
            double(near).mul(tb),
            O,
            O,
            right.add(left).mul(rl),
            top.add(bottom).mul(tb),
            far.add(near).mul(nf),
            I.neg(),
            O,
            O,
            double(near.mul(far)).mul(nf),
            O,
        ])
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// Returns the identity when `eye` and `target` coincide. If `up` is parallel to the
    /// view direction the side axes collapse to zero.
    pub fn look_at(eye: XVec3, target: XVec3, up: XVec3) -> Self {
        let Some(z) = unit(eye - target) else {
            trace_degenerate!("XMat4::look_at with coincident eye and target");
            return Self::IDENTITY;
        };
        let x = unit(up.cross(z)).unwrap_or(XVec3::ZERO);
        let y = unit(z.cross(x)).unwrap_or(XVec3::ZERO);
        XMat4([
            x.0[0],
            y.0[0],
            z.0[0],
            O,
            x.0[1],
            y.0[1],
            z.0[1],
            O,
            x.0[2],
            y.0[2],
            z.0[2],
            O,
            x.dot(eye).neg(),
            y.dot(eye).neg(),
            z.dot(eye).neg(),
            I,
        ])
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        XMat4(product::<4, 16>(&self.0, &other.0))
    }

    /// Orthographic projection of a `width` × `height` view centred on the axis.
    pub fn orthogonal(width: xint, height: xint, near: xint, far: xint) -> Self {
        let two = xint::from_int(2);
        let nf = I.div(near.sub(far));
        XMat4([
            two.div(width),
            O,
            O,
            O,
            O,
            two.div(height),
            O,
            O,
            O,
            O,
            double(nf),
            O,
            O,
            O,
            near.add(far).mul(nf),
            I,
        ])
    }

    /// Perspective projection with a vertical field of view `fov`.
    pub fn perspective(fov: xang, width: xint, height: xint, near: xint, far: xint) -> Self {
        let f = I.div(xang(fov.0 >> 1).tan());
        let nf = I.div(near.sub(far));
        XMat4([
            f,
            O,
            O,
            O,
            O,
            f.mul(width).div(height),
            O,
            O,
            O,
            O,
            far.add(near).mul(nf),
            I.neg(),
            O,
            O,
            double(far.mul(near)).mul(nf),
            O,
        ])
    }

    #[inline(always)]
    pub fn from_quat(q: XQuat) -> Self {
        Self::rot_trans(q, XVec3::ZERO)
    }

    /// Post-multiplies by a rotation of `angle` around `axis`, which must be a unit vector.
    #[inline(always)]
    pub fn rotate(self, axis: XVec3, angle: xang) -> Self {
        self.mul(Self::rotation(axis, angle))
    }

    /// Rotation of `angle` around the unit vector `axis`.
    pub fn rotation(axis: XVec3, angle: xang) -> Self {
        let [x, y, z] = axis.0;
        let (s, c) = (angle.sin(), angle.cos());
        let t = I.sub(c);
        XMat4([
            x.mul(x).mul(t).add(c),
            y.mul(x).mul(t).add(z.mul(s)),
            z.mul(x).mul(t).sub(y.mul(s)),
            O,
            x.mul(y).mul(t).sub(z.mul(s)),
            y.mul(y).mul(t).add(c),
            z.mul(y).mul(t).add(x.mul(s)),
            O,
            x.mul(z).mul(t).add(y.mul(s)),
            y.mul(z).mul(t).sub(x.mul(s)),
            z.mul(z).mul(t).add(c),
            O,
            O,
            O,
            O,
            I,
        ])
    }

    /// Rotation by `q` followed by a translation of `offset`.
    pub fn rot_trans(q: XQuat, offset: XVec3) -> Self {
        let r = rotation_basis(q);
        let [tx, ty, tz] = offset.0;
        XMat4([
            r[0], r[1], r[2], O, r[3], r[4], r[5], O, r[6], r[7], r[8], O, tx, ty, tz, I,
        ])
    }

    /// Rotation by `q` around `origin`, followed by a translation of `offset`.
    pub fn rot_trans_origin(q: XQuat, offset: XVec3, origin: XVec3) -> Self {
        let basis = XMat3(rotation_basis(q));
        let [tx, ty, tz] = (offset + origin - origin.apply_mat3(&basis)).0;
        let r = basis.0;
        XMat4([
            r[0], r[1], r[2], O, r[3], r[4], r[5], O, r[6], r[7], r[8], O, tx, ty, tz, I,
        ])
    }

    pub fn scale(self, factors: XVec3) -> Self {
        let mut out = self.0;
        for (column, factor) in out.chunks_exact_mut(4).zip(factors.0) {
            for component in column {
                *component = component.mul(factor);
            }
        }
        XMat4(out)
    }

    pub fn scaling(factors: XVec3) -> Self {
        let [x, y, z] = factors.0;
        XMat4([x, O, O, O, O, y, O, O, O, O, z, O, O, O, O, I])
    }

    pub fn translate(self, offset: XVec3) -> Self {
        let [bx, by, bz] = offset.0;
        let a = &self.0;
        let mut out = self.0;
        for row in 0..4 {
            out[12 + row] = a[row]
                .mul(bx)
                .add(a[4 + row].mul(by))
                .add(a[8 + row].mul(bz))
                .add(a[12 + row]);
        }
        XMat4(out)
    }

    pub fn translation(offset: XVec3) -> Self {
        let [x, y, z] = offset.0;
        XMat4([I, O, O, O, O, I, O, O, O, O, I, O, x, y, z, I])
    }

    #[inline(always)]
    pub fn transpose(self) -> Self {
        XMat4(transposed::<4, 16>(&self.0))
    }
}

// endregion: XMat4

macro_rules! matrix_ops {
    ($($name:ident),*) => {$(
        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: Self) -> Self::Output {
                $name::mul(self, rhs)
            }
        }

        impl core::ops::MulAssign for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = $name::mul(*self, rhs);
            }
        }
    )*};
}

matrix_ops!(XMat2, XMat3x2, XMat3, XMat4);

#[cfg(test)]
mod tests {
    use super::*;

    fn x(value: i32) -> xint {
        xint::from_int(value)
    }

    fn v2(a: i32, b: i32) -> XVec2 {
        XVec2::new(x(a), x(b))
    }

    fn v3(a: i32, b: i32, c: i32) -> XVec3 {
        XVec3::new(x(a), x(b), x(c))
    }

    fn quarter_z() -> XQuat {
        XQuat::axis_angle(v3(0, 0, 1), xang::DEG90)
    }

    #[test]
    fn mat2_inverse_and_adjoint() {
        let m = XMat2([x(1), x(2), x(3), x(4)]);
        assert_eq!(m.det(), x(-2));
        assert_eq!(m.adjoint(), XMat2([x(4), x(-2), x(-3), x(1)]));
        let inverse = m.invert().expect("non-singular");
        assert_eq!(inverse, XMat2([x(-2), x(1), xint(98304), -xint::HALF]));
        assert_eq!(m * inverse, XMat2::IDENTITY);
        assert_eq!(XMat2([x(1), x(2), x(2), x(4)]).invert(), None);
        assert_eq!(m.transpose(), XMat2([x(1), x(3), x(2), x(4)]));
    }

    #[test]
    fn mat2_builders() {
        assert_eq!(
            XMat2::rotation(xang::DEG90),
            XMat2([xint::ZERO, xint::ONE, xint::NEG_ONE, xint::ZERO])
        );
        assert_eq!(
            XMat2::IDENTITY.rotate(xang::DEG90),
            XMat2::rotation(xang::DEG90)
        );
        assert_eq!(XMat2::IDENTITY.scale(v2(2, 3)), XMat2::scaling(v2(2, 3)));
        assert_eq!(XMat2::default(), XMat2::IDENTITY);
        assert_eq!(
            XMat2([x(1), x(2), x(3), x(4)]).comp_mul(XMat2([x(2), x(2), x(2), x(2)])),
            XMat2([x(2), x(4), x(6), x(8)])
        );
    }

    #[test]
    fn mat3x2_affine() {
        let t = XMat3x2::translation(v2(1, 2));
        let s = XMat3x2::scaling(v2(2, 3));
        let composed = t * s;
        assert_eq!(composed, XMat3x2([x(2), x(0), x(0), x(3), x(1), x(2)]));
        assert_eq!(v2(1, 1).apply_mat3x2(composed), v2(3, 5));
        assert_eq!(XMat3x2::IDENTITY.translate(v2(1, 2)), t);
        assert_eq!(XMat3x2::IDENTITY.scale(v2(2, 3)), s);
        assert_eq!(
            XMat3x2::IDENTITY.rotate(xang::DEG90),
            XMat3x2::rotation(xang::DEG90)
        );
        assert_eq!(composed.det(), x(6));
    }

    #[test]
    fn mat3x2_inverse() {
        assert_eq!(
            XMat3x2::translation(v2(5, -2)).invert(),
            Some(XMat3x2::translation(v2(-5, 2)))
        );
        let m = XMat3x2([x(2), x(0), x(0), x(4), x(6), x(8)]);
        let inverse = m.invert().expect("non-singular");
        assert_eq!(m * inverse, XMat3x2::IDENTITY);
        assert_eq!(XMat3x2([xint::ZERO; 6]).invert(), None);
    }

    #[test]
    fn mat3_builders_and_inverse() {
        let m = XMat3::translation(v2(3, 4)).scale(v2(2, 4));
        assert_eq!(m, XMat3::translation(v2(3, 4)) * XMat3::scaling(v2(2, 4)));
        assert_eq!(m.det(), x(8));
        let inverse = m.invert().expect("non-singular");
        assert_eq!(m * inverse, XMat3::IDENTITY);
        assert_eq!(inverse * m, XMat3::IDENTITY);
        assert_eq!(XMat3::IDENTITY.translate(v2(3, 4)), XMat3::translation(v2(3, 4)));
        assert_eq!(
            XMat3::IDENTITY.rotate(xang::DEG90),
            XMat3::rotation(xang::DEG90)
        );
        assert_eq!(XMat3::from_quat(quarter_z()), XMat3::rotation(xang::DEG90));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(XMat3([xint::ONE; 9]).invert(), None);
    }

    #[test]
    fn mat3_adjoint_scales_inverse() {
        let m = XMat3::scaling(v2(2, 4));
        assert_eq!(m.adjoint(), XMat3([x(4), x(0), x(0), x(0), x(2), x(0), x(0), x(0), x(8)]));
        assert_eq!(XMat3::IDENTITY.adjoint(), XMat3::IDENTITY);
    }

    #[test]
    fn mat4_inverse() {
        assert_eq!(
            XMat4::translation(v3(1, 2, 3)).invert(),
            Some(XMat4::translation(v3(-1, -2, -3)))
        );
        let scaled = XMat4::scaling(v3(2, 4, 8));
        assert_eq!(scaled.det(), x(64));
        assert_eq!(
            scaled.invert(),
            Some(XMat4::scaling(XVec3::new(
                xint::HALF,
                xint(16384),
                xint(8192)
            )))
        );
        let mut singular = XMat4::IDENTITY;
        singular.0[10] = xint::ZERO;
        assert_eq!(singular.invert(), None);
        assert_eq!(XMat4::IDENTITY.adjoint(), XMat4::IDENTITY);
        let mut adjoint = XMat4::scaling(v3(32, 16, 8));
        adjoint.0[15] = x(64);
        assert_eq!(scaled.adjoint(), adjoint);
    }

    #[test]
    fn mat4_composition() {
        let m = XMat4::translation(v3(1, 2, 3)).scale(v3(2, 2, 2));
        assert_eq!(m, XMat4::translation(v3(1, 2, 3)) * XMat4::scaling(v3(2, 2, 2)));
        assert_eq!(XMat4::IDENTITY.translate(v3(1, 2, 3)), XMat4::translation(v3(1, 2, 3)));
        assert_eq!(v3(1, 1, 1).apply_mat4(&m), v3(3, 4, 5));
        let mut accumulated = XMat4::IDENTITY;
        accumulated *= m;
        assert_eq!(accumulated, m);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().0[3], x(1));
    }

    #[test]
    fn mat4_rotations() {
        let axis = v3(0, 0, 1);
        assert_eq!(XMat4::from_quat(quarter_z()), XMat4::rotation(axis, xang::DEG90));
        assert_eq!(
            XMat4::IDENTITY.rotate(axis, xang::DEG90),
            XMat4::rotation(axis, xang::DEG90)
        );
        assert_eq!(v3(1, 0, 0).apply_mat4(&XMat4::rotation(axis, xang::DEG90)), v3(0, 1, 0));
        assert_eq!(
            XMat4::rot_trans(quarter_z(), v3(1, 2, 3)),
            XMat4::translation(v3(1, 2, 3)) * XMat4::from_quat(quarter_z())
        );
    }

    #[test]
    fn mat4_rotation_about_origin() {
        let pivot = v3(1, 0, 0);
        let m = XMat4::rot_trans_origin(quarter_z(), XVec3::ZERO, pivot);
        assert_eq!(pivot.apply_mat4(&m), pivot);
        assert_eq!(v3(2, 0, 0).apply_mat4(&m), v3(1, 1, 0));
        let shifted = XMat4::rot_trans_origin(quarter_z(), v3(0, 0, 5), pivot);
        assert_eq!(pivot.apply_mat4(&shifted), v3(1, 0, 5));
    }

    #[test]
    fn projections() {
        let perspective = XMat4::perspective(xang::DEG90, x(1), x(1), x(1), x(3));
        let frustum = XMat4::frustum(x(-1), x(1), x(-1), x(1), x(1), x(3));
        assert_eq!(perspective, frustum);
        assert_eq!(perspective.0[10], x(-2));
        assert_eq!(perspective.0[11], xint::NEG_ONE);
        assert_eq!(perspective.0[14], x(-3));

        let ortho = XMat4::orthogonal(x(2), x(4), x(1), x(3));
        assert_eq!(ortho.0[0], xint::ONE);
        assert_eq!(ortho.0[5], xint::HALF);
        assert_eq!(ortho.0[10], xint::NEG_ONE);
        assert_eq!(ortho.0[14], x(-2));
        assert_eq!(ortho.0[15], xint::ONE);
    }

    #[test]
    fn look_at_camera() {
        let view = XMat4::look_at(v3(0, 0, 4), XVec3::ZERO, v3(0, 1, 0));
        assert_eq!(view, XMat4::translation(v3(0, 0, -4)));
        assert_eq!(
            XMat4::look_at(v3(1, 2, 3), v3(1, 2, 3), v3(0, 1, 0)),
            XMat4::IDENTITY
        );
        let parallel = XMat4::look_at(v3(0, 4, 0), XVec3::ZERO, v3(0, 1, 0));
        assert_eq!(parallel.0[0], xint::ZERO);
        assert_eq!(parallel.0[6], xint::ONE);
    }
}
