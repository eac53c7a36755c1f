//! Fixed-point vectors with 2, 3 and 4 components.
//!
//! All arithmetic goes through the [`xint`] primitives, so results wrap instead of saturating.
//! The `apply_*` methods transform a vector by a column-major matrix or a quaternion.

use crate::layout::{self, flat_storage};
use crate::matrix::{XMat2, XMat3, XMat3x2, XMat4};
use crate::quat::XQuat;
use crate::scalars::{xang, xint};

/// A 2-component vector `[x, y]`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XVec2(pub [xint; 2]);

/// A 3-component vector `[x, y, z]`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XVec3(pub [xint; 3]);

/// A 4-component vector `[x, y, z, w]`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct XVec4(pub [xint; 4]);

flat_storage!(XVec2, 2);
flat_storage!(XVec3, 3);
flat_storage!(XVec4, 4);

macro_rules! vector_ops {
    ($name:ident, $len:literal) => {
        impl $name {
            pub const ZERO: Self = $name([xint::ZERO; $len]);

            #[inline(always)]
            pub fn scale(self, factor: xint) -> Self {
                self.map(|component| component.mul(factor))
            }

            #[inline(always)]
            pub fn dot(self, other: Self) -> xint {
                layout::dot(&self.0, &other.0)
            }

            /// Squared length.
            #[inline(always)]
            pub fn len2(self) -> xint {
                self.dot(self)
            }

            #[inline(always)]
            pub fn len(self) -> xint {
                self.len2().sqrt()
            }

            #[inline(always)]
            pub fn dist(self, other: Self) -> xint {
                (self - other).len()
            }

            /// Squared distance.
            #[inline(always)]
            pub fn dist2(self, other: Self) -> xint {
                (other - self).len2()
            }

            /// Unit vector in the same direction; a zero vector is returned unchanged.
            #[inline(always)]
            pub fn normal(self) -> Self {
                $name(layout::normalize(self.0))
            }

            #[inline(always)]
            pub fn lerp(self, other: Self, t: xint) -> Self {
                $name(layout::zip_map(self.0, other.0, |a, b| a.lerp(b, t)))
            }

            #[inline(always)]
            pub fn min(self, other: Self) -> Self {
                $name(layout::zip_map(self.0, other.0, xint::min))
            }

            #[inline(always)]
            pub fn max(self, other: Self) -> Self {
                $name(layout::zip_map(self.0, other.0, xint::max))
            }

            /// Clamps each component into the matching `[min, max]` components.
            #[inline(always)]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                let mut out = self.0;
                for (i, component) in out.iter_mut().enumerate() {
                    *component = xint::clamp(*component, min.0[i], max.0[i]);
                }
                $name(out)
            }

            /// Component-wise reciprocal.
            #[inline(always)]
            pub fn inverse(self) -> Self {
                self.map(|component| xint::ONE.div(component))
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: Self) -> Self::Output {
                self.comp_mul(rhs)
            }
        }

        impl core::ops::Div for $name {
            type Output = Self;
            #[inline(always)]
            fn div(self, rhs: Self) -> Self::Output {
                $name(layout::zip_map(self.0, rhs.0, xint::div))
            }
        }

        impl core::ops::Mul<xint> for $name {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: xint) -> Self::Output {
                self.scale(rhs)
            }
        }
    };
}

vector_ops!(XVec2, 2);
vector_ops!(XVec3, 3);
vector_ops!(XVec4, 4);

/// The vector half of a quaternion rotation `q · v · q⁻¹`, shared by 3- and 4-vectors.
#[inline(always)]
fn rotate_by_quat(ax: xint, ay: xint, az: xint, q: XQuat) -> [xint; 3] {
    let [bx, by, bz, bw] = q.0;
    let (nx, ny, nz) = (bx.neg(), by.neg(), bz.neg());
    let ix = bw.mul(ax).add(by.mul(az)).sub(bz.mul(ay));
    let iy = bw.mul(ay).add(bz.mul(ax)).sub(bx.mul(az));
    let iz = bw.mul(az).add(bx.mul(ay)).sub(by.mul(ax));
    let iw = nx.mul(ax).sub(by.mul(ay)).sub(bz.mul(az));
    [
        ix.mul(bw).add(iw.mul(nx)).add(iy.mul(nz)).sub(iz.mul(ny)),
        iy.mul(bw).add(iw.mul(ny)).add(iz.mul(nx)).sub(ix.mul(nz)),
        iz.mul(bw).add(iw.mul(nz)).add(ix.mul(ny)).sub(iy.mul(nx)),
    ]
}

// region: XVec2

impl XVec2 {
    #[inline(always)]
    pub const fn new(x: xint, y: xint) -> Self {
        XVec2([x, y])
    }

    #[inline(always)]
    pub const fn x(self) -> xint {
        self.0[0]
    }

    #[inline(always)]
    pub const fn y(self) -> xint {
        self.0[1]
    }

    /// The z component of the 3-D cross product.
    #[inline(always)]
    pub fn cross(self, other: Self) -> xint {
        self.0[0].mul(other.0[1]).sub(self.0[1].mul(other.0[0]))
    }

    pub fn apply_mat2(self, m: XMat2) -> Self {
        let [x, y] = self.0;
        let m = m.0;
        XVec2([
            m[0].mul(x).add(m[2].mul(y)),
            m[1].mul(x).add(m[3].mul(y)),
        ])
    }

    pub fn apply_mat3x2(self, m: XMat3x2) -> Self {
        let [x, y] = self.0;
        let m = m.0;
        XVec2([
            m[0].mul(x).add(m[2].mul(y)).add(m[4]),
            m[1].mul(x).add(m[3].mul(y)).add(m[5]),
        ])
    }

    /// Treats the vector as a point `[x, y, 1]`.
    pub fn apply_mat3(self, m: &XMat3) -> Self {
        let [x, y] = self.0;
        let m = &m.0;
        XVec2([
            m[0].mul(x).add(m[3].mul(y)).add(m[6]),
            m[1].mul(x).add(m[4].mul(y)).add(m[7]),
        ])
    }

    /// Treats the vector as a point `[x, y, 0, 1]` and drops z and w.
    pub fn apply_mat4(self, m: &XMat4) -> Self {
        let [x, y] = self.0;
        let m = &m.0;
        XVec2([
            m[0].mul(x).add(m[4].mul(y)).add(m[12]),
            m[1].mul(x).add(m[5].mul(y)).add(m[13]),
        ])
    }
}

// endregion: XVec2

// region: XVec3

impl XVec3 {
    #[inline(always)]
    pub const fn new(x: xint, y: xint, z: xint) -> Self {
        XVec3([x, y, z])
    }

    #[inline(always)]
    pub const fn x(self) -> xint {
        self.0[0]
    }

    #[inline(always)]
    pub const fn y(self) -> xint {
        self.0[1]
    }

    #[inline(always)]
    pub const fn z(self) -> xint {
        self.0[2]
    }

    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        XVec3([
            ay.mul(bz).sub(az.mul(by)),
            az.mul(bx).sub(ax.mul(bz)),
            ax.mul(by).sub(ay.mul(bx)),
        ])
    }

    /// Angle between two vectors of any length.
    #[inline(always)]
    pub fn angle(self, other: Self) -> xang {
        self.normal().nangle(other.normal())
    }

    /// Angle between two unit vectors.
    #[inline(always)]
    pub fn nangle(self, other: Self) -> xang {
        self.dot(other).acos()
    }

    /// Unit normal of the plane spanned by both vectors. The inputs are normalized before
    /// the cross product so large vectors do not overflow.
    #[inline(always)]
    pub fn orthogonal(self, other: Self) -> Self {
        self.normal().cross(other.normal()).normal()
    }

    /// Treats `z` as the homogeneous coordinate of a 2-D point.
    pub fn apply_mat3x2(self, m: XMat3x2) -> Self {
        let [x, y, z] = self.0;
        let m = m.0;
        XVec3([
            x.mul(m[0]).add(y.mul(m[2])).add(z.mul(m[4])),
            x.mul(m[1]).add(y.mul(m[3])).add(z.mul(m[5])),
            z,
        ])
    }

    pub fn apply_mat3(self, m: &XMat3) -> Self {
        let [x, y, z] = self.0;
        let m = &m.0;
        XVec3([
            x.mul(m[0]).add(y.mul(m[3])).add(z.mul(m[6])),
            x.mul(m[1]).add(y.mul(m[4])).add(z.mul(m[7])),
            x.mul(m[2]).add(y.mul(m[5])).add(z.mul(m[8])),
        ])
    }

    /// Transforms the point `[x, y, z, 1]` and divides by the resulting `w`.
    /// A zero `w` is treated as one.
    pub fn apply_mat4(self, m: &XMat4) -> Self {
        let [x, y, z] = self.0;
        let m = &m.0;
        let row = |r: usize| {
            m[r].mul(x)
                .add(m[4 + r].mul(y))
                .add(m[8 + r].mul(z))
                .add(m[12 + r])
        };
        let w = row(3);
        let w = if w.0 == 0 { xint::ONE } else { xint::ONE.div(w) };
        XVec3([w.mul(row(0)), w.mul(row(1)), w.mul(row(2))])
    }

    #[inline(always)]
    pub fn apply_quat(self, q: XQuat) -> Self {
        let [x, y, z] = self.0;
        XVec3(rotate_by_quat(x, y, z, q))
    }
}

// endregion: XVec3

// region: XVec4

impl XVec4 {
    #[inline(always)]
    pub const fn new(x: xint, y: xint, z: xint, w: xint) -> Self {
        XVec4([x, y, z, w])
    }

    #[inline(always)]
    pub const fn x(self) -> xint {
        self.0[0]
    }

    #[inline(always)]
    pub const fn y(self) -> xint {
        self.0[1]
    }

    #[inline(always)]
    pub const fn z(self) -> xint {
        self.0[2]
    }

    #[inline(always)]
    pub const fn w(self) -> xint {
        self.0[3]
    }

    pub fn apply_mat4(self, m: &XMat4) -> Self {
        let [x, y, z, w] = self.0;
        let m = &m.0;
        let row = |r: usize| {
            m[r].mul(x)
                .add(m[4 + r].mul(y))
                .add(m[8 + r].mul(z))
                .add(m[12 + r].mul(w))
        };
        XVec4([row(0), row(1), row(2), row(3)])
    }

    /// Rotates the `xyz` part; `w` passes through.
    #[inline(always)]
    pub fn apply_quat(self, q: XQuat) -> Self {
        let [x, y, z, w] = self.0;
        let [rx, ry, rz] = rotate_by_quat(x, y, z, q);
        XVec4([rx, ry, rz, w])
    }
}

// endregion: XVec4
