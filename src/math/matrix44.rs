use crate::{
    error::check_index,
    math::{Matrix33, Matrix34, QuatT, Quaternion, Vector3, Vector4, ZERO_TOLERANCE},
    MathResult,
};

use std::ops::{Index, IndexMut, Mul, MulAssign};

/// Homogeneous 4x4 matrix stored as four row vectors; vectors are columns.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix44(pub [Vector4; 4]);

unsafe impl bytemuck::Zeroable for Matrix44 {}
unsafe impl bytemuck::Pod for Matrix44 {}

/// The six 2x2 determinants of the top two rows and the six of the bottom two.
struct SubDeterminants {
    s: [f32; 6],
    c: [f32; 6],
}

impl Matrix44 {
    #[inline]
    pub const fn new(x: Vector4, y: Vector4, z: Vector4, w: Vector4) -> Matrix44 {
        Matrix44([x, y, z, w])
    }

    #[inline]
    pub const fn identity() -> Matrix44 {
        Matrix44([
            Vector4([1.0, 0.0, 0.0, 0.0]),
            Vector4([0.0, 1.0, 0.0, 0.0]),
            Vector4([0.0, 0.0, 1.0, 0.0]),
            Vector4([0.0, 0.0, 0.0, 1.0]),
        ])
    }

    #[inline]
    pub const fn zero() -> Matrix44 {
        Matrix44([Vector4([0.0; 4]); 4])
    }

    #[inline]
    pub const fn from_array(m: [[f32; 4]; 4]) -> Matrix44 {
        Matrix44([Vector4(m[0]), Vector4(m[1]), Vector4(m[2]), Vector4(m[3])])
    }

    #[inline]
    pub fn to_array(&self) -> [[f32; 4]; 4] {
        [self.0[0].0, self.0[1].0, self.0[2].0, self.0[3].0]
    }

    #[inline]
    pub fn create_translation(v: Vector3) -> Matrix44 {
        Matrix44::from(Matrix34::create_translation(v))
    }

    #[inline]
    pub fn create_scale(v: Vector3) -> Matrix44 {
        Matrix44::from(Matrix33::create_scale(v))
    }

    /// Scale, then rotate, then translate.
    #[inline]
    pub fn create(scale: Vector3, rotation: Quaternion, translation: Vector3) -> Matrix44 {
        Matrix44::from(Matrix34::create(scale, rotation, translation))
    }

    element_accessors! {
        m00, set_m00 => 0, 0;
        m01, set_m01 => 0, 1;
        m02, set_m02 => 0, 2;
        m03, set_m03 => 0, 3;
        m10, set_m10 => 1, 0;
        m11, set_m11 => 1, 1;
        m12, set_m12 => 1, 2;
        m13, set_m13 => 1, 3;
        m20, set_m20 => 2, 0;
        m21, set_m21 => 2, 1;
        m22, set_m22 => 2, 2;
        m23, set_m23 => 2, 3;
        m30, set_m30 => 3, 0;
        m31, set_m31 => 3, 1;
        m32, set_m32 => 3, 2;
        m33, set_m33 => 3, 3;
    }

    pub fn row(&self, index: usize) -> MathResult<Vector4> {
        check_index(index, 4)?;
        Ok(self.0[index])
    }

    pub fn set_row(&mut self, index: usize, row: Vector4) -> MathResult<()> {
        check_index(index, 4)?;
        self.0[index] = row;
        Ok(())
    }

    pub fn column(&self, index: usize) -> MathResult<Vector4> {
        check_index(index, 4)?;
        Ok(Vector4([
            self.0[0].0[index],
            self.0[1].0[index],
            self.0[2].0[index],
            self.0[3].0[index],
        ]))
    }

    pub fn set_column(&mut self, index: usize, column: Vector4) -> MathResult<()> {
        check_index(index, 4)?;
        for row in 0..4 {
            self.0[row].0[index] = column.0[row];
        }
        Ok(())
    }

    #[inline]
    pub fn translation(&self) -> Vector3 {
        Vector3([self.0[0].0[3], self.0[1].0[3], self.0[2].0[3]])
    }

    #[inline]
    pub fn set_translation(&mut self, translation: Vector3) {
        for row in 0..3 {
            self.0[row].0[3] = translation.0[row];
        }
    }

    /// The upper-left 3x3 block.
    #[inline]
    pub fn rotation(&self) -> Matrix33 {
        Matrix33([
            self.0[0].narrowed(),
            self.0[1].narrowed(),
            self.0[2].narrowed(),
        ])
    }

    /// The top three rows; any projective bottom row is dropped.
    #[inline]
    pub fn affine(&self) -> Matrix34 {
        Matrix34([self.0[0], self.0[1], self.0[2]])
    }

    #[inline]
    #[rustfmt::skip]
    fn sub_determinants(&self) -> SubDeterminants {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.to_array();
        SubDeterminants {
            s: [
                a00 * a11 - a10 * a01,
                a00 * a12 - a10 * a02,
                a00 * a13 - a10 * a03,
                a01 * a12 - a11 * a02,
                a01 * a13 - a11 * a03,
                a02 * a13 - a12 * a03,
            ],
            c: [
                a20 * a31 - a30 * a21,
                a20 * a32 - a30 * a22,
                a20 * a33 - a30 * a23,
                a21 * a32 - a31 * a22,
                a21 * a33 - a31 * a23,
                a22 * a33 - a32 * a23,
            ],
        }
    }

    /// Full 4x4 determinant, expanded over pairs of complementary 2x2 minors.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let SubDeterminants { s, c } = self.sub_determinants();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Determinant of the 3x3 rotation block, which is all that matters for affine matrices.
    #[inline]
    pub fn rotation_determinant(&self) -> f32 {
        self.rotation().determinant()
    }

    /// Invert in place using Cramer's rule.
    ///
    /// Returns `false` and leaves the matrix untouched when the determinant is
    /// smaller than [`ZERO_TOLERANCE`].
    #[rustfmt::skip]
    pub fn invert(&mut self) -> bool {
        let SubDeterminants { s, c } = self.sub_determinants();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        if det.abs() < ZERO_TOLERANCE {
            log::debug!("Matrix44 inversion skipped: determinant {} is singular", det);
            return false;
        }
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.to_array();
        let adjugate = Matrix44::from_array([
            [
                a11 * c[5] - a12 * c[4] + a13 * c[3],
                -a01 * c[5] + a02 * c[4] - a03 * c[3],
                a31 * s[5] - a32 * s[4] + a33 * s[3],
                -a21 * s[5] + a22 * s[4] - a23 * s[3],
            ],
            [
                -a10 * c[5] + a12 * c[2] - a13 * c[1],
                a00 * c[5] - a02 * c[2] + a03 * c[1],
                -a30 * s[5] + a32 * s[2] - a33 * s[1],
                a20 * s[5] - a22 * s[2] + a23 * s[1],
            ],
            [
                a10 * c[4] - a11 * c[2] + a13 * c[0],
                -a00 * c[4] + a01 * c[2] - a03 * c[0],
                a30 * s[4] - a31 * s[2] + a33 * s[0],
                -a20 * s[4] + a21 * s[2] - a23 * s[0],
            ],
            [
                -a10 * c[3] + a11 * c[1] - a12 * c[0],
                a00 * c[3] - a01 * c[1] + a02 * c[0],
                -a30 * s[3] + a31 * s[1] - a32 * s[0],
                a20 * s[3] - a21 * s[1] + a22 * s[0],
            ],
        ]);
        *self = adjugate * (1.0 / det);
        true
    }

    #[inline]
    pub fn inverted(&self) -> Option<Matrix44> {
        let mut out = *self;
        if out.invert() {
            Some(out)
        } else {
            None
        }
    }

    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    #[inline]
    #[rustfmt::skip]
    pub fn transposed(&self) -> Matrix44 {
        Matrix44([
            Vector4([self.0[0].0[0], self.0[1].0[0], self.0[2].0[0], self.0[3].0[0]]),
            Vector4([self.0[0].0[1], self.0[1].0[1], self.0[2].0[1], self.0[3].0[1]]),
            Vector4([self.0[0].0[2], self.0[1].0[2], self.0[2].0[2], self.0[3].0[2]]),
            Vector4([self.0[0].0[3], self.0[1].0[3], self.0[2].0[3], self.0[3].0[3]]),
        ])
    }

    #[inline]
    pub fn transform(&self, v: Vector4) -> Vector4 {
        Vector4([
            self.0[0].dot(v),
            self.0[1].dot(v),
            self.0[2].dot(v),
            self.0[3].dot(v),
        ])
    }

    /// Transform a point with `w = 1`, without a perspective divide.
    #[inline]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        self.transform(p.widened(1.0)).narrowed()
    }

    #[inline]
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.transform(v.widened(0.0)).narrowed()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Vector4::is_valid)
    }

    #[inline]
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.is_equivalent(&Matrix44::identity(), epsilon)
    }

    pub fn is_equivalent(&self, rhs: &Matrix44, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(a, b)| a.is_equivalent_within(*b, epsilon))
    }

    #[inline]
    pub fn is_orthonormal(&self, epsilon: f32) -> bool {
        self.rotation().is_orthonormal(epsilon)
    }

    #[inline]
    pub fn is_orthonormal_rh(&self, epsilon: f32) -> bool {
        self.rotation().is_orthonormal_rh(epsilon)
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Matrix33> for Matrix44 {
    #[inline]
    fn from(m: Matrix33) -> Matrix44 {
        Matrix44::from(Matrix34::from(m))
    }
}

impl From<Matrix34> for Matrix44 {
    #[inline]
    fn from(m: Matrix34) -> Matrix44 {
        Matrix44([m.0[0], m.0[1], m.0[2], Vector4([0.0, 0.0, 0.0, 1.0])])
    }
}

impl From<Quaternion> for Matrix44 {
    #[inline]
    fn from(q: Quaternion) -> Matrix44 {
        Matrix44::from(Matrix33::from(q))
    }
}

impl From<QuatT> for Matrix44 {
    #[inline]
    fn from(qt: QuatT) -> Matrix44 {
        Matrix44::from(Matrix34::from(qt))
    }
}

impl Index<usize> for Matrix44 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Vector4 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Matrix44 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.0[index]
    }
}

impl Mul<&Matrix44> for &Matrix44 {
    type Output = Matrix44;

    fn mul(self, rhs: &Matrix44) -> Matrix44 {
        let mut ret = Matrix44::zero();
        for i in 0..4 {
            for j in 0..4 {
                ret[i][0] += self[i][j] * rhs[j][0];
                ret[i][1] += self[i][j] * rhs[j][1];
                ret[i][2] += self[i][j] * rhs[j][2];
                ret[i][3] += self[i][j] * rhs[j][3];
            }
        }
        ret
    }
}

impl Mul for Matrix44 {
    type Output = Matrix44;
    #[inline]
    fn mul(self, rhs: Matrix44) -> Matrix44 {
        &self * &rhs
    }
}

impl MulAssign for Matrix44 {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix44) {
        *self = &*self * &rhs;
    }
}

impl Mul<Vector4> for Matrix44 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Vector4 {
        self.transform(rhs)
    }
}

impl Mul<f32> for Matrix44 {
    type Output = Matrix44;
    #[inline]
    fn mul(self, rhs: f32) -> Matrix44 {
        Matrix44([
            self.0[0] * rhs,
            self.0[1] * rhs,
            self.0[2] * rhs,
            self.0[3] * rhs,
        ])
    }
}
