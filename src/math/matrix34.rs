use crate::{
    error::check_index,
    math::{Angles3, Matrix33, QuatT, Quaternion, Vector3, Vector4, ZERO_TOLERANCE},
    MathResult,
};
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// Affine transform: a 3x3 rotation/scale block with a translation column
/// (`m03`, `m13`, `m23`), stored as three row vectors.
///
/// Points transform as `m * p` with an implicit `w = 1`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix34(pub [Vector4; 3]);

unsafe impl bytemuck::Zeroable for Matrix34 {}

unsafe impl bytemuck::Pod for Matrix34 {}

impl Matrix34 {
    #[inline]
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
    ) -> Matrix34 {
        Matrix34([
            Vector4([m00, m01, m02, m03]),
            Vector4([m10, m11, m12, m13]),
            Vector4([m20, m21, m22, m23]),
        ])
    }

    #[inline]
    pub const fn identity() -> Matrix34 {
        Matrix34::new(1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn zero() -> Matrix34 {
        Matrix34([Vector4([0.0; 4]); 3])
    }

    #[inline]
    pub const fn from_array(m: [[f32; 4]; 3]) -> Matrix34 {
        Matrix34([Vector4(m[0]), Vector4(m[1]), Vector4(m[2])])
    }

    #[inline]
    pub fn to_array(&self) -> [[f32; 4]; 3] {
        [self.0[0].0, self.0[1].0, self.0[2].0]
    }

    #[inline]
    pub const fn from_rows(r0: Vector4, r1: Vector4, r2: Vector4) -> Matrix34 {
        Matrix34([r0, r1, r2])
    }

    /// Combine a rotation/scale block with a translation.
    #[inline]
    pub fn from_rotation_translation(rotation: Matrix33, translation: Vector3) -> Matrix34 {
        let [r0, r1, r2] = rotation.0;
        Matrix34([
            r0.widened(translation.0[0]),
            r1.widened(translation.0[1]),
            r2.widened(translation.0[2]),
        ])
    }

    /// Scale, then rotate, then translate.
    pub fn create(scale: Vector3, rotation: Quaternion, translation: Vector3) -> Matrix34 {
        let mut block = Matrix33::from(rotation);
        block.scale_columns(scale);
        Matrix34::from_rotation_translation(block, translation)
    }

    #[inline]
    pub fn create_scale(scale: Vector3) -> Matrix34 {
        Matrix34::from(Matrix33::create_scale(scale))
    }

    #[inline]
    pub fn create_translation(translation: Vector3) -> Matrix34 {
        Matrix34::from_rotation_translation(Matrix33::identity(), translation)
    }

    #[inline]
    pub fn create_rotation_x(angle: f32) -> Matrix34 {
        Matrix34::from(Matrix33::create_rotation_x(angle))
    }

    #[inline]
    pub fn create_rotation_y(angle: f32) -> Matrix34 {
        Matrix34::from(Matrix33::create_rotation_y(angle))
    }

    #[inline]
    pub fn create_rotation_z(angle: f32) -> Matrix34 {
        Matrix34::from(Matrix33::create_rotation_z(angle))
    }

    #[inline]
    pub fn create_rotation_aa(angle: f32, axis: Vector3) -> Matrix34 {
        Matrix34::from(Matrix33::create_rotation_aa(angle, axis))
    }

    #[inline]
    pub fn create_rotation_xyz(angles: Angles3, translation: Vector3) -> Matrix34 {
        Matrix34::from_rotation_translation(Matrix33::create_rotation_xyz(angles), translation)
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
    }

    pub fn row(&self, index: usize) -> MathResult<Vector4> {
        check_index(index, 3)?;
        Ok(self.0[index])
    }

    pub fn set_row(&mut self, index: usize, row: Vector4) -> MathResult<()> {
        check_index(index, 3)?;
        self.0[index] = row;
        Ok(())
    }

    /// Column 3 is the translation.
    pub fn column(&self, index: usize) -> MathResult<Vector3> {
        check_index(index, 4)?;
        Ok(Vector3([
            self.0[0].0[index],
            self.0[1].0[index],
            self.0[2].0[index],
        ]))
    }

    pub fn set_column(&mut self, index: usize, column: Vector3) -> MathResult<()> {
        check_index(index, 4)?;
        for row in 0..3 {
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

    /// The 3x3 rotation/scale block.
    #[inline]
    pub fn rotation(&self) -> Matrix33 {
        Matrix33([
            self.0[0].narrowed(),
            self.0[1].narrowed(),
            self.0[2].narrowed(),
        ])
    }

    #[inline]
    pub fn set_rotation(&mut self, rotation: Matrix33) {
        *self = Matrix34::from_rotation_translation(rotation, self.translation());
    }

    /// Determinant of the rotation block; translation does not contribute.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.rotation().determinant()
    }

    /// Invert in place using Cramer's rule on the rotation block.
    ///
    /// Returns `false` and leaves the matrix untouched when the determinant is
    /// smaller than [`ZERO_TOLERANCE`].
    pub fn invert(&mut self) -> bool {
        let rotation = self.rotation();
        let det = rotation.determinant();
        if det.abs() < ZERO_TOLERANCE {
            log::debug!("Matrix34 inversion skipped: determinant {} is singular", det);
            return false;
        }
        let inverse = rotation.adjugate() * (1.0 / det);
        *self = Matrix34::from_rotation_translation(inverse, -(inverse * self.translation()));
        true
    }

    #[inline]
    pub fn inverted(&self) -> Option<Matrix34> {
        let mut out = *self;
        if out.invert() {
            Some(out)
        } else {
            None
        }
    }

    /// Invert assuming the rotation block is orthonormal: the rotation is
    /// transposed and the translation rotated back. Wrong for any scale or skew.
    #[inline]
    pub fn invert_fast(&mut self) {
        *self = self.inverted_fast();
    }

    #[inline]
    pub fn inverted_fast(&self) -> Matrix34 {
        let rotation = self.rotation().transposed();
        Matrix34::from_rotation_translation(rotation, -(rotation * self.translation()))
    }

    #[inline]
    pub fn transform_point(&self, p: Vector3) -> Vector3 {
        let p = p.widened(1.0);
        Vector3([self.0[0].dot(p), self.0[1].dot(p), self.0[2].dot(p)])
    }

    /// Rotate/scale a direction, ignoring the translation.
    #[inline]
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        let v = v.widened(0.0);
        Vector3([self.0[0].dot(v), self.0[1].dot(v), self.0[2].dot(v)])
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Vector4::is_valid)
    }

    #[inline]
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.is_equivalent(&Matrix34::identity(), epsilon)
    }

    pub fn is_equivalent(&self, rhs: &Matrix34, epsilon: f32) -> bool {
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

impl From<Matrix33> for Matrix34 {
    #[inline]
    fn from(m: Matrix33) -> Matrix34 {
        Matrix34::from_rotation_translation(m, Vector3::zero())
    }
}

impl From<Quaternion> for Matrix34 {
    #[inline]
    fn from(q: Quaternion) -> Matrix34 {
        Matrix34::from(Matrix33::from(q))
    }
}

impl From<QuatT> for Matrix34 {
    #[inline]
    fn from(qt: QuatT) -> Matrix34 {
        Matrix34::from_rotation_translation(Matrix33::from(qt.q), qt.t)
    }
}

impl Index<usize> for Matrix34 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Vector4 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Matrix34 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector4 {
        &mut self.0[index]
    }
}

/// Affine product: `rhs` is applied first.
impl Mul<&Matrix34> for &Matrix34 {
    type Output = Matrix34;

    fn mul(self, rhs: &Matrix34) -> Matrix34 {
        let rotation = self.rotation() * rhs.rotation();
        let translation = self.transform_point(rhs.translation());
        Matrix34::from_rotation_translation(rotation, translation)
    }
}

impl Mul for Matrix34 {
    type Output = Matrix34;
    #[inline]
    fn mul(self, rhs: Matrix34) -> Matrix34 {
        &self * &rhs
    }
}

impl MulAssign for Matrix34 {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix34) {
        *self = &*self * &rhs;
    }
}

/// Transform a point.
impl Mul<Vector3> for Matrix34 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_point(rhs)
    }
}
