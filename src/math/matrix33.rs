use crate::{
    error::check_index,
    math::{self, Angles3, Quaternion, Vector3, ZERO_TOLERANCE},
    MathError, MathResult,
};
use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Sub};

/// Row-major 3x3 matrix stored as three row vectors.
///
/// Vectors are columns: `m * v` transforms `v`, and `a * b` applies `b` first.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix33(pub [Vector3; 3]);

unsafe impl bytemuck::Zeroable for Matrix33 {}

unsafe impl bytemuck::Pod for Matrix33 {}

impl Matrix33 {
    #[inline]
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Matrix33 {
        Matrix33([
            Vector3([m00, m01, m02]),
            Vector3([m10, m11, m12]),
            Vector3([m20, m21, m22]),
        ])
    }

    #[inline]
    pub const fn identity() -> Matrix33 {
        Matrix33::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn zero() -> Matrix33 {
        Matrix33::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_array(m: [[f32; 3]; 3]) -> Matrix33 {
        Matrix33([Vector3(m[0]), Vector3(m[1]), Vector3(m[2])])
    }

    #[inline]
    pub fn to_array(&self) -> [[f32; 3]; 3] {
        [self.0[0].0, self.0[1].0, self.0[2].0]
    }

    #[inline]
    pub const fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Matrix33 {
        Matrix33([r0, r1, r2])
    }

    #[inline]
    pub fn from_columns(c0: Vector3, c1: Vector3, c2: Vector3) -> Matrix33 {
        Matrix33::from_rows(c0, c1, c2).transposed()
    }

    element_accessors! {
        m00, set_m00 => 0, 0;
        m01, set_m01 => 0, 1;
        m02, set_m02 => 0, 2;
        m10, set_m10 => 1, 0;
        m11, set_m11 => 1, 1;
        m12, set_m12 => 1, 2;
        m20, set_m20 => 2, 0;
        m21, set_m21 => 2, 1;
        m22, set_m22 => 2, 2;
    }

    pub fn row(&self, index: usize) -> MathResult<Vector3> {
        check_index(index, 3)?;
        Ok(self.0[index])
    }

    pub fn set_row(&mut self, index: usize, row: Vector3) -> MathResult<()> {
        check_index(index, 3)?;
        self.0[index] = row;
        Ok(())
    }

    pub fn column(&self, index: usize) -> MathResult<Vector3> {
        check_index(index, 3)?;
        Ok(Vector3([
            self.0[0].0[index],
            self.0[1].0[index],
            self.0[2].0[index],
        ]))
    }

    pub fn set_column(&mut self, index: usize, column: Vector3) -> MathResult<()> {
        check_index(index, 3)?;
        for row in 0..3 {
            self.0[row].0[index] = column.0[row];
        }
        Ok(())
    }

    #[inline]
    pub fn create_scale(scale: Vector3) -> Matrix33 {
        Matrix33::new(scale.0[0], 0.0, 0.0, 0.0, scale.0[1], 0.0, 0.0, 0.0, scale.0[2])
    }

    #[inline]
    #[rustfmt::skip]
    pub fn create_rotation_x(angle: f32) -> Matrix33 {
        let (s, c) = math::sin_cos(angle);
        Matrix33::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        )
    }

    #[inline]
    #[rustfmt::skip]
    pub fn create_rotation_y(angle: f32) -> Matrix33 {
        let (s, c) = math::sin_cos(angle);
        Matrix33::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        )
    }

    #[inline]
    #[rustfmt::skip]
    pub fn create_rotation_z(angle: f32) -> Matrix33 {
        let (s, c) = math::sin_cos(angle);
        Matrix33::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Rotation of `angle` radians about the unit `axis`.
    #[rustfmt::skip]
    pub fn create_rotation_aa(angle: f32, axis: Vector3) -> Matrix33 {
        let (s, c) = math::sin_cos(angle);
        let [x, y, z] = axis.0;
        let mc = 1.0 - c;
        let (mcx, mcy, mcz) = (mc * x, mc * y, mc * z);
        let (tcx, tcy, tcz) = (x * s, y * s, z * s);
        Matrix33::new(
            mcx * x + c, mcx * y - tcz, mcx * z + tcy,
            mcy * x + tcz, mcy * y + c, mcy * z - tcx,
            mcz * x - tcy, mcz * y + tcx, mcz * z + c,
        )
    }

    /// Rotation about X, then Y, then Z (`Rz * Ry * Rx`).
    #[rustfmt::skip]
    pub fn create_rotation_xyz(angles: Angles3) -> Matrix33 {
        let (sx, cx) = math::sin_cos(angles.x);
        let (sy, cy) = math::sin_cos(angles.y);
        let (sz, cz) = math::sin_cos(angles.z);
        let sycz = sy * cz;
        let sysz = sy * sz;
        Matrix33::new(
            cy * cz, sycz * sx - cx * sz, sycz * cx + sx * sz,
            cy * sz, sysz * sx + cx * cz, sysz * cx - sx * cz,
            -sy, cy * sx, cy * cx,
        )
    }

    /// Shortest rotation taking unit vector `v0` onto unit vector `v1`.
    #[inline]
    pub fn create_rotation_v0v1(v0: Vector3, v1: Vector3) -> Matrix33 {
        Matrix33::from(Quaternion::create_rotation_v0v1(v0, v1))
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.0[0].0[0] + self.0[1].0[1] + self.0[2].0[2]
    }

    /// Cofactor expansion of the 3x3 determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.to_array();
        m00 * m11 * m22 + m01 * m12 * m20 + m02 * m10 * m21
            - m02 * m11 * m20
            - m00 * m12 * m21
            - m01 * m10 * m22
    }

    /// The adjugate (transposed cofactor matrix), i.e. the inverse scaled by the determinant.
    #[rustfmt::skip]
    pub fn adjugate(&self) -> Matrix33 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.to_array();
        Matrix33::new(
            m22 * m11 - m12 * m21, m02 * m21 - m22 * m01, m12 * m01 - m02 * m11,
            m12 * m20 - m22 * m10, m22 * m00 - m02 * m20, m02 * m10 - m12 * m00,
            m10 * m21 - m20 * m11, m20 * m01 - m00 * m21, m00 * m11 - m10 * m01,
        )
    }

    /// Invert in place using Cramer's rule.
    ///
    /// Faster than Gaussian elimination but less numerically stable. A
    /// determinant smaller than [`ZERO_TOLERANCE`] fails with
    /// [`MathError::DivideByZero`] and leaves the matrix untouched.
    pub fn invert(&mut self) -> MathResult<()> {
        let det = self.determinant();
        if det.abs() < ZERO_TOLERANCE {
            log::debug!("Matrix33 inversion failed: determinant {} is singular", det);
            return Err(MathError::DivideByZero);
        }
        *self = self.adjugate() * (1.0 / det);
        Ok(())
    }

    #[inline]
    pub fn inverted(&self) -> MathResult<Matrix33> {
        let mut out = *self;
        out.invert()?;
        Ok(out)
    }

    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    #[inline]
    #[rustfmt::skip]
    pub fn transposed(&self) -> Matrix33 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.to_array();
        Matrix33::new(
            m00, m10, m20,
            m01, m11, m21,
            m02, m12, m22,
        )
    }

    /// Re-orthonormalize the columns with Gram-Schmidt, keeping the direction of column 0.
    pub fn orthonormalize(&mut self) {
        let x = self.column_unchecked(0).normalized();
        let y = self.column_unchecked(1);
        let y = (y - x * x.dot(y)).normalized();
        let z = x.cross(y);
        *self = Matrix33::from_columns(x, y, z);
    }

    /// Multiply each column by the matching component of `scale`.
    #[inline]
    pub fn scale_columns(&mut self, scale: Vector3) {
        for row in self.0.iter_mut() {
            *row *= scale;
        }
    }

    #[inline]
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        Vector3([self.0[0].dot(v), self.0[1].dot(v), self.0[2].dot(v)])
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Vector3::is_valid)
    }

    #[inline]
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.is_equivalent(&Matrix33::identity(), epsilon)
    }

    pub fn is_equivalent(&self, rhs: &Matrix33, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(a, b)| a.is_equivalent_within(*b, epsilon))
    }

    /// Columns are unit length and mutually perpendicular.
    pub fn is_orthonormal(&self, epsilon: f32) -> bool {
        let x = self.column_unchecked(0);
        let y = self.column_unchecked(1);
        let z = self.column_unchecked(2);
        x.is_unit(epsilon)
            && y.is_unit(epsilon)
            && z.is_unit(epsilon)
            && x.dot(y).abs() <= epsilon
            && y.dot(z).abs() <= epsilon
            && z.dot(x).abs() <= epsilon
    }

    /// Orthonormal and right-handed (`col0 x col1 == col2`), i.e. a pure rotation.
    pub fn is_orthonormal_rh(&self, epsilon: f32) -> bool {
        let x = self.column_unchecked(0);
        let y = self.column_unchecked(1);
        let z = self.column_unchecked(2);
        self.is_orthonormal(epsilon) && x.cross(y).is_equivalent_within(z, epsilon)
    }

    #[inline]
    pub(crate) fn column_unchecked(&self, index: usize) -> Vector3 {
        Vector3([
            self.0[0].0[index],
            self.0[1].0[index],
            self.0[2].0[index],
        ])
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Quaternion> for Matrix33 {
    #[rustfmt::skip]
    fn from(q: Quaternion) -> Matrix33 {
        let [x, y, z] = q.v.0;
        let w = q.w;
        let (x2, y2, z2) = (x * 2.0, y * 2.0, z * 2.0);
        Matrix33::new(
            1.0 - y2 * y - z2 * z, y2 * x - z2 * w, z2 * x + y2 * w,
            y2 * x + z2 * w, 1.0 - x2 * x - z2 * z, z2 * y - x2 * w,
            z2 * x - y2 * w, z2 * y + x2 * w, 1.0 - x2 * x - y2 * y,
        )
    }
}

impl Index<usize> for Matrix33 {
    type Output = Vector3;
    #[inline]
    fn index(&self, index: usize) -> &Vector3 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Matrix33 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector3 {
        &mut self.0[index]
    }
}

impl Mul<&Matrix33> for &Matrix33 {
    type Output = Matrix33;

    fn mul(self, rhs: &Matrix33) -> Matrix33 {
        let mut ret = Matrix33::zero();
        for i in 0..3 {
            for j in 0..3 {
                ret[i][0] += self[i][j] * rhs[j][0];
                ret[i][1] += self[i][j] * rhs[j][1];
                ret[i][2] += self[i][j] * rhs[j][2];
            }
        }
        ret
    }
}

impl Mul for Matrix33 {
    type Output = Matrix33;
    #[inline]
    fn mul(self, rhs: Matrix33) -> Matrix33 {
        &self * &rhs
    }
}

impl MulAssign for Matrix33 {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix33) {
        *self = &*self * &rhs;
    }
}

impl Mul<Vector3> for Matrix33 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform_vector(rhs)
    }
}

impl Mul<f32> for Matrix33 {
    type Output = Matrix33;
    #[inline]
    fn mul(self, rhs: f32) -> Matrix33 {
        Matrix33([self.0[0] * rhs, self.0[1] * rhs, self.0[2] * rhs])
    }
}

impl Add for Matrix33 {
    type Output = Matrix33;
    #[inline]
    fn add(self, rhs: Matrix33) -> Matrix33 {
        Matrix33([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl Sub for Matrix33 {
    type Output = Matrix33;
    #[inline]
    fn sub(self, rhs: Matrix33) -> Matrix33 {
        Matrix33([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}
