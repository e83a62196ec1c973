use crate::math::{self, Angles3, Matrix33, Matrix34, Vector3, Vector4, NORMALIZE_THRESHOLD};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

/// Rotation stored as a scalar `w` and a vector part `v`.
///
/// Think of it like a unit vector with a 4th "twist" component. Nothing
/// enforces unit length; only the operations that say so normalize.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f32,
    pub v: Vector3,
}

unsafe impl bytemuck::Zeroable for Quaternion {}

unsafe impl bytemuck::Pod for Quaternion {}

impl Default for Quaternion {
    #[inline]
    fn default() -> Quaternion {
        Quaternion::identity()
    }
}

impl Quaternion {
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Quaternion {
        Quaternion {
            w,
            v: Vector3::new(x, y, z),
        }
    }

    #[inline]
    pub const fn from_parts(w: f32, v: Vector3) -> Quaternion {
        Quaternion { w, v }
    }

    #[inline]
    pub const fn identity() -> Quaternion {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about the unit `axis`.
    #[inline]
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Quaternion {
        let (sin_half_theta, cos_half_theta) = math::sin_cos(angle * 0.5);
        Quaternion::from_parts(cos_half_theta, axis * sin_half_theta)
    }

    #[inline]
    pub fn create_rotation_x(angle: f32) -> Quaternion {
        Quaternion::from_axis_angle(Vector3::right(), angle)
    }

    #[inline]
    pub fn create_rotation_y(angle: f32) -> Quaternion {
        Quaternion::from_axis_angle(Vector3::forward(), angle)
    }

    #[inline]
    pub fn create_rotation_z(angle: f32) -> Quaternion {
        Quaternion::from_axis_angle(Vector3::up(), angle)
    }

    /// Rotation about X, then Y, then Z, matching [`Matrix33::create_rotation_xyz`].
    pub fn create_rotation_xyz(angles: Angles3) -> Quaternion {
        let (sx, cx) = math::sin_cos(angles.x * 0.5);
        let (sy, cy) = math::sin_cos(angles.y * 0.5);
        let (sz, cz) = math::sin_cos(angles.z * 0.5);
        Quaternion::new(
            cx * cy * cz + sx * sy * sz,
            cz * cy * sx - sz * sy * cx,
            cz * sy * cx + sz * cy * sx,
            sz * cy * cx - cz * sy * sx,
        )
    }

    /// Shortest rotation taking unit vector `v0` onto unit vector `v1`.
    ///
    /// Opposite vectors rotate half a turn about an arbitrary orthogonal axis.
    pub fn create_rotation_v0v1(v0: Vector3, v1: Vector3) -> Quaternion {
        let dot = v0.dot(v1) + 1.0;
        if dot > 0.0001 {
            let cross = v0.cross(v1);
            let len = math::isqrt(cross.length_squared() + dot * dot);
            return Quaternion::from_parts(dot * len, cross * len);
        }
        Quaternion::from_parts(0.0, v0.orthogonal().normalized())
    }

    #[inline]
    pub fn dot(&self, rhs: Quaternion) -> f32 {
        self.w * rhs.w + self.v.dot(rhs.v)
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn is_unit(&self, epsilon: f32) -> bool {
        (1.0 - self.length_squared()).abs() <= epsilon
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.w == 1.0 && self.v.0 == [0.0; 3]
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w.is_finite() && self.v.is_valid()
    }

    /// Both `q` and `-q` describe the same rotation, so either sign matches.
    pub fn is_equivalent_within(&self, rhs: Quaternion, epsilon: f32) -> bool {
        let same = (self.w - rhs.w).abs() <= epsilon && self.v.is_equivalent_within(rhs.v, epsilon);
        let negated =
            (self.w + rhs.w).abs() <= epsilon && self.v.is_equivalent_within(-rhs.v, epsilon);
        same || negated
    }

    #[inline]
    pub fn is_equivalent(&self, rhs: Quaternion) -> bool {
        self.is_equivalent_within(rhs, math::VEC_EPSILON)
    }

    #[inline]
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            return;
        }
        *self = *self * math::isqrt(length_squared);
    }

    #[inline]
    pub fn normalized(&self) -> Quaternion {
        let mut out = *self;
        out.normalize();
        out
    }

    #[inline]
    pub fn conjugated(&self) -> Quaternion {
        Quaternion::from_parts(self.w, -self.v)
    }

    /// Conjugate scaled by the inverse squared length; equal to the conjugate for unit input.
    #[inline]
    pub fn inverted(&self) -> Quaternion {
        self.conjugated() * (1.0 / self.length_squared())
    }

    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// Rotation angle in radians, in \[0, TAU\].
    #[inline]
    pub fn angle(&self) -> f32 {
        2.0 * math::clamp(self.w, -1.0, 1.0).acos()
    }

    /// Unit rotation axis; [`Vector3::right`] when there is no rotation.
    #[inline]
    pub fn axis(&self) -> Vector3 {
        self.v.normalize_safe(Vector3::right())
    }

    #[inline]
    pub fn right_axis(&self) -> Vector3 {
        *self * Vector3::right()
    }

    #[inline]
    pub fn forward_axis(&self) -> Vector3 {
        *self * Vector3::forward()
    }

    #[inline]
    pub fn up_axis(&self) -> Vector3 {
        *self * Vector3::up()
    }

    #[inline]
    pub fn to_vector4(&self) -> Vector4 {
        Vector4([self.v.0[0], self.v.0[1], self.v.0[2], self.w])
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Matrix33> for Quaternion {
    /// Rotation of an orthonormal matrix, branching on the largest diagonal term.
    fn from(m: Matrix33) -> Quaternion {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.to_array();
        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let p = 0.5 / s;
            Quaternion::new(s * 0.5, (m21 - m12) * p, (m02 - m20) * p, (m10 - m01) * p)
        } else if m00 >= m11 && m00 >= m22 {
            let s = (m00 - m11 - m22 + 1.0).sqrt();
            let p = 0.5 / s;
            Quaternion::new((m21 - m12) * p, s * 0.5, (m10 + m01) * p, (m20 + m02) * p)
        } else if m11 >= m00 && m11 >= m22 {
            let s = (m11 - m22 - m00 + 1.0).sqrt();
            let p = 0.5 / s;
            Quaternion::new((m02 - m20) * p, (m01 + m10) * p, s * 0.5, (m21 + m12) * p)
        } else {
            let s = (m22 - m00 - m11 + 1.0).sqrt();
            let p = 0.5 / s;
            Quaternion::new((m10 - m01) * p, (m02 + m20) * p, (m12 + m21) * p, s * 0.5)
        }
    }
}

impl From<Matrix34> for Quaternion {
    #[inline]
    fn from(m: Matrix34) -> Quaternion {
        Quaternion::from(m.rotation())
    }
}

impl MulAssign<Quaternion> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}

/// Hamilton product: applies `rhs` first, then `self`.
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_parts(
            self.w * rhs.w - self.v.dot(rhs.v),
            self.v.cross(rhs.v) + rhs.v * self.w + self.v * rhs.w,
        )
    }
}

/// Rotate a vector.
impl Mul<Vector3> for Quaternion {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        let r2 = self.v.cross(rhs) + rhs * self.w;
        rhs + self.v.cross(r2) * 2.0
    }
}

impl Mul<f32> for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn mul(self, rhs: f32) -> Quaternion {
        Quaternion::from_parts(self.w * rhs, self.v * rhs)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_parts(self.w + rhs.w, self.v + rhs.v)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from_parts(self.w - rhs.w, self.v - rhs.v)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    #[inline]
    fn neg(self) -> Quaternion {
        Quaternion::from_parts(-self.w, -self.v)
    }
}

/// A rotation followed by a translation; the rigid-transform payload handed
/// to skeleton and animation collaborators.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuatT {
    pub q: Quaternion,
    pub t: Vector3,
}

unsafe impl bytemuck::Zeroable for QuatT {}

unsafe impl bytemuck::Pod for QuatT {}

impl QuatT {
    #[inline]
    pub const fn new(q: Quaternion, t: Vector3) -> QuatT {
        QuatT { q, t }
    }

    #[inline]
    pub const fn identity() -> QuatT {
        QuatT::new(Quaternion::identity(), Vector3::new(0.0, 0.0, 0.0))
    }

    #[inline]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.q * point + self.t
    }

    #[inline]
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        self.q * vector
    }

    #[inline]
    pub fn inverted(&self) -> QuatT {
        let q = self.q.inverted();
        QuatT::new(q, -(q * self.t))
    }

    #[inline]
    pub fn is_equivalent_within(&self, rhs: QuatT, epsilon: f32) -> bool {
        self.q.is_equivalent_within(rhs.q, epsilon) && self.t.is_equivalent_within(rhs.t, epsilon)
    }
}

impl From<Matrix34> for QuatT {
    #[inline]
    fn from(m: Matrix34) -> QuatT {
        QuatT::new(Quaternion::from(m.rotation()), m.translation())
    }
}

/// Applies `rhs` first, then `self`.
impl Mul<QuatT> for QuatT {
    type Output = QuatT;
    #[inline]
    fn mul(self, rhs: QuatT) -> QuatT {
        QuatT::new(self.q * rhs.q, self.q * rhs.t + self.t)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotates_vectors() {
        let q = Quaternion::create_rotation_z(FRAC_PI_2);
        assert!((q * Vector3::right()).is_equivalent_within(Vector3::forward(), 1e-6));
        assert!(q.up_axis().is_equivalent_within(Vector3::up(), 1e-6));
        assert!(Vector3::forward()
            .rotated(Quaternion::create_rotation_x(FRAC_PI_2))
            .is_equivalent_within(Vector3::up(), 1e-6));
    }

    #[test]
    fn composes_right_to_left() {
        let x = Quaternion::create_rotation_x(FRAC_PI_2);
        let z = Quaternion::create_rotation_z(FRAC_PI_2);
        let v = Vector3::forward();
        assert!(((z * x) * v).is_equivalent_within(z * (x * v), 1e-6));
        assert!(!(z * x).is_equivalent_within(x * z, 1e-3));
    }

    #[test]
    fn inverse_undoes_rotation() {
        let q = Quaternion::from_axis_angle(Vector3::new(1.0, 2.0, 3.0).normalized(), 0.7);
        assert!((q * q.inverted()).is_equivalent_within(Quaternion::identity(), 1e-6));
        let v = Vector3::new(0.3, -4.0, 2.0);
        assert!((q.inverted() * (q * v)).is_equivalent_within(v, 1e-5));
    }

    #[test]
    fn equivalence_ignores_sign() {
        let q = Quaternion::create_rotation_y(1.0);
        assert!(q.is_equivalent_within(-q, 1e-6));
        assert!(!q.is_equivalent_within(Quaternion::identity(), 1e-3));
    }

    #[test]
    fn round_trips_through_matrix() {
        for q in &[
            Quaternion::create_rotation_x(2.5),
            Quaternion::create_rotation_y(-2.9),
            Quaternion::create_rotation_z(PI),
            Quaternion::from_axis_angle(Vector3::new(-1.0, 0.5, 0.25).normalized(), 1.2),
        ] {
            let m = Matrix33::from(*q);
            assert!(Quaternion::from(m).is_equivalent_within(*q, 1e-5));
        }
    }

    #[test]
    fn matches_euler_matrix() {
        let angles = Angles3::new(0.3, -0.8, 1.4);
        let q = Quaternion::create_rotation_xyz(angles);
        let m = Matrix33::create_rotation_xyz(angles);
        assert!(Matrix33::from(q).is_equivalent(&m, 1e-5));
    }

    #[test]
    fn rotation_between_vectors() {
        let q = Quaternion::create_rotation_v0v1(Vector3::right(), Vector3::up());
        assert!((q * Vector3::right()).is_equivalent_within(Vector3::up(), 1e-6));

        let flip = Quaternion::create_rotation_v0v1(Vector3::right(), Vector3::left());
        assert!((flip * Vector3::right()).is_equivalent_within(Vector3::left(), 1e-5));
        assert!(flip.is_unit(1e-5));
    }

    #[test]
    fn angle_and_axis() {
        let q = Quaternion::from_axis_angle(Vector3::up(), 1.25);
        assert!((q.angle() - 1.25).abs() < 1e-5);
        assert!(q.axis().is_equivalent_within(Vector3::up(), 1e-5));
        assert_eq!(Vector3::right(), Quaternion::identity().axis());
    }

    #[test]
    fn quat_t_composes_and_inverts() {
        let a = QuatT::new(Quaternion::create_rotation_z(FRAC_PI_2), Vector3::new(1.0, 0.0, 0.0));
        let b = QuatT::new(Quaternion::create_rotation_x(0.4), Vector3::new(0.0, 2.0, 0.0));
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert!((a * b)
            .transform_point(p)
            .is_equivalent_within(a.transform_point(b.transform_point(p)), 1e-5));
        assert!((a * a.inverted()).is_equivalent_within(QuatT::identity(), 1e-5));
    }
}
