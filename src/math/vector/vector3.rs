use crate::{
    math::{self, Quaternion, Vector2, Vector4, NORMALIZE_THRESHOLD},
    MathError, MathResult,
};
use std::ops::{BitOr, Rem};

/// Z-up, right-handed: `right x forward = up`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3(pub [f32; 3]);

impl_float_vector!(Vector3, 3);

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3([x, y, z])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.0[0] = x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.0[1] = y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.0[2] = z
    }

    #[inline]
    pub const fn up() -> Vector3 {
        Vector3([0.0, 0.0, 1.0])
    }

    #[inline]
    pub const fn down() -> Vector3 {
        Vector3([0.0, 0.0, -1.0])
    }

    #[inline]
    pub const fn right() -> Vector3 {
        Vector3([1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn left() -> Vector3 {
        Vector3([-1.0, 0.0, 0.0])
    }

    #[inline]
    pub const fn forward() -> Vector3 {
        Vector3([0.0, 1.0, 0.0])
    }

    #[inline]
    pub const fn backward() -> Vector3 {
        Vector3([0.0, -1.0, 0.0])
    }

    #[inline]
    pub fn sin(&self) -> Vector3 {
        Vector3([self.0[0].sin(), self.0[1].sin(), self.0[2].sin()])
    }

    #[inline]
    pub fn cos(&self) -> Vector3 {
        Vector3([self.0[0].cos(), self.0[1].cos(), self.0[2].cos()])
    }

    #[inline]
    pub fn widened(&self, w: f32) -> Vector4 {
        Vector4([self.0[0], self.0[1], self.0[2], w])
    }

    /// Drop the Z component.
    #[inline]
    pub fn narrowed(&self) -> Vector2 {
        Vector2([self.0[0], self.0[1]])
    }

    #[inline]
    pub fn dot(&self, rhs: Vector3) -> f32 {
        (self.0[0] * rhs.0[0]) + (self.0[1] * rhs.0[1]) + (self.0[2] * rhs.0[2])
    }

    #[inline]
    pub fn cross(&self, rhs: Vector3) -> Vector3 {
        Vector3([
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ])
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Length of the projection onto the XY plane.
    #[inline]
    pub fn length_2d(&self) -> f32 {
        self.length_2d_squared().sqrt()
    }

    #[inline]
    pub fn length_2d_squared(&self) -> f32 {
        self.0[0] * self.0[0] + self.0[1] * self.0[1]
    }

    #[inline]
    pub fn distance(&self, rhs: Vector3) -> f32 {
        (*self - rhs).length()
    }

    #[inline]
    pub fn distance_squared(&self, rhs: Vector3) -> f32 {
        (*self - rhs).length_squared()
    }

    /// Scale to unit length in place.
    ///
    /// Vectors with a squared length below [`NORMALIZE_THRESHOLD`] are left untouched.
    #[inline]
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            return;
        }
        *self *= math::isqrt(length_squared);
    }

    #[inline]
    pub fn normalized(&self) -> Vector3 {
        let mut out = *self;
        out.normalize();
        out
    }

    /// Normalized copy, or `fallback` when the vector is too short to normalize.
    #[inline]
    pub fn normalize_safe(&self, fallback: Vector3) -> Vector3 {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            fallback
        } else {
            *self * math::isqrt(length_squared)
        }
    }

    #[inline]
    pub fn is_unit(&self, epsilon: f32) -> bool {
        (1.0 - self.length_squared()).abs() <= epsilon
    }

    /// Shorten the vector to `max_length` if it is longer, keeping its direction.
    #[inline]
    pub fn clamp_length(&self, max_length: f32) -> Vector3 {
        let length_squared = self.length_squared();
        if length_squared > max_length * max_length {
            *self * (max_length * math::isqrt(length_squared))
        } else {
            *self
        }
    }

    #[inline]
    pub fn set_length(&mut self, length: f32) {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            return;
        }
        *self *= length * math::isqrt(length_squared);
    }

    /// Negate in place.
    #[inline]
    pub fn flip(&mut self) {
        *self = -*self;
    }

    #[inline]
    pub fn flipped(&self) -> Vector3 {
        -*self
    }

    /// Mirror about the plane with the given unit `normal`.
    #[inline]
    pub fn reflect(&self, normal: Vector3) -> Vector3 {
        *self - normal * (2.0 * self.dot(normal))
    }

    /// Remove the component along the unit `normal`.
    #[inline]
    pub fn project_onto_plane(&self, normal: Vector3) -> Vector3 {
        *self - normal * self.dot(normal)
    }

    #[inline]
    pub fn rotated(&self, rotation: Quaternion) -> Vector3 {
        rotation * *self
    }

    #[inline]
    fn orthogonal_unchecked(&self) -> Vector3 {
        let [x, y, z] = self.0;
        if math::square(0.9) * self.length_squared() - x * x < 0.0 {
            Vector3([-z, 0.0, x])
        } else {
            Vector3([0.0, z, -y])
        }
    }

    /// Some vector orthogonal to this one (not normalized).
    ///
    /// Fails for the exact zero vector.
    pub fn orthogonal_safe(&self) -> MathResult<Vector3> {
        if self.0 == [0.0; 3] {
            return Err(MathError::ZeroVector);
        }
        Ok(self.orthogonal_unchecked())
    }

    /// Some vector orthogonal to this one (not normalized).
    ///
    /// The zero vector yields [`Vector3::up`].
    pub fn orthogonal(&self) -> Vector3 {
        if self.0 == [0.0; 3] {
            return Vector3::up();
        }
        self.orthogonal_unchecked()
    }

    /// A unit vector orthogonal to this one, built by crossing with the basis
    /// axis least aligned with it. `None` for the zero vector.
    pub fn selective_orthogonal(&self) -> Option<Vector3> {
        if self.0 == [0.0; 3] {
            return None;
        }
        let abs = self.abs();
        let axis = if abs.0[0] <= abs.0[1] && abs.0[0] <= abs.0[2] {
            Vector3::right()
        } else if abs.0[1] <= abs.0[2] {
            Vector3::forward()
        } else {
            Vector3::up()
        };
        Some(self.cross(axis).normalized())
    }
}

/// `a | b` is the dot product.
impl BitOr for Vector3 {
    type Output = f32;
    #[inline]
    fn bitor(self, rhs: Vector3) -> f32 {
        self.dot(rhs)
    }
}

/// `a % b` is the cross product.
impl Rem for Vector3 {
    type Output = Vector3;
    #[inline]
    fn rem(self, rhs: Vector3) -> Vector3 {
        self.cross(rhs)
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    #[inline]
    fn from(value: (f32, f32, f32)) -> Vector3 {
        Vector3([value.0, value.1, value.2])
    }
}

impl From<(usize, usize, usize)> for Vector3 {
    #[inline]
    fn from(value: (usize, usize, usize)) -> Vector3 {
        Vector3([value.0 as f32, value.1 as f32, value.2 as f32])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(Vector3::up(), Vector3::right().cross(Vector3::forward()));
        assert_eq!(Vector3::right(), Vector3::forward().cross(Vector3::up()));
        assert_eq!(Vector3::forward(), Vector3::up() % Vector3::right());
        assert_eq!(Vector3::down(), Vector3::forward() % Vector3::right());
    }

    #[test]
    fn cross_is_orthogonal_to_operands() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(a.dot(c).abs() < 1e-5);
        assert!((b | c).abs() < 1e-5);
    }

    #[test]
    fn dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(32.0, a.dot(b));
        assert_eq!(32.0, a | b);
    }

    #[test]
    fn lengths() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(169.0, v.length_squared());
        assert_eq!(13.0, v.length());
        assert_eq!(25.0, v.length_2d_squared());
        assert_eq!(5.0, v.length_2d());
        assert_eq!(13.0, v.distance(Vector3::zero()));
    }

    #[test]
    fn normalizes() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert!(v.is_equivalent_within(Vector3::new(0.0, 0.6, 0.8), 1e-6));
        assert!(v.is_unit(1e-5));
    }

    #[test]
    fn normalize_leaves_tiny_vectors_alone() {
        let mut v = Vector3::new(1e-6, 0.0, 0.0);
        v.normalize();
        assert_eq!(1e-6, v.x());
        assert_eq!(Vector3::up(), Vector3::zero().normalize_safe(Vector3::up()));
    }

    #[test]
    fn clamps_length() {
        let v = Vector3::new(0.0, 10.0, 0.0);
        assert!(v.clamp_length(2.0).is_equivalent_within(Vector3::new(0.0, 2.0, 0.0), 1e-5));
        assert_eq!(v, v.clamp_length(20.0));

        let mut w = v;
        w.set_length(3.0);
        assert!(w.is_equivalent_within(Vector3::new(0.0, 3.0, 0.0), 1e-5));
    }

    #[test]
    fn component_min_max() {
        let a = Vector3::new(1.0, 5.0, -2.0);
        let b = Vector3::new(3.0, 0.0, -1.0);
        assert_eq!(Vector3::new(1.0, 0.0, -2.0), a.min(b));
        assert_eq!(Vector3::new(3.0, 5.0, -1.0), a.max(b));
    }

    #[test]
    fn equivalence_uses_epsilon() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        assert!(a.is_equivalent(Vector3::new(1.04, 0.96, 1.0)));
        assert!(!a.is_equivalent(Vector3::new(1.06, 1.0, 1.0)));
        assert!(a.is_equivalent_within(Vector3::new(1.06, 1.0, 1.0), 0.1));
    }

    #[test]
    fn flips() {
        let mut v = Vector3::new(1.0, -2.0, 3.0);
        let flipped = v.flipped();
        v.flip();
        assert_eq!(Vector3::new(-1.0, 2.0, -3.0), v);
        assert_eq!(v, flipped);
    }

    #[test]
    fn reflects_and_projects() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        assert_eq!(Vector3::new(1.0, 1.0, 0.0), v.reflect(Vector3::forward()));
        assert_eq!(Vector3::new(1.0, 0.0, 0.0), v.project_onto_plane(Vector3::forward()));
    }

    #[test]
    fn orthogonal_policies() {
        let zero = Vector3::zero();
        assert_eq!(Err(MathError::ZeroVector), zero.orthogonal_safe());
        assert_eq!(Vector3::up(), zero.orthogonal());
        assert_eq!(None, zero.selective_orthogonal());

        for v in &[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.2, 3.0, -1.0),
            Vector3::new(0.0, 0.0, -5.0),
        ] {
            let o = v.orthogonal();
            assert!(o.length_squared() > 0.0);
            assert!(v.dot(o).abs() < 1e-5);
            assert_eq!(Ok(o), v.orthogonal_safe());

            let s = v.selective_orthogonal().unwrap();
            assert!(v.dot(s).abs() < 1e-5);
            assert!(s.is_unit(1e-5));
        }
    }

    #[test]
    fn checked_component_access() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Ok(3.0), v.component(2));
        assert_eq!(
            Err(MathError::IndexOutOfRange { index: 3, len: 3 }),
            v.component(3)
        );
        assert!(v.set_component(5, 1.0).is_err());
        v.set_component(0, 9.0).unwrap();
        assert_eq!(9.0, v[0]);
    }

    #[test]
    fn validity() {
        assert!(Vector3::one().is_valid());
        assert!(!Vector3::new(f32::NAN, 0.0, 0.0).is_valid());
        assert!(!Vector3::new(0.0, f32::INFINITY, 0.0).is_valid());
    }

    #[test]
    fn division_by_zero_is_unchecked() {
        let v = Vector3::new(1.0, 0.0, -1.0) / 0.0;
        assert!(v.x().is_infinite());
        assert!(v.y().is_nan());
        assert!(!v.is_valid());
    }

    #[test]
    fn as_bytes() {
        assert_eq!(12, Vector3::one().to_bytes().len());
    }
}
