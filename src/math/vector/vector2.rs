use crate::math::{self, Vector3, NORMALIZE_THRESHOLD};

#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2(pub [f32; 2]);

impl_float_vector!(Vector2, 2);

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Vector2 {
        Vector2([x, y])
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
    pub fn widened(&self, z: f32) -> Vector3 {
        Vector3([self.0[0], self.0[1], z])
    }

    #[inline]
    pub fn dot(&self, rhs: Vector2) -> f32 {
        self.0[0] * rhs.0[0] + self.0[1] * rhs.0[1]
    }

    /// Z component of the 3D cross product of the two vectors lying in the XY plane.
    #[inline]
    pub fn cross(&self, rhs: Vector2) -> f32 {
        self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    #[inline]
    pub fn distance(&self, rhs: Vector2) -> f32 {
        (*self - rhs).length()
    }

    #[inline]
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            return;
        }
        *self *= math::isqrt(length_squared);
    }

    #[inline]
    pub fn normalized(&self) -> Vector2 {
        let mut out = *self;
        out.normalize();
        out
    }

    #[inline]
    pub fn clamp_length(&self, max_length: f32) -> Vector2 {
        let length_squared = self.length_squared();
        if length_squared > max_length * max_length {
            *self * (max_length * math::isqrt(length_squared))
        } else {
            *self
        }
    }

    /// Rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Vector2 {
        Vector2([-self.0[1], self.0[0]])
    }

    #[inline]
    pub fn rotated(&self, angle: f32) -> Vector2 {
        let (sin, cos) = math::sin_cos(angle);
        Vector2([
            self.0[0] * cos - self.0[1] * sin,
            self.0[0] * sin + self.0[1] * cos,
        ])
    }

    #[inline]
    pub fn flip(&mut self) {
        *self = -*self;
    }

    #[inline]
    pub fn flipped(&self) -> Vector2 {
        -*self
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from(value: (f32, f32)) -> Vector2 {
        Vector2([value.0, value.1])
    }
}

impl From<(i32, i32)> for Vector2 {
    #[inline]
    fn from(value: (i32, i32)) -> Vector2 {
        Vector2([value.0 as f32, value.1 as f32])
    }
}

impl From<(u32, u32)> for Vector2 {
    #[inline]
    fn from(value: (u32, u32)) -> Vector2 {
        Vector2([value.0 as f32, value.1 as f32])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn products() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 1.0);
        assert_eq!(0.0, a.dot(b));
        assert_eq!(1.0, a.cross(b));
        assert_eq!(-1.0, b.cross(a));
        assert_eq!(b, a.perpendicular());
    }

    #[test]
    fn rotates() {
        let v = Vector2::new(2.0, 0.0).rotated(FRAC_PI_2);
        assert!(v.is_equivalent_within(Vector2::new(0.0, 2.0), 1e-6));
    }

    #[test]
    fn normalizes() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(5.0, v.length());
        assert!(v.normalized().is_equivalent_within(Vector2::new(0.6, 0.8), 1e-6));
        assert_eq!(Vector2::zero(), Vector2::zero().normalized());
        assert!(v.clamp_length(1.0).is_equivalent_within(Vector2::new(0.6, 0.8), 1e-6));
    }

    #[test]
    fn widens() {
        assert_eq!(Vector3::new(1.0, 2.0, 3.0), Vector2::new(1.0, 2.0).widened(3.0));
    }
}
