use crate::math::{self, Vector3, NORMALIZE_THRESHOLD};

#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4(pub [f32; 4]);

impl_float_vector!(Vector4, 4);

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
        Vector4([x, y, z, w])
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
    pub fn w(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self.0[3] = w
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
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            return;
        }
        *self *= math::isqrt(length_squared);
    }

    #[inline]
    pub fn normalized(&self) -> Vector4 {
        let mut out = *self;
        out.normalize();
        out
    }

    #[inline]
    pub fn narrowed(&self) -> Vector3 {
        Vector3([self.0[0], self.0[1], self.0[2]])
    }

    #[inline]
    pub fn dot(&self, rhs: Vector4) -> f32 {
        (self.0[0] * rhs.0[0])
            + (self.0[1] * rhs.0[1])
            + (self.0[2] * rhs.0[2])
            + (self.0[3] * rhs.0[3])
    }

    #[inline]
    pub fn flip(&mut self) {
        *self = -*self;
    }

    #[inline]
    pub fn flipped(&self) -> Vector4 {
        -*self
    }
}

impl From<(f32, f32, f32, f32)> for Vector4 {
    #[inline]
    fn from(value: (f32, f32, f32, f32)) -> Vector4 {
        Vector4([value.0, value.1, value.2, value.3])
    }
}
