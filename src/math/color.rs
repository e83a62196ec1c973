use crate::math::{self, Vector3, Vector4};

/// Linear RGBA color with `f32` channels.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorF(pub [f32; 4]);

impl_float_vector!(ColorF, 4);

impl ColorF {
    pub const WHITE: ColorF = ColorF([1.0, 1.0, 1.0, 1.0]);

    pub const BLACK: ColorF = ColorF([0.0, 0.0, 0.0, 1.0]);

    pub const TRANSPARENT: ColorF = ColorF([0.0; 4]);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> ColorF {
        ColorF([r, g, b, a])
    }

    /// Opaque color from three channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> ColorF {
        ColorF([r, g, b, 1.0])
    }

    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> ColorF {
        ColorF([r, g, b, a].map(|c| f32::from(c) / 255.0))
    }

    /// Quantize to 8-bit channels, clamping out-of-range values first.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.0.map(|c| (math::clamp(c, 0.0, 1.0) * 255.0).round() as u8)
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn set_r(&mut self, r: f32) {
        self.0[0] = r
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn set_g(&mut self, g: f32) {
        self.0[1] = g
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn set_b(&mut self, b: f32) {
        self.0[2] = b
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn set_a(&mut self, a: f32) {
        self.0[3] = a
    }

    #[inline]
    pub fn rgb_vector(&self) -> Vector3 {
        Vector3::new(self.0[0], self.0[1], self.0[2])
    }

    #[inline]
    pub fn clamped(&self) -> ColorF {
        ColorF(self.0.map(|c| math::clamp(c, 0.0, 1.0)))
    }

    #[inline]
    pub fn with_alpha(&self, a: f32) -> ColorF {
        ColorF([self.0[0], self.0[1], self.0[2], a])
    }

    /// Rec. 709 luminance of the color channels.
    #[inline]
    pub fn luminance(&self) -> f32 {
        self.0[0] * 0.2126 + self.0[1] * 0.7152 + self.0[2] * 0.0722
    }
}

impl From<Vector4> for ColorF {
    #[inline]
    fn from(v: Vector4) -> ColorF {
        ColorF(v.0)
    }
}

impl From<ColorF> for Vector4 {
    #[inline]
    fn from(c: ColorF) -> Vector4 {
        Vector4(c.0)
    }
}
