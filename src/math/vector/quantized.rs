use crate::math::{self, Vector4};

const SCALE: f32 = i16::MAX as f32;

/// Four signed 16-bit fixed-point components, each mapping \[-32768, 32767\] onto \[-1, 1\].
///
/// Used for compact storage of unit-range data such as tangents and quaternions.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4Int16(pub [i16; 4]);

unsafe impl bytemuck::Zeroable for Vector4Int16 {}

unsafe impl bytemuck::Pod for Vector4Int16 {}

impl Vector4Int16 {
    #[inline]
    pub const fn new(x: i16, y: i16, z: i16, w: i16) -> Vector4Int16 {
        Vector4Int16([x, y, z, w])
    }

    /// Quantize one component. Input outside \[-1, 1\] saturates.
    #[inline]
    pub fn quantize(value: f32) -> i16 {
        (math::clamp(value, -1.0, 1.0) * SCALE).round() as i16
    }

    #[inline]
    pub fn dequantize(value: i16) -> f32 {
        math::clamp(f32::from(value) / SCALE, -1.0, 1.0)
    }

    #[inline]
    pub fn to_vector4(&self) -> Vector4 {
        Vector4([
            Vector4Int16::dequantize(self.0[0]),
            Vector4Int16::dequantize(self.0[1]),
            Vector4Int16::dequantize(self.0[2]),
            Vector4Int16::dequantize(self.0[3]),
        ])
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<Vector4> for Vector4Int16 {
    #[inline]
    fn from(value: Vector4) -> Vector4Int16 {
        Vector4Int16([
            Vector4Int16::quantize(value.0[0]),
            Vector4Int16::quantize(value.0[1]),
            Vector4Int16::quantize(value.0[2]),
            Vector4Int16::quantize(value.0[3]),
        ])
    }
}

impl From<Vector4Int16> for Vector4 {
    #[inline]
    fn from(value: Vector4Int16) -> Vector4 {
        value.to_vector4()
    }
}
