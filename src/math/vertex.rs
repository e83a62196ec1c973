use crate::math::{ColorF, Vector2, Vector3};

/// A vertex carrying every attribute the interpolators know how to blend.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullVertex {
    pub position: Vector3,
    pub normal: Vector3,
    pub uv: Vector2,
    pub color0: ColorF,
    pub color1: ColorF,
}

unsafe impl bytemuck::Zeroable for FullVertex {}

unsafe impl bytemuck::Pod for FullVertex {}

impl FullVertex {
    #[inline]
    pub fn new(position: Vector3, normal: Vector3) -> FullVertex {
        FullVertex {
            position,
            normal,
            color0: ColorF::WHITE,
            color1: ColorF::WHITE,
            ..FullVertex::default()
        }
    }

    #[inline]
    pub fn with_uv(mut self, uv: Vector2) -> FullVertex {
        self.uv = uv;
        self
    }

    #[inline]
    pub fn with_colors(mut self, color0: ColorF, color1: ColorF) -> FullVertex {
        self.color0 = color0;
        self.color1 = color1;
        self
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.position.is_valid()
            && self.normal.is_valid()
            && self.uv.is_valid()
            && self.color0.is_valid()
            && self.color1.is_valid()
    }

    #[inline]
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
