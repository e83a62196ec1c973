use crate::math::{self, Matrix33, Quaternion, Vector3};

/// Euler angles in radians: `x` pitch, `y` roll, `z` yaw.
///
/// Applied in X, Y, Z order, so the equivalent rotation is `Rz * Ry * Rx`.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angles3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Angles3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Angles3 {
        Angles3 { x, y, z }
    }

    #[inline]
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Angles3 {
        Angles3::new(math::deg_to_rad(x), math::deg_to_rad(y), math::deg_to_rad(z))
    }

    #[inline]
    pub fn to_degrees(&self) -> Vector3 {
        Vector3::new(
            math::rad_to_deg(self.x),
            math::rad_to_deg(self.y),
            math::rad_to_deg(self.z),
        )
    }

    #[inline]
    pub fn is_equivalent_within(&self, rhs: Angles3, epsilon: f32) -> bool {
        math::is_equivalent(self.x, rhs.x, epsilon)
            && math::is_equivalent(self.y, rhs.y, epsilon)
            && math::is_equivalent(self.z, rhs.z, epsilon)
    }
}

impl From<Matrix33> for Angles3 {
    /// Extract angles from an orthonormal matrix. Near gimbal lock (pitch of
    /// +-90 degrees around Y) the X angle is pinned to zero.
    fn from(m: Matrix33) -> Angles3 {
        let [[m00, m01, _], [m10, m11, _], [m20, m21, m22]] = m.to_array();
        let l = (m00 * m00 + m10 * m10).sqrt();
        if l > 0.0001 {
            Angles3::new(m21.atan2(m22), (-m20).atan2(l), m10.atan2(m00))
        } else {
            Angles3::new(0.0, (-m20).atan2(l), (-m01).atan2(m11))
        }
    }
}

impl From<Quaternion> for Angles3 {
    #[inline]
    fn from(q: Quaternion) -> Angles3 {
        Angles3::from(Matrix33::from(q))
    }
}
