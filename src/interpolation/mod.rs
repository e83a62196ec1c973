//! Stateless interpolators.
//!
//! Every algorithm comes in two forms over one code path: `apply` writes into
//! an existing value and `create` returns a fresh one.

use crate::math::{ColorF, FullVertex, Quaternion, Vector2, Vector3, Vector3Double, Vector4};

pub mod catmull_rom;
pub mod hermite;
pub mod linear;
pub mod spherical_linear;

pub use spherical_linear::SphericalLinear;

/// The vector-space operations the blending interpolators are written against.
pub trait Blend: Copy {
    fn plus(self, rhs: Self) -> Self;

    fn minus(self, rhs: Self) -> Self;

    fn scale(self, factor: f32) -> Self;
}

macro_rules! impl_blend_with_ops {
    ($($name:ty),*) => {
        $(
            impl Blend for $name {
                #[inline]
                fn plus(self, rhs: $name) -> $name {
                    self + rhs
                }

                #[inline]
                fn minus(self, rhs: $name) -> $name {
                    self - rhs
                }

                #[inline]
                fn scale(self, factor: f32) -> $name {
                    self * factor
                }
            }
        )*
    };
}

impl_blend_with_ops!(f32, Vector2, Vector3, Vector4, ColorF, Quaternion);

impl Blend for f64 {
    #[inline]
    fn plus(self, rhs: f64) -> f64 {
        self + rhs
    }

    #[inline]
    fn minus(self, rhs: f64) -> f64 {
        self - rhs
    }

    #[inline]
    fn scale(self, factor: f32) -> f64 {
        self * f64::from(factor)
    }
}

impl Blend for Vector3Double {
    #[inline]
    fn plus(self, rhs: Vector3Double) -> Vector3Double {
        self + rhs
    }

    #[inline]
    fn minus(self, rhs: Vector3Double) -> Vector3Double {
        self - rhs
    }

    #[inline]
    fn scale(self, factor: f32) -> Vector3Double {
        self * f64::from(factor)
    }
}

/// Every attribute blends independently under the same law.
impl Blend for FullVertex {
    #[inline]
    fn plus(self, rhs: FullVertex) -> FullVertex {
        FullVertex {
            position: self.position + rhs.position,
            normal: self.normal + rhs.normal,
            uv: self.uv + rhs.uv,
            color0: self.color0 + rhs.color0,
            color1: self.color1 + rhs.color1,
        }
    }

    #[inline]
    fn minus(self, rhs: FullVertex) -> FullVertex {
        FullVertex {
            position: self.position - rhs.position,
            normal: self.normal - rhs.normal,
            uv: self.uv - rhs.uv,
            color0: self.color0 - rhs.color0,
            color1: self.color1 - rhs.color1,
        }
    }

    #[inline]
    fn scale(self, factor: f32) -> FullVertex {
        FullVertex {
            position: self.position * factor,
            normal: self.normal * factor,
            uv: self.uv * factor,
            color0: self.color0 * factor,
            color1: self.color1 * factor,
        }
    }
}

/// `sum(points[i] * weights[i])`
#[inline]
pub(crate) fn weighted_sum<T: Blend>(points: [T; 4], weights: [f32; 4]) -> T {
    points[1..]
        .iter()
        .zip(weights[1..].iter())
        .fold(points[0].scale(weights[0]), |sum, (&p, &w)| sum.plus(p.scale(w)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn weighted_sum_of_basis() {
        let points = [1.0f32, 10.0, 100.0, 1000.0];
        assert_eq!(1111.0, weighted_sum(points, [1.0; 4]));
        assert_eq!(100.0, weighted_sum(points, [0.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn vertex_blends_every_attribute() {
        let v = FullVertex::new(Vector3::one(), Vector3::up()).with_uv(Vector2::new(1.0, 2.0));
        let doubled = v.plus(v);
        assert_eq!(Vector3::splat(2.0), doubled.position);
        assert_eq!(Vector2::new(2.0, 4.0), doubled.uv);
        assert_eq!(ColorF::splat(2.0), doubled.color1);
        assert_eq!(v, doubled.scale(0.5));
        assert_eq!(FullVertex::default(), v.minus(v));
    }

    #[test]
    fn doubles_scale_by_widened_factor() {
        assert_eq!(1.25f64, 2.5f64.scale(0.5));
        assert_eq!(
            Vector3Double::new(0.5, 1.0, 1.5),
            Vector3Double::new(1.0, 2.0, 3.0).scale(0.5)
        );
    }
}
