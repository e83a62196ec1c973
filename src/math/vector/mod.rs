/// Component-wise operators shared by every `f32` vector.
///
/// The vector must be a tuple struct over `[f32; N]`.
macro_rules! impl_float_vector {
    ($name:ident, $n:expr) => {
        unsafe impl bytemuck::Zeroable for $name {}

        unsafe impl bytemuck::Pod for $name {}

        impl $name {
            #[inline]
            pub const fn splat(f: f32) -> $name {
                $name([f; $n])
            }

            #[inline]
            pub const fn zero() -> $name {
                $name([0.0; $n])
            }

            #[inline]
            pub const fn one() -> $name {
                $name([1.0; $n])
            }

            /// Fetch a component, failing on an out-of-range index.
            #[inline]
            pub fn component(&self, index: usize) -> $crate::MathResult<f32> {
                $crate::error::check_index(index, $n)?;
                Ok(self.0[index])
            }

            #[inline]
            pub fn set_component(&mut self, index: usize, value: f32) -> $crate::MathResult<()> {
                $crate::error::check_index(index, $n)?;
                self.0[index] = value;
                Ok(())
            }

            #[inline]
            pub fn is_valid(&self) -> bool {
                self.0.iter().all(|c| c.is_finite())
            }

            #[inline]
            pub fn is_zero(&self, epsilon: f32) -> bool {
                self.0.iter().all(|c| c.abs() <= epsilon)
            }

            /// Per-component comparison against the default `VEC_EPSILON`.
            #[inline]
            pub fn is_equivalent(&self, rhs: $name) -> bool {
                self.is_equivalent_within(rhs, $crate::math::VEC_EPSILON)
            }

            #[inline]
            pub fn is_equivalent_within(&self, rhs: $name, epsilon: f32) -> bool {
                self.0
                    .iter()
                    .zip(rhs.0.iter())
                    .all(|(a, b)| (a - b).abs() <= epsilon)
            }

            #[inline]
            pub fn abs(&self) -> $name {
                let mut out = *self;
                out.0.iter_mut().for_each(|c| *c = c.abs());
                out
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(&self, rhs: $name) -> $name {
                let mut out = *self;
                for i in 0..$n {
                    out.0[i] = $crate::math::min(self.0[i], rhs.0[i]);
                }
                out
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(&self, rhs: $name) -> $name {
                let mut out = *self;
                for i in 0..$n {
                    out.0[i] = $crate::math::max(self.0[i], rhs.0[i]);
                }
                out
            }

            #[inline]
            pub fn to_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }
        }

        impl std::cmp::PartialEq for $name {
            #[inline]
            fn eq(&self, rhs: &$name) -> bool {
                self.is_equivalent_within(*rhs, f32::EPSILON)
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(mut self, rhs: $name) -> $name {
                for i in 0..$n {
                    self.0[i] += rhs.0[i];
                }
                self
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                *self = *self + rhs;
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(mut self, rhs: $name) -> $name {
                for i in 0..$n {
                    self.0[i] -= rhs.0[i];
                }
                self
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                *self = *self - rhs;
            }
        }

        impl std::ops::Mul for $name {
            type Output = $name;
            #[inline]
            fn mul(mut self, rhs: $name) -> $name {
                for i in 0..$n {
                    self.0[i] *= rhs.0[i];
                }
                self
            }
        }

        impl std::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Mul<f32> for $name {
            type Output = $name;
            #[inline]
            fn mul(mut self, rhs: f32) -> $name {
                self.0.iter_mut().for_each(|c| *c *= rhs);
                self
            }
        }

        impl std::ops::Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl std::ops::MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl std::ops::Div for $name {
            type Output = $name;
            #[inline]
            fn div(mut self, rhs: $name) -> $name {
                for i in 0..$n {
                    self.0[i] /= rhs.0[i];
                }
                self
            }
        }

        impl std::ops::Div<f32> for $name {
            type Output = $name;
            #[inline]
            fn div(mut self, rhs: f32) -> $name {
                self.0.iter_mut().for_each(|c| *c /= rhs);
                self
            }
        }

        impl std::ops::Div<f32> for &$name {
            type Output = $name;
            #[inline]
            fn div(self, rhs: f32) -> $name {
                *self / rhs
            }
        }

        impl std::ops::DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(mut self) -> $name {
                self.0.iter_mut().for_each(|c| *c = -*c);
                self
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = f32;
            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.0[index]
            }
        }

        impl std::ops::IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.0[index]
            }
        }

        impl AsRef<[f32]> for $name {
            #[inline]
            fn as_ref(&self) -> &[f32] {
                &self.0
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline]
            fn from(value: [f32; $n]) -> $name {
                $name(value)
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline]
            fn from(value: $name) -> [f32; $n] {
                value.0
            }
        }
    };
}

mod double;
mod quantized;
mod vector2;
mod vector3;
mod vector4;

pub use double::*;
pub use quantized::*;
pub use vector2::*;
pub use vector3::*;
pub use vector4::*;
