use crate::math::Vector3;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

const NORMALIZE_THRESHOLD: f64 = 1e-20;

/// Double precision sibling of [`Vector3`] for accumulation-heavy passes.
#[repr(C)]
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3Double(pub [f64; 3]);

unsafe impl bytemuck::Zeroable for Vector3Double {}

unsafe impl bytemuck::Pod for Vector3Double {}

impl Vector3Double {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Vector3Double {
        Vector3Double([x, y, z])
    }

    #[inline]
    pub const fn zero() -> Vector3Double {
        Vector3Double([0.0; 3])
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn dot(&self, rhs: Vector3Double) -> f64 {
        self.0[0] * rhs.0[0] + self.0[1] * rhs.0[1] + self.0[2] * rhs.0[2]
    }

    #[inline]
    pub fn cross(&self, rhs: Vector3Double) -> Vector3Double {
        Vector3Double([
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ])
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared < NORMALIZE_THRESHOLD {
            return;
        }
        *self = *self * (1.0 / length_squared.sqrt());
    }

    #[inline]
    pub fn normalized(&self) -> Vector3Double {
        let mut out = *self;
        out.normalize();
        out
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    #[inline]
    pub fn is_equivalent_within(&self, rhs: Vector3Double, epsilon: f64) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Add for Vector3Double {
    type Output = Vector3Double;
    #[inline]
    fn add(self, rhs: Vector3Double) -> Vector3Double {
        Vector3Double([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
        ])
    }
}

impl Sub for Vector3Double {
    type Output = Vector3Double;
    #[inline]
    fn sub(self, rhs: Vector3Double) -> Vector3Double {
        Vector3Double([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
        ])
    }
}

impl Mul<f64> for Vector3Double {
    type Output = Vector3Double;
    #[inline]
    fn mul(self, rhs: f64) -> Vector3Double {
        Vector3Double([self.0[0] * rhs, self.0[1] * rhs, self.0[2] * rhs])
    }
}

impl Div<f64> for Vector3Double {
    type Output = Vector3Double;
    #[inline]
    fn div(self, rhs: f64) -> Vector3Double {
        Vector3Double([self.0[0] / rhs, self.0[1] / rhs, self.0[2] / rhs])
    }
}

impl Neg for Vector3Double {
    type Output = Vector3Double;
    #[inline]
    fn neg(self) -> Vector3Double {
        Vector3Double([-self.0[0], -self.0[1], -self.0[2]])
    }
}

impl Index<usize> for Vector3Double {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<Vector3> for Vector3Double {
    #[inline]
    fn from(value: Vector3) -> Vector3Double {
        Vector3Double([
            f64::from(value.0[0]),
            f64::from(value.0[1]),
            f64::from(value.0[2]),
        ])
    }
}

impl From<Vector3Double> for Vector3 {
    #[inline]
    fn from(value: Vector3Double) -> Vector3 {
        Vector3([value.0[0] as f32, value.0[1] as f32, value.0[2] as f32])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_precision_that_f32_loses() {
        let big = Vector3Double::new(1.0e8, 0.0, 0.0);
        let sum = big + Vector3Double::new(1.0, 0.0, 0.0);
        assert_eq!(100_000_001.0, sum.x());
        assert_eq!(100_000_000.0, Vector3::from(sum).x());
    }

    #[test]
    fn cross_and_normalize() {
        let x = Vector3Double::new(2.0, 0.0, 0.0);
        let y = Vector3Double::new(0.0, 3.0, 0.0);
        assert_eq!(Vector3Double::new(0.0, 0.0, 6.0), x.cross(y));
        assert_eq!(Vector3Double::new(1.0, 0.0, 0.0), x.normalized());
        assert_eq!(Vector3Double::zero(), Vector3Double::zero().normalized());
    }
}
