#[macro_use]
mod macros;
#[macro_use]
mod vector;

mod angles;
mod color;
mod matrix33;
mod matrix34;
mod matrix44;
mod quaternion;
mod rational;
mod text;
mod vertex;

pub use angles::*;
pub use color::*;
pub use matrix33::*;
pub use matrix34::*;
pub use matrix44::*;
pub use quaternion::*;
pub use rational::*;
pub use vector::*;
pub use vertex::*;

use std::{cmp::PartialOrd, f32};

pub const TAU: f32 = f32::consts::PI * 2.0;

/// Determinants below this magnitude are treated as singular.
pub const ZERO_TOLERANCE: f32 = 1e-6;

/// Default per-component epsilon for `is_equivalent` checks.
pub const VEC_EPSILON: f32 = 0.05;

/// Squared lengths below this are left alone by `normalize`.
pub const NORMALIZE_THRESHOLD: f32 = 1e-10;

/// Reciprocal square root.
#[inline]
pub fn isqrt(value: f32) -> f32 {
    1.0 / value.sqrt()
}

/// Reciprocal square root that stays finite for a zero input.
#[inline]
pub fn isqrt_safe(value: f32) -> f32 {
    1.0 / (value + f32::MIN_POSITIVE).sqrt()
}

#[inline]
pub fn sin_cos(angle: f32) -> (f32, f32) {
    angle.sin_cos()
}

#[inline]
pub fn square(value: f32) -> f32 {
    value * value
}

/// Clamp any ordered value into `[min, max]`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// A float is valid when it is neither NaN nor infinite.
#[inline]
pub fn is_valid(value: f32) -> bool {
    value.is_finite()
}

#[inline]
pub fn is_equivalent(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

/// Wrap an angle in radians between \[0 - TAU\)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in radians between \(-PI - PI\]
#[inline]
pub fn wrap_angle_pi(angle: f32) -> f32 {
    let wrapped = normalize_angle(angle);
    if wrapped > f32::consts::PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (f32::consts::PI / 180.0)
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / f32::consts::PI)
}
