use crate::interpolation::{weighted_sum, Blend};

/// Catmull-Rom weights for the four control points, expanded from
/// `0.5 * (2*p1 + (-p0 + p2)*t + (2*p0 - 5*p1 + 4*p2 - p3)*t^2 + (-p0 + 3*p1 - 3*p2 + p3)*t^3)`.
#[inline]
pub fn basis(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        0.5 * (-t + 2.0 * t2 - t3),
        0.5 * (2.0 - 5.0 * t2 + 3.0 * t3),
        0.5 * (t + 4.0 * t2 - 3.0 * t3),
        0.5 * (t3 - t2),
    ]
}

/// Spline segment from `p1` (`t = 0`) to `p2` (`t = 1`), shaped by the
/// neighbours `p0` and `p3`.
#[inline]
pub fn apply<T: Blend>(result: &mut T, p0: T, p1: T, p2: T, p3: T, t: f32) {
    *result = weighted_sum([p0, p1, p2, p3], basis(t));
}

#[inline]
pub fn create<T: Blend>(p0: T, p1: T, p2: T, p3: T, t: f32) -> T {
    let mut result = p1;
    apply(&mut result, p0, p1, p2, p3, t);
    result
}
