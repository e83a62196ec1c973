use crate::interpolation::{weighted_sum, Blend};

/// Cubic Hermite basis `[h1, h2, h3, h4]` weighting `p0`, `p1`, `tangent0`
/// and `tangent1` respectively.
#[inline]
pub fn basis(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        2.0 * t3 - 3.0 * t2 + 1.0,
        -2.0 * t3 + 3.0 * t2,
        t3 - 2.0 * t2 + t,
        t3 - t2,
    ]
}

/// Curve through `p0` at `t = 0` and `p1` at `t = 1` leaving and arriving
/// along the given tangents.
#[inline]
pub fn apply<T: Blend>(result: &mut T, p0: T, tangent0: T, p1: T, tangent1: T, t: f32) {
    *result = weighted_sum([p0, p1, tangent0, tangent1], basis(t));
}

#[inline]
pub fn create<T: Blend>(p0: T, tangent0: T, p1: T, tangent1: T, t: f32) -> T {
    let mut result = p0;
    apply(&mut result, p0, tangent0, p1, tangent1, t);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Vector2, Vector3};

    #[test]
    fn basis_partitions_endpoints() {
        assert_eq!([1.0, 0.0, 0.0, 0.0], basis(0.0));
        assert_eq!([0.0, 1.0, 0.0, 0.0], basis(1.0));
        let [h1, h2, h3, h4] = basis(0.5);
        assert_eq!(1.0, h1 + h2);
        assert_eq!(0.125, h3);
        assert_eq!(-0.125, h4);
    }

    #[test]
    fn passes_through_endpoints() {
        let p0 = Vector3::new(1.0, 2.0, 3.0);
        let p1 = Vector3::new(-4.0, 0.0, 8.0);
        let m0 = Vector3::new(5.0, 5.0, 0.0);
        let m1 = Vector3::new(0.0, -1.0, 2.0);
        assert_eq!(p0, create(p0, m0, p1, m1, 0.0));
        assert_eq!(p1, create(p0, m0, p1, m1, 1.0));
    }

    #[test]
    fn zero_tangents_ease_in_and_out() {
        // smoothstep between the endpoints
        let y = create(0.0f32, 0.0, 1.0, 0.0, 0.25);
        assert!((y - 0.15625).abs() < 1e-6);
        let mid = create(Vector2::zero(), Vector2::zero(), Vector2::new(2.0, 4.0), Vector2::zero(), 0.5);
        assert_eq!(Vector2::new(1.0, 2.0), mid);
    }

    #[test]
    fn straight_line_with_matching_tangents() {
        // tangents equal to the chord reproduce linear motion
        let mut out = 0.0f32;
        apply(&mut out, 0.0, 10.0, 10.0, 10.0, 0.3);
        assert!((out - 3.0).abs() < 1e-5);
    }
}
