use crate::{
    interpolation::linear,
    math::{self, Matrix33, Matrix34, Quaternion, Vector3},
};

/// Vectors closer than this cosine are blended with a normalized lerp.
pub const VECTOR_LERP_COSINE: f32 = 0.99;

/// Quaternions closer than this cosine are blended with a normalized lerp.
pub const QUATERNION_LERP_COSINE: f32 = 0.9999;

/// Relative rotations whose skew axis is shorter than this use the X axis.
pub const MATRIX_AXIS_EPSILON: f32 = 1e-5;

/// Constant angular velocity interpolation between two orientations.
pub trait SphericalLinear: Copy {
    fn slerp(self, other: Self, t: f32) -> Self;
}

#[inline]
pub fn apply<T: SphericalLinear>(result: &mut T, first: T, second: T, t: f32) {
    *result = first.slerp(second, t);
}

#[inline]
pub fn create<T: SphericalLinear>(first: T, second: T, t: f32) -> T {
    let mut result = first;
    apply(&mut result, first, second, t);
    result
}

impl SphericalLinear for Vector3 {
    /// Both inputs are expected to be unit length. Opposite vectors have no
    /// unique arc between them, and the result can be the zero vector.
    fn slerp(self, other: Vector3, t: f32) -> Vector3 {
        let cosine = math::clamp(self.dot(other), -1.0, 1.0);
        if cosine >= VECTOR_LERP_COSINE {
            return linear::create(self, other, t).normalized();
        }
        let angle = cosine.acos();
        let sine = angle.sin();
        let blended = self * ((1.0 - t) * angle).sin() + other * (t * angle).sin();
        (blended / sine).normalized()
    }
}

impl SphericalLinear for Quaternion {
    /// Always travels the shorter arc.
    fn slerp(self, other: Quaternion, t: f32) -> Quaternion {
        let mut q = other;
        let mut cosine = self.dot(q);
        if cosine < 0.0 {
            cosine = -cosine;
            q = -q;
        }
        if cosine > QUATERNION_LERP_COSINE {
            return linear::create(self, q, t).normalized();
        }
        // component of q orthogonal to self
        let q2 = q - self * cosine;
        let sine = q2.length();
        let (s, c) = math::sin_cos(sine.atan2(cosine) * t);
        self * c + q2 * (s / sine)
    }
}

impl SphericalLinear for Matrix33 {
    /// Interpolates the relative rotation about its own axis, without a
    /// detour through quaternions. Both inputs must be orthonormal.
    fn slerp(self, other: Matrix33, t: f32) -> Matrix33 {
        let mut d = self.transposed() * other;
        d.0[2] = d.0[0].cross(d.0[1]);

        let cosine = math::clamp((d.trace() - 1.0) * 0.5, -1.0, 1.0);
        let mut axis = Vector3::new(d.m21() - d.m12(), d.m02() - d.m20(), d.m10() - d.m01());
        let length = axis.length();
        let angle = length.atan2(2.0 * cosine);
        if length > MATRIX_AXIS_EPSILON {
            axis /= length;
        } else {
            // no rotation or a half turn; neither has a usable skew axis
            log::trace!("Relative rotation has no stable axis, angle {}", angle);
            axis = Vector3::right();
        }
        self * Matrix33::create_rotation_aa(angle * t, axis)
    }
}

impl SphericalLinear for Matrix34 {
    /// Rotation is slerped, translation is lerped.
    fn slerp(self, other: Matrix34, t: f32) -> Matrix34 {
        Matrix34::from_rotation_translation(
            self.rotation().slerp(other.rotation(), t),
            linear::create(self.translation(), other.translation(), t),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Angles3;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn vectors_follow_the_arc() {
        let a = Vector3::right();
        let b = Vector3::forward();
        assert!(create(a, b, 0.0).is_equivalent_within(a, 1e-6));
        assert!(create(a, b, 1.0).is_equivalent_within(b, 1e-6));
        let mid = create(a, b, 0.5);
        let diagonal = Vector3::new(1.0, 1.0, 0.0).normalized();
        assert!(mid.is_equivalent_within(diagonal, 1e-6));
        assert!(mid.is_unit(1e-5));
    }

    #[test]
    fn nearly_parallel_vectors_use_lerp() {
        let a = Vector3::right();
        let b = Vector3::new(1.0, 0.01, 0.0).normalized();
        let mid = create(a, b, 0.5);
        assert!(mid.is_unit(1e-5));
        assert!(mid.is_equivalent_within((a + b).normalized(), 1e-6));
    }

    #[test]
    fn opposite_vectors_collapse() {
        let mid = create(Vector3::right(), Vector3::left(), 0.5);
        assert!(mid.is_equivalent_within(Vector3::zero(), 1e-6));
    }

    #[test]
    fn quaternion_endpoints() {
        let p = Quaternion::create_rotation_z(0.3);
        let q = Quaternion::create_rotation_xyz(Angles3::new(1.0, -0.5, 2.0));
        assert!(create(p, q, 0.0).is_equivalent_within(p, 1e-5));
        assert!(create(p, q, 1.0).is_equivalent_within(q, 1e-5));
    }

    #[test]
    fn quaternion_constant_angular_velocity() {
        let p = Quaternion::identity();
        let q = Quaternion::create_rotation_z(FRAC_PI_2);
        let mut out = Quaternion::identity();
        apply(&mut out, p, q, 0.5);
        assert!(out.is_equivalent_within(Quaternion::create_rotation_z(FRAC_PI_4), 1e-5));
        let quarter = create(p, q, 0.25);
        assert!((quarter.angle() - FRAC_PI_2 * 0.25).abs() < 1e-4);
    }

    #[test]
    fn quaternion_takes_shorter_arc() {
        let q = Quaternion::create_rotation_x(0.8);
        for &t in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            let out = create(q, -q, t);
            assert!(out.is_unit(1e-5));
            // same orientation all the way, with no flip to the other hemisphere
            assert!(out.dot(q) > 0.9999);
        }
        let p = Quaternion::create_rotation_z(0.1);
        let far = -Quaternion::create_rotation_z(1.1);
        let mid = create(p, far, 0.5);
        assert!(mid.is_equivalent_within(Quaternion::create_rotation_z(0.6), 1e-5));
    }

    #[test]
    fn matrix_endpoints() {
        init_logging();
        let m = Matrix33::create_rotation_xyz(Angles3::new(0.2, 0.4, -1.0));
        let n = Matrix33::create_rotation_xyz(Angles3::new(-0.7, 0.1, 0.5));
        assert!(create(m, n, 0.0).is_equivalent(&m, 1e-5));
        assert!(create(m, n, 1.0).is_equivalent(&n, 1e-5));
        assert!(create(m, n, 0.5).is_orthonormal_rh(1e-4));
    }

    #[test]
    fn matrix_halfway_about_single_axis() {
        let m = Matrix33::identity();
        let n = Matrix33::create_rotation_z(FRAC_PI_2);
        let mid = create(m, n, 0.5);
        assert!(mid.is_equivalent(&Matrix33::create_rotation_z(FRAC_PI_4), 1e-5));
    }

    #[test]
    fn matrix_agrees_with_quaternion() {
        let a = Angles3::new(0.3, -0.2, 0.9);
        let b = Angles3::new(-0.4, 0.5, -0.6);
        let m = create(Matrix33::create_rotation_xyz(a), Matrix33::create_rotation_xyz(b), 0.3);
        let q = create(Quaternion::create_rotation_xyz(a), Quaternion::create_rotation_xyz(b), 0.3);
        assert!(m.is_equivalent(&Matrix33::from(q), 1e-4));
    }

    #[test]
    fn matrix_fallback_axis() {
        init_logging();
        let m = Matrix33::create_rotation_y(0.4);
        assert!(create(m, m, 0.7).is_equivalent(&m, 1e-6));
        // a half turn has no skew part, so the X axis is used
        let flipped = Matrix33::create_rotation_x(PI);
        let mid = create(Matrix33::identity(), flipped, 0.5);
        assert!(mid.is_equivalent(&Matrix33::create_rotation_x(FRAC_PI_2), 1e-4));
    }

    #[test]
    fn affine_slerps_rotation_and_lerps_translation() {
        let m = Matrix34::identity();
        let n = Matrix34::from_rotation_translation(
            Matrix33::create_rotation_z(FRAC_PI_2),
            Vector3::new(2.0, -4.0, 8.0),
        );
        let mid = create(m, n, 0.5);
        assert!(mid.rotation().is_equivalent(&Matrix33::create_rotation_z(FRAC_PI_4), 1e-5));
        assert!(mid.translation().is_equivalent_within(Vector3::new(1.0, -2.0, 4.0), 1e-6));
        assert!(create(m, n, 1.0).is_equivalent(&n, 1e-5));
    }
}
