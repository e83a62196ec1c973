use crate::interpolation::Blend;

/// `first + (second - first) * t`
#[inline]
pub fn apply<T: Blend>(result: &mut T, first: T, second: T, t: f32) {
    *result = first.plus(second.minus(first).scale(t));
}

#[inline]
pub fn create<T: Blend>(first: T, second: T, t: f32) -> T {
    let mut result = first;
    apply(&mut result, first, second, t);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{ColorF, FullVertex, Vector2, Vector3, Vector3Double, Vector4};

    #[test]
    fn scalars() {
        assert_eq!(5.0, create(0.0, 10.0, 0.5));
        assert_eq!(5.0f32, create(0.0f32, 10.0, 0.5));
        assert_eq!(-2.0f32, create(2.0f32, 4.0, -2.0));
        let mut out = 0.0f32;
        apply(&mut out, 1.0, 3.0, 0.25);
        assert_eq!(1.5, out);
    }

    #[test]
    fn equal_endpoints_are_fixed() {
        let a = Vector3::new(0.3, -7.0, 12.5);
        for &t in &[-1.0, 0.0, 0.37, 1.0, 2.5] {
            assert_eq!(a, create(a, a, t));
        }
    }

    #[test]
    fn vectors_and_colors() {
        assert_eq!(
            Vector2::new(1.0, 1.0),
            create(Vector2::zero(), Vector2::new(2.0, 2.0), 0.5)
        );
        assert_eq!(
            Vector4::new(0.0, 0.0, 0.0, 4.0),
            create(Vector4::zero(), Vector4::new(0.0, 0.0, 0.0, 16.0), 0.25)
        );
        assert_eq!(
            ColorF::new(0.5, 0.5, 0.5, 1.0),
            create(ColorF::BLACK, ColorF::WHITE, 0.5)
        );
        assert_eq!(
            Vector3Double::new(1.5, 0.0, 0.0),
            create(Vector3Double::zero(), Vector3Double::new(3.0, 0.0, 0.0), 0.5)
        );
    }

    #[test]
    fn vertices() {
        let a = FullVertex::new(Vector3::zero(), Vector3::up())
            .with_uv(Vector2::new(0.0, 0.0))
            .with_colors(ColorF::BLACK, ColorF::WHITE);
        let b = FullVertex::new(Vector3::new(2.0, 4.0, 6.0), Vector3::forward())
            .with_uv(Vector2::new(1.0, 1.0))
            .with_colors(ColorF::WHITE, ColorF::BLACK);
        let mid = create(a, b, 0.5);
        assert_eq!(Vector3::new(1.0, 2.0, 3.0), mid.position);
        assert_eq!(Vector3::new(0.0, 0.5, 0.5), mid.normal);
        assert_eq!(Vector2::new(0.5, 0.5), mid.uv);
        assert_eq!(ColorF::new(0.5, 0.5, 0.5, 1.0), mid.color0);
        assert_eq!(mid.color0, mid.color1);
    }
}
