#![cfg(feature = "serde")]

use dth_math::math::{ColorF, FullVertex, Matrix34, Matrix44, QuatT, Quaternion, Vector3, Vector4Int16};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

fn round_trip<T: Serialize + DeserializeOwned + PartialEq + Debug>(value: T) {
    let text = serde_json::to_string(&value).unwrap();
    let back: T = serde_json::from_str(&text).unwrap();
    assert_eq!(value, back, "{}", text);
}

#[test]
fn vectors_serialize_as_arrays() {
    let v = Vector3::new(1.0, -2.5, 0.25);
    assert_eq!("[1.0,-2.5,0.25]", serde_json::to_string(&v).unwrap());
    round_trip(v);
    round_trip(Vector4Int16::new(-32767, 0, 12, 32767));
}

#[test]
fn rotations_and_matrices() {
    let qt = QuatT::new(Quaternion::new(0.5, 0.5, -0.5, 0.5), Vector3::new(1.0, -2.5, 4.0));
    round_trip(qt.q);
    round_trip(qt);
    round_trip(Matrix34::from(QuatT::new(Quaternion::identity(), qt.t)));
    round_trip(Matrix44::identity());
}

#[test]
fn vertices() {
    round_trip(ColorF::new(1.0, 0.5, 0.25, 0.0));
    round_trip(FullVertex::new(Vector3::up(), Vector3::forward()));
}
