#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn centre_is_flat() {
    assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
}

#[test]
fn corners_reach_max_tilt() {
    assert_eq!(tilt_angles(0.0, 0.0, 200.0, 100.0), (5.0, -5.0));
    assert_eq!(tilt_angles(200.0, 100.0, 200.0, 100.0), (-5.0, 5.0));
}

#[test]
fn pointer_outside_card_is_clamped() {
    let (rx, ry) = tilt_angles(-500.0, 900.0, 200.0, 100.0);
    assert_eq!((rx, ry), (-5.0, -5.0));
}

#[test]
fn zero_sized_card_does_not_divide_by_zero() {
    assert_eq!(tilt_angles(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
}

#[test]
fn transform_string_includes_scale() {
    assert_eq!(
        tilt_transform(150.0, 50.0, 200.0, 100.0),
        "perspective(1000px) rotateX(0deg) rotateY(2.5deg) scale3d(1.02, 1.02, 1.02)"
    );
}
