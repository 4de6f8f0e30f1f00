#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn parallax_scales_with_scroll() {
    assert_eq!(parallax_offset(0.0, 0.15), 0.0);
    assert_eq!(parallax_offset(200.0, 0.05), 10.0);
    assert_eq!(parallax_transform(100.0, 0.5), "translateY(50px)");
}

#[test]
fn faster_layers_move_further() {
    assert!(parallax_offset(300.0, 0.15) > parallax_offset(300.0, 0.05));
}

#[test]
fn stats_shift_is_zero_at_centre() {
    assert_eq!(stats_shift(400.0, 100.0, 800.0, 200.0), (0.0, 0.0));
}

#[test]
fn stats_shift_divides_offset_by_forty() {
    assert_eq!(stats_shift(800.0, 0.0, 800.0, 200.0), (10.0, -2.5));
    assert_eq!(stats_transform(800.0, 0.0, 800.0, 200.0), "translateX(10px) translateY(-2.5px) scale(1.02)");
}
