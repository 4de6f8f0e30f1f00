//! Project card tilt from the pointer position.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Largest rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 5.0;
const HOVER_SCALE: f64 = 1.02;

/// Transform applied when the pointer leaves a card.
pub const TILT_REST: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

/// `(rotate_x, rotate_y)` in degrees for a pointer at `(x, y)` relative to
/// the top-left of a `width × height` card.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let cx = width * 0.5;
    let cy = height * 0.5;
    if cx <= 0.0 || cy <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_y = ((x - cx) / cx * MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
    let rotate_x = ((cy - y) / cy * MAX_TILT_DEG).clamp(-MAX_TILT_DEG, MAX_TILT_DEG);
    (rotate_x, rotate_y)
}

/// CSS transform for a hovered card.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (rx, ry) = tilt_angles(x, y, width, height);
    format!("perspective(1000px) rotateX({rx}deg) rotateY({ry}deg) scale3d({HOVER_SCALE}, {HOVER_SCALE}, {HOVER_SCALE})")
}
