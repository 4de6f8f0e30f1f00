//! Scroll parallax and the holographic stats shift.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Pointer travel divided by this gives the stats card shift in pixels.
pub const STATS_SHIFT_DIVISOR: f64 = 40.0;
const STATS_HOVER_SCALE: f64 = 1.02;

/// Transform applied to the stats cards when the pointer leaves the grid.
pub const STATS_REST: &str = "translateX(0px) translateY(0px) scale(1)";

/// Vertical offset of a parallax layer moving at `speed` while scrolled to `scroll_y`.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, speed))
}

/// `(dx, dy)` shift for a pointer at `(x, y)` relative to a `width × height` grid.
pub fn stats_shift(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    ((x - width * 0.5) / STATS_SHIFT_DIVISOR, (y - height * 0.5) / STATS_SHIFT_DIVISOR)
}

pub fn stats_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let (dx, dy) = stats_shift(x, y, width, height);
    format!("translateX({dx}px) translateY({dy}px) scale({STATS_HOVER_SCALE})")
}
