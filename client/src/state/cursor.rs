//! Custom cursor state and the inline styles derived from it.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Selector for elements that enlarge the cursor while hovered.
pub const HOVER_TARGETS: &str = "a, button, .hover-effect";

const HOVER_FILL: &str = "rgba(155, 135, 245, 0.1)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub clicked: bool,
    pub link_hovered: bool,
    pub hidden: bool,
}

impl Default for CursorState {
    /// Parked off-screen until the first pointer move.
    fn default() -> Self {
        Self { x: -100.0, y: -100.0, clicked: false, link_hovered: false, hidden: false }
    }
}

/// Inline style values for the dot and its outline ring.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorStyle {
    pub translate: String,
    pub opacity: f64,
    pub dot_size_px: f64,
    pub outline_scale: f64,
    pub outline_fill: &'static str,
}

impl CursorState {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn dot_size_px(&self) -> f64 {
        if self.link_hovered && !self.clicked { 8.0 } else { 6.0 }
    }

    pub fn outline_scale(&self) -> f64 {
        if self.clicked {
            0.8
        } else if self.link_hovered {
            1.5
        } else {
            1.0
        }
    }

    pub fn style(&self) -> CursorStyle {
        CursorStyle {
            translate: format!("translate(calc({}px - 50%), calc({}px - 50%))", self.x, self.y),
            opacity: if self.hidden { 0.0 } else { 1.0 },
            dot_size_px: self.dot_size_px(),
            outline_scale: self.outline_scale(),
            outline_fill: if self.link_hovered { HOVER_FILL } else { "transparent" },
        }
    }
}

impl CursorStyle {
    pub fn dot_transform(&self) -> String {
        self.translate.clone()
    }

    pub fn outline_transform(&self) -> String {
        format!("{} scale({})", self.translate, self.outline_scale)
    }
}
