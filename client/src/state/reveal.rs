//! Scroll-reveal latch.
//!
//! A revealed element never hides again, even if it later leaves the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// CSS class added to revealed elements.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    active: bool,
}

impl RevealState {
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Feed one intersection observation. Returns `true` only on the
    /// transition from hidden to visible.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.active || !is_intersecting {
            return false;
        }
        self.active = true;
        true
    }
}
