//! Thin window helpers used by layout components.
//!
//! TRADE-OFFS
//! ==========
//! Every helper degrades to a no-op (or zero) outside the browser so SSR
//! renders deterministically.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Point the window at `href` (used for `mailto:` links).
pub fn open_href(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            log::warn!("failed to open {href}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Milliseconds since the epoch, or zero on the server.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Pointer position relative to `el`'s top-left, plus `el`'s size:
/// `(x, y, width, height)`.
#[cfg(feature = "hydrate")]
pub fn pointer_within(el: &web_sys::Element, ev: &web_sys::MouseEvent) -> (f64, f64, f64, f64) {
    let rect = el.get_bounding_client_rect();
    (f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top(), rect.width(), rect.height())
}
