//! Hosts a `canvas::Engine` on a `<canvas>` and drives it with
//! `requestAnimationFrame` until the owning view unmounts.
//!
//! ARCHITECTURE
//! ============
//! The component owns an `Arc<AtomicBool>` alive flag and flips it in
//! `on_cleanup`; the frame callback checks it before every frame and drops
//! itself once it is cleared. Viewport size is re-read every frame so no
//! resize listener is needed.

#[cfg(test)]
#[path = "backdrop_test.rs"]
mod backdrop_test;

/// Whether a measured viewport differs from the one the engine last saw.
pub fn viewport_changed(current: (f64, f64, f64), measured: (f64, f64, f64)) -> bool {
    let (cw, ch, cd) = current;
    let (mw, mh, md) = measured;
    (cw - mw).abs() >= 0.5 || (ch - mh).abs() >= 0.5 || (cd - md).abs() > f64::EPSILON
}

#[cfg(feature = "hydrate")]
pub use host::start;

#[cfg(feature = "hydrate")]
mod host {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use canvas::engine::{Backdrop, Engine};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::HtmlCanvasElement;

    use super::viewport_changed;

    fn measure(canvas: &HtmlCanvasElement) -> (f64, f64, f64) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0);
        (f64::from(canvas.client_width()).max(1.0), f64::from(canvas.client_height()).max(1.0), dpr)
    }

    fn sync_viewport<B: Backdrop>(engine: &mut Engine<B>, canvas: &HtmlCanvasElement) {
        let core = &engine.core;
        let current = (core.viewport_width, core.viewport_height, core.dpr);
        let measured = measure(canvas);
        if viewport_changed(current, measured) {
            engine.set_viewport(measured.0, measured.1, measured.2);
        }
    }

    /// Bind `make(width, height)` to `canvas` and animate it while `alive` holds.
    ///
    /// `on_error` runs at most once, when the engine cannot be created or a
    /// frame fails to paint; the loop stops afterwards.
    pub fn start<B, M, E>(canvas: HtmlCanvasElement, make: M, alive: Arc<AtomicBool>, on_error: E)
    where
        B: Backdrop + 'static,
        M: FnOnce(f64, f64) -> B,
        E: Fn(JsValue) + 'static,
    {
        let (width, height, dpr) = measure(&canvas);
        let mut engine = match Engine::new(canvas.clone(), make(width, height)) {
            Ok(engine) => engine,
            Err(err) => {
                on_error(err);
                return;
            }
        };
        engine.set_viewport(width, height, dpr);

        let Some(window) = web_sys::window() else {
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            if !alive.load(Ordering::Relaxed) {
                holder_for_cb.borrow_mut().take();
                return;
            }
            sync_viewport(&mut engine, &canvas);
            if let Err(err) = engine.frame(ts) {
                alive.store(false, Ordering::Relaxed);
                holder_for_cb.borrow_mut().take();
                on_error(err);
                return;
            }
            let rescheduled = web_sys::window().is_some_and(|w| {
                holder_for_cb
                    .borrow()
                    .as_ref()
                    .is_some_and(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
            });
            if !rescheduled {
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        }
    }
}
