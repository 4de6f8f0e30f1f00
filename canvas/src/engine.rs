use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::MAX_FRAME_STEP_S;
use crate::particles::ParticleField;
use crate::render;
use crate::scene::CyberScene;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Something the engine can animate and paint: the particle field or the 3D scene.
pub trait Backdrop {
    /// The viewport changed to `width × height` CSS pixels.
    fn resize(&mut self, width: f64, height: f64);

    /// Advance the animation by `dt_s` seconds of wall time.
    fn advance(&mut self, dt_s: f64);

    /// Paint the current state. The context transform is already scaled for DPR.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    fn paint(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue>;
}

impl Backdrop for ParticleField {
    fn resize(&mut self, width: f64, height: f64) {
        ParticleField::resize(self, width, height);
    }

    // The field is tuned in frames, not seconds: one step per displayed frame.
    fn advance(&mut self, _dt_s: f64) {
        self.step();
    }

    fn paint(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
        render::draw_particles(ctx, self, width, height)
    }
}

impl Backdrop for CyberScene {
    fn resize(&mut self, _width: f64, _height: f64) {}

    fn advance(&mut self, dt_s: f64) {
        CyberScene::advance(self, dt_s);
    }

    fn paint(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
        render::draw_scene(ctx, &self.frame(width, height), width, height)
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore<B> {
    pub backdrop: B,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    last_timestamp_ms: Option<f64>,
    frames: u64,
}

impl<B: Backdrop> EngineCore<B> {
    #[must_use]
    pub fn new(backdrop: B) -> Self {
        Self { backdrop, viewport_width: 0.0, viewport_height: 0.0, dpr: 1.0, last_timestamp_ms: None, frames: 0 }
    }

    /// Update viewport dimensions and device pixel ratio.
    ///
    /// Negative sizes clamp to zero; a non-positive or non-finite DPR falls back to 1.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.backdrop.resize(self.viewport_width, self.viewport_height);
    }

    /// Advance the backdrop to `timestamp_ms` (a `requestAnimationFrame` timestamp).
    ///
    /// Returns the simulated step in seconds. The first tick, and any tick whose
    /// timestamp runs backwards, step by zero; long gaps clamp to
    /// [`MAX_FRAME_STEP_S`].
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let dt_s = self
            .last_timestamp_ms
            .map_or(0.0, |last| ((timestamp_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_STEP_S));
        self.last_timestamp_ms = Some(timestamp_ms);
        self.backdrop.advance(dt_s);
        self.frames += 1;
        dt_s
    }

    /// Frames ticked since construction.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Backing-store size in device pixels for the current viewport.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        ((self.viewport_width * self.dpr).round() as u32, (self.viewport_height * self.dpr).round() as u32)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine<B> {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore<B>,
}

impl<B: Backdrop> Engine<B> {
    /// Bind `backdrop` to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context (for example when the
    /// browser refuses to create one).
    pub fn new(canvas: HtmlCanvasElement, backdrop: B) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new(backdrop) })
    }

    /// Update viewport dimensions and resize the canvas backing store.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let (w, h) = self.core.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    /// Advance to `timestamp_ms` and draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, timestamp_ms: f64) -> Result<(), JsValue> {
        self.core.tick(timestamp_ms);
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let dpr = self.core.dpr;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.core.backdrop.paint(&self.ctx, self.core.viewport_width, self.core.viewport_height)
    }
}

/// Seed for a backdrop's RNG, drawn from `Math.random()`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn browser_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}
