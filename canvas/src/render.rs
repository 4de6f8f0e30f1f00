//! Rendering: paints the backdrops to a 2D context.
//!
//! This module is the only place that issues drawing calls on a
//! [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of simulation state and produces pixels; it does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND_HEX, CYBER_PRIMARY_RGB};
use crate::particles::ParticleField;
use crate::scene::SceneFrame;

/// Stroke width of the lines joining nearby particles, in CSS pixels.
const LINK_WIDTH_PX: f64 = 0.2;

/// Stroke width of grid and sphere lines, in CSS pixels.
const SCENE_LINE_WIDTH_PX: f64 = 1.0;

/// Draw the particle field over a transparent canvas.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_particles(
    ctx: &CanvasRenderingContext2d,
    field: &ParticleField,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for p in field.particles() {
        ctx.begin_path();
        ctx.arc(p.x, p.y, p.size, 0.0, TAU)?;
        ctx.set_fill_style_str(&rgba(CYBER_PRIMARY_RGB, p.opacity));
        ctx.fill();
    }

    ctx.set_line_width(LINK_WIDTH_PX);
    for link in field.links() {
        ctx.begin_path();
        ctx.set_stroke_style_str(&rgba(CYBER_PRIMARY_RGB, link.alpha));
        ctx.move_to(link.from.x, link.from.y);
        ctx.line_to(link.to.x, link.to.y);
        ctx.stroke();
    }
    Ok(())
}

/// Draw one projected frame of the 3D scene on its dark background.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_scene(
    ctx: &CanvasRenderingContext2d,
    frame: &SceneFrame,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(BACKGROUND_HEX);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Additive blending stands in for the emissive glow of the sphere.
    ctx.save();
    ctx.set_global_composite_operation("lighter")?;
    ctx.set_line_width(SCENE_LINE_WIDTH_PX);
    for seg in &frame.segments {
        ctx.begin_path();
        ctx.set_stroke_style_str(&rgba(seg.rgb, seg.alpha));
        ctx.move_to(seg.from.x, seg.from.y);
        ctx.line_to(seg.to.x, seg.to.y);
        ctx.stroke();
    }

    for dot in &frame.dots {
        ctx.begin_path();
        ctx.arc(dot.at.x, dot.at.y, dot.radius, 0.0, TAU)?;
        ctx.set_fill_style_str(&rgba(CYBER_PRIMARY_RGB, dot.alpha));
        ctx.fill();
    }
    ctx.restore();
    Ok(())
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {:.3})", alpha.clamp(0.0, 1.0))
}
