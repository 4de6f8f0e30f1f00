//! Shared numeric constants for the canvas crate.

// ── Palette ─────────────────────────────────────────────────────

/// Primary accent colour (`#9b87f5`) as RGB channels.
pub const CYBER_PRIMARY_RGB: (u8, u8, u8) = (155, 135, 245);

/// Deep violet used for secondary grid lines (`#310a5d`).
pub const CYBER_DEEP_RGB: (u8, u8, u8) = (49, 10, 93);

/// Wireframe sphere tint: deep violet lifted by the primary emissive glow.
pub const SPHERE_RGB: (u8, u8, u8) = (95, 62, 165);

/// Scene background / fog colour.
pub const BACKGROUND_HEX: &str = "#121212";

// ── Frame timing ────────────────────────────────────────────────

/// Longest step the engine will simulate in one frame, in seconds.
///
/// Background tabs pause `requestAnimationFrame`; clamping keeps the scene
/// from jumping forward when the tab becomes visible again.
pub const MAX_FRAME_STEP_S: f64 = 0.1;
