//! Decorative background rendering for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! two animated backdrops behind the site's pages: a drifting 2D particle
//! field and a small 3D "cyber grid" scene projected onto a 2D canvas. The
//! Leptos host only mounts a `<canvas>`, forwards viewport sizes, and drives
//! [`engine::Engine::frame`] from `requestAnimationFrame`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Frame driver, the [`engine::Backdrop`] seam, and testable [`engine::EngineCore`] |
//! | [`particles`] | Particle field simulation (spawn, drift, fade, respawn, links) |
//! | [`scene`] | 3D grid / point cloud / wireframe sphere, projected per frame |
//! | [`camera`] | Vector math and the perspective camera |
//! | [`render`] | Canvas2D drawing of both backdrops |
//! | [`consts`] | Shared palette and tuning constants |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod particles;
pub mod render;
pub mod scene;
