//! The 3D "cyber grid" backdrop: a drifting floor grid, a slowly turning
//! point cloud, and a wireframe sphere that springs into view.
//!
//! ARCHITECTURE
//! ============
//! Geometry is built once in model space. Each frame [`CyberScene::frame`]
//! applies the time-based transforms, projects through the [`Camera`], and
//! returns flat lists of screen-space segments and dots with fog already
//! folded into their alpha. `render` only has to stroke and fill them.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::f64::consts::{PI, TAU};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::{Camera, Point, Vec3};
use crate::consts::{CYBER_DEEP_RGB, CYBER_PRIMARY_RGB, SPHERE_RGB};

/// Tuning knobs for the scene; defaults reproduce the site's look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub grid_size: f64,
    pub grid_divisions: usize,
    pub grid_y: f64,
    /// World units per second the grid slides toward the camera.
    pub grid_drift: f64,
    pub point_count: usize,
    /// Edge length of the cube the point cloud is scattered in.
    pub point_spread: f64,
    /// Point diameter in world units.
    pub point_size: f64,
    pub point_opacity: f64,
    pub sphere_radius: f64,
    pub sphere_segments: usize,
    pub sphere_center: Vec3,
    /// Seconds before the sphere starts growing.
    pub sphere_delay_s: f64,
    /// Seconds the sphere takes to reach full size.
    pub sphere_grow_s: f64,
    pub fog_near: f64,
    pub fog_far: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_size: 30.0,
            grid_divisions: 20,
            grid_y: -2.0,
            grid_drift: 0.3,
            point_count: 150,
            point_spread: 20.0,
            point_size: 0.1,
            point_opacity: 0.7,
            sphere_radius: 1.5,
            sphere_segments: 12,
            sphere_center: Vec3::new(0.0, 0.0, -5.0),
            sphere_delay_s: 0.2,
            sphere_grow_s: 1.5,
            fog_near: 5.0,
            fog_far: 30.0,
        }
    }
}

/// Starting scale of the sphere before its entrance animation.
const SPHERE_START_SCALE: f64 = 0.001;

/// A coloured screen-space line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub rgb: (u8, u8, u8),
    pub alpha: f64,
}

/// A screen-space dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub at: Point,
    pub radius: f64,
    pub alpha: f64,
}

/// Everything `render` needs to paint one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneFrame {
    pub segments: Vec<Segment>,
    pub dots: Vec<Dot>,
}

/// Model-space line with its colour.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    a: Vec3,
    b: Vec3,
    rgb: (u8, u8, u8),
}

/// The animated 3D backdrop.
#[derive(Debug, Clone)]
pub struct CyberScene {
    pub camera: Camera,
    config: SceneConfig,
    grid: Vec<Edge>,
    sphere: Vec<Edge>,
    points: Vec<Vec3>,
    elapsed_s: f64,
}

impl CyberScene {
    #[must_use]
    pub fn new(config: SceneConfig, seed: u64) -> Self {
        Self {
            camera: Camera::default(),
            grid: grid_edges(&config),
            sphere: sphere_edges(&config),
            points: scatter_points(&config, seed),
            config,
            elapsed_s: 0.0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[must_use]
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    /// Number of grid lines (both directions).
    #[must_use]
    pub fn grid_line_count(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Move the scene clock forward.
    pub fn advance(&mut self, dt_s: f64) {
        self.elapsed_s += dt_s.max(0.0);
    }

    /// Grid offset toward the camera, always in `[0, 1)`.
    #[must_use]
    pub fn grid_offset(&self) -> f64 {
        (self.elapsed_s * self.config.grid_drift).rem_euclid(1.0)
    }

    /// Current sphere scale, from `0.001` up to `1.0`.
    #[must_use]
    pub fn sphere_scale(&self) -> f64 {
        let t = (self.elapsed_s - self.config.sphere_delay_s) / self.config.sphere_grow_s;
        if t <= 0.0 {
            return SPHERE_START_SCALE;
        }
        SPHERE_START_SCALE + (1.0 - SPHERE_START_SCALE) * elastic_out(t, 1.0, 0.5)
    }

    /// Linear fog: `0.0` clear, `1.0` fully fogged.
    #[must_use]
    pub fn fog_factor(&self, depth: f64) -> f64 {
        let span = (self.config.fog_far - self.config.fog_near).max(f64::EPSILON);
        ((depth - self.config.fog_near) / span).clamp(0.0, 1.0)
    }

    /// Project the scene at the current time into a `width × height` viewport.
    #[must_use]
    pub fn frame(&self, width: f64, height: f64) -> SceneFrame {
        let t = self.elapsed_s;
        let mut frame = SceneFrame::default();

        let grid_origin = Vec3::new(0.0, self.config.grid_y, self.grid_offset());
        let grid_tilt = (t * 0.05).sin() * 0.02;
        for edge in &self.grid {
            let a = edge.a.rotate_x(grid_tilt) + grid_origin;
            let b = edge.b.rotate_x(grid_tilt) + grid_origin;
            self.push_segment(&mut frame, a, b, edge.rgb, 1.0, width, height);
        }

        let scale = self.sphere_scale();
        let spin = t * 0.05;
        for edge in &self.sphere {
            let a = (edge.a * scale).rotate_y(spin) + self.config.sphere_center;
            let b = (edge.b * scale).rotate_y(spin) + self.config.sphere_center;
            self.push_segment(&mut frame, a, b, edge.rgb, 0.9, width, height);
        }

        let cloud_y = t * 0.01;
        let cloud_z = (t * 0.03).sin() * 0.05;
        for point in &self.points {
            let world = point.rotate_z(cloud_z).rotate_y(cloud_y);
            if let Some(p) = self.camera.project(world, width, height) {
                let alpha = self.config.point_opacity * (1.0 - self.fog_factor(p.depth));
                if alpha > 0.0 {
                    frame.dots.push(Dot {
                        at: p.screen,
                        radius: (self.config.point_size * 0.5 * p.scale).max(0.5),
                        alpha,
                    });
                }
            }
        }

        frame
    }

    #[allow(clippy::too_many_arguments)]
    fn push_segment(
        &self,
        frame: &mut SceneFrame,
        a: Vec3,
        b: Vec3,
        rgb: (u8, u8, u8),
        opacity: f64,
        width: f64,
        height: f64,
    ) {
        let Some((pa, pb)) = self.camera.project_segment(a, b, width, height) else {
            return;
        };
        let fog = self.fog_factor((pa.depth + pb.depth) * 0.5);
        let alpha = opacity * (1.0 - fog);
        if alpha > 0.0 {
            frame.segments.push(Segment { from: pa.screen, to: pb.screen, rgb, alpha });
        }
    }
}

/// Elastic ease-out with the given `amplitude` and `period`.
///
/// `t` is clamped to `[0, 1]`; the curve starts at `0`, overshoots past `1`
/// a few times with decaying amplitude, and ends exactly at `1`.
#[must_use]
pub fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let amplitude = amplitude.max(1.0);
    let shift = period / TAU * (1.0 / amplitude).asin();
    amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

/// Floor grid centred on the origin in the XZ plane.
#[allow(clippy::cast_precision_loss)]
fn grid_edges(config: &SceneConfig) -> Vec<Edge> {
    let divisions = config.grid_divisions.max(1);
    let half = config.grid_size * 0.5;
    let step = config.grid_size / divisions as f64;
    let mut edges = Vec::with_capacity((divisions + 1) * 2);
    for i in 0..=divisions {
        let k = -half + step * i as f64;
        let rgb = if i == divisions / 2 { CYBER_PRIMARY_RGB } else { CYBER_DEEP_RGB };
        edges.push(Edge { a: Vec3::new(-half, 0.0, k), b: Vec3::new(half, 0.0, k), rgb });
        edges.push(Edge { a: Vec3::new(k, 0.0, -half), b: Vec3::new(k, 0.0, half), rgb });
    }
    edges
}

/// Latitude/longitude wireframe of a sphere centred on the origin.
#[allow(clippy::cast_precision_loss)]
fn sphere_edges(config: &SceneConfig) -> Vec<Edge> {
    let segments = config.sphere_segments.max(3);
    let r = config.sphere_radius;
    let vertex = |lat: usize, lon: usize| {
        let theta = PI * lat as f64 / segments as f64;
        let phi = TAU * lon as f64 / segments as f64;
        Vec3::new(-r * phi.cos() * theta.sin(), r * theta.cos(), r * phi.sin() * theta.sin())
    };

    let mut edges = Vec::new();
    for lat in 0..=segments {
        for lon in 0..segments {
            // Rings; the poles collapse to a point.
            if lat > 0 && lat < segments {
                edges.push(Edge { a: vertex(lat, lon), b: vertex(lat, lon + 1), rgb: SPHERE_RGB });
            }
            // Meridians.
            if lat < segments {
                edges.push(Edge { a: vertex(lat, lon), b: vertex(lat + 1, lon), rgb: SPHERE_RGB });
            }
        }
    }
    edges
}

/// Uniformly scatter `point_count` points in a cube of edge `point_spread`.
fn scatter_points(config: &SceneConfig, seed: u64) -> Vec<Vec3> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let spread = config.point_spread;
    (0..config.point_count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f64>() - 0.5) * spread,
                (rng.random::<f64>() - 0.5) * spread,
                (rng.random::<f64>() - 0.5) * spread,
            )
        })
        .collect()
}
