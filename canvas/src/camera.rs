//! Vector math and the perspective camera used by the 3D scene.
//!
//! The camera follows the same conventions as a typical WebGL scene graph:
//! right-handed world space, `+y` up, vertical field of view in degrees.
//! Screen space is CSS pixels with the origin at the top-left corner.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Mul, Sub};

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. Zero vectors are returned unchanged.
    #[must_use]
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if len <= f64::EPSILON { self } else { self * (1.0 / len) }
    }

    /// Rotate about the x axis by `angle` radians.
    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3 { x: self.x, y: self.y * c - self.z * s, z: self.y * s + self.z * c }
    }

    /// Rotate about the y axis by `angle` radians.
    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3 { x: self.x * c + self.z * s, y: self.y, z: -self.x * s + self.z * c }
    }

    /// Rotate about the z axis by `angle` radians.
    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        Vec3 { x: self.x * c - self.y * s, y: self.x * s + self.y * c, z: self.z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3 { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs }
    }
}

/// A world-space point after projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen position in CSS pixels.
    pub screen: Point,
    /// Distance along the view axis, in world units.
    pub depth: f64,
    /// Screen pixels per world unit at this depth.
    pub scale: f64,
}

/// Perspective camera looking from `position` toward `target`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view, in degrees.
    pub fov_deg: f64,
    /// Points closer than this along the view axis are culled.
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: Vec3::new(0.0, 5.0, 10.0), target: Vec3::default(), fov_deg: 75.0, near: 0.1 }
    }
}

impl Camera {
    /// Orthonormal view basis `(right, up, forward)`.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Focal length in pixels for a viewport `viewport_h` pixels tall.
    #[must_use]
    pub fn focal_length(&self, viewport_h: f64) -> f64 {
        (viewport_h * 0.5) / (self.fov_deg.to_radians() * 0.5).tan()
    }

    /// Transform a world-space point into view space: `x` right, `y` up,
    /// `z` distance along the view axis.
    #[must_use]
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        let (right, up, forward) = self.basis();
        let rel = world - self.position;
        Vec3::new(rel.dot(right), rel.dot(up), rel.dot(forward))
    }

    /// Project a view-space point into a `viewport_w × viewport_h` viewport.
    ///
    /// Returns `None` for points at or behind the near plane.
    #[must_use]
    pub fn project_view(&self, view: Vec3, viewport_w: f64, viewport_h: f64) -> Option<Projected> {
        if view.z <= self.near {
            return None;
        }
        let scale = self.focal_length(viewport_h) / view.z;
        let screen = Point::new(viewport_w * 0.5 + view.x * scale, viewport_h * 0.5 - view.y * scale);
        Some(Projected { screen, depth: view.z, scale })
    }

    /// Project a world-space point into a `viewport_w × viewport_h` viewport.
    ///
    /// Returns `None` for points at or behind the near plane.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport_w: f64, viewport_h: f64) -> Option<Projected> {
        self.project_view(self.to_view(world), viewport_w, viewport_h)
    }

    /// Project a world-space segment, clipping it against the near plane.
    ///
    /// Returns `None` when the whole segment is behind the camera.
    #[must_use]
    pub fn project_segment(
        &self,
        a: Vec3,
        b: Vec3,
        viewport_w: f64,
        viewport_h: f64,
    ) -> Option<(Projected, Projected)> {
        let mut va = self.to_view(a);
        let mut vb = self.to_view(b);
        let clip = self.near * 1.001;
        if va.z < clip && vb.z < clip {
            return None;
        }
        if va.z < clip {
            va = clip_to_depth(vb, va, clip);
        } else if vb.z < clip {
            vb = clip_to_depth(va, vb, clip);
        }
        Some((self.project_view(va, viewport_w, viewport_h)?, self.project_view(vb, viewport_w, viewport_h)?))
    }
}

/// Point on the line from `inside` to `outside` whose depth is `depth`.
fn clip_to_depth(inside: Vec3, outside: Vec3, depth: f64) -> Vec3 {
    let t = (inside.z - depth) / (inside.z - outside.z);
    inside + (outside - inside) * t
}
