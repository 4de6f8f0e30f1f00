//! Particle field: the drifting points behind the hero section.
//!
//! DESIGN
//! ======
//! The field owns a fixed-size `Vec<Particle>`. Each frame every particle
//! drifts by its velocity, ages by one frame, and fades linearly toward 20%
//! opacity. A particle that has exhausted its lifespan or drifted outside the
//! viewport is overwritten in place by a freshly spawned one, so the number
//! of live particles never changes after construction.
//!
//! Randomness comes from a seeded `SmallRng` so simulations are reproducible
//! in tests; the browser host seeds it from `Math.random()`.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::camera::Point;

/// Tuning knobs for the particle field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    /// Number of live particles.
    pub count: usize,
    /// Smallest radius, in CSS pixels.
    pub min_size: f64,
    /// Radius spread above `min_size`.
    pub size_spread: f64,
    /// Velocity per axis is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    /// Lowest opacity at spawn.
    pub min_opacity: f64,
    /// Opacity spread above `min_opacity` at spawn.
    pub opacity_spread: f64,
    /// Shortest lifespan, in frames.
    pub min_lifespan: f64,
    /// Lifespan spread above `min_lifespan`, in frames.
    pub lifespan_spread: f64,
    /// Fraction of opacity lost over a full lifespan.
    pub fade: f64,
    /// Particles closer than this (CSS pixels) are joined by a line.
    pub link_distance: f64,
    /// Line alpha for two particles at zero distance.
    pub link_alpha: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            min_size: 0.5,
            size_spread: 2.0,
            max_speed: 0.1,
            min_opacity: 0.1,
            opacity_spread: 0.5,
            min_lifespan: 100.0,
            lifespan_spread: 200.0,
            fade: 0.8,
            link_distance: 100.0,
            link_alpha: 0.1,
        }
    }
}

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
    /// Frames lived so far.
    pub lifespan: f64,
    /// Frames this particle lives before it is respawned.
    pub max_lifespan: f64,
}

impl Particle {
    /// Screen position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this particle should be replaced in a `width × height` field.
    #[must_use]
    pub fn is_spent(&self, width: f64, height: f64) -> bool {
        self.lifespan >= self.max_lifespan || self.x < 0.0 || self.x > width || self.y < 0.0 || self.y > height
    }
}

/// A line joining two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub alpha: f64,
}

/// Fixed-population particle simulation.
#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: SmallRng,
    respawned: u64,
}

impl ParticleField {
    /// Spawn `config.count` particles uniformly over a `width × height` field.
    #[must_use]
    pub fn new(config: ParticleConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self {
            config,
            particles: Vec::with_capacity(config.count),
            width: width.max(0.0),
            height: height.max(0.0),
            rng: SmallRng::seed_from_u64(seed),
            respawned: 0,
        };
        for _ in 0..config.count {
            let particle = field.spawn();
            field.particles.push(particle);
        }
        field
    }

    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Total particles replaced since construction.
    #[must_use]
    pub fn respawned(&self) -> u64 {
        self.respawned
    }

    /// Change the field bounds. Particles now outside are respawned on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advance the simulation by one display frame.
    ///
    /// Returns how many particles were respawned during this step.
    pub fn step(&mut self) -> usize {
        let (width, height) = (self.width, self.height);
        let fade = self.config.fade;
        let mut replaced = 0;
        for index in 0..self.particles.len() {
            let spent = {
                let p = &mut self.particles[index];
                p.x += p.speed_x;
                p.y += p.speed_y;
                p.lifespan += 1.0;
                p.opacity = 1.0 - (p.lifespan / p.max_lifespan) * fade;
                p.is_spent(width, height)
            };
            if spent {
                self.particles[index] = self.spawn();
                replaced += 1;
            }
        }
        self.respawned += replaced as u64;
        replaced
    }

    /// Lines between every pair of particles closer than `link_distance`.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let max = self.config.link_distance;
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position().distance(b.position());
                if distance < max {
                    links.push(Link {
                        from: a.position(),
                        to: b.position(),
                        alpha: self.config.link_alpha * (1.0 - distance / max),
                    });
                }
            }
        }
        links
    }

    fn spawn(&mut self) -> Particle {
        let c = self.config;
        Particle {
            x: self.uniform(0.0, self.width),
            y: self.uniform(0.0, self.height),
            size: self.uniform(c.min_size, c.size_spread),
            speed_x: self.uniform(-c.max_speed, 2.0 * c.max_speed),
            speed_y: self.uniform(-c.max_speed, 2.0 * c.max_speed),
            opacity: self.uniform(c.min_opacity, c.opacity_spread),
            lifespan: 0.0,
            max_lifespan: self.uniform(c.min_lifespan, c.lifespan_spread),
        }
    }

    /// Sample `[low, low + spread)`.
    fn uniform(&mut self, low: f64, spread: f64) -> f64 {
        low + self.rng.random::<f64>() * spread
    }
}
