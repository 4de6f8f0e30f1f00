#![allow(clippy::float_cmp)]

use super::*;

fn field(seed: u64) -> ParticleField {
    ParticleField::new(ParticleConfig::default(), 800.0, 600.0, seed)
}

fn particle_at(x: f64, y: f64) -> Particle {
    Particle { x, y, size: 1.0, speed_x: 0.0, speed_y: 0.0, opacity: 0.5, lifespan: 0.0, max_lifespan: 100.0 }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_spawns_configured_count() {
    let f = field(1);
    assert_eq!(f.len(), 50);
    assert!(!f.is_empty());
}

#[test]
fn new_spawns_within_bounds_and_ranges() {
    let f = field(7);
    for p in f.particles() {
        assert!((0.0..=800.0).contains(&p.x));
        assert!((0.0..=600.0).contains(&p.y));
        assert!((0.5..2.5).contains(&p.size));
        assert!((-0.1..0.1).contains(&p.speed_x));
        assert!((-0.1..0.1).contains(&p.speed_y));
        assert!((0.1..0.6).contains(&p.opacity));
        assert!((100.0..300.0).contains(&p.max_lifespan));
        assert_eq!(p.lifespan, 0.0);
    }
}

#[test]
fn same_seed_is_reproducible() {
    assert_eq!(field(42).particles(), field(42).particles());
}

#[test]
fn zero_sized_field_still_holds_count() {
    let f = ParticleField::new(ParticleConfig::default(), 0.0, 0.0, 3);
    assert_eq!(f.len(), 50);
}

// =============================================================
// Stepping
// =============================================================

#[test]
fn count_is_constant_across_many_steps() {
    let mut f = field(9);
    for _ in 0..2_000 {
        f.step();
        assert_eq!(f.len(), 50);
    }
    assert!(f.respawned() > 0, "lifespans cap at 300 frames so some particles must respawn");
}

#[test]
fn count_is_constant_when_every_particle_respawns_at_once() {
    let mut f = field(11);
    f.resize(0.0, 0.0);
    let replaced = f.step();
    assert_eq!(f.len(), 50);
    assert!(replaced > 0);
}

#[test]
fn step_moves_and_ages_particles() {
    let mut f = field(5);
    let before = f.particles()[0];
    f.step();
    let after = f.particles()[0];
    if after.lifespan == 1.0 {
        assert!((after.x - (before.x + before.speed_x)).abs() < 1e-12);
        assert!((after.y - (before.y + before.speed_y)).abs() < 1e-12);
    }
}

#[test]
fn opacity_fades_with_age() {
    let mut f = field(13);
    f.step();
    for p in f.particles().iter().filter(|p| p.lifespan > 0.0) {
        let expected = 1.0 - (p.lifespan / p.max_lifespan) * 0.8;
        assert!((p.opacity - expected).abs() < 1e-12);
    }
}

#[test]
fn respawned_particles_start_inside_new_bounds() {
    let mut f = field(17);
    f.resize(100.0, 50.0);
    for _ in 0..5 {
        f.step();
    }
    for p in f.particles().iter().filter(|p| p.lifespan == 0.0) {
        assert!((0.0..=100.0).contains(&p.x));
        assert!((0.0..=50.0).contains(&p.y));
    }
}

#[test]
fn resize_clamps_negative_dimensions() {
    let mut f = field(1);
    f.resize(-10.0, -5.0);
    assert_eq!(f.size(), (0.0, 0.0));
}

// =============================================================
// Particle
// =============================================================

#[test]
fn particle_is_spent_when_lifespan_reached() {
    let mut p = particle_at(10.0, 10.0);
    assert!(!p.is_spent(100.0, 100.0));
    p.lifespan = 100.0;
    assert!(p.is_spent(100.0, 100.0));
}

#[test]
fn particle_is_spent_outside_bounds() {
    assert!(particle_at(-0.1, 10.0).is_spent(100.0, 100.0));
    assert!(particle_at(100.1, 10.0).is_spent(100.0, 100.0));
    assert!(particle_at(10.0, -0.1).is_spent(100.0, 100.0));
    assert!(particle_at(10.0, 100.1).is_spent(100.0, 100.0));
    assert!(!particle_at(100.0, 100.0).is_spent(100.0, 100.0));
}

// =============================================================
// Links
// =============================================================

#[test]
fn links_join_only_close_pairs_once() {
    let mut f = ParticleField::new(ParticleConfig { count: 3, ..ParticleConfig::default() }, 500.0, 500.0, 1);
    f.particles = vec![particle_at(0.0, 0.0), particle_at(30.0, 40.0), particle_at(400.0, 400.0)];
    let links = f.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].from, Point::new(0.0, 0.0));
    assert_eq!(links[0].to, Point::new(30.0, 40.0));
    assert!((links[0].alpha - 0.1 * (1.0 - 50.0 / 100.0)).abs() < 1e-12);
}

#[test]
fn links_exclude_pairs_at_exact_threshold() {
    let mut f = ParticleField::new(ParticleConfig { count: 2, ..ParticleConfig::default() }, 500.0, 500.0, 1);
    f.particles = vec![particle_at(0.0, 0.0), particle_at(100.0, 0.0)];
    assert!(f.links().is_empty());
}
