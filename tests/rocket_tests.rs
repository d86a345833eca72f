// Host-side tests for rockets and the fireworks simulation.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod rocket {
        include!("../src/core/rocket.rs");
    }
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::constants::*;
use sim::particle::{heart_curve_point, Particle};
use sim::rocket::*;
use std::f32::consts::TAU;

#[test]
fn normal_rocket_ascends_then_explodes_at_apex() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut rocket = Rocket::ascending(120.0, 600.0, 300.0, &mut rng);
    assert_eq!(rocket.kind, RocketKind::Normal);
    assert!(rocket.vy <= -ROCKET_BASE_SPEED);
    assert!(rocket.vy >= -(ROCKET_BASE_SPEED + ROCKET_SPEED_SPAN));

    let mut prev_y = rocket.pos.y;
    let mut frames = 0;
    while !rocket.update() {
        assert!(rocket.pos.y < prev_y, "rocket must ascend every frame");
        prev_y = rocket.pos.y;
        frames += 1;
        assert!(frames < 200, "rocket never exploded");
    }
    assert!(rocket.exploded);
    // |vy| >= 5 so the stall branch never fires; the apex condition did.
    assert!(rocket.pos.y <= rocket.target_y);

    // Exactly once: further updates report no new explosion.
    assert!(!rocket.update());
    assert!(rocket.exploded);
}

#[test]
fn stalled_rocket_bursts_early_via_soft_apex() {
    let mut rocket = Rocket {
        pos: Vec2::new(50.0, 500.0),
        target_y: 100.0,
        vy: -0.4,
        kind: RocketKind::Normal,
        color: "#fff".into(),
        exploded: false,
    };
    assert!(rocket.update());
    assert!(rocket.pos.y > rocket.target_y, "burst happened short of the target");
}

#[test]
fn heart_rocket_bursts_at_the_launch_point() {
    let mut rocket = Rocket::heart(Vec2::new(100.0, 100.0));
    assert!(rocket.update());
    assert_eq!(rocket.pos, Vec2::new(100.0, 100.0));
    assert_eq!(rocket.color, HEART_COLOR);
}

#[test]
fn heart_launch_end_to_end() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut sim = FireworksSim::new();
    sim.launch_heart(Vec2::new(100.0, 100.0));

    sim.update(&mut rng);
    assert_eq!(sim.particles.len(), HEART_PARTICLE_COUNT);
    assert!(sim.rockets[0].exploded);
    // One motion step at most ~1.4 units of drift from the click point.
    for p in &sim.particles {
        assert!((p.pos - Vec2::new(100.0, 100.0)).length() < 2.0);
        assert_eq!(p.color, HEART_COLOR);
    }
    sim.prune();
    assert!(sim.rockets.is_empty(), "exploded rocket removed the same frame");

    for _ in 0..30 {
        sim.step(&mut rng);
    }
    assert_eq!(sim.particles.len(), HEART_PARTICLE_COUNT);

    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    for p in &sim.particles {
        min = min.min(p.pos);
        max = max.max(p.pos);
    }
    let cloud = max - min;

    let mut cmin = Vec2::splat(f32::MAX);
    let mut cmax = Vec2::splat(f32::MIN);
    for i in 0..HEART_PARTICLE_COUNT {
        let p = heart_curve_point(TAU * i as f32 / HEART_PARTICLE_COUNT as f32);
        cmin = cmin.min(p);
        cmax = cmax.max(p);
    }
    let curve = cmax - cmin;

    let rel = (cloud.x / cloud.y - curve.x / curve.y).abs() / (curve.x / curve.y);
    assert!(rel < 0.10, "expanding cloud lost the heart aspect: {rel}");
}

#[test]
fn autonomous_launches_stay_in_the_apex_band() {
    let mut rng = StdRng::seed_from_u64(42);
    let size = Vec2::new(800.0, 600.0);
    let mut sim = FireworksSim::new();
    for _ in 0..100 {
        sim.launch_autonomous(size, &mut rng);
    }
    for rocket in &sim.rockets {
        assert_eq!(rocket.kind, RocketKind::Normal);
        assert_eq!(rocket.pos.y, size.y, "launches start at the bottom edge");
        assert!(rocket.pos.x >= 0.0 && rocket.pos.x < size.x);
        let lo = size.y * APEX_BAND_TOP;
        let hi = size.y * (APEX_BAND_TOP + APEX_BAND_SPAN);
        assert!(
            rocket.target_y >= lo && rocket.target_y < hi,
            "apex {} outside [{lo}, {hi})",
            rocket.target_y
        );
    }
}

#[test]
fn prune_compacts_without_reordering_survivors() {
    let mut sim = FireworksSim::new();
    for alpha in [1.0_f32, 0.0, 0.5, -0.1, 0.3] {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, "#fff".into());
        p.alpha = alpha;
        sim.particles.push(p);
    }
    sim.prune();
    let alphas: Vec<f32> = sim.particles.iter().map(|p| p.alpha).collect();
    assert_eq!(alphas, vec![1.0, 0.5, 0.3]);
}

#[test]
fn faded_particle_leaves_the_live_set() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut sim = FireworksSim::new();
    let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, "#fff".into());
    p.alpha = PARTICLE_FADE_STEP; // one step from dead
    sim.particles.push(p);
    sim.step(&mut rng);
    assert!(sim.particles.is_empty());
}
