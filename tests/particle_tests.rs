// Host-side tests for the particle engine and emission strategies. The main
// crate is wasm-only, so the pure core modules are included directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::constants::*;
use sim::particle::*;
use std::f32::consts::TAU;

#[test]
fn alpha_follows_linear_fade_law() {
    let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, "#fff".into());
    for n in 1..=200 {
        assert!(!p.is_dead() || 1.0 - (n - 1) as f32 * PARTICLE_FADE_STEP <= 0.0);
        p.update();
        let expected = 1.0 - n as f32 * PARTICLE_FADE_STEP;
        assert!(
            (p.alpha - expected).abs() < 1e-3,
            "alpha {} != {expected} after {n} updates",
            p.alpha
        );
    }
    // ~125 frames at the configured decrement
    assert!(p.is_dead());
}

#[test]
fn update_applies_friction_then_gravity_then_integration() {
    let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, -2.0), "#fff".into());
    p.update();
    let expected_vel = Vec2::new(
        1.0 * PARTICLE_FRICTION,
        -2.0 * PARTICLE_FRICTION + PARTICLE_GRAVITY,
    );
    assert!((p.vel - expected_vel).length() < 1e-6);
    assert!((p.pos - expected_vel).length() < 1e-6);
}

#[test]
fn radial_burst_uses_even_angular_lattice_with_bounded_speeds() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut out = Vec::new();
    radial_burst(Vec2::new(5.0, 9.0), "#abc", RADIAL_PARTICLE_COUNT, &mut rng, &mut out);
    assert_eq!(out.len(), RADIAL_PARTICLE_COUNT);

    let step = TAU / RADIAL_PARTICLE_COUNT as f32;
    for (i, p) in out.iter().enumerate() {
        assert_eq!(p.pos, Vec2::new(5.0, 9.0));
        let speed = p.vel.length();
        assert!(
            (0.0..RADIAL_SPEED_MAX).contains(&speed),
            "speed {speed} out of range"
        );
        if speed > 1e-4 {
            let angle = p.vel.y.atan2(p.vel.x).rem_euclid(TAU);
            let expected = (step * i as f32).rem_euclid(TAU);
            let diff = (angle - expected).abs();
            let diff = diff.min(TAU - diff);
            assert!(diff < 1e-3, "particle {i}: angle {angle} != {expected}");
        }
    }
}

#[test]
fn heart_burst_matches_closed_form_curve() {
    let origin = Vec2::new(100.0, 100.0);
    let mut out = Vec::new();
    heart_burst(origin, "#ff0066", HEART_PARTICLE_COUNT, &mut out);
    assert_eq!(out.len(), HEART_PARTICLE_COUNT);

    for (i, p) in out.iter().enumerate() {
        assert_eq!(p.pos, origin, "initial positions must equal the origin");
        let t = TAU * i as f32 / HEART_PARTICLE_COUNT as f32;
        let expected = heart_curve_point(t) * HEART_VELOCITY_SCALE;
        assert!(
            (p.vel - expected).length() < 1e-5,
            "particle {i}: vel {:?} != {:?}",
            p.vel,
            expected
        );
    }
}

#[test]
fn heart_curve_has_expected_extremes() {
    // Widest points at t = pi/2 and 3pi/2
    let right = heart_curve_point(std::f32::consts::FRAC_PI_2);
    assert!((right.x - 16.0).abs() < 1e-4);
    let left = heart_curve_point(3.0 * std::f32::consts::FRAC_PI_2);
    assert!((left.x + 16.0).abs() < 1e-4);
    // Bottom tip (largest screen-space y) at t = pi
    let tip = heart_curve_point(std::f32::consts::PI);
    assert!(tip.y > heart_curve_point(0.0).y);
}

#[test]
fn integrated_heart_cloud_keeps_the_curve_aspect() {
    let origin = Vec2::new(100.0, 100.0);
    let mut out = Vec::new();
    heart_burst(origin, "#ff0066", HEART_PARTICLE_COUNT, &mut out);
    for _ in 0..30 {
        for p in &mut out {
            p.update();
        }
    }

    let bounds = |points: &[Vec2]| {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        max - min
    };
    let cloud = bounds(&out.iter().map(|p| p.pos).collect::<Vec<_>>());
    let curve = bounds(
        &(0..HEART_PARTICLE_COUNT)
            .map(|i| heart_curve_point(TAU * i as f32 / HEART_PARTICLE_COUNT as f32))
            .collect::<Vec<_>>(),
    );

    let cloud_aspect = cloud.x / cloud.y;
    let curve_aspect = curve.x / curve.y;
    let rel = (cloud_aspect - curve_aspect).abs() / curve_aspect;
    assert!(
        rel < 0.10,
        "cloud aspect {cloud_aspect} drifted from curve aspect {curve_aspect}"
    );
}
