use glam::Vec2;
use rand::Rng;

use super::constants::*;

/// Short-lived fading point sprite produced by an explosion.
///
/// Owned by the fireworks simulation's live set from creation until its
/// alpha reaches zero, at which point the owner prunes it.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: String,
    pub alpha: f32,
    pub friction: f32,
    pub gravity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: String) -> Self {
        Self {
            pos,
            vel,
            color,
            alpha: 1.0,
            friction: PARTICLE_FRICTION,
            gravity: PARTICLE_GRAVITY,
        }
    }

    /// One frame of motion: friction, then gravity, then integration.
    /// Alpha decreases monotonically by a fixed step.
    pub fn update(&mut self) {
        self.vel *= self.friction;
        self.vel.y += self.gravity;
        self.pos += self.vel;
        self.alpha -= PARTICLE_FADE_STEP;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Closed-form heart curve in curve units, `t` over [0, 2π).
///
/// y is negated relative to the textbook curve so the heart points up in
/// screen coordinates (where y grows downward).
#[inline]
pub fn heart_curve_point(t: f32) -> Vec2 {
    let dx = 16.0 * t.sin().powi(3);
    let dy = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(dx, dy)
}

/// Radial burst: `count` particles on an even angular lattice (2π/count),
/// each with a uniformly random speed in [0, RADIAL_SPEED_MAX). The lattice
/// keeps the burst circular; the random speeds keep it slightly irregular.
pub fn radial_burst(
    origin: Vec2,
    color: &str,
    count: usize,
    rng: &mut impl Rng,
    out: &mut Vec<Particle>,
) {
    let angle_step = std::f32::consts::TAU / count as f32;
    for i in 0..count {
        let angle = angle_step * i as f32;
        let speed = rng.gen::<f32>() * RADIAL_SPEED_MAX;
        let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        out.push(Particle::new(origin, vel, color.to_owned()));
    }
}

/// Heart burst: velocities follow the heart contour, so integrating the
/// cloud forward expands it into a heart silhouette.
pub fn heart_burst(origin: Vec2, color: &str, count: usize, out: &mut Vec<Particle>) {
    for i in 0..count {
        let t = std::f32::consts::TAU * i as f32 / count as f32;
        let vel = heart_curve_point(t) * HEART_VELOCITY_SCALE;
        out.push(Particle::new(origin, vel, color.to_owned()));
    }
}
