use glam::Vec2;
use rand::Rng;

use super::constants::*;
use super::particle::{heart_burst, radial_burst, Particle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RocketKind {
    Normal,
    Heart,
}

/// Ascending sprite that bursts into particles at or near its target height.
///
/// Rockets carry no friction; vertical velocity stays constant until the
/// explosion condition fires.
#[derive(Clone, Debug)]
pub struct Rocket {
    pub pos: Vec2,
    pub target_y: f32,
    pub vy: f32,
    pub kind: RocketKind,
    pub color: String,
    pub exploded: bool,
}

impl Rocket {
    /// Normal rocket, launched upward from `start_y` toward a target apex.
    pub fn ascending(x: f32, start_y: f32, target_y: f32, rng: &mut impl Rng) -> Self {
        let hue = rng.gen::<f32>() * 360.0;
        Self {
            pos: Vec2::new(x, start_y),
            target_y,
            vy: -(ROCKET_BASE_SPEED + rng.gen::<f32>() * ROCKET_SPEED_SPAN),
            kind: RocketKind::Normal,
            color: format!("hsl({hue:.0}, 50%, 50%)"),
            exploded: false,
        }
    }

    /// Heart rocket: zero rise, target apex at the spawn point itself, so
    /// the first update bursts exactly where the pointer landed.
    pub fn heart(pos: Vec2) -> Self {
        Self {
            pos,
            target_y: pos.y,
            vy: 0.0,
            kind: RocketKind::Heart,
            color: HEART_COLOR.to_owned(),
            exploded: false,
        }
    }

    /// Advance one frame; true on the frame the rocket explodes.
    ///
    /// Soft apex: the rocket bursts when it reaches the target OR when its
    /// ascent stalls below the threshold, whichever comes first.
    pub fn update(&mut self) -> bool {
        self.pos.y += self.vy;
        if !self.exploded && (self.pos.y <= self.target_y || self.vy.abs() < ROCKET_STALL_SPEED) {
            self.exploded = true;
            return true;
        }
        false
    }
}

/// Owner of all live fireworks entities.
///
/// `update` and `prune` are separate passes so a caller can draw an entity's
/// final frame between them; `step` combines both for headless use.
#[derive(Default)]
pub struct FireworksSim {
    pub rockets: Vec<Rocket>,
    pub particles: Vec<Particle>,
}

impl FireworksSim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Autonomous spawn: random column from the bottom edge, apex somewhere
    /// in the upper 20–60% band of the view.
    pub fn launch_autonomous(&mut self, size: Vec2, rng: &mut impl Rng) {
        let x = rng.gen::<f32>() * size.x;
        let target_y = size.y * APEX_BAND_TOP + rng.gen::<f32>() * size.y * APEX_BAND_SPAN;
        self.rockets.push(Rocket::ascending(x, size.y, target_y, rng));
    }

    /// Interactive spawn: heart burst at the pointer position.
    pub fn launch_heart(&mut self, pos: Vec2) {
        self.rockets.push(Rocket::heart(pos));
    }

    /// Advance rockets and particles by one frame, dispatching the emission
    /// strategy for every rocket that exploded this frame. Newly emitted
    /// particles take their first motion step on the same frame.
    pub fn update(&mut self, rng: &mut impl Rng) {
        let mut bursts = Vec::new();
        for rocket in &mut self.rockets {
            if rocket.update() {
                bursts.push((rocket.pos, rocket.kind, rocket.color.clone()));
            }
        }
        for (origin, kind, color) in bursts {
            match kind {
                RocketKind::Heart => {
                    heart_burst(origin, &color, HEART_PARTICLE_COUNT, &mut self.particles)
                }
                RocketKind::Normal => {
                    radial_burst(origin, &color, RADIAL_PARTICLE_COUNT, rng, &mut self.particles)
                }
            }
        }
        for p in &mut self.particles {
            p.update();
        }
    }

    /// Drop exploded rockets and fully faded particles. Mark-then-compact:
    /// survivors keep their relative order and no neighbor is skipped.
    pub fn prune(&mut self) {
        self.rockets.retain(|r| !r.exploded);
        self.particles.retain(|p| !p.is_dead());
    }

    /// update + prune, for callers that do not draw in between.
    pub fn step(&mut self, rng: &mut impl Rng) {
        self.update(rng);
        self.prune();
    }
}
