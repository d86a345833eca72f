use glam::Vec2;
use rand::Rng;

use super::constants::*;

/// One recycling star in the pseudo-3D depth field.
///
/// Depth `z` strictly decreases each frame; at z ≤ 0 the star is reset in
/// place (new position, depth, size), never deallocated.
#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub z: f32,
    pub size: f32,
    pub opacity: f32,
    pub hue: f32,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
}

impl Star {
    pub fn spawn(size: Vec2, rng: &mut impl Rng) -> Self {
        let mut star = Self {
            pos: Vec2::ZERO,
            z: 0.0,
            size: 0.0,
            opacity: 0.0,
            hue: rng.gen::<f32>() * 360.0,
            pulse_phase: rng.gen::<f32>() * std::f32::consts::TAU,
            pulse_speed: STAR_PULSE_SPEED_MIN + rng.gen::<f32>() * STAR_PULSE_SPEED_SPAN,
        };
        star.reset(size, rng);
        star
    }

    /// Recycle in place: fresh position, depth and base size. Depth range
    /// tracks the viewport width, matching the projection reference.
    pub fn reset(&mut self, size: Vec2, rng: &mut impl Rng) {
        self.pos = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
        self.z = rng.gen::<f32>() * size.x;
        self.size = STAR_SIZE_MIN + rng.gen::<f32>() * STAR_SIZE_SPAN;
        self.opacity = rng.gen::<f32>();
    }

    pub fn update(&mut self, size: Vec2, rng: &mut impl Rng) {
        self.z -= STAR_DEPTH_STEP;
        if self.z <= 0.0 {
            self.reset(size, rng);
        }
        self.pulse_phase += self.pulse_speed;
        self.opacity = STAR_OPACITY_BASE + (self.pulse_phase.sin() * 0.5 + 0.5) * STAR_OPACITY_SPAN;
    }

    /// Perspective projection to screen space. Width is the reference
    /// distance for both axes so the field keeps a consistent aspect.
    /// None when the projected point falls outside the viewport (skipped
    /// for drawing, still updated).
    pub fn project(&self, size: Vec2) -> Option<StarSprite> {
        if self.z <= 0.0 {
            return None;
        }
        let scale = size.x / self.z;
        let x = (self.pos.x - size.x / 2.0) * scale + size.x / 2.0;
        let y = (self.pos.y - size.y / 2.0) * scale + size.y / 2.0;
        if x < 0.0 || x > size.x || y < 0.0 || y > size.y {
            return None;
        }
        let pulse = 1.0 + self.pulse_phase.sin() * STAR_PULSE_SIZE_AMOUNT;
        Some(StarSprite {
            pos: Vec2::new(x, y),
            size: self.size * scale * pulse,
            opacity: self.opacity,
            rotation: self.pulse_phase * STAR_SPIN_RATE,
            hue: self.hue,
        })
    }
}

/// Screen-space draw data for one star.
#[derive(Clone, Copy, Debug)]
pub struct StarSprite {
    pub pos: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub hue: f32,
}

/// Fixed-size pool of recycling stars.
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, size: Vec2, rng: &mut impl Rng) -> Self {
        let stars = (0..count).map(|_| Star::spawn(size, rng)).collect();
        Self { stars }
    }

    pub fn update(&mut self, size: Vec2, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.update(size, rng);
        }
    }
}
