// Simulation tuning constants shared by the core modules.

// Particle physics (per frame)
pub const PARTICLE_FRICTION: f32 = 0.98; // multiplicative velocity decay per axis
pub const PARTICLE_GRAVITY: f32 = 0.03; // added to vertical velocity after friction
pub const PARTICLE_FADE_STEP: f32 = 0.008; // alpha decrement; ~125 frames to fade out

// Explosion shapes
pub const RADIAL_PARTICLE_COUNT: usize = 50;
pub const RADIAL_SPEED_MAX: f32 = 2.5; // speed cap along the even angular lattice
pub const HEART_PARTICLE_COUNT: usize = 60; // denser for a readable silhouette
pub const HEART_VELOCITY_SCALE: f32 = 0.08; // curve units -> velocity units

// Rockets
pub const ROCKET_BASE_SPEED: f32 = 5.0;
pub const ROCKET_SPEED_SPAN: f32 = 2.0;
pub const ROCKET_STALL_SPEED: f32 = 0.5; // soft apex: burst once ascent stalls
pub const APEX_BAND_TOP: f32 = 0.2; // apex band, as fractions of viewport height
pub const APEX_BAND_SPAN: f32 = 0.4;
pub const HEART_COLOR: &str = "#ff0066";

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_DEPTH_STEP: f32 = 0.5; // depth travelled toward the viewer per frame
pub const STAR_SIZE_MIN: f32 = 1.0;
pub const STAR_SIZE_SPAN: f32 = 3.0;
pub const STAR_PULSE_SPEED_MIN: f32 = 0.05;
pub const STAR_PULSE_SPEED_SPAN: f32 = 0.05;
pub const STAR_OPACITY_BASE: f32 = 0.4;
pub const STAR_OPACITY_SPAN: f32 = 0.6;
pub const STAR_PULSE_SIZE_AMOUNT: f32 = 0.3;
pub const STAR_SPIN_RATE: f32 = 0.1; // sprite rotation per unit of pulse phase
