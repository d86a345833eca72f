pub mod constants;
pub mod particle;
pub mod rocket;
pub mod sequencer;
pub mod starfield;

pub use particle::*;
pub use rocket::*;
pub use sequencer::*;
pub use starfield::*;
