// Element ids, selectors and wiring constants for the web layer.

// Canvas layers
pub const FIREWORKS_CANVAS_ID: &str = "fireworks-canvas";
pub const GALAXY_CANVAS_ID: &str = "galaxy-canvas";

// Phase containers and panels
pub const INTRO_CONTAINER_ID: &str = "intro-container";
pub const ORBIT_CONTAINER_ID: &str = "orbit-container";
pub const CONSTELLATION_AREA_ID: &str = "constellation-area";
pub const ORBIT_SYSTEM_SELECTOR: &str = ".orbit-system";
pub const MEMORY_PANEL_SELECTOR: &str = ".message-display";
pub const MEMORY_TITLE_ID: &str = "memory-title";
pub const MEMORY_TEXT_ID: &str = "memory-text";
pub const MEMORY_CLOSE_ID: &str = "close-memory";
pub const CARD_ID: &str = "message-card";
pub const CARD_OPEN_ID: &str = "open-card";
pub const CARD_CLOSE_ID: &str = "close-card";
pub const HEART_FRAME_ID: &str = "heart-frame";
pub const ORBIT_KEYFRAMES_ID: &str = "orbit-keyframes";

// Regions that swallow background taps. Checked in order against
// Element::closest before a click is allowed to launch a rocket.
pub const OPAQUE_REGIONS: &[&str] = &[
    ".card",
    "button",
    ".heart-border-particle",
    ".orbital-item",
    ".message-display",
    ".constellation-star",
];

// Timing
pub const AUTO_LAUNCH_INTERVAL_MS: i32 = 1200;
pub const HEART_TRAIL_THROTTLE_MS: u64 = 50;
pub const HEART_CURSOR_LIFETIME_MS: i32 = 1000;
pub const TRANSITION_DELAY_MS: i32 = 500; // constellation complete -> big bang
pub const TRANSITION_DURATION_MS: i32 = 500; // scale+fade, then container swap
pub const CARD_HIDE_DELAY_MS: i32 = 500;

// Fireworks canvas rendering
pub const TRAIL_FILL: &str = "rgba(13, 13, 13, 0.2)"; // low-alpha motion-trail fade
pub const PARTICLE_RADIUS: f64 = 2.0;
pub const ROCKET_RADIUS: f64 = 3.0;
pub const ROCKET_GLOW_BLUR: f64 = 10.0;

// Heart-contour frame around screen center
pub const HEART_FRAME_SCALE_DESKTOP: f32 = 18.0; // px per curve unit
pub const HEART_FRAME_SCALE_MOBILE: f32 = 11.0;
pub const HEART_FRAME_COUNT_DESKTOP: usize = 30;
pub const HEART_FRAME_COUNT_MOBILE: usize = 22;
pub const HEART_FRAME_MOBILE_MAX_WIDTH: f32 = 700.0;
pub const HEART_FRAME_Y_SHIFT: f32 = -5.0; // curve units; lifts the shape to the text center
pub const AMBIENT_EMIT_BASE_MS: i32 = 800;
pub const AMBIENT_EMIT_JITTER_MS: i32 = 1000;
pub const AMBIENT_EMIT_CHANCE: f64 = 0.15;
pub const AMBIENT_HEART_COLOR: &str = "#ff00cc";

// Orbit carousel
pub const ORBIT_RADIUS_PX: f32 = 150.0;
pub const ORBIT_BASE_PERIOD_S: f32 = 10.0;
pub const ORBIT_PERIOD_STEP_S: f32 = 2.0; // desynchronizes the items

/// One orbiting memory: static content fed to the orbit phase. The core
/// treats these as opaque records.
pub struct Memory {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const MEMORIES: &[Memory] = &[
    Memory {
        icon: "\u{1F3B5}",
        title: "Our Song",
        detail: "The first time we danced...",
    },
    Memory {
        icon: "\u{2708}\u{FE0F}",
        title: "The Trip",
        detail: "Lost together in that city...",
    },
    Memory {
        icon: "\u{1F4F8}",
        title: "First Photo",
        detail: "We looked so nervous, haha...",
    },
    Memory {
        icon: "\u{1F48C}",
        title: "The Promise",
        detail: "Together to the stars.",
    },
];
