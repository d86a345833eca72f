use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{FireworksSim, Starfield, StarSprite};

/// Cancellation token for a requestAnimationFrame loop. Dropping the handle
/// leaves the loop running; `stop` prevents the next reschedule.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// Continuously reschedule `tick` on requestAnimationFrame until stopped.
pub fn start_loop(mut tick: impl FnMut() + 'static) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let flag = running.clone();
    let cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let cb_clone = cb.clone();
    *cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !flag.get() {
            return;
        }
        tick();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                cb_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    LoopHandle { running }
}

/// Registry of recurring timer handles so an embedder can tear the page
/// down without leaking intervals.
#[derive(Default)]
pub struct Spawners {
    handles: Vec<i32>,
}

impl Spawners {
    pub fn register(&mut self, handle: Option<i32>) {
        if let Some(h) = handle {
            self.handles.push(h);
        }
    }

    /// Clear every registered interval.
    pub fn stop(&mut self) {
        if let Some(w) = web::window() {
            for h in self.handles.drain(..) {
                w.clear_interval_with_handle(h);
            }
        }
    }
}

/// Per-frame state for the fireworks canvas.
///
/// Tick order: trail fade over the previous frame, update, draw rockets,
/// draw particles, prune — so every entity's final frame is still rendered.
pub struct FireworksFrame {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub sim: Rc<RefCell<FireworksSim>>,
    pub rng: SmallRng,
}

impl FireworksFrame {
    pub fn frame(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        let mut sim = self.sim.borrow_mut();
        sim.update(&mut self.rng);
        for rocket in &sim.rockets {
            self.draw_rocket(rocket.pos.x as f64, rocket.pos.y as f64, &rocket.color);
        }
        for particle in &sim.particles {
            self.draw_particle(
                particle.pos.x as f64,
                particle.pos.y as f64,
                &particle.color,
                particle.alpha as f64,
            );
        }
        sim.prune();
    }

    fn draw_rocket(&self, x: f64, y: f64, color: &str) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(x, y, ROCKET_RADIUS, 0.0, TAU);
        ctx.set_fill_style_str(color);
        ctx.set_shadow_blur(ROCKET_GLOW_BLUR);
        ctx.set_shadow_color(color);
        ctx.fill();
        ctx.restore();
    }

    fn draw_particle(&self, x: f64, y: f64, color: &str, alpha: f64) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha.max(0.0));
        ctx.begin_path();
        _ = ctx.arc(x, y, PARTICLE_RADIUS, 0.0, TAU);
        ctx.set_fill_style_str(color);
        ctx.fill();
        ctx.restore();
    }
}

/// Per-frame state for the starfield canvas. Independent of the fireworks
/// loop: full clear each tick, no trail.
pub struct StarfieldFrame {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Starfield,
    pub rng: SmallRng,
}

impl StarfieldFrame {
    pub fn frame(&mut self) {
        let size = glam::Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

        // Additive blending for the neon bloom; reset afterwards so sibling
        // layers composite normally.
        _ = self.ctx.set_global_composite_operation("lighter");
        self.field.update(size, &mut self.rng);
        for star in &self.field.stars {
            if let Some(sprite) = star.project(size) {
                self.draw_star(&sprite);
            }
        }
        _ = self.ctx.set_global_composite_operation("source-over");
    }

    /// Slowly rotating five-pointed star with an hsl glow.
    fn draw_star(&self, s: &StarSprite) {
        let ctx = &self.ctx;
        let size = s.size as f64;
        ctx.save();
        _ = ctx.translate(s.pos.x as f64, s.pos.y as f64);
        _ = ctx.rotate(s.rotation as f64);
        ctx.begin_path();
        for i in 0..5 {
            let outer = (18.0 + i as f64 * 72.0).to_radians();
            ctx.line_to(outer.cos() * size, outer.sin() * size);
            let inner = (54.0 + i as f64 * 72.0).to_radians();
            ctx.line_to(inner.cos() * size * 0.5, inner.sin() * size * 0.5);
        }
        ctx.close_path();
        ctx.set_fill_style_str(&format!("hsl({:.0}, 100%, 80%)", s.hue));
        ctx.set_global_alpha(s.opacity as f64);
        ctx.set_shadow_blur(size * 2.0);
        ctx.set_shadow_color(&format!("hsl({:.0}, 100%, 50%)", s.hue));
        ctx.fill();
        ctx.restore();
    }
}
