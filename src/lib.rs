#![cfg(target_arch = "wasm32")]
//! Animated romantic greeting page: fireworks and a pseudo-3D starfield
//! behind a constellation mini-game that unfolds into an orbiting-memories
//! carousel. Pure simulation logic lives in `core`; everything here is DOM
//! and canvas wiring.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod constellation;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;

use crate::constants::{AUTO_LAUNCH_INTERVAL_MS, FIREWORKS_CANVAS_ID, GALAXY_CANVAS_ID};
use crate::core::{FireworksSim, PhaseSequencer, Starfield, STAR_POINTS};

struct PageHandles {
    loops: Vec<frame::LoopHandle>,
    spawners: Rc<RefCell<frame::Spawners>>,
    frame_spawners: Rc<RefCell<frame::Spawners>>,
}

thread_local! {
    static PAGE: RefCell<Option<PageHandles>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starlit-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Shared fireworks state: the autonomous launcher, background taps and
    // the heart frame all feed the same live sets.
    let sim = Rc::new(RefCell::new(FireworksSim::new()));
    let spawners = Rc::new(RefCell::new(frame::Spawners::default()));
    let frame_spawners = Rc::new(RefCell::new(frame::Spawners::default()));
    let mut loops = Vec::new();
    let mut canvases = Vec::new();

    if let Some(canvas) = wire_fireworks(&document, &sim, &spawners, &mut loops) {
        canvases.push(canvas);
    }
    if let Some(canvas) = wire_starfield(&document, &mut loops) {
        canvases.push(canvas);
    }

    events::wire_background_launch(sim.clone());
    events::wire_heart_trail(&document);
    events::wire_resize(&document, canvases, sim.clone(), frame_spawners.clone());

    overlay::wire_card(&document);
    overlay::wire_memory_close(&document);
    overlay::build_heart_frame(&document, sim.clone(), &frame_spawners);

    let sequencer = Rc::new(RefCell::new(PhaseSequencer::new(STAR_POINTS.len())));
    constellation::init(&document, sequencer);

    PAGE.with(|p| {
        *p.borrow_mut() = Some(PageHandles {
            loops,
            spawners,
            frame_spawners,
        });
    });
    Ok(())
}

/// Fireworks layer: trail-fade frame loop plus the autonomous launcher.
/// A missing canvas disables only this layer.
fn wire_fireworks(
    document: &web::Document,
    sim: &Rc<RefCell<FireworksSim>>,
    spawners: &Rc<RefCell<frame::Spawners>>,
    loops: &mut Vec<frame::LoopHandle>,
) -> Option<web::HtmlCanvasElement> {
    let Some((canvas, ctx)) = dom::canvas_2d(document, FIREWORKS_CANVAS_ID) else {
        log::warn!("#{FIREWORKS_CANVAS_ID} missing; fireworks disabled");
        return None;
    };
    dom::sync_canvas_to_viewport(&canvas);

    let mut fw = frame::FireworksFrame {
        canvas: canvas.clone(),
        ctx,
        sim: sim.clone(),
        rng: SmallRng::from_entropy(),
    };
    loops.push(frame::start_loop(move || fw.frame()));

    let sim_auto = sim.clone();
    let handle = dom::set_interval(AUTO_LAUNCH_INTERVAL_MS, move || {
        let size = dom::viewport_size();
        let mut rng = rand::thread_rng();
        sim_auto.borrow_mut().launch_autonomous(size, &mut rng);
    });
    spawners.borrow_mut().register(handle);
    Some(canvas)
}

/// Starfield layer, on its own independent frame loop.
fn wire_starfield(
    document: &web::Document,
    loops: &mut Vec<frame::LoopHandle>,
) -> Option<web::HtmlCanvasElement> {
    let Some((canvas, ctx)) = dom::canvas_2d(document, GALAXY_CANVAS_ID) else {
        log::warn!("#{GALAXY_CANVAS_ID} missing; starfield disabled");
        return None;
    };
    dom::sync_canvas_to_viewport(&canvas);

    let mut rng = SmallRng::from_entropy();
    let size = glam::Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let field = Starfield::new(crate::core::constants::STAR_COUNT, size, &mut rng);
    let mut sf = frame::StarfieldFrame {
        canvas: canvas.clone(),
        ctx,
        field,
        rng,
    };
    loops.push(frame::start_loop(move || sf.frame()));
    Some(canvas)
}

/// Stop the frame loops and recurring spawners. For embedders that tear the
/// view down; the page itself never calls it.
#[wasm_bindgen]
pub fn shutdown() {
    PAGE.with(|p| {
        if let Some(page) = p.borrow_mut().take() {
            for l in &page.loops {
                l.stop();
            }
            page.spawners.borrow_mut().stop();
            page.frame_spawners.borrow_mut().stop();
        }
    });
}
