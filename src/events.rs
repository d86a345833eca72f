use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::FireworksSim;
use crate::frame::Spawners;
use crate::{dom, overlay};

/// True when the event target is background, i.e. not inside any region
/// that swallows taps. The opaque-region list is the explicit hit-test
/// policy; a missing or non-element target counts as background.
fn is_background_target(target: Option<web::EventTarget>) -> bool {
    let Some(target) = target else { return true };
    let Some(el) = target.dyn_ref::<web::Element>() else {
        return true;
    };
    for selector in OPAQUE_REGIONS {
        if matches!(el.closest(selector), Ok(Some(_))) {
            return false;
        }
    }
    true
}

/// Background click or touch launches a heart rocket at the pointer.
pub fn wire_background_launch(sim: Rc<RefCell<FireworksSim>>) {
    let Some(window) = web::window() else { return };

    let sim_click = sim.clone();
    let click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if is_background_target(ev.target()) {
            sim_click
                .borrow_mut()
                .launch_heart(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if is_background_target(ev.target()) {
            if let Some(t) = ev.touches().get(0) {
                sim.borrow_mut()
                    .launch_heart(Vec2::new(t.client_x() as f32, t.client_y() as f32));
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchstart", touch.as_ref().unchecked_ref());
    touch.forget();
}

/// Cursor-trail hearts on pointer movement, throttled to one per 50 ms.
pub fn wire_heart_trail(document: &web::Document) {
    let Some(window) = web::window() else { return };
    let last_emit: Rc<Cell<Option<Instant>>> = Rc::new(Cell::new(None));

    let doc = document.clone();
    let last = last_emit.clone();
    let mouse = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if throttle_elapsed(&last) {
            overlay::spawn_cursor_heart(&doc, ev.client_x() as f32, ev.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", mouse.as_ref().unchecked_ref());
    mouse.forget();

    let doc = document.clone();
    let touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            if throttle_elapsed(&last_emit) {
                overlay::spawn_cursor_heart(&doc, t.client_x() as f32, t.client_y() as f32);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchmove", touch.as_ref().unchecked_ref());
    touch.forget();
}

fn throttle_elapsed(last: &Cell<Option<Instant>>) -> bool {
    let now = Instant::now();
    match last.get() {
        Some(prev) if now.duration_since(prev).as_millis() < HEART_TRAIL_THROTTLE_MS as u128 => {
            false
        }
        _ => {
            last.set(Some(now));
            true
        }
    }
}

/// Keep both canvases at viewport size and rebuild the responsive heart
/// frame when the window resizes. Safe to invoke before first paint.
pub fn wire_resize(
    document: &web::Document,
    canvases: Vec<web::HtmlCanvasElement>,
    sim: Rc<RefCell<FireworksSim>>,
    frame_spawners: Rc<RefCell<Spawners>>,
) {
    let Some(window) = web::window() else { return };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        for canvas in &canvases {
            dom::sync_canvas_to_viewport(canvas);
        }
        overlay::build_heart_frame(&doc, sim.clone(), &frame_spawners);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
