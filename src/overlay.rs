use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::constants::HEART_PARTICLE_COUNT;
use crate::core::{heart_burst, heart_curve_point, FireworksSim};
use crate::dom;
use crate::frame::Spawners;

/// Transient heart sprite at the pointer; removes itself after its
/// animation lifetime.
pub fn spawn_cursor_heart(document: &web::Document, x: f32, y: f32) {
    let Some(body) = document.body() else { return };
    let Some(heart) = dom::create_div(document, "heart-cursor") else {
        return;
    };
    heart.set_inner_html("\u{2764}\u{FE0F}");
    let mut rng = rand::thread_rng();
    let scale = 0.8 + rng.gen::<f32>() * 0.5;
    let rot = rng.gen::<f32>() * 40.0 - 20.0;
    let style = heart.style();
    _ = style.set_property("left", &format!("{x:.0}px"));
    _ = style.set_property("top", &format!("{y:.0}px"));
    _ = style.set_property(
        "transform",
        &format!("translate(-50%, -50%) scale({scale:.2}) rotate({rot:.0}deg)"),
    );
    if body.append_child(&heart).is_ok() {
        let el = heart.clone();
        dom::set_timeout(HEART_CURSOR_LIFETIME_MS, move || el.remove());
    }
}

pub fn show_memory(document: &web::Document, memory: &Memory) {
    if let Some(title) = document.get_element_by_id(MEMORY_TITLE_ID) {
        title.set_text_content(Some(memory.title));
    }
    if let Some(text) = document.get_element_by_id(MEMORY_TEXT_ID) {
        text.set_text_content(Some(memory.detail));
    }
    if let Ok(Some(panel)) = document.query_selector(MEMORY_PANEL_SELECTOR) {
        _ = panel.class_list().remove_1("hidden");
    }
}

pub fn wire_memory_close(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, MEMORY_CLOSE_ID, move || {
        if let Ok(Some(panel)) = doc.query_selector(MEMORY_PANEL_SELECTOR) {
            _ = panel.class_list().add_1("hidden");
        }
    });
}

/// Greeting card open/close. Both buttons are optional; missing elements
/// leave the card feature off without touching siblings.
pub fn wire_card(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, CARD_OPEN_ID, move || {
        let Some(card) = element_by_id(&doc, CARD_ID) else {
            return;
        };
        _ = card.style().set_property("display", "block");
        let card_reveal = card.clone();
        // Two-step reveal so the CSS transition runs from the hidden state.
        dom::request_animation_frame_once(move || {
            _ = card_reveal.class_list().remove_1("hidden");
        });
        if let Some(btn) = element_by_id(&doc, CARD_OPEN_ID) {
            _ = btn.style().set_property("display", "none");
        }
    });

    let doc = document.clone();
    dom::add_click_listener(document, CARD_CLOSE_ID, move || {
        let Some(card) = element_by_id(&doc, CARD_ID) else {
            return;
        };
        _ = card.class_list().add_1("hidden");
        let doc_restore = doc.clone();
        dom::set_timeout(CARD_HIDE_DELAY_MS, move || {
            if let Some(card) = element_by_id(&doc_restore, CARD_ID) {
                _ = card.style().set_property("display", "none");
            }
            if let Some(btn) = element_by_id(&doc_restore, CARD_OPEN_ID) {
                _ = btn.style().set_property("display", "block");
            }
        });
    });
}

fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

/// Rebuild the heart-contour frame of emoji sprites around screen center.
/// Clears the previous build's sprites and ambient timers first, so resize
/// does not accumulate intervals firing on detached elements.
pub fn build_heart_frame(
    document: &web::Document,
    sim: Rc<RefCell<FireworksSim>>,
    frame_spawners: &Rc<RefCell<Spawners>>,
) {
    frame_spawners.borrow_mut().stop();
    if let Some(old) = document.get_element_by_id(HEART_FRAME_ID) {
        old.remove();
    }
    let Some(body) = document.body() else { return };
    let Some(container) = dom::create_div(document, "") else {
        return;
    };
    container.set_id(HEART_FRAME_ID);
    let style = container.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("top", "50%");
    _ = style.set_property("left", "50%");
    _ = style.set_property("transform", "translate(-50%, -50%)");
    _ = style.set_property("width", "0");
    _ = style.set_property("height", "0");
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("z-index", "5");

    let size = dom::viewport_size();
    let mobile = size.x < HEART_FRAME_MOBILE_MAX_WIDTH;
    let scale = if mobile {
        HEART_FRAME_SCALE_MOBILE
    } else {
        HEART_FRAME_SCALE_DESKTOP
    };
    let count = if mobile {
        HEART_FRAME_COUNT_MOBILE
    } else {
        HEART_FRAME_COUNT_DESKTOP
    };

    let mut rng = rand::thread_rng();
    for i in 0..count {
        let t = std::f32::consts::TAU * i as f32 / count as f32;
        let p = heart_curve_point(t) + Vec2::new(0.0, HEART_FRAME_Y_SHIFT);
        let Some(el) = dom::create_div(document, "heart-border-particle") else {
            continue;
        };
        el.set_inner_html("\u{2764}\u{FE0F}");
        let rot = rng.gen::<f32>() * 20.0 - 10.0;
        let st = el.style();
        _ = st.set_property("left", &format!("{:.1}px", p.x * scale));
        _ = st.set_property("top", &format!("{:.1}px", p.y * scale));
        _ = st.set_property(
            "transform",
            &format!("translate(-50%, -50%) rotate({rot:.0}deg)"),
        );
        _ = st.set_property("pointer-events", "auto");

        // Ambient emitter: occasional heart burst from this sprite.
        let sim_tick = sim.clone();
        let el_tick = el.clone();
        let period = AMBIENT_EMIT_BASE_MS + rng.gen_range(0..AMBIENT_EMIT_JITTER_MS);
        let handle = dom::set_interval(period, move || {
            if rand::thread_rng().gen_bool(AMBIENT_EMIT_CHANCE) {
                let rect = el_tick.get_bounding_client_rect();
                if rect.width() > 0.0 {
                    let origin = Vec2::new(
                        (rect.left() + rect.width() / 2.0) as f32,
                        (rect.top() + rect.height() / 2.0) as f32,
                    );
                    heart_burst(
                        origin,
                        AMBIENT_HEART_COLOR,
                        HEART_PARTICLE_COUNT,
                        &mut sim_tick.borrow_mut().particles,
                    );
                }
            }
        });
        frame_spawners.borrow_mut().register(handle);

        // Tapping a sprite bursts at the pointer. The sprite is an opaque
        // region for the background handler, so stop propagation and emit
        // here.
        let sim_click = sim.clone();
        let click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.stop_propagation();
            let origin = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            heart_burst(
                origin,
                crate::core::constants::HEART_COLOR,
                HEART_PARTICLE_COUNT,
                &mut sim_click.borrow_mut().particles,
            );
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();

        let sim_touch = sim.clone();
        let touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.stop_propagation();
            if let Some(t) = ev.touches().get(0) {
                let origin = Vec2::new(t.client_x() as f32, t.client_y() as f32);
                heart_burst(
                    origin,
                    crate::core::constants::HEART_COLOR,
                    HEART_PARTICLE_COUNT,
                    &mut sim_touch.borrow_mut().particles,
                );
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("touchstart", touch.as_ref().unchecked_ref());
        touch.forget();

        _ = container.append_child(&el);
    }
    _ = body.append_child(&container);
}

/// Build the orbiting memory carousel. Invoked exactly once, from the phase
/// transition.
pub fn init_orbit(document: &web::Document) {
    let Ok(Some(system)) = document.query_selector(ORBIT_SYSTEM_SELECTOR) else {
        log::warn!("orbit system container missing; carousel disabled");
        return;
    };
    system.set_inner_html("");
    ensure_orbit_keyframes(document);

    for (i, memory) in MEMORIES.iter().enumerate() {
        let Some(wrapper) = dom::create_div(document, "") else {
            continue;
        };
        let period = ORBIT_BASE_PERIOD_S + ORBIT_PERIOD_STEP_S * i as f32;
        let ws = wrapper.style();
        _ = ws.set_property("position", "absolute");
        _ = ws.set_property("top", "50%");
        _ = ws.set_property("left", "50%");
        _ = ws.set_property("width", "0");
        _ = ws.set_property("height", "0");
        _ = ws.set_property("animation", &format!("spin-orbit {period}s linear infinite"));

        let Some(item) = dom::create_div(document, "orbital-item") else {
            continue;
        };
        item.set_text_content(Some(memory.icon));
        _ = item
            .style()
            .set_property("transform", &format!("translateX({ORBIT_RADIUS_PX}px)"));

        // Hovering pauses this item's orbit and opens its memory.
        let doc = document.clone();
        let wrapper_enter = wrapper.clone();
        let enter = Closure::wrap(Box::new(move || {
            _ = wrapper_enter
                .style()
                .set_property("animation-play-state", "paused");
            show_memory(&doc, memory);
        }) as Box<dyn FnMut()>);
        _ = item.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let wrapper_leave = wrapper.clone();
        let leave = Closure::wrap(Box::new(move || {
            _ = wrapper_leave
                .style()
                .set_property("animation-play-state", "running");
        }) as Box<dyn FnMut()>);
        _ = item.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();

        _ = wrapper.append_child(&item);
        _ = system.append_child(&wrapper);
    }
}

fn ensure_orbit_keyframes(document: &web::Document) {
    if document.get_element_by_id(ORBIT_KEYFRAMES_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else { return };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(ORBIT_KEYFRAMES_ID);
    style.set_text_content(Some(
        "@keyframes spin-orbit { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }",
    ));
    _ = head.append_child(&style);
}
