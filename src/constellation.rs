use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{ClickOutcome, PhaseSequencer, STAR_POINTS};
use crate::{dom, overlay};

/// Build the clickable constellation and wire it into the phase sequencer.
/// Missing area element disables the intro game only.
pub fn init(document: &web::Document, sequencer: Rc<RefCell<PhaseSequencer>>) {
    let Some(area) = document.get_element_by_id(CONSTELLATION_AREA_ID) else {
        log::warn!("#{CONSTELLATION_AREA_ID} missing; constellation disabled");
        return;
    };
    area.set_inner_html("");

    let mut built = Vec::new();
    for point in STAR_POINTS.iter() {
        let Some(node) = dom::create_div(document, "constellation-star") else {
            continue;
        };
        _ = node.style().set_property("left", &format!("{}%", point.x));
        _ = node.style().set_property("top", &format!("{}%", point.y));
        _ = area.append_child(&node);
        built.push(node);
    }
    let nodes = Rc::new(built);

    for (index, node) in nodes.iter().enumerate() {
        let doc = document.clone();
        let seq = sequencer.clone();
        let nodes_for_click = nodes.clone();
        let click = Closure::wrap(Box::new(move || {
            on_node_click(&doc, &seq, &nodes_for_click, index);
        }) as Box<dyn FnMut()>);
        _ = node.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}

fn on_node_click(
    document: &web::Document,
    sequencer: &Rc<RefCell<PhaseSequencer>>,
    nodes: &Rc<Vec<web::HtmlElement>>,
    index: usize,
) {
    let outcome = sequencer.borrow_mut().handle_click(index);
    let ClickOutcome::Connected {
        from,
        to,
        completed,
    } = outcome
    else {
        return;
    };
    if let Some(node) = nodes.get(to) {
        _ = node.class_list().add_1("connected");
    }
    if let (Some(from), Some(area)) = (from, document.get_element_by_id(CONSTELLATION_AREA_ID)) {
        if let (Some(a), Some(b)) = (nodes.get(from), nodes.get(to)) {
            draw_connecting_line(document, &area, a, b);
        }
    }
    if completed {
        let doc = document.clone();
        let seq = sequencer.clone();
        dom::set_timeout(TRANSITION_DELAY_MS, move || trigger_big_bang(&doc, &seq));
    }
}

/// Div "line" from a's center to b's center, width animated 0 -> length on
/// the next frame so the CSS transition runs.
fn draw_connecting_line(
    document: &web::Document,
    area: &web::Element,
    a: &web::HtmlElement,
    b: &web::HtmlElement,
) {
    let center = |el: &web::HtmlElement| {
        Vec2::new(
            (el.offset_left() + el.offset_width() / 2) as f32,
            (el.offset_top() + el.offset_height() / 2) as f32,
        )
    };
    let p1 = center(a);
    let p2 = center(b);
    let length = (p2 - p1).length();
    let angle = (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees();

    let Some(line) = dom::create_div(document, "star-line") else {
        return;
    };
    let style = line.style();
    _ = style.set_property("width", "0px");
    _ = style.set_property("left", &format!("{:.1}px", p1.x));
    _ = style.set_property("top", &format!("{:.1}px", p1.y));
    _ = style.set_property("transform", &format!("rotate({angle:.2}deg)"));
    if area.append_child(&line).is_ok() {
        dom::request_animation_frame_once(move || {
            _ = line.style().set_property("width", &format!("{length:.1}px"));
        });
    }
}

/// One-shot scale+fade on the intro container, then swap to the orbit view
/// and set up the carousel exactly once.
fn trigger_big_bang(document: &web::Document, sequencer: &Rc<RefCell<PhaseSequencer>>) {
    if !sequencer.borrow_mut().begin_transition() {
        return;
    }
    if let Some(intro) = document
        .get_element_by_id(INTRO_CONTAINER_ID)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    {
        let style = intro.style();
        _ = style.set_property("transition", "opacity 0.5s, transform 0.5s");
        _ = style.set_property("transform", "scale(2)");
        _ = style.set_property("opacity", "0");
    }
    let doc = document.clone();
    let seq = sequencer.clone();
    dom::set_timeout(TRANSITION_DURATION_MS, move || {
        if !seq.borrow_mut().enter_orbit() {
            return;
        }
        if let Some(intro) = doc.get_element_by_id(INTRO_CONTAINER_ID) {
            let cl = intro.class_list();
            _ = cl.remove_1("active");
            _ = cl.add_1("hidden");
        }
        let Some(orbit) = doc.get_element_by_id(ORBIT_CONTAINER_ID) else {
            log::warn!("#{ORBIT_CONTAINER_ID} missing; staying on intro");
            return;
        };
        _ = orbit.class_list().remove_1("hidden");
        let doc_orbit = doc.clone();
        dom::request_animation_frame_once(move || {
            _ = orbit.class_list().add_1("active");
            overlay::init_orbit(&doc_orbit);
        });
    });
}
