use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels; zero before the window is available.
pub fn viewport_size() -> glam::Vec2 {
    let Some(window) = web::window() else {
        return glam::Vec2::ZERO;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    glam::Vec2::new(width as f32, height as f32)
}

/// Match the canvas backing store to the viewport. Safe before first paint.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let size = viewport_size();
    canvas.set_width(size.x.max(1.0) as u32);
    canvas.set_height(size.y.max(1.0) as u32);
}

/// Canvas element plus its 2D context; None disables the calling layer.
pub fn canvas_2d(
    document: &web::Document,
    id: &str,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}

pub fn create_div(document: &web::Document, class_name: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class_name);
    el.dyn_into::<web::HtmlElement>().ok()
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Recurring timer. Returns the interval handle for teardown; None when the
/// window is unavailable.
pub fn set_interval(ms: i32, handler: impl FnMut() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    closure.forget();
    Some(handle)
}

/// One-shot fire-and-forget timer.
pub fn set_timeout(ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else { return };
    let closure = Closure::once(handler);
    _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms);
    closure.forget();
}

/// Run `handler` on the next animation frame (used for two-step CSS
/// transitions that must start from the just-applied state).
pub fn request_animation_frame_once(handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else { return };
    let closure = Closure::once(handler);
    _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
