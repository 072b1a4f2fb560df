pub mod pointer;
pub mod selection;

pub use pointer::wire_pointer_drag;
pub use selection::wire_profile_selection;

use viz_core::{Signal, SignalQueue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Keep the canvas backing store in step with the window and tell the scene.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    signals: &SignalQueue,
) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let signals = signals.clone();
    let closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);
        signals.push(Signal::Resize(viewport));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
