use viz_core::SignalQueue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;

/// Forward press/drag/release on the canvas as camera signals.
pub fn wire_pointer_drag(canvas: &web::HtmlCanvasElement, signals: &SignalQueue) {
    for event_type in input::POINTER_EVENT_TYPES {
        let signals = signals.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = target.get_bounding_client_rect();
            let at = input::local_point(
                ev.client_x() as f32,
                ev.client_y() as f32,
                rect.left() as f32,
                rect.top() as f32,
            );
            let kind = ev.type_();
            if kind == "pointerdown" {
                _ = target.set_pointer_capture(ev.pointer_id());
            } else if input::releases_capture(&kind) {
                // Capture may already be gone (pointerleave after pointerup).
                _ = target.release_pointer_capture(ev.pointer_id());
            }
            if let Some(signal) = input::pointer_signal(&kind, at) {
                signals.push(signal);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
