use glam::Vec2;
use viz_core::Signal;

/// Pointer event types bound on each interactive canvas.
pub const POINTER_EVENT_TYPES: [&str; 5] = [
    "pointerdown",
    "pointermove",
    "pointerup",
    "pointercancel",
    "pointerleave",
];

/// Client coordinates relative to the canvas' top-left corner (CSS pixels).
#[inline]
pub fn local_point(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

/// Map a DOM pointer event type onto the three-phase drag contract.
#[inline]
pub fn pointer_signal(event_type: &str, at: Vec2) -> Option<Signal> {
    match event_type {
        "pointerdown" => Some(Signal::PointerDown(at)),
        "pointermove" => Some(Signal::PointerMove(at)),
        "pointerup" | "pointercancel" | "pointerleave" => Some(Signal::PointerUp),
        _ => None,
    }
}

/// Profile key as carried by a selection event or tab attribute.
/// Blank keys are treated as absent.
#[inline]
pub fn profile_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_owned()).filter(|k| !k.is_empty())
}

/// Whether a pointer event type ends the drag and should drop capture.
#[inline]
pub fn releases_capture(event_type: &str) -> bool {
    matches!(event_type, "pointerup" | "pointercancel" | "pointerleave")
}
