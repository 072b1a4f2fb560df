use viz_core::{VizError, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::REDUCED_MOTION_QUERY;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> viz_core::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| VizError::MissingSurface(id.to_owned()))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> viz_core::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| VizError::ContextUnavailable(canvas.id()))
}

/// Current CSS size of the canvas and the window's device pixel ratio.
pub fn measure_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    Viewport::new(canvas.client_width() as f32, canvas.client_height() as f32, dpr)
}

/// Match the backing store to CSS size * dpr, pin the CSS size, and reset the
/// context transform so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let viewport = measure_viewport(canvas);
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.css_width));
    _ = style.set_property("height", &format!("{}px", viewport.css_height));
    let [a, b, c, d, e, f] = viewport.transform();
    _ = ctx.set_transform(a, b, c, d, e, f);
    viewport
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}
