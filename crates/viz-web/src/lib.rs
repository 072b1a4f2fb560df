#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{ClusterScene, FlowScene, SignalQueue};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod paint;

use constants::{CLUSTER_CANVAS_ID, FLOW_CANVAS_ID};
use frame::{FrameContext, LoopHandle};
use paint::CanvasPainter;

thread_local! {
    static LOOPS: RefCell<Vec<LoopHandle>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop every running visualization loop. Listeners stay attached but their
/// signals are no longer consumed.
#[wasm_bindgen]
pub fn stop_visualizations() {
    LOOPS.with(|loops| {
        for handle in loops.borrow_mut().drain(..) {
            handle.stop();
        }
    });
    log::info!("visualizations stopped");
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each view is optional on a page; a missing canvas just means it isn't mounted.
    match init_cluster(&document) {
        Ok(handle) => register(handle),
        Err(e) => log::info!("[cluster] not started: {e}"),
    }
    match init_flow(&document) {
        Ok(Some(handle)) => register(handle),
        Ok(None) => log::info!("[flow] reduced motion: drew static frame"),
        Err(e) => log::info!("[flow] not started: {e}"),
    }
    Ok(())
}

fn register(handle: LoopHandle) {
    LOOPS.with(|loops| loops.borrow_mut().push(handle));
}

fn init_cluster(document: &web::Document) -> anyhow::Result<LoopHandle> {
    let canvas = dom::canvas_by_id(document, CLUSTER_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);

    let signals = SignalQueue::new();
    let scene = ClusterScene::new(viewport, signals.clone(), rand::random())?;
    log::info!(
        "[cluster] {}x{} dpr={} points={}",
        viewport.css_width,
        viewport.css_height,
        viewport.dpr,
        scene.sim.points().len()
    );

    events::wire_canvas_resize(&canvas, &ctx, &signals);
    events::wire_pointer_drag(&canvas, &signals);
    events::wire_profile_selection(document, &signals);

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(scene, CanvasPainter::new(ctx))));
    Ok(frame::start_loop(frame_ctx))
}

/// Returns `None` when reduced motion is requested: a single still frame is
/// drawn and no loop runs.
fn init_flow(document: &web::Document) -> anyhow::Result<Option<LoopHandle>> {
    let canvas = dom::canvas_by_id(document, FLOW_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);

    let signals = SignalQueue::new();
    let scene = FlowScene::new(viewport, signals.clone(), rand::random());
    let mut painter = CanvasPainter::new(ctx.clone());

    if dom::prefers_reduced_motion() {
        scene.render_static(&mut painter);
        return Ok(None);
    }
    log::info!(
        "[flow] {}x{} dpr={} sources={}",
        viewport.css_width,
        viewport.css_height,
        viewport.dpr,
        scene.sim.sources().len()
    );

    events::wire_canvas_resize(&canvas, &ctx, &signals);

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(scene, painter)));
    Ok(Some(frame::start_loop(frame_ctx)))
}
