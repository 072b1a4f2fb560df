use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viz_core::{CancelToken, FrameClock, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::paint::CanvasPainter;

/// One visualization bound to its canvas.
pub struct FrameContext<S: Scene> {
    pub scene: S,
    pub painter: CanvasPainter,
    clock: FrameClock,
    origin: Instant,
}

impl<S: Scene> FrameContext<S> {
    pub fn new(scene: S, painter: CanvasPainter) -> Self {
        Self {
            scene,
            painter,
            clock: FrameClock::new(),
            origin: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now_ms = self.origin.elapsed().as_secs_f64() * 1000.0;
        let time = self.clock.advance(now_ms);
        self.scene.frame(time, &mut self.painter);
    }
}

/// Owner-side control for a running loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    token: CancelToken,
}

impl LoopHandle {
    /// No further frames are requested after the one in flight.
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

pub fn start_loop<S: Scene + 'static>(frame_ctx: Rc<RefCell<FrameContext<S>>>) -> LoopHandle {
    let token = CancelToken::new();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let token_tick = token.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if token_tick.is_cancelled() {
            // Break the closure's self-reference so it can be dropped.
            tick_clone.borrow_mut().take();
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    LoopHandle { token }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
