//! Per-engine simulation contexts.
//!
//! Each scene owns all mutable state for one visualization and is stepped
//! explicitly, one frame at a time. Signals pushed between frames are applied
//! at the start of the next one.

use crate::camera::CameraController;
use crate::clock::FrameTime;
use crate::cluster::{ClusterParams, ClusterSimulator};
use crate::error::{Result, VizError};
use crate::flow::{FlowEvent, FlowParams, FlowSimulator};
use crate::paint::Painter;
use crate::profile::ProfileRegistry;
use crate::render::{render_cluster, render_flow, render_flow_static};
use crate::signal::{Signal, SignalQueue};
use crate::viewport::Viewport;

/// Anything the frame loop can drive.
pub trait Scene {
    fn frame(&mut self, time: FrameTime, painter: &mut dyn Painter);
}

pub struct ClusterScene {
    pub sim: ClusterSimulator,
    pub camera: CameraController,
    viewport: Viewport,
    signals: SignalQueue,
}

impl ClusterScene {
    pub fn new(viewport: Viewport, signals: SignalQueue, seed: u64) -> Result<Self> {
        let sim = ClusterSimulator::new(ClusterParams::default(), ProfileRegistry::default(), seed)?;
        Ok(Self {
            sim,
            camera: CameraController::default(),
            viewport,
            signals,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn signals(&self) -> &SignalQueue {
        &self.signals
    }

    pub fn handle(&mut self, signal: Signal) {
        match signal {
            Signal::SelectProfile(key) => match self.sim.switch_profile(&key) {
                Ok(()) => {}
                Err(VizError::UnknownProfile(k)) => {
                    log::debug!("[signal] ignoring unknown profile {:?}", k);
                }
                Err(e) => log::warn!("[signal] profile switch failed: {}", e),
            },
            Signal::Resize(viewport) => {
                self.viewport = viewport;
                self.sim.reset();
            }
            Signal::PointerDown(at) => self.camera.press(at),
            Signal::PointerMove(at) => self.camera.drag_to(at),
            Signal::PointerUp => self.camera.release(),
        }
    }

    fn drain_signals(&mut self) {
        for signal in self.signals.drain() {
            self.handle(signal);
        }
    }
}

impl Scene for ClusterScene {
    fn frame(&mut self, time: FrameTime, painter: &mut dyn Painter) {
        self.drain_signals();
        self.camera.idle();
        self.sim.tick(time.now_ms);
        render_cluster(
            painter,
            self.viewport.size(),
            self.sim.points(),
            self.camera.yaw,
            self.camera.pitch,
        );
    }
}

pub struct FlowScene {
    pub sim: FlowSimulator,
    viewport: Viewport,
    signals: SignalQueue,
    events: Vec<FlowEvent>,
}

impl FlowScene {
    pub fn new(viewport: Viewport, signals: SignalQueue, seed: u64) -> Self {
        Self {
            sim: FlowSimulator::new(FlowParams::default(), viewport.size(), seed),
            viewport,
            signals,
            events: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn signals(&self) -> &SignalQueue {
        &self.signals
    }

    /// Lifecycle events produced by the most recent frame.
    pub fn last_events(&self) -> &[FlowEvent] {
        &self.events
    }

    pub fn handle(&mut self, signal: Signal) {
        // The flow view has no camera or datasets; only size changes matter.
        if let Signal::Resize(viewport) = signal {
            self.viewport = viewport;
            self.sim.relayout(viewport.size());
        }
    }

    /// Reduced-motion rendering: one still frame, no simulation.
    pub fn render_static(&self, painter: &mut dyn Painter) {
        render_flow_static(painter, self.viewport.size());
    }

    fn drain_signals(&mut self) {
        for signal in self.signals.drain() {
            self.handle(signal);
        }
    }
}

impl Scene for FlowScene {
    fn frame(&mut self, time: FrameTime, painter: &mut dyn Painter) {
        self.drain_signals();
        self.events.clear();
        self.sim.tick(time.dt_sec, &mut self.events);
        if !self.events.is_empty() {
            log::trace!(
                "[flow] {} events, particles={} parcels={}",
                self.events.len(),
                self.sim.particles().len(),
                self.sim.parcels().len()
            );
        }
        render_flow(painter, &self.sim);
    }
}
