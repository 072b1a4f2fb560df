use crate::constants::*;
use glam::Vec2;

/// Orbit angles driven by pointer drags plus a constant idle spin.
#[derive(Clone, Copy, Debug)]
pub struct CameraController {
    pub yaw: f32,
    pub pitch: f32,
    pub yaw_sensitivity: f32,
    pub pitch_sensitivity: f32,
    pub idle_step: f32,
    last: Option<Vec2>,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
            yaw_sensitivity: YAW_SENSITIVITY,
            pitch_sensitivity: PITCH_SENSITIVITY,
            idle_step: IDLE_YAW_STEP,
            last: None,
        }
    }
}

impl CameraController {
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    pub fn press(&mut self, at: Vec2) {
        self.last = Some(at);
    }

    /// Apply the delta since the last sample. Ignored unless pressed.
    pub fn drag_to(&mut self, at: Vec2) {
        if let Some(last) = self.last {
            let d = at - last;
            self.yaw += d.x * self.yaw_sensitivity;
            self.pitch += d.y * self.pitch_sensitivity;
            self.last = Some(at);
        }
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    /// Per-frame idle rotation; accumulates with drag input.
    #[inline]
    pub fn idle(&mut self) {
        self.yaw += self.idle_step;
    }
}
