use crate::constants::{DEPTH_OFFSET, ZOOM};
use glam::{Vec2, Vec3};

/// Screen-space result of projecting one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Perspective factor; larger means nearer to the viewer.
    pub scale: f32,
    /// Depth after rotation.
    pub z: f32,
}

/// Yaw/pitch rotation followed by a simple perspective divide.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub zoom: f32,
    pub depth_offset: f32,
    pub center: Vec2,
}

impl Projector {
    pub fn new(center: Vec2) -> Self {
        Self {
            zoom: ZOOM,
            depth_offset: DEPTH_OFFSET,
            center,
        }
    }

    /// Rotate about the vertical axis by `yaw`, then about the horizontal axis
    /// by `pitch` (using the post-yaw z).
    #[inline]
    pub fn rotate(p: Vec3, yaw: f32, pitch: f32) -> Vec3 {
        let (sin_y, cos_y) = yaw.sin_cos();
        let (sin_x, cos_x) = pitch.sin_cos();
        let x = p.x * cos_y - p.z * sin_y;
        let z = p.x * sin_y + p.z * cos_y;
        let y = p.y * cos_x - z * sin_x;
        let z = p.y * sin_x + z * cos_x;
        Vec3::new(x, y, z)
    }

    #[inline]
    pub fn project(&self, p: Vec3, yaw: f32, pitch: f32) -> Projected {
        let r = Self::rotate(p, yaw, pitch);
        let scale = self.zoom / (self.zoom + r.z + self.depth_offset);
        Projected {
            screen: self.center + Vec2::new(r.x, r.y) * scale,
            scale,
            z: r.z,
        }
    }
}
