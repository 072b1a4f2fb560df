pub mod cluster;
pub mod flow;

pub use cluster::*;
pub use flow::*;

use crate::constants::VIGNETTE_RADIUS_DIVISOR;
use crate::paint::{Painter, RadialGradient, Rgba};
use glam::Vec2;

/// Clear the surface and darken its edges with a full-size radial gradient.
pub fn paint_backdrop<P: Painter + ?Sized>(painter: &mut P, size: Vec2, edge_alpha: f32) {
    painter.clear(size);
    let radius = size.x.max(size.y) / VIGNETTE_RADIUS_DIVISOR;
    let vignette = RadialGradient::new(size * 0.5, radius)
        .stop(0.0, Rgba::black(0.0))
        .stop(1.0, Rgba::black(edge_alpha));
    painter.fill_rect_gradient(Vec2::ZERO, size, &vignette);
}
