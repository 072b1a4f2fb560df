use super::paint_backdrop;
use crate::cluster::ClusterPoint;
use crate::color::{cluster_color, ColorClass};
use crate::constants::*;
use crate::paint::{Painter, RadialGradient, Rgba};
use crate::projection::{Projected, Projector};
use glam::Vec2;

/// A point paired with its projection for the current camera.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedPoint<'a> {
    pub point: &'a ClusterPoint,
    pub projected: Projected,
}

/// Project all points and order them far-to-near (ascending `scale`).
///
/// There is no depth buffer: draw order is the only occlusion.
pub fn depth_sorted<'a>(
    points: &'a [ClusterPoint],
    projector: &Projector,
    yaw: f32,
    pitch: f32,
) -> Vec<ProjectedPoint<'a>> {
    let mut out: Vec<ProjectedPoint<'a>> = points
        .iter()
        .map(|point| ProjectedPoint {
            point,
            projected: projector.project(point.position, yaw, pitch),
        })
        .collect();
    out.sort_by(|a, b| a.projected.scale.total_cmp(&b.projected.scale));
    out
}

/// Link opacity for two screen points `d2` apart (squared), or `None` when
/// they are too far apart to link.
#[inline]
pub fn link_alpha(d2: f32) -> Option<f32> {
    (d2 < LINK_DIST2_MAX).then(|| {
        LINK_ALPHA_BASE + ((LINK_DIST2_MAX - d2) / LINK_DIST2_MAX * LINK_ALPHA_SPAN).min(LINK_ALPHA_SPAN)
    })
}

/// Glow radius and peak alpha for a point at perspective `scale`.
#[inline]
pub fn glow_metrics(size_base: f32, scale: f32) -> (f32, f32) {
    let radius = (size_base * scale * GLOW_RADIUS_PER_SIZE).max(GLOW_MIN_RADIUS);
    (radius, GLOW_ALPHA_PER_SCALE * scale)
}

fn paint_glow<P: Painter + ?Sized>(painter: &mut P, at: Vec2, radius: f32, color: Rgba, alpha: f32) {
    let gradient = RadialGradient::new(at, radius * 3.0)
        .stop(0.0, color.with_alpha(alpha))
        .stop(0.4, color.with_alpha((alpha * 0.35).max(0.06)))
        .stop(1.0, color.with_alpha(0.0));
    painter.fill_circle_gradient(at, radius, &gradient);
}

/// Draw one full cluster frame: backdrop, neighbour links, then glows
/// far-to-near.
pub fn render_cluster<P: Painter + ?Sized>(
    painter: &mut P,
    size: Vec2,
    points: &[ClusterPoint],
    yaw: f32,
    pitch: f32,
) {
    paint_backdrop(painter, size, CLUSTER_VIGNETTE_ALPHA);

    let projector = Projector::new(size * 0.5);
    let sorted = depth_sorted(points, &projector, yaw, pitch);

    // links: bounded window over depth order, not a true nearest-neighbour search
    for (i, a) in sorted.iter().enumerate() {
        for b in sorted.iter().skip(i + 1).take(LINK_WINDOW) {
            let d2 = a.projected.screen.distance_squared(b.projected.screen);
            if let Some(alpha) = link_alpha(d2) {
                painter.stroke_line(
                    a.projected.screen,
                    b.projected.screen,
                    (0.9 * a.projected.scale).max(0.5),
                    Rgba::white(alpha),
                );
            }
        }
    }

    for item in &sorted {
        let pr = item.projected;
        let (radius, alpha) = glow_metrics(item.point.size_base, pr.scale);
        let alpha = match item.point.color_class {
            ColorClass::Accent => alpha * ACCENT_GLOW_DIM,
            ColorClass::Primary => alpha,
        };
        paint_glow(
            painter,
            pr.screen,
            radius,
            cluster_color(item.point.color_class),
            alpha,
        );
        painter.fill_circle(
            pr.screen,
            (radius * CORE_DOT_RATIO).max(CORE_DOT_MIN_RADIUS),
            Rgba::white(0.95),
        );
    }
}
