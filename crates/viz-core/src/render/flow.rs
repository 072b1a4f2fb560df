use super::paint_backdrop;
use crate::color::{flow_color, AGGREGATOR_HALO};
use crate::constants::*;
use crate::flow::{FlowSimulator, ParcelState};
use crate::paint::{Painter, RadialGradient, Rgba};
use glam::Vec2;

/// Draw the current flow state. Order matters: later layers sit on top.
pub fn render_flow<P: Painter + ?Sized>(painter: &mut P, sim: &FlowSimulator) {
    let layout = *sim.layout();
    let center = layout.aggregator();
    let dest = layout.destination();

    paint_backdrop(painter, layout.size, FLOW_VIGNETTE_ALPHA);

    for s in sim.sources() {
        painter.fill_circle(s.position, s.radius, Rgba::white(0.08));
    }

    for p in sim.particles() {
        painter.stroke_line(
            p.position - p.velocity * TRAIL_FACTOR,
            p.position,
            1.0,
            Rgba::white(0.04),
        );
        painter.fill_circle(p.position, PARTICLE_HEAD_RADIUS, flow_color(p.color_class));
    }

    let halo = RadialGradient::new(center, HALO_RADIUS)
        .stop(0.0, AGGREGATOR_HALO.with_alpha(0.06))
        .stop(1.0, AGGREGATOR_HALO.with_alpha(0.0));
    painter.fill_circle_gradient(center, HALO_RADIUS, &halo);
    painter.fill_circle(center, CORE_OUTER_RADIUS, Rgba::white(0.04));
    painter.fill_circle(center, CORE_INNER_RADIUS, Rgba::white(0.9));

    for a in sim.parcels() {
        match a.state {
            ParcelState::Forming => {
                let at = a.position();
                let size = a.footprint();
                painter.fill_round_rect(
                    at - size * 0.5,
                    size,
                    PARCEL_CORNER_RADIUS,
                    flow_color(a.color_class).with_alpha(0.95),
                );
                painter.stroke_line(center, at, 1.0, Rgba::white(0.03));
            }
            ParcelState::Settled { rest, .. } => {
                painter.fill_circle(rest, SETTLED_DOT_RADIUS, flow_color(a.color_class));
            }
        }
    }

    painter.fill_circle(dest, DEST_OUTER_RADIUS, Rgba::white(0.06));
    painter.fill_circle(dest, DEST_INNER_RADIUS, Rgba::white(0.9));
    painter.stroke_line(
        Vec2::new(center.x + CORE_OUTER_RADIUS, layout.mid_y),
        Vec2::new(dest.x - CORE_OUTER_RADIUS, layout.mid_y),
        1.0,
        Rgba::white(0.04),
    );
}

/// Single still frame for reduced-motion users: a faint wash and three
/// nodes (source, hub, destination). No simulation state involved.
pub fn render_flow_static<P: Painter + ?Sized>(painter: &mut P, size: Vec2) {
    painter.clear(size);
    painter.fill_rect(Vec2::ZERO, size, Rgba::white(0.02));
    let mid_y = size.y * 0.5;
    let node = Rgba::white(0.07);
    painter.fill_circle(Vec2::new(STATIC_SOURCE_INSET, mid_y), STATIC_SOURCE_RADIUS, node);
    painter.fill_circle(Vec2::new(size.x * 0.5, mid_y), STATIC_HUB_RADIUS, node);
    painter.fill_circle(
        Vec2::new(size.x - STATIC_SOURCE_INSET, mid_y),
        STATIC_DEST_RADIUS,
        node,
    );
}
