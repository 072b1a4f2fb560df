use glam::Vec2;
use std::f64::consts::TAU;
use viz_core::{Painter, RadialGradient, Rgba};
use web_sys as web;

/// [`Painter`] backed by a 2D canvas context. Coordinates are CSS pixels;
/// the context transform set by `dom::sync_canvas_backing_size` maps them to
/// the device-pixel backing store.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }

    fn gradient(&self, g: &RadialGradient) -> Option<web::CanvasGradient> {
        let c = g.center;
        let grad = self
            .ctx
            .create_radial_gradient(c.x as f64, c.y as f64, 0.0, c.x as f64, c.y as f64, g.radius.max(0.0) as f64)
            .ok()?;
        for stop in &g.stops {
            _ = grad.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_string());
        }
        Some(grad)
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_rect_gradient(&mut self, origin: Vec2, size: Vec2, gradient: &RadialGradient) {
        if let Some(g) = self.gradient(gradient) {
            self.ctx.set_fill_style_canvas_gradient(&g);
            self.ctx
                .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient) {
        if let Some(g) = self.gradient(gradient) {
            self.circle_path(center, radius);
            self.ctx.set_fill_style_canvas_gradient(&g);
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_round_rect(&mut self, origin: Vec2, size: Vec2, corner: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_string());
        let (x, y, w, h) = (
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
        if self.ctx.round_rect_with_f64(x, y, w, h, corner as f64).is_err() {
            self.ctx.rect(x, y, w, h);
        }
        self.ctx.fill();
    }
}
