//! Minimal 2D painting surface used by the renderers.
//!
//! Renderers never talk to a browser canvas directly; they emit primitives
//! through [`Painter`]. The web frontend implements it on top of
//! `CanvasRenderingContext2d`, and [`CommandList`] records the calls so the
//! draw order can be inspected on the host.

use glam::Vec2;
use smallvec::SmallVec;
use std::fmt;

/// Straight (non-premultiplied) RGBA colour with 8-bit channels and float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn white(a: f32) -> Self {
        Self::new(255, 255, 255, a)
    }

    pub const fn black(a: f32) -> Self {
        Self::new(0, 0, 0, a)
    }

    /// Same colour with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    /// CSS `rgba()` notation, accepted by canvas fill/stroke styles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Radial gradient from a zero-radius centre out to `radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: SmallVec<[ColorStop; 3]>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// Drawing primitives needed by the cluster and flow renderers.
pub trait Painter {
    /// Clear the whole logical surface to transparent.
    fn clear(&mut self, size: Vec2);
    /// Fill an axis-aligned rectangle with a solid colour.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    /// Fill an axis-aligned rectangle with a radial gradient.
    fn fill_rect_gradient(&mut self, origin: Vec2, size: Vec2, gradient: &RadialGradient);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Fill a circle whose paint is a radial gradient (glows and halos).
    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_round_rect(&mut self, origin: Vec2, size: Vec2, corner: f32, color: Rgba);
}

/// One recorded painter call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    RectGradient {
        origin: Vec2,
        size: Vec2,
        gradient: RadialGradient,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    CircleGradient {
        center: Vec2,
        radius: f32,
        gradient: RadialGradient,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    RoundRect {
        origin: Vec2,
        size: Vec2,
        corner: f32,
        color: Rgba,
    },
}

/// Display-list painter that just records what was drawn.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Painter for CommandList {
    fn clear(&mut self, size: Vec2) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_rect_gradient(&mut self, origin: Vec2, size: Vec2, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::RectGradient {
            origin,
            size,
            gradient: gradient.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient) {
        self.commands.push(DrawCommand::CircleGradient {
            center,
            radius,
            gradient: gradient.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_round_rect(&mut self, origin: Vec2, size: Vec2, corner: f32, color: Rgba) {
        self.commands.push(DrawCommand::RoundRect {
            origin,
            size,
            corner,
            color,
        });
    }
}
