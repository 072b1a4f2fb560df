use glam::Vec2;

/// Logical (CSS pixel) size of a drawing surface plus its device pixel ratio.
///
/// The backing store is `floor(css * dpr)` and drawing happens in CSS pixels
/// through a uniform `dpr` scale, which keeps lines crisp on high-density
/// screens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            css_width: 0.0,
            css_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl Viewport {
    /// `dpr` below 1 (or non-finite) is treated as 1.
    pub fn new(css_width: f32, css_height: f32, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            dpr,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.css_width, self.css_height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Pixel buffer size for the canvas element.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.css_width as f64 * self.dpr).floor() as u32,
            (self.css_height as f64 * self.dpr).floor() as u32,
        )
    }

    /// `setTransform(a, b, c, d, e, f)` arguments mapping CSS pixels to backing pixels.
    pub fn transform(&self) -> [f64; 6] {
        [self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0]
    }

    pub fn is_empty(&self) -> bool {
        self.css_width <= 0.0 || self.css_height <= 0.0
    }
}
