use crate::paint::Rgba;
use rand::Rng;

/// Colour family of a point, particle or parcel. Picked once at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorClass {
    #[default]
    Primary,
    Accent,
}

impl ColorClass {
    /// Accent with probability `p`, otherwise Primary.
    #[inline]
    pub fn pick<R: Rng + ?Sized>(rng: &mut R, p: f32) -> Self {
        if rng.gen::<f32>() < p {
            ColorClass::Accent
        } else {
            ColorClass::Primary
        }
    }

    #[inline]
    pub fn is_accent(self) -> bool {
        self == ColorClass::Accent
    }
}

// Palette
pub const CLUSTER_ACCENT: Rgba = Rgba::new(143, 255, 176, 1.0);
pub const FLOW_ACCENT: Rgba = Rgba::new(160, 255, 170, 1.0);
pub const AGGREGATOR_HALO: Rgba = Rgba::new(88, 166, 255, 1.0);
pub const WHITE: Rgba = Rgba::white(1.0);

/// Glow colour of a cluster point.
#[inline]
pub fn cluster_color(class: ColorClass) -> Rgba {
    match class {
        ColorClass::Primary => WHITE,
        ColorClass::Accent => CLUSTER_ACCENT,
    }
}

/// Fill colour of a flow particle or parcel.
#[inline]
pub fn flow_color(class: ColorClass) -> Rgba {
    match class {
        ColorClass::Primary => WHITE,
        ColorClass::Accent => FLOW_ACCENT,
    }
}
