//! Fixed palette and decoration layout for the crescent icon.
//!
//! The background color doubles as the "dim" brand color, so the icon is a
//! small preview of the extension's effect. None of these values are meant
//! to be configurable.

use image::Rgba;

/// Backdrop disc color, #15202B. Also paints the crescent cutout.
pub const BACKGROUND: Rgba<u8> = Rgba([21, 32, 43, 255]);

/// Moon disc color, #1D9BF0.
pub const ACCENT: Rgba<u8> = Rgba([29, 155, 240, 255]);

/// Decoration dot color, #8B98A5 at alpha 200.
pub const DECORATION: Rgba<u8> = Rgba([139, 152, 165, 200]);

/// Smallest target size at which decoration dots are drawn.
///
/// Below this they would collapse into sub-pixel noise, so the 16px icon
/// carries only the crescent.
pub const DECORATION_MIN_SIZE: u32 = 48;

/// Position and radius of one decoration dot, as fractions of the canvas
/// side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSpec {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// The three star-like dots in the moon's shadowed upper-right quadrant.
pub const DECORATION_DOTS: [DotSpec; 3] = [
    DotSpec { x: 0.72, y: 0.28, radius: 0.015 },
    DotSpec { x: 0.78, y: 0.45, radius: 0.010 },
    DotSpec { x: 0.60, y: 0.22, radius: 0.008 },
];
