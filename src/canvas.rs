//! Supersampled working canvas.
//!
//! A [`Canvas`] is the mutable RGBA grid one render call paints into. It is
//! allocated at a multiple of the target size, filled with hard-edged
//! circles, and consumed by [`Canvas::downsample`], which produces the
//! final anti-aliased image.

use image::{Rgba, RgbaImage, imageops};

use crate::geometry::Circle;

/// A square RGBA canvas with paint-order circle filling.
pub struct Canvas {
    image: RgbaImage,
    side: u32,
}

impl Canvas {
    /// Allocates a fully transparent `side x side` canvas.
    pub fn new(side: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0])),
            side,
        }
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Read access to the underlying image.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Fills a circle with `color`, replacing the pixels it covers.
    ///
    /// This is not alpha compositing: the fill RGBA lands on
    /// the canvas verbatim and the last draw wins. The crescent relies on
    /// this to carve the moon by repainting the background color, and the
    /// semi-transparent decoration dots keep their alpha until the
    /// downsample blends them.
    ///
    /// A pixel is covered when its center lies within the circle.
    pub fn fill_circle(&mut self, circle: Circle, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = circle.clamped_bounds(self.side);
        for y in y0..y1 {
            for x in x0..x1 {
                if circle.contains(x as f32 + 0.5, y as f32 + 0.5) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Consumes the canvas and resizes it to `target x target` pixels with
    /// Lanczos resampling.
    ///
    /// Lanczos (not nearest-neighbor) is what turns the supersampling into
    /// anti-aliasing; a naive filter would reintroduce the jagged edges the
    /// oversized canvas exists to remove.
    pub fn downsample(self, target: u32) -> RgbaImage {
        imageops::resize(&self.image, target, target, imageops::FilterType::Lanczos3)
    }
}
