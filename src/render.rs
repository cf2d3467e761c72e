//! The icon renderer: disc composition and downsampling.

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::IconError;
use crate::geometry::Circle;
use crate::theme;

// ============================================================================
// Composition constants
// ============================================================================

/// Supersampling factor: the working canvas is this many times the target
/// size on each side.
const SUPERSAMPLE: u32 = 4;

/// Inset of the backdrop disc from the canvas edges, as a fraction of the
/// canvas side.
const BACKDROP_PADDING: f32 = 0.02;

/// Moon disc radius, as a fraction of the canvas side.
const MOON_RADIUS: f32 = 0.30;

/// Shadow disc radius relative to the moon radius.
const SHADOW_RADIUS_RATIO: f32 = 0.82;

/// Shadow disc offset from the moon center, as fractions of the canvas
/// side. Up and to the right, which leaves the lit sliver at the lower
/// left.
const SHADOW_OFFSET_X: f32 = 0.12;
const SHADOW_OFFSET_Y: f32 = -0.08;

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders the crescent-moon icon at a requested pixel size.
///
/// The renderer is stateless: [`render`](Self::render) is a pure function
/// of the target size and the fixed composition constants, and every call
/// owns its working canvas exclusively. Calls for different sizes are
/// independent and may run in any order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRenderer;

impl IconRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders the icon as a `size x size` RGBA image.
    ///
    /// Composition, at 4x supersampling:
    /// 1. backdrop disc inset 2% from the canvas edges;
    /// 2. moon disc centered at radius 30% of the canvas;
    /// 3. shadow disc (82% of the moon radius, shifted up-right) repainted
    ///    in the backdrop color; the crescent comes from paint order, not
    ///    boolean geometry;
    /// 4. decoration dots, only when the target is at least 48 pixels;
    /// 5. Lanczos downsample to the target size.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidSize`] when `size` is zero or too large
    /// to supersample.
    pub fn render(&self, size: u32) -> Result<RgbaImage, IconError> {
        if size == 0 {
            return Err(IconError::InvalidSize(size));
        }
        let side = size
            .checked_mul(SUPERSAMPLE)
            .ok_or(IconError::InvalidSize(size))?;

        let mut canvas = Canvas::new(side);

        let padding = side as f32 * BACKDROP_PADDING;
        canvas.fill_circle(Circle::inscribed(side, padding), theme::BACKGROUND);

        let moon = Circle::at_fraction(side, 0.5, 0.5, MOON_RADIUS);
        canvas.fill_circle(moon, theme::ACCENT);

        let shadow = moon
            .translated(side as f32 * SHADOW_OFFSET_X, side as f32 * SHADOW_OFFSET_Y)
            .with_radius_scaled(SHADOW_RADIUS_RATIO);
        canvas.fill_circle(shadow, theme::BACKGROUND);

        if size >= theme::DECORATION_MIN_SIZE {
            for dot in &theme::DECORATION_DOTS {
                let circle = Circle::at_fraction(side, dot.x, dot.y, dot.radius);
                canvas.fill_circle(circle, theme::DECORATION);
            }
        }

        Ok(canvas.downsample(size))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DECORATION_DOTS;
    use image::RgbaImage;

    const SIZES: [u32; 3] = [16, 48, 128];

    /// Maximum red channel value within `reach` pixels (Chebyshev) of the
    /// fractional position `(fx, fy)`.
    ///
    /// The red channel separates the decoration gray (139) from everything
    /// else in the icon: backdrop red is 21, accent red is 29, and the
    /// downsample filter cannot blend or overshoot those anywhere near the
    /// decoration value.
    fn max_red_near(img: &RgbaImage, fx: f32, fy: f32, reach: i32) -> u8 {
        let (w, h) = img.dimensions();
        let cx = (fx * w as f32) as i32;
        let cy = (fy * h as f32) as i32;
        let mut max = 0u8;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
                    max = max.max(img.get_pixel(x as u32, y as u32)[0]);
                }
            }
        }
        max
    }

    #[test]
    fn renders_exact_dimensions() {
        let renderer = IconRenderer::new();
        for size in SIZES {
            let img = renderer.render(size).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = IconRenderer::new();
        for size in SIZES {
            let a = renderer.render(size).unwrap();
            let b = renderer.render(size).unwrap();
            assert_eq!(a.as_raw(), b.as_raw(), "size {size} differed between runs");
        }
    }

    #[test]
    fn center_pixel_is_opaque() {
        // The moon and backdrop discs cover the center at every size; the
        // exact color there is a filter blend, but never transparent.
        let renderer = IconRenderer::new();
        for size in SIZES {
            let img = renderer.render(size).unwrap();
            let center = img.get_pixel(size / 2, size / 2);
            assert_eq!(center[3], 255, "center of size {size} must be opaque");
        }
    }

    #[test]
    fn corner_pixels_are_transparent() {
        let renderer = IconRenderer::new();
        for size in SIZES {
            let img = renderer.render(size).unwrap();
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(
                    img.get_pixel(x, y)[3],
                    0,
                    "corner ({x}, {y}) of size {size} must be transparent"
                );
            }
        }
    }

    #[test]
    fn decoration_dots_appear_at_larger_sizes() {
        let renderer = IconRenderer::new();
        for size in [48, 128] {
            let img = renderer.render(size).unwrap();
            for (i, dot) in DECORATION_DOTS.iter().enumerate() {
                let red = max_red_near(&img, dot.x, dot.y, 2);
                assert!(
                    red >= 45,
                    "dot {i} missing at size {size}: max red {red}"
                );
            }
        }
    }

    #[test]
    fn decoration_dots_absent_at_smallest_size() {
        let renderer = IconRenderer::new();
        let img = renderer.render(16).unwrap();
        for (i, dot) in DECORATION_DOTS.iter().enumerate() {
            let red = max_red_near(&img, dot.x, dot.y, 2);
            assert!(
                red <= 40,
                "dot {i} leaked into the 16px icon: max red {red}"
            );
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let renderer = IconRenderer::new();
        assert!(matches!(
            renderer.render(0),
            Err(IconError::InvalidSize(0))
        ));
    }
}
