//! Shape descriptors for laying out the icon.
//!
//! Every shape in the icon is a filled circle whose position and radius are
//! derived from fractions of the canvas side, which keeps the composition
//! scale-invariant across render sizes.

/// A filled circle in canvas pixel coordinates.
///
/// Coordinates are `f32` because circle centers land between pixel centers
/// on the supersampled canvas (e.g. the exact middle of an even-sided
/// square).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center x coordinate, in pixels.
    pub cx: f32,
    /// Center y coordinate, in pixels.
    pub cy: f32,
    /// Radius, in pixels.
    pub radius: f32,
}

impl Circle {
    /// Creates a circle from explicit pixel coordinates.
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    /// Places a circle on a square canvas using fractions of the side length.
    ///
    /// `fx` and `fy` position the center, `fr` is the radius; all three are
    /// multiplied by `side`.
    pub fn at_fraction(side: u32, fx: f32, fy: f32, fr: f32) -> Self {
        let side = side as f32;
        Self::new(side * fx, side * fy, side * fr)
    }

    /// The circle inscribed in a square canvas, inset by `padding` pixels
    /// on every edge.
    pub fn inscribed(side: u32, padding: f32) -> Self {
        let side = side as f32;
        Self::new(side / 2.0, side / 2.0, (side - 2.0 * padding) / 2.0)
    }

    /// Returns this circle shifted by `(dx, dy)` pixels.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.cx + dx, self.cy + dy, self.radius)
    }

    /// Returns this circle with its radius multiplied by `factor`.
    pub fn with_radius_scaled(self, factor: f32) -> Self {
        Self::new(self.cx, self.cy, self.radius * factor)
    }

    /// Returns true if the point `(x, y)` lies within the circle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Bounding box of the circle clamped to a `side x side` canvas.
    ///
    /// Returned as `(x0, y0, x1, y1)` with exclusive upper bounds, suitable
    /// for direct use as pixel iteration ranges. Empty ranges are possible
    /// when the circle lies entirely outside the canvas.
    pub fn clamped_bounds(&self, side: u32) -> (u32, u32, u32, u32) {
        let clamp = |v: f32| v.max(0.0).min(side as f32) as u32;
        (
            clamp((self.cx - self.radius).floor()),
            clamp((self.cy - self.radius).floor()),
            clamp((self.cx + self.radius).ceil()),
            clamp((self.cy + self.radius).ceil()),
        )
    }
}
