//! lunette: procedural crescent-moon icon set generator.
//!
//! This crate draws a crescent-moon glyph on a circular backdrop and writes
//! it as PNG files at the three sizes a browser-extension manifest expects
//! (16, 48 and 128 pixels). Rendering is deterministic: all shapes are laid
//! out proportionally on a 4x supersampled canvas and downsampled with a
//! Lanczos filter, so identical input always yields byte-identical output.
//!
//! # Example
//!
//! ```
//! use lunette::IconRenderer;
//!
//! let renderer = IconRenderer::new();
//! let icon = renderer.render(48).unwrap();
//!
//! assert_eq!(icon.dimensions(), (48, 48));
//! ```
//!
//! The binary target wraps [`write_icon`] to produce the full set:
//!
//! ```text
//! $ lunette --out-dir icons
//! wrote 16x16 icon to icons/icon-16.png
//! wrote 48x48 icon to icons/icon-48.png
//! wrote 128x128 icon to icons/icon-128.png
//! ```

mod canvas;
mod error;
mod geometry;
mod output;
mod render;
mod theme;

pub use canvas::Canvas;
pub use error::IconError;
pub use geometry::Circle;
pub use output::{ICON_SIZES, icon_file_name, save_png, write_icon};
pub use render::IconRenderer;
pub use theme::{ACCENT, BACKGROUND, DECORATION};
