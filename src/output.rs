//! PNG persistence for rendered icons.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::IconError;
use crate::render::IconRenderer;

/// The sizes a browser-extension manifest expects: toolbar, extension
/// management page, and store listing.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Output file name for an icon size, e.g. `icon-48.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Renders one icon size and writes it into `dir` under the fixed file
/// name. Returns the path of the written file.
pub fn write_icon(renderer: &IconRenderer, size: u32, dir: &Path) -> Result<PathBuf, IconError> {
    let image = renderer.render(size)?;
    let path = dir.join(icon_file_name(size));
    save_png(&image, &path)?;
    Ok(path)
}

/// Encodes an RGBA image as a PNG at `path`.
///
/// Uses the best available compression with adaptive filtering; output is
/// lossless either way, this only trades encode time for file size.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|source| IconError::Io {
        path: path.to_owned(),
        source,
    })?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| IconError::Encode {
            path: path.to_owned(),
            source,
        })
}
