//! Crate error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while rendering or persisting icons.
#[derive(Debug, Error)]
pub enum IconError {
    /// The requested icon size cannot be rendered.
    #[error("invalid icon size {0}: must be a nonzero pixel count")]
    InvalidSize(u32),

    /// Creating or writing an output file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// PNG encoding failed.
    #[error("failed to encode PNG for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
