//! Raster collaborators: image file decoding and display sinks.
//!
//! Decoding turns any image the `image` crate understands into a
//! [`Raster`](raster_filters::Raster) of known dimensions. Display sinks
//! receive labelled rasters and write them out as PNG files or as one
//! side-by-side contact sheet.

pub mod convert;
pub mod decode;
pub mod sink;

// Re-exports for convenience
pub use convert::{from_rgb_image, to_rgb_image};
pub use decode::{decode, decode_bytes};
pub use sink::{ContactSheet, PngDirectorySink, RasterSink};

use raster_filters::RasterError;

/// Errors that can occur while decoding a source image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: expected {expected_height}x{expected_width}, got {height}x{width}")]
    DimensionMismatch {
        expected_height: usize,
        expected_width: usize,
        height: usize,
        width: usize,
    },

    #[error("Only 3-channel RGB rasters can be decoded, requested {0} channels")]
    UnsupportedChannels(usize),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Errors that can occur while displaying a raster.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Raster {height}x{width} is too large to encode")]
    TooLarge { height: usize, width: usize },

    #[error("Contact sheet of {panels} panels with gap {gap} is too wide to encode")]
    SheetTooWide { panels: usize, gap: u32 },

    #[error("Contact sheet has no panels")]
    Empty,
}
