//! Source image decoding.

use std::path::Path;

use raster_filters::{Dimensions, NUM_CHANNELS, Raster};
use tracing::{debug, info};

use crate::DecodeError;
use crate::convert::from_rgb_image;

/// Read an image file into a raster of exactly `dims`.
///
/// The format is detected from the file contents; BMP and PNG both work.
/// The image is converted to 8-bit RGB before the size check.
pub fn decode(path: impl AsRef<Path>, dims: Dimensions) -> Result<Raster, DecodeError> {
    let path = path.as_ref();
    info!("Decoding source image from {}", path.display());
    let bytes = std::fs::read(path)?;
    decode_bytes(&bytes, dims)
}

/// Decode an in-memory image into a raster of exactly `dims`.
pub fn decode_bytes(bytes: &[u8], dims: Dimensions) -> Result<Raster, DecodeError> {
    if dims.channels() != NUM_CHANNELS {
        return Err(DecodeError::UnsupportedChannels(dims.channels()));
    }

    let img = image::load_from_memory(bytes)?.to_rgb8();
    let (height, width) = (img.height() as usize, img.width() as usize);
    debug!(height, width, len = bytes.len(), "Decoded image");

    if height != dims.height() || width != dims.width() {
        return Err(DecodeError::DimensionMismatch {
            expected_height: dims.height(),
            expected_width: dims.width(),
            height,
            width,
        });
    }

    Ok(from_rgb_image(&img)?)
}
