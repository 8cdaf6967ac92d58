//! Raster rotation.

use tracing::debug;

use crate::raster::Raster;
use crate::{RasterError, Result};

/// Rotate a square raster 90 degrees clockwise.
///
/// The source pixel at `(row, col)` lands at `(col, width - 1 - row)`.
/// Channels are copied verbatim. Non-square input is rejected with
/// [`RasterError::InvalidDimensions`].
pub fn rotate_right(source: &Raster) -> Result<Raster> {
    let (height, width) = (source.height(), source.width());
    if !source.is_square() {
        debug!(height, width, "Refusing to rotate non-square raster");
        return Err(RasterError::InvalidDimensions { height, width });
    }
    debug!(height, width, "Rotating raster 90 degrees clockwise");

    let mut output = Raster::new(source.dimensions());
    for row in 0..height {
        for col in 0..width {
            output
                .pixel_mut(col, width - 1 - row)
                .copy_from_slice(source.pixel(row, col));
        }
    }
    Ok(output)
}
