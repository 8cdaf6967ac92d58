//! Rasters synthesized from scratch: solid aqua and a vertical gradient.

use tracing::{debug, warn};

use crate::raster::{Dimensions, Raster};
use crate::{BLUE, GREEN};

/// Tallest raster whose gradient stays within 0-254 without wrapping.
pub const GRADIENT_MAX_HEIGHT: usize = 128;

/// Make a default-sized raster filled with pure aqua (0, 128, 255).
pub fn make_aqua() -> Raster {
    make_aqua_with(Dimensions::default())
}

/// Make an aqua raster of the given dimensions.
///
/// Red and any channels past blue stay at zero.
pub fn make_aqua_with(dims: Dimensions) -> Raster {
    debug!(
        height = dims.height(),
        width = dims.width(),
        "Synthesizing aqua raster"
    );

    let mut raster = Raster::new(dims);
    for row in 0..dims.height() {
        for col in 0..dims.width() {
            let pixel = raster.pixel_mut(row, col);
            pixel[GREEN] = 128;
            pixel[BLUE] = 255;
        }
    }
    raster
}

/// Make a default-sized black-to-near-white vertical gradient.
pub fn make_gradient() -> Raster {
    make_gradient_with(Dimensions::default())
}

/// Make a vertical gradient of the given dimensions.
///
/// Every channel of row `i` is `i * 2` truncated to 8 bits, so row 0 is
/// black and the last row of a 128-row raster is 254. The value is not
/// clamped: rasters taller than [`GRADIENT_MAX_HEIGHT`] wrap back to black
/// at row 128 and start climbing again.
pub fn make_gradient_with(dims: Dimensions) -> Raster {
    debug!(
        height = dims.height(),
        width = dims.width(),
        "Synthesizing vertical gradient"
    );
    if dims.height() > GRADIENT_MAX_HEIGHT {
        warn!(
            height = dims.height(),
            max = GRADIENT_MAX_HEIGHT,
            "Gradient taller than supported range, row values will wrap"
        );
    }

    let mut raster = Raster::new(dims);
    for row in 0..dims.height() {
        let value = (row * 2) as u8;
        for col in 0..dims.width() {
            raster.pixel_mut(row, col).fill(value);
        }
    }
    raster
}
