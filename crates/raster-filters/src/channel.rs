//! Per-channel adjustments.

use tracing::debug;

use crate::RED;
use crate::clamp::clamp;
use crate::raster::Raster;

/// Copy a raster, adding `shift_amount` to the red sample of every pixel.
///
/// The red result saturates at 0 and 255. All other channels are copied
/// unchanged.
pub fn red_shift(source: &Raster, shift_amount: i32) -> Raster {
    debug!(
        height = source.height(),
        width = source.width(),
        shift_amount,
        "Shifting red channel"
    );

    let mut output = source.clone();
    for row in 0..source.height() {
        for col in 0..source.width() {
            let red = &mut output[(row, col, RED)];
            *red = clamp(f64::from(*red) + f64::from(shift_amount));
        }
    }
    output
}
