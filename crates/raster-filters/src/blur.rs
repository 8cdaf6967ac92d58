//! 4-neighbour box blur.

use tracing::debug;

use crate::raster::Raster;

/// Make a blurred copy of a raster.
///
/// Each interior sample becomes the truncated mean of itself and its four
/// direct neighbours (up, down, left, right). The outermost rows and
/// columns have no full neighbourhood and are left black, so the result
/// always carries a 1-pixel black border. Rasters narrower or shorter than
/// 3 pixels come back entirely black.
pub fn blur(source: &Raster) -> Raster {
    let (height, width) = (source.height(), source.width());
    debug!(height, width, "Applying 4-neighbour blur");

    let mut output = Raster::new(source.dimensions());
    for row in 1..height.saturating_sub(1) {
        for col in 1..width.saturating_sub(1) {
            for ch in 0..source.channels() {
                let sum = u16::from(source[(row, col, ch)])
                    + u16::from(source[(row - 1, col, ch)])
                    + u16::from(source[(row + 1, col, ch)])
                    + u16::from(source[(row, col - 1, ch)])
                    + u16::from(source[(row, col + 1, ch)]);
                // 5 * 255 fits in u16 and the mean fits in u8
                output[(row, col, ch)] = (sum / 5) as u8;
            }
        }
    }
    output
}
