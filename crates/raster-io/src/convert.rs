//! Conversions between [`Raster`] and `image::RgbImage`.

use image::{Rgb, RgbImage};
use raster_filters::{BLUE, Dimensions, GREEN, RED, Raster, RasterError};

use crate::DisplayError;

/// Build a 3-channel raster from an RGB image buffer.
pub fn from_rgb_image(img: &RgbImage) -> Result<Raster, RasterError> {
    let dims = Dimensions::new(img.height() as usize, img.width() as usize)?;
    Raster::from_raw(dims, img.as_raw().clone())
}

/// Render the red, green and blue channels of a raster as an RGB image.
///
/// Channels past blue are dropped.
pub fn to_rgb_image(raster: &Raster) -> Result<RgbImage, DisplayError> {
    let too_large = || DisplayError::TooLarge {
        height: raster.height(),
        width: raster.width(),
    };
    let width = u32::try_from(raster.width()).map_err(|_| too_large())?;
    let height = u32::try_from(raster.height()).map_err(|_| too_large())?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let pixel = raster.pixel(y as usize, x as usize);
        Rgb([pixel[RED], pixel[GREEN], pixel[BLUE]])
    }))
}
