//! Owned raster storage with row/column/channel strides.

use std::ops::{Index, IndexMut};

use crate::{IMG_HEIGHT, IMG_WIDTH, NUM_CHANNELS, RasterError, Result};

/// Shape of a raster: rows, columns and samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    height: usize,
    width: usize,
    channels: usize,
}

impl Dimensions {
    /// RGB dimensions with the given height and width.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::with_channels(height, width, NUM_CHANNELS)
    }

    /// Dimensions with an explicit channel count.
    ///
    /// Channels 0..3 are always red, green and blue, so fewer than three
    /// channels are rejected. Any extra channels are carried through filters.
    /// The total sample count must fit in `usize`.
    pub fn with_channels(height: usize, width: usize, channels: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(RasterError::EmptyDimensions { height, width });
        }
        if channels < NUM_CHANNELS {
            return Err(RasterError::TooFewChannels(channels));
        }
        if height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .is_none()
        {
            return Err(RasterError::TooLarge {
                height,
                width,
                channels,
            });
        }
        Ok(Self {
            height,
            width,
            channels,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.height * self.width * self.channels
    }

    /// Always false: zero-sized dimensions cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    fn contains(&self, row: usize, col: usize, channel: usize) -> bool {
        row < self.height && col < self.width && channel < self.channels
    }

    fn offset(&self, row: usize, col: usize, channel: usize) -> usize {
        (row * self.width + col) * self.channels + channel
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            height: IMG_HEIGHT,
            width: IMG_WIDTH,
            channels: NUM_CHANNELS,
        }
    }
}

/// A grid of 8-bit samples indexed by `[row][column][channel]`.
///
/// Cloning copies every sample; rasters never share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    dims: Dimensions,
    data: Vec<u8>,
}

impl Raster {
    /// Create an all-black raster.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            data: vec![0; dims.len()],
        }
    }

    /// Create a raster where every pixel has the same samples.
    ///
    /// `pixel` is repeated across channels if it is shorter than the
    /// channel count; surplus values are ignored.
    pub fn from_pixel(dims: Dimensions, pixel: &[u8]) -> Self {
        let mut raster = Self::new(dims);
        if pixel.is_empty() {
            return raster;
        }
        for (i, sample) in raster.data.iter_mut().enumerate() {
            *sample = pixel[(i % dims.channels) % pixel.len()];
        }
        raster
    }

    /// Wrap an existing row-major sample buffer.
    pub fn from_raw(dims: Dimensions, data: Vec<u8>) -> Result<Self> {
        if data.len() != dims.len() {
            return Err(RasterError::BufferSize {
                expected: dims.len(),
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn channels(&self) -> usize {
        self.dims.channels
    }

    pub fn is_square(&self) -> bool {
        self.dims.is_square()
    }

    /// Read one sample, or `None` when the coordinates fall outside.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if !self.dims.contains(row, col, channel) {
            return None;
        }
        Some(self.data[self.dims.offset(row, col, channel)])
    }

    /// Write one sample.
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: u8) -> Result<()> {
        if !self.dims.contains(row, col, channel) {
            return Err(RasterError::OutOfBounds { row, col, channel });
        }
        let offset = self.dims.offset(row, col, channel);
        self.data[offset] = value;
        Ok(())
    }

    /// All channels of the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        self.assert_contains(row, col, 0);
        let start = self.dims.offset(row, col, 0);
        &self.data[start..start + self.dims.channels]
    }

    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut [u8] {
        self.assert_contains(row, col, 0);
        let start = self.dims.offset(row, col, 0);
        &mut self.data[start..start + self.dims.channels]
    }

    /// Row-major sample buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    fn assert_contains(&self, row: usize, col: usize, channel: usize) {
        assert!(
            self.dims.contains(row, col, channel),
            "sample ({row}, {col}, {channel}) out of bounds for {}x{}x{} raster",
            self.dims.height,
            self.dims.width,
            self.dims.channels
        );
    }
}

impl Index<(usize, usize, usize)> for Raster {
    type Output = u8;

    fn index(&self, (row, col, channel): (usize, usize, usize)) -> &u8 {
        self.assert_contains(row, col, channel);
        &self.data[self.dims.offset(row, col, channel)]
    }
}

impl IndexMut<(usize, usize, usize)> for Raster {
    fn index_mut(&mut self, (row, col, channel): (usize, usize, usize)) -> &mut u8 {
        self.assert_contains(row, col, channel);
        let offset = self.dims.offset(row, col, channel);
        &mut self.data[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = Dimensions::default();
        assert_eq!(dims.height(), IMG_HEIGHT);
        assert_eq!(dims.width(), IMG_WIDTH);
        assert_eq!(dims.channels(), NUM_CHANNELS);
        assert_eq!(dims.len(), 128 * 128 * 3);
    }

    #[test]
    fn test_dimensions_reject_zero_size() {
        assert_eq!(
            Dimensions::new(0, 4),
            Err(RasterError::EmptyDimensions {
                height: 0,
                width: 4
            })
        );
        assert!(Dimensions::new(4, 0).is_err());
    }

    #[test]
    fn test_dimensions_reject_overflowing_size() {
        assert_eq!(
            Dimensions::new(usize::MAX, 2),
            Err(RasterError::TooLarge {
                height: usize::MAX,
                width: 2,
                channels: 3
            })
        );
        assert!(Dimensions::with_channels(1, usize::MAX / 2, 3).is_err());
        assert!(Dimensions::with_channels(1, usize::MAX / 3, 3).is_ok());
    }

    #[test]
    fn test_dimensions_reject_too_few_channels() {
        assert_eq!(
            Dimensions::with_channels(2, 2, 1),
            Err(RasterError::TooFewChannels(1))
        );
        assert!(Dimensions::with_channels(2, 2, 4).is_ok());
    }

    #[test]
    fn test_new_raster_is_black() {
        let raster = Raster::new(Dimensions::new(3, 5).unwrap());
        assert_eq!(raster.as_raw().len(), 45);
        assert!(raster.as_raw().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_row_major_layout() {
        let dims = Dimensions::new(2, 3).unwrap();
        let mut raster = Raster::new(dims);
        raster[(1, 2, 0)] = 7;
        raster[(0, 1, 2)] = 9;

        // offset = (row * width + col) * channels + channel
        assert_eq!(raster.as_raw()[15], 7);
        assert_eq!(raster.as_raw()[5], 9);
    }

    #[test]
    fn test_get_and_set_are_bounds_checked() {
        let mut raster = Raster::new(Dimensions::new(2, 2).unwrap());
        assert!(raster.set(1, 1, 2, 200).is_ok());
        assert_eq!(raster.get(1, 1, 2), Some(200));

        assert_eq!(raster.get(2, 0, 0), None);
        assert_eq!(raster.get(0, 0, 3), None);
        assert_eq!(
            raster.set(0, 2, 0, 1),
            Err(RasterError::OutOfBounds {
                row: 0,
                col: 2,
                channel: 0
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_outside() {
        let raster = Raster::new(Dimensions::new(2, 2).unwrap());
        let _ = raster[(2, 0, 0)];
    }

    #[test]
    fn test_from_pixel_fills_every_pixel() {
        let raster = Raster::from_pixel(Dimensions::new(2, 2).unwrap(), &[1, 2, 3]);
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(raster.pixel(row, col), &[1, 2, 3]);
            }
        }
    }

    #[test]
    fn test_from_raw_checks_length() {
        let dims = Dimensions::new(1, 2).unwrap();
        assert!(Raster::from_raw(dims, vec![0; 6]).is_ok());
        assert_eq!(
            Raster::from_raw(dims, vec![0; 5]),
            Err(RasterError::BufferSize {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Raster::new(Dimensions::new(2, 2).unwrap());
        let mut copy = original.clone();
        copy[(0, 0, 0)] = 255;
        assert_eq!(original[(0, 0, 0)], 0);
        assert_ne!(original, copy);
    }
}
