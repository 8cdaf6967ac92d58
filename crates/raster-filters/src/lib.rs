//! Elementary filters over fixed-size RGB rasters.
//!
//! Provides solid fill, vertical gradient, red-channel shift, 4-neighbour
//! box blur and 90-degree clockwise rotation. Every filter is pure: it
//! borrows its input and returns a newly allocated [`Raster`].

pub mod blur;
pub mod channel;
pub mod clamp;
pub mod raster;
pub mod rotate;
pub mod synth;

// Re-exports for convenience
pub use blur::blur;
pub use channel::red_shift;
pub use clamp::clamp;
pub use raster::{Dimensions, Raster};
pub use rotate::rotate_right;
pub use synth::{make_aqua, make_aqua_with, make_gradient, make_gradient_with};

/// Default raster height in pixels.
pub const IMG_HEIGHT: usize = 128;

/// Default raster width in pixels.
pub const IMG_WIDTH: usize = 128;

/// Default number of samples per pixel.
pub const NUM_CHANNELS: usize = 3;

/// Channel index of the red sample.
pub const RED: usize = 0;

/// Channel index of the green sample.
pub const GREEN: usize = 1;

/// Channel index of the blue sample.
pub const BLUE: usize = 2;

/// Errors raised by raster construction and filters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("Raster dimensions must be non-zero, got {height}x{width}")]
    EmptyDimensions { height: usize, width: usize },

    #[error("Raster needs at least 3 channels (RGB), got {0}")]
    TooFewChannels(usize),

    #[error("Raster {height}x{width}x{channels} has too many samples to address")]
    TooLarge {
        height: usize,
        width: usize,
        channels: usize,
    },

    #[error("Raster must be square, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("Sample buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Sample ({row}, {col}, {channel}) is outside the raster")]
    OutOfBounds {
        row: usize,
        col: usize,
        channel: usize,
    },
}

/// Result type alias for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
