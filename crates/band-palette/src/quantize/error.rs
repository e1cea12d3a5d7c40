//! Error type for palette quantization.

use std::fmt;

use crate::raster::RasterError;

/// Error type for [`Quantizer`](super::Quantizer) construction and runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// Requested color count outside [`MIN_COLORS`](super::MIN_COLORS)..=[`MAX_COLORS`](super::MAX_COLORS)
    ColorCount {
        /// The count that was asked for
        requested: usize,
    },
    /// The pixel buffer could not be accessed or resampled
    Raster(RasterError),
}

impl From<RasterError> for QuantizeError {
    fn from(err: RasterError) -> Self {
        QuantizeError::Raster(err)
    }
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::ColorCount { requested } => {
                write!(
                    f,
                    "color count {} out of range ({}..={})",
                    requested,
                    super::MIN_COLORS,
                    super::MAX_COLORS
                )
            }
            QuantizeError::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Raster(err) => Some(err),
            _ => None,
        }
    }
}
