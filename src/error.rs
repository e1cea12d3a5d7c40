use band_palette::QuantizeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Image load error: {0}")]
    ImageLoad(String),

    #[error("Pixel context error: {0}")]
    Context(String),

    #[error("Color count {requested} out of range (2..=12)")]
    InvalidColorCount { requested: usize },
}

impl From<image::ImageError> for ExtractError {
    fn from(e: image::ImageError) -> Self {
        ExtractError::ImageLoad(e.to_string())
    }
}

impl From<QuantizeError> for ExtractError {
    fn from(e: QuantizeError) -> Self {
        match e {
            QuantizeError::ColorCount { requested } => ExtractError::InvalidColorCount { requested },
            QuantizeError::Raster(raster) => ExtractError::Context(raster.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    #[error("Divider {index} is already being dragged")]
    AlreadyDragging { index: usize },

    #[error("No drag in progress")]
    NotDragging,

    #[error("Cannot reset while a drag is in progress")]
    DragInProgress,

    #[error("Divider index {index} out of range for {len} positions")]
    IndexOutOfRange { index: usize, len: usize },
}
