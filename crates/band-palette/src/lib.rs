//! band-palette: ordered palette extraction for gradient synthesis
//!
//! This library reduces a raster image to a small, ordered set of colors
//! whose order mirrors the vertical layout of the source: the first color
//! comes from the top of the image, the last from the bottom. It is the
//! input stage for building sunrise/sunset style gradients from a photo.
//!
//! # Quick Start
//!
//! ```
//! use band_palette::{quantize, RasterBuffer, Rgb};
//!
//! // 4x4 image: top half black, bottom half white
//! let mut pixels = vec![[0, 0, 0, 255]; 8];
//! pixels.extend(vec![[255, 255, 255, 255]; 8]);
//! let raster = RasterBuffer::from_pixels(4, 4, &pixels).unwrap();
//!
//! let palette = quantize(&raster, 2).unwrap();
//! assert_eq!(palette.colors(), &[Rgb::BLACK, Rgb::WHITE]);
//! assert_eq!(palette.dominant(), Rgb::WHITE);
//! ```
//!
//! # Determinism
//!
//! Quantization is a pure function of the pixel bytes, the color count and
//! the analysis bound. Histogram ties resolve by scan order, and resampling
//! uses a fixed filter, so repeated runs give byte-identical palettes.
//!
//! # Cost
//!
//! Images larger than [`MAX_ANALYSIS_DIMENSION`] on either side are
//! downsampled (Lanczos3, aspect preserved) before analysis, which bounds a
//! run to roughly 800x800 pixel visits regardless of the input size.

pub mod color;
pub mod preprocess;
pub mod quantize;
pub mod raster;


pub use color::{ColorErrorKind, ParseColorError, Rgb};
pub use preprocess::{downsample_to_fit, fit_within, resize_lanczos, MAX_ANALYSIS_DIMENSION};
pub use quantize::{
    quantize, BandPalette, QuantizeError, Quantizer, ALPHA_THRESHOLD, MAX_COLORS, MIN_COLORS,
};
pub use raster::{RasterBuffer, RasterError};
