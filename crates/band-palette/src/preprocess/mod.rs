//! Analysis preprocessing.
//!
//! Quantization cost grows with the pixel count, so images are first brought
//! within a fixed analysis bound. Resize uses Lanczos3, which keeps flat
//! regions flat: a solid-color image stays exactly solid after downsampling,
//! so the histogram sees the same colors the photo actually contains.

mod resize;

pub use resize::{downsample_to_fit, fit_within, resize_lanczos, MAX_ANALYSIS_DIMENSION};
