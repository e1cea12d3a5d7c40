//! Image decoding and palette extraction.
//!
//! Decoding uses the `image` crate; quantization is delegated to
//! `band_palette`. Background extraction runs on tokio's blocking pool and
//! tags every request with a generation number so that results from
//! requests superseded by a newer one can be discarded.

use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use band_palette::{Quantizer, RasterBuffer, MAX_ANALYSIS_DIMENSION};

use crate::error::ExtractError;
use crate::models::ColorPalette;

/// Identifies one extraction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Outcome of a background extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// No newer request was started while this one ran
    Current(ColorPalette),
    /// A newer request exists; this result should be dropped
    Superseded { generation: u64, latest: u64 },
}

impl Extraction {
    /// The palette, if it is still current.
    pub fn into_current(self) -> Option<ColorPalette> {
        match self {
            Extraction::Current(palette) => Some(palette),
            Extraction::Superseded { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    max_dimension: u32,
    generation: Arc<AtomicU64>,
}

impl Default for PaletteExtractor {
    fn default() -> Self {
        Self::new(MAX_ANALYSIS_DIMENSION)
    }
}

impl PaletteExtractor {
    pub fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension: max_dimension.max(1),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Decode encoded image bytes (PNG, JPEG, GIF, BMP, WebP) to RGBA.
    pub fn decode(bytes: &[u8]) -> Result<RasterBuffer, ExtractError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        RasterBuffer::new(width, height, image.into_raw())
            .map_err(|e| ExtractError::Context(e.to_string()))
    }

    /// Quantize already-decoded pixels.
    pub fn quantize(
        &self,
        raster: &RasterBuffer,
        color_count: usize,
    ) -> Result<ColorPalette, ExtractError> {
        let palette = Quantizer::new(color_count)?
            .max_dimension(self.max_dimension)
            .quantize(raster)?;
        Ok(palette.into())
    }

    /// Decode and quantize on the current thread.
    pub fn extract(&self, bytes: &[u8], color_count: usize) -> Result<ColorPalette, ExtractError> {
        let raster = Self::decode(bytes)?;
        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            color_count,
            "Extracting palette"
        );
        self.quantize(&raster, color_count)
    }

    pub fn extract_file(
        &self,
        path: &Path,
        color_count: usize,
    ) -> Result<ColorPalette, ExtractError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ExtractError::ImageLoad(format!("{}: {e}", path.display())))?;
        self.extract(&bytes, color_count)
    }

    /// Start a new request, superseding every earlier one.
    pub fn begin_request(&self) -> RequestToken {
        RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no request was started after `token`.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Extract on the blocking pool.
    ///
    /// The request is registered when this is called, not when the future
    /// is first polled, so call order decides which request is latest.
    pub fn extract_in_background(
        &self,
        bytes: Vec<u8>,
        color_count: usize,
    ) -> impl Future<Output = Result<Extraction, ExtractError>> + Send + 'static {
        let token = self.begin_request();
        let extractor = self.clone();

        async move {
            let worker = extractor.clone();
            let joined =
                tokio::task::spawn_blocking(move || worker.extract(&bytes, color_count)).await;
            let palette = match joined {
                Ok(Ok(palette)) => palette,
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    return Err(ExtractError::Context(format!("Extraction task failed: {e}")))
                }
            };

            if extractor.is_current(token) {
                Ok(Extraction::Current(palette))
            } else {
                let latest = extractor.generation.load(Ordering::SeqCst);
                tracing::debug!(
                    generation = token.0,
                    latest,
                    "Discarding superseded extraction"
                );
                Ok(Extraction::Superseded {
                    generation: token.0,
                    latest,
                })
            }
        }
    }
}
