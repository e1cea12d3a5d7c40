//! Band quantization -- raster in, ordered palette out.
//!
//! The image is cut into horizontal bands, one per requested color. Each
//! band contributes the most frequent color among its opaque pixels, so the
//! palette reads top to bottom the way the photo does.
//!
//! 1. **Downsample** to at most [`MAX_ANALYSIS_DIMENSION`] per side
//! 2. **Partition** rows into bands ([`band_ranges`])
//! 3. **Histogram** each band's opaque pixels into 10-step buckets
//! 4. **Select** the first sample of the busiest bucket, white for empty bands
//! 5. **Pad** with the last color if fewer colors than requested came out

mod bands;
mod error;
mod histogram;

pub use bands::band_ranges;
pub use error::QuantizeError;
pub use histogram::{BucketHistogram, BucketKey, BUCKET_STEP};

use std::ops::Range;

use crate::color::Rgb;
use crate::preprocess::{downsample_to_fit, MAX_ANALYSIS_DIMENSION};
use crate::raster::RasterBuffer;

/// Fewest colors a palette may have.
pub const MIN_COLORS: usize = 2;

/// Most colors a palette may have.
pub const MAX_COLORS: usize = 12;

/// Pixels with alpha below this are ignored.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Ordered colors extracted from an image, top band first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BandPalette {
    colors: Vec<Rgb>,
}

impl BandPalette {
    /// Colors in band order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The color at the middle index (`len / 2`).
    ///
    /// This is a representative sample, not a frequency mode: for two colors
    /// it is the second one.
    pub fn dominant(&self) -> Rgb {
        self.colors
            .get(self.colors.len() / 2)
            .copied()
            .unwrap_or(Rgb::WHITE)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn into_colors(self) -> Vec<Rgb> {
        self.colors
    }
}

/// Configurable band quantizer.
///
/// The default analysis bound is [`MAX_ANALYSIS_DIMENSION`]; the quantizer is
/// reusable across images.
///
/// # Example
///
/// ```
/// use band_palette::{Quantizer, RasterBuffer, Rgb};
///
/// let raster = RasterBuffer::solid(16, 16, [30, 60, 90, 255]).unwrap();
/// let palette = Quantizer::new(3).unwrap().quantize(&raster).unwrap();
///
/// assert_eq!(palette.colors(), &[Rgb::new(30, 60, 90); 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    count: usize,
    max_dimension: u32,
}

impl Quantizer {
    /// Create a quantizer producing `count` colors.
    pub fn new(count: usize) -> Result<Self, QuantizeError> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&count) {
            return Err(QuantizeError::ColorCount { requested: count });
        }
        Ok(Self {
            count,
            max_dimension: MAX_ANALYSIS_DIMENSION,
        })
    }

    /// Override the analysis bound (clamped to at least one pixel).
    #[inline]
    pub fn max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension.max(1);
        self
    }

    /// Requested color count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Extract the palette. Identical pixels always give identical output.
    ///
    /// Colors are samples of the analysed image. When the input was
    /// downsampled they may differ from any source pixel by less than one
    /// bucket step, because Lanczos3 rings at band edges.
    pub fn quantize(&self, raster: &RasterBuffer) -> Result<BandPalette, QuantizeError> {
        let analysed = downsample_to_fit(raster, self.max_dimension)?;

        let mut colors: Vec<Rgb> = band_ranges(analysed.height(), self.count)
            .into_iter()
            .map(|rows| band_color(&analysed, rows))
            .collect();

        while colors.len() < self.count {
            let last = colors.last().copied().unwrap_or(Rgb::WHITE);
            colors.push(last);
        }

        Ok(BandPalette { colors })
    }
}

/// Quantize with the default analysis bound.
pub fn quantize(raster: &RasterBuffer, count: usize) -> Result<BandPalette, QuantizeError> {
    Quantizer::new(count)?.quantize(raster)
}

fn band_color(raster: &RasterBuffer, rows: Range<u32>) -> Rgb {
    let mut histogram = BucketHistogram::new();
    for y in rows {
        for px in raster.row(y).chunks_exact(RasterBuffer::CHANNELS) {
            if px[3] < ALPHA_THRESHOLD {
                continue;
            }
            histogram.add(Rgb::new(px[0], px[1], px[2]));
        }
    }
    histogram.dominant().unwrap_or(Rgb::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped(width: u32, rows: &[[u8; 4]]) -> RasterBuffer {
        let pixels: Vec<[u8; 4]> = rows
            .iter()
            .flat_map(|row| std::iter::repeat(*row).take(width as usize))
            .collect();
        RasterBuffer::from_pixels(width, rows.len() as u32, &pixels).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_counts() {
        assert_eq!(
            Quantizer::new(1).unwrap_err(),
            QuantizeError::ColorCount { requested: 1 }
        );
        assert_eq!(
            Quantizer::new(13).unwrap_err(),
            QuantizeError::ColorCount { requested: 13 }
        );
        assert!(Quantizer::new(2).is_ok());
        assert!(Quantizer::new(12).is_ok());
    }

    #[test]
    fn test_bands_follow_image_top_to_bottom() {
        let raster = striped(
            4,
            &[
                [255, 0, 0, 255],
                [255, 0, 0, 255],
                [0, 255, 0, 255],
                [0, 255, 0, 255],
                [0, 0, 255, 255],
                [0, 0, 255, 255],
            ],
        );
        let palette = quantize(&raster, 3).unwrap();
        assert_eq!(
            palette.colors(),
            &[
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255)
            ]
        );
        assert_eq!(palette.dominant(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_transparent_band_falls_back_to_white() {
        let raster = striped(
            3,
            &[[10, 10, 10, 255], [10, 10, 10, 255], [90, 0, 0, 0], [90, 0, 0, 127]],
        );
        let palette = quantize(&raster, 2).unwrap();
        assert_eq!(palette.colors(), &[Rgb::new(10, 10, 10), Rgb::WHITE]);
    }

    #[test]
    fn test_alpha_threshold_is_inclusive() {
        let raster = striped(2, &[[40, 50, 60, 128], [70, 80, 90, 128]]);
        let palette = quantize(&raster, 2).unwrap();
        assert_eq!(palette.colors(), &[Rgb::new(40, 50, 60), Rgb::new(70, 80, 90)]);
    }

    #[test]
    fn test_short_image_pads_with_white_bands() {
        let raster = striped(2, &[[1, 2, 3, 255]]);
        let palette = quantize(&raster, 4).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.colors()[0], Rgb::new(1, 2, 3));
        assert_eq!(&palette.colors()[1..], &[Rgb::WHITE; 3]);
    }

    #[test]
    fn test_majority_bucket_wins_within_band() {
        // One band: three near-identical grays against two reds
        let raster = RasterBuffer::from_pixels(
            5,
            1,
            &[
                [200, 0, 0, 255],
                [120, 121, 119, 255],
                [200, 0, 0, 255],
                [118, 120, 122, 255],
                [121, 119, 120, 255],
            ],
        )
        .unwrap();
        let palette = Quantizer::new(2).unwrap().quantize(&raster).unwrap();
        assert_eq!(palette.colors()[0], Rgb::new(120, 121, 119));
    }

    #[test]
    fn test_max_dimension_override_downsamples() {
        let raster = RasterBuffer::solid(64, 64, [5, 5, 5, 255]).unwrap();
        let palette = Quantizer::new(4)
            .unwrap()
            .max_dimension(8)
            .quantize(&raster)
            .unwrap();
        assert_eq!(palette.colors(), &[Rgb::new(5, 5, 5); 4]);
    }
}
