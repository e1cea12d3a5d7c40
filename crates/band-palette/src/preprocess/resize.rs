//! Bounded Lanczos3 downsampling.

use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::raster::{RasterBuffer, RasterError};

/// Largest width or height analysed without downsampling.
pub const MAX_ANALYSIS_DIMENSION: u32 = 800;

/// Dimensions that fit within `max_dimension` on both axes, preserving the
/// aspect ratio. Images already inside the bound are returned unchanged.
///
/// The longer side becomes exactly `max_dimension`; the shorter side is
/// scaled proportionally, rounded down, and never drops below one pixel.
///
/// # Example
///
/// ```
/// use band_palette::fit_within;
///
/// assert_eq!(fit_within(1600, 1200, 800), (800, 600));
/// assert_eq!(fit_within(640, 480, 800), (640, 480));
/// ```
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max_dimension = max_dimension.max(1);
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }

    let scale = |short: u32, long: u32| -> u32 {
        let scaled = short as u64 * max_dimension as u64 / long as u64;
        (scaled as u32).max(1)
    };

    if width >= height {
        (max_dimension, scale(height, width))
    } else {
        (scale(width, height), max_dimension)
    }
}

/// Resize an RGBA raster with the Lanczos3 filter.
pub fn resize_lanczos(
    raster: &RasterBuffer,
    new_width: u32,
    new_height: u32,
) -> Result<RasterBuffer, RasterError> {
    if raster.width() == new_width && raster.height() == new_height {
        return Ok(raster.clone());
    }

    let expected =
        raster.width() as usize * raster.height() as usize * RasterBuffer::CHANNELS;
    let source = RgbaImage::from_raw(raster.width(), raster.height(), raster.as_bytes().to_vec())
        .ok_or(RasterError::BufferSize {
            expected,
            actual: raster.as_bytes().len(),
        })?;

    let resized = imageops::resize(&source, new_width, new_height, FilterType::Lanczos3);
    RasterBuffer::new(new_width, new_height, resized.into_raw())
}

/// Downsample `raster` so that neither side exceeds `max_dimension`.
///
/// Borrows the input when it is already small enough.
pub fn downsample_to_fit(
    raster: &RasterBuffer,
    max_dimension: u32,
) -> Result<Cow<'_, RasterBuffer>, RasterError> {
    let (width, height) = fit_within(raster.width(), raster.height(), max_dimension);
    if (width, height) == (raster.width(), raster.height()) {
        return Ok(Cow::Borrowed(raster));
    }
    resize_lanczos(raster, width, height).map(Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(800, 800, 800), (800, 800));
        assert_eq!(fit_within(1, 799, 800), (1, 799));
    }

    #[test]
    fn test_fit_within_landscape_and_portrait() {
        assert_eq!(fit_within(1600, 1200, 800), (800, 600));
        assert_eq!(fit_within(1200, 1600, 800), (600, 800));
        assert_eq!(fit_within(801, 400, 800), (800, 399));
    }

    #[test]
    fn test_fit_within_never_collapses_to_zero() {
        assert_eq!(fit_within(10_000, 1, 800), (800, 1));
        assert_eq!(fit_within(1, 10_000, 800), (1, 800));
    }

    #[test]
    fn test_downsample_borrows_when_within_bound() {
        let raster = RasterBuffer::solid(40, 30, [1, 2, 3, 255]).unwrap();
        let result = downsample_to_fit(&raster, 800).unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_downsample_solid_image_stays_solid() {
        let raster = RasterBuffer::solid(1000, 500, [200, 100, 50, 255]).unwrap();
        let result = downsample_to_fit(&raster, 800).unwrap();

        assert_eq!(result.width(), 800);
        assert_eq!(result.height(), 400);
        for y in [0, 199, 399] {
            for x in [0, 400, 799] {
                assert_eq!(result.pixel(x, y), [200, 100, 50, 255]);
            }
        }
    }

    #[test]
    fn test_resize_same_dimensions_is_identity() {
        let raster = RasterBuffer::from_pixels(
            2,
            1,
            &[[255, 0, 0, 255], [0, 0, 255, 255]],
        )
        .unwrap();
        let out = resize_lanczos(&raster, 2, 1).unwrap();
        assert_eq!(out, raster);
    }
}
