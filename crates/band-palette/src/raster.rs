//! RGBA pixel buffers.
//!
//! [`RasterBuffer`] is the hand-off point between whatever decodes an image
//! and the quantizer: a width, a height and tightly packed 8-bit RGBA rows.

use std::fmt;

/// Error type for raster buffer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Byte length does not equal `width * height * 4`
    BufferSize {
        /// Bytes required by the declared dimensions
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
    /// Declared dimensions overflow the addressable size
    DimensionsOverflow {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} bytes, dimensions require {}",
                    actual, expected
                )
            }
            RasterError::DimensionsOverflow { width, height } => {
                write!(f, "raster dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Tightly packed 8-bit RGBA image, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Wrap raw RGBA bytes, validating the length against the dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use band_palette::RasterBuffer;
    ///
    /// let raster = RasterBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
    /// assert_eq!(raster.pixel(1, 0), [255, 255, 255, 255]);
    ///
    /// assert!(RasterBuffer::new(2, 2, vec![0; 4]).is_err());
    /// ```
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from per-pixel RGBA quadruples.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Result<Self, RasterError> {
        Self::new(width, height, pixels.iter().flatten().copied().collect())
    }

    /// A buffer filled with one RGBA value.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, RasterError> {
        let len = Self::byte_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn byte_len(width: u32, height: u32) -> Result<usize, RasterError> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(Self::CHANNELS))
            .ok_or(RasterError::DimensionsOverflow { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * Self::CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = x as usize * Self::CHANNELS;
        let row = self.row(y);
        [row[i], row[i + 1], row[i + 2], row[i + 3]]
    }
}
