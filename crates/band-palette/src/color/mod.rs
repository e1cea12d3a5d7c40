//! Color value type and hex parsing
//!
//! Palette colors are plain 8-bit sRGB triples. They are compared, hashed and
//! printed exactly as sampled from the image; no color-space conversion
//! happens anywhere in the extraction pipeline.
//!
//! # Example
//!
//! ```
//! use band_palette::Rgb;
//!
//! let orange: Rgb = "#FF8800".parse().unwrap();
//! assert_eq!(orange, Rgb::new(255, 136, 0));
//! assert_eq!(orange.to_string(), "#ff8800");
//! ```

mod error;
mod rgb;

pub use error::{ColorErrorKind, ParseColorError};
pub use rgb::Rgb;
