//! Test fixtures: synthetic images and palettes.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use afterglow::models::ColorPalette;
use band_palette::{RasterBuffer, Rgb};
use image::{ImageFormat, Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Frequently used colors
pub mod colors {
    use band_palette::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const SUNSET: [Rgb; 4] = [
        Rgb::new(0x1d, 0x2b, 0x53),
        Rgb::new(0x7e, 0x25, 0x53),
        Rgb::new(0xff, 0x77, 0xa8),
        Rgb::new(0xff, 0xcc, 0xaa),
    ];
}

/// Image made of equal-height horizontal stripes, one per color, top to bottom.
pub fn striped_image(width: u32, height: u32, stripes: &[Rgb]) -> RgbaImage {
    let count = stripes.len() as u32;
    RgbaImage::from_fn(width, height, |_, y| {
        let index = (y * count / height).min(count - 1) as usize;
        let [r, g, b] = stripes[index].to_bytes();
        Rgba([r, g, b, 255])
    })
}

pub fn striped_raster(width: u32, height: u32, stripes: &[Rgb]) -> RasterBuffer {
    let image = striped_image(width, height, stripes);
    RasterBuffer::new(width, height, image.into_raw()).unwrap()
}

/// 4x4 image: black top half, white bottom half.
pub fn half_black_half_white() -> RgbaImage {
    striped_image(4, 4, &[Rgb::BLACK, Rgb::WHITE])
}

/// Opaque noise from a fixed seed.
pub fn noise_raster(width: u32, height: u32, seed: u64) -> RasterBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height)
        .flat_map(|_| {
            let [r, g, b]: [u8; 3] = rng.gen();
            [r, g, b, 255]
        })
        .collect();
    RasterBuffer::new(width, height, data).unwrap()
}

pub fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    encode(image, ImageFormat::Png)
}

/// Write `image` as a PNG named `name` inside `dir`.
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(image)).unwrap();
    path
}

pub fn palette(hex: &[&str]) -> ColorPalette {
    ColorPalette::from_hex(hex).unwrap()
}

/// A distinct palette per index, for filling caches.
pub fn numbered_palette(index: u8) -> ColorPalette {
    ColorPalette::new(vec![Rgb::new(index, 0, 0), Rgb::new(0, index, 255)])
}
