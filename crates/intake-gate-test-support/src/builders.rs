//! Synthetic encoded-image builders for testing.
//!
//! The gate consumes encoded buffers, so every builder returns bytes rather
//! than decoded pixels. Byte size is controlled through dimensions and
//! pattern: noise barely compresses (big, sharp), flat frames compress to
//! almost nothing (tiny, blurry).

use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use std::io::Cursor;

/// Builder for creating synthetic test photographs.
pub struct SyntheticPhotoBuilder;

impl SyntheticPhotoBuilder {
    /// Encodes an image into the given container format.
    ///
    /// # Panics
    ///
    /// Panics if encoding fails, which only happens for format/color
    /// combinations the `image` crate does not support.
    #[must_use]
    pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), format)
            .expect("encode synthetic image");
        bytes
    }

    // === Pixel patterns ===

    /// Deterministic RGB noise from a seeded LCG.
    ///
    /// Incompressible and high-variance: encoded size tracks the pixel
    /// count and the sharpness proxy saturates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn noise(width: u32, height: u32) -> DynamicImage {
        let mut state = 0x2545_f491_4f6c_dd1du64;
        let img = RgbImage::from_fn(width, height, |_, _| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let v = (state >> 33) as u32;
            Rgb([
                (v & 0xff) as u8,
                ((v >> 8) & 0xff) as u8,
                ((v >> 16) & 0xff) as u8,
            ])
        });
        DynamicImage::ImageRgb8(img)
    }

    /// Uniform grey frame (zero variance, reads as severely blurred).
    #[must_use]
    pub fn flat(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |_, _| Luma([value])))
    }

    /// High-contrast checkerboard (sharp edges, compresses well).
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell_size: u32) -> DynamicImage {
        let cell = cell_size.max(1);
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        }))
    }

    /// Smooth horizontal gradient (moderate variance).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Luma([val])
        }))
    }

    // === Encoded buffers ===

    /// Sharp, large noise frame as PNG.
    #[must_use]
    pub fn noise_png(width: u32, height: u32) -> Vec<u8> {
        Self::encode(&Self::noise(width, height), ImageFormat::Png)
    }

    /// Sharp, large noise frame as JPEG.
    #[must_use]
    pub fn noise_jpeg(width: u32, height: u32) -> Vec<u8> {
        Self::encode(&Self::noise(width, height), ImageFormat::Jpeg)
    }

    /// Sharp, large noise frame as BMP (uncompressed, wrong format).
    #[must_use]
    pub fn noise_bmp(width: u32, height: u32) -> Vec<u8> {
        Self::encode(&Self::noise(width, height), ImageFormat::Bmp)
    }

    /// Blurry flat frame as PNG (compresses to a few hundred bytes).
    #[must_use]
    pub fn flat_png(width: u32, height: u32, value: u8) -> Vec<u8> {
        Self::encode(&Self::flat(width, height, value), ImageFormat::Png)
    }

    /// Blurry flat frame as JPEG.
    #[must_use]
    pub fn flat_jpeg(width: u32, height: u32, value: u8) -> Vec<u8> {
        Self::encode(&Self::flat(width, height, value), ImageFormat::Jpeg)
    }

    /// A buffer that is not an image at all.
    #[must_use]
    pub fn garbage() -> Vec<u8> {
        b"this is not an encoded image".to_vec()
    }
}
