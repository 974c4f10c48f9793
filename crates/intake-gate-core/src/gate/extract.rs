//! Image metadata extraction.

use image::DynamicImage;

use crate::domain::{ImageFormat, ImageMetadata};
use crate::error::GateError;

/// A decoded buffer: pixel data plus the detected container format.
#[derive(Debug)]
pub(crate) struct DecodedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Decodes an encoded raster buffer.
///
/// The container format is sniffed from the buffer's magic bytes before
/// decoding; formats the gate does not accept still decode here, so that
/// the format predicate can report them rather than the whole evaluation
/// failing.
///
/// # Errors
///
/// Returns [`GateError::Decode`] when the buffer cannot be parsed.
pub(crate) fn decode(bytes: &[u8]) -> Result<DecodedImage, GateError> {
    let format = image::guess_format(bytes)
        .map(ImageFormat::from)
        .unwrap_or(ImageFormat::Other);
    let image = image::load_from_memory(bytes).map_err(GateError::Decode)?;
    Ok(DecodedImage { image, format })
}

/// Builds the metadata snapshot for a decoded buffer.
pub(crate) fn metadata(decoded: &DecodedImage, size_bytes: u64) -> ImageMetadata {
    ImageMetadata {
        width: decoded.image.width(),
        height: decoded.image.height(),
        format: decoded.format,
        size_bytes,
    }
}
