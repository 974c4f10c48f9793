//! Image metadata extracted during decoding.

use serde::{Deserialize, Serialize};

/// Container format of the submitted buffer.
///
/// Anything the decoder recognizes other than JPEG or PNG collapses to
/// [`ImageFormat::Other`], which can never satisfy the format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// JPEG container.
    Jpeg,
    /// PNG container.
    Png,
    /// Any other recognized container (BMP, WebP, GIF, TIFF, ...).
    Other,
}

impl ImageFormat {
    /// Returns the lowercase wire name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Other => "other",
        }
    }

    /// Whether this format is acceptable for downstream identity processing.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Jpeg | Self::Png)
    }
}

impl From<image::ImageFormat> for ImageFormat {
    fn from(format: image::ImageFormat) -> Self {
        match format {
            image::ImageFormat::Jpeg => Self::Jpeg,
            image::ImageFormat::Png => Self::Png,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata derived from a decoded image buffer.
///
/// Created fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Detected container format.
    pub format: ImageFormat,
    /// Size of the original encoded buffer in bytes.
    pub size_bytes: u64,
}

impl ImageMetadata {
    /// Width-to-height ratio of the decoded frame.
    ///
    /// Returns infinity for a zero-height frame; callers upstream reject
    /// zero-pixel frames before predicates run.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}
