//! The quality predicate battery.
//!
//! Six pure, independent boolean checks over the extracted metadata and the
//! sharpness proxy. No predicate depends on another's result, and all six
//! always run once decoding has succeeded.

use crate::domain::{ImageMetadata, QualityChecks};

use super::GateConfig;

/// Evaluates the full battery for one image.
#[must_use]
pub(crate) fn evaluate(
    metadata: &ImageMetadata,
    blur_score: f64,
    config: &GateConfig,
) -> QualityChecks {
    let aspect = metadata.aspect_ratio();
    QualityChecks {
        min_width: metadata.width >= config.min_width,
        min_height: metadata.height >= config.min_height,
        aspect_ratio: aspect >= config.min_aspect_ratio && aspect <= config.max_aspect_ratio,
        file_size: metadata.size_bytes >= config.min_size_bytes
            && metadata.size_bytes <= config.max_size_bytes,
        format: metadata.format.is_supported(),
        not_blurry: blur_score > config.blur_threshold,
    }
}
