//! Verdict types returned by the gate.

use serde::{Deserialize, Serialize, Serializer};

use super::{ImageFormat, ImageMetadata, QualityChecks};

/// Serialize a score rounded to two decimal places.
///
/// Rounding is display-only; internal comparisons always use the unrounded
/// value so the acceptance cutoff cannot drift at the boundary.
fn round2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}

/// Metadata snapshot attached to a verdict: the extracted image metadata
/// plus the sharpness proxy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerdictMetadata {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Detected container format.
    pub format: ImageFormat,
    /// Size of the original encoded buffer in bytes.
    pub size_bytes: u64,
    /// Sharpness proxy in [0, 1]; higher means sharper.
    #[serde(serialize_with = "round2")]
    pub blur_score: f64,
}

impl VerdictMetadata {
    /// Combines extracted metadata with the sharpness proxy.
    #[must_use]
    pub const fn new(metadata: ImageMetadata, blur_score: f64) -> Self {
        Self {
            width: metadata.width,
            height: metadata.height,
            format: metadata.format,
            size_bytes: metadata.size_bytes,
            blur_score,
        }
    }
}

/// Final accept/reject decision with supporting diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityVerdict {
    /// True iff the quality score meets the acceptance threshold.
    pub accepted: bool,
    /// Fraction of checks that passed, always k/6 for integer k.
    #[serde(serialize_with = "round2")]
    pub quality_score: f64,
    /// Outcome of every check.
    pub checks: QualityChecks,
    /// One fixed message per failed check, in canonical order.
    /// Empty whenever the verdict is accepted.
    pub reasons: Vec<String>,
    /// Extracted metadata plus the sharpness proxy.
    pub metadata: VerdictMetadata,
}

/// A verdict paired with its source, as emitted by batch evaluation.
///
/// The gate itself never builds one of these; callers that iterate an image
/// source attach the path and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Path or identifier of the evaluated input.
    pub path: String,
    /// Timestamp of evaluation (RFC 3339).
    pub timestamp: String,
    /// The gate's verdict, flattened into the record.
    #[serde(flatten)]
    pub verdict: QualityVerdict,
}
