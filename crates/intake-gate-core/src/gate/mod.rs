//! The intake quality gate pipeline.
//!
//! Control flow is strictly linear: bytes → metadata → sharpness →
//! predicates → verdict. The gate holds no state between evaluations and
//! performs no I/O; it is safe to share across threads and invoke
//! concurrently on independent inputs.

mod aggregate;
mod extract;
mod predicates;
pub mod sharpness;

use tracing::debug;

use crate::domain::QualityVerdict;
use crate::error::GateError;

pub use sharpness::{ChannelStatistic, Histogram, SharpnessAnalysis};

/// Thresholds for the predicate battery and acceptance cutoff.
///
/// `Default` holds the canonical values; overriding them changes which
/// photographs pass, so treat non-default configurations as a different
/// policy, not a tuning knob.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Minimum width in pixels (inclusive).
    pub min_width: u32,
    /// Minimum height in pixels (inclusive).
    pub min_height: u32,
    /// Lower aspect-ratio bound, width/height (inclusive).
    pub min_aspect_ratio: f64,
    /// Upper aspect-ratio bound, width/height (inclusive).
    pub max_aspect_ratio: f64,
    /// Minimum encoded size in bytes (inclusive).
    pub min_size_bytes: u64,
    /// Maximum encoded size in bytes (inclusive).
    pub max_size_bytes: u64,
    /// Blur score at or below which a frame counts as blurry.
    pub blur_threshold: f64,
    /// Quality score required for acceptance.
    pub accept_threshold: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_width: 640,
            min_height: 480,
            min_aspect_ratio: 0.5,
            max_aspect_ratio: 1.2,
            min_size_bytes: 50 * 1024,
            max_size_bytes: 10 * 1024 * 1024,
            blur_threshold: 0.3,
            accept_threshold: 0.7,
        }
    }
}

/// The perceptual intake quality gate.
///
/// Decides whether a submitted photograph is acceptable for downstream
/// identity processing. Consumes raw encoded bytes, emits a
/// [`QualityVerdict`]; knows nothing about storage, sessions, or transport.
#[derive(Debug, Clone, Default)]
pub struct QualityGate {
    config: GateConfig,
}

impl QualityGate {
    /// Creates a gate with the given thresholds.
    #[must_use]
    pub const fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Returns the gate's thresholds.
    #[must_use]
    pub const fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Evaluates one encoded image buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Decode`] when the buffer is not a parseable
    /// image, and [`GateError::Processing`] when pixel statistics cannot be
    /// computed on an otherwise-decodable image. Neither is ever folded
    /// into a rejected verdict.
    pub fn evaluate(&self, bytes: &[u8]) -> Result<QualityVerdict, GateError> {
        let decoded = extract::decode(bytes)?;
        let metadata = extract::metadata(&decoded, bytes.len() as u64);
        let sharpness = sharpness::analyze(&decoded.image)?;

        debug!(
            width = metadata.width,
            height = metadata.height,
            format = %metadata.format,
            size_bytes = metadata.size_bytes,
            blur_score = sharpness.blur_score,
            "extracted image features"
        );

        let checks = predicates::evaluate(&metadata, sharpness.blur_score, &self.config);
        Ok(aggregate::verdict(
            checks,
            metadata,
            sharpness.blur_score,
            &self.config,
        ))
    }
}
