//! Verdict aggregation.

use crate::domain::{ImageMetadata, QualityCheck, QualityChecks, QualityVerdict, VerdictMetadata};

use super::GateConfig;

/// Combines predicate results into the final verdict.
///
/// The score is the fraction of checks that passed, compared unrounded
/// against the acceptance threshold. With the default 0.7 cutoff this is a
/// hard 5-of-6 cliff: failing exactly one check (any one, format and blur
/// included) still passes, and an accepted verdict carries no reasons even
/// on such a borderline pass.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn verdict(
    checks: QualityChecks,
    metadata: ImageMetadata,
    blur_score: f64,
    config: &GateConfig,
) -> QualityVerdict {
    let quality_score = checks.passed() as f64 / QualityCheck::ALL.len() as f64;
    let accepted = quality_score >= config.accept_threshold;

    let reasons = if accepted {
        Vec::new()
    } else {
        checks.failed().map(|check| check.reason().to_owned()).collect()
    };

    QualityVerdict {
        accepted,
        quality_score,
        checks,
        reasons,
        metadata: VerdictMetadata::new(metadata, blur_score),
    }
}
