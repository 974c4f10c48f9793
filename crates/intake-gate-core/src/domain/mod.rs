//! Core domain types for the intake quality gate.

mod check;
mod metadata;
mod verdict;

pub use check::{QualityCheck, QualityChecks};
pub use metadata::{ImageFormat, ImageMetadata};
pub use verdict::{EvaluationRecord, QualityVerdict, VerdictMetadata};
