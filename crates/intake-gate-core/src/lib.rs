//! Intake Gate Core - Domain types and scoring pipeline
//!
//! This crate contains the perceptual intake quality gate: a deterministic
//! pipeline that decides whether a submitted photograph is acceptable for
//! downstream identity processing. Raw encoded bytes go in, a verdict with
//! per-check diagnostics comes out.

pub mod domain;
mod error;
pub mod gate;
pub mod ports;

pub use domain::{
    EvaluationRecord, ImageFormat, ImageMetadata, QualityCheck, QualityChecks, QualityVerdict,
    VerdictMetadata,
};
pub use error::GateError;
pub use gate::{ChannelStatistic, GateConfig, Histogram, QualityGate, SharpnessAnalysis};
pub use ports::{ImageSource, ProgressEvent, ProgressSink, RawImage, VerdictOutput};
