//! Error taxonomy for the gate.

use thiserror::Error;

/// Failure modes of a gate evaluation.
///
/// Both variants describe problems with the submitted input, not server
/// faults; callers should map them to a client-input error category. The
/// gate never coerces either into a rejected verdict.
#[derive(Debug, Error)]
pub enum GateError {
    /// The buffer could not be parsed as an image, or its dimensions could
    /// not be determined.
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The image decoded, but its pixel data could not be read.
    #[error("failed to read pixel data: {0}")]
    Processing(String),
}

impl GateError {
    /// Short category name for user-facing messages and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode",
            Self::Processing(_) => "processing",
        }
    }
}
