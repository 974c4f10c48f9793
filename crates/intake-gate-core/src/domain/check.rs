//! The fixed battery of quality checks.

use serde::{Deserialize, Serialize};

/// One of the six quality predicates.
///
/// The variant order is the canonical evaluation and reporting order:
/// resolution, aspect ratio, file size, format, blur. Adding or removing a
/// check is a compile-time-visible change; every match over this enum is
/// exhaustive so reason generation cannot drift from the check set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityCheck {
    /// Width meets the minimum resolution.
    MinWidth,
    /// Height meets the minimum resolution.
    MinHeight,
    /// Width/height ratio is portrait-to-near-square.
    AspectRatio,
    /// Encoded buffer size is within bounds.
    FileSize,
    /// Container format is JPEG or PNG.
    Format,
    /// Sharpness proxy clears the blur threshold.
    NotBlurry,
}

impl QualityCheck {
    /// All checks in canonical order.
    pub const ALL: [Self; 6] = [
        Self::MinWidth,
        Self::MinHeight,
        Self::AspectRatio,
        Self::FileSize,
        Self::Format,
        Self::NotBlurry,
    ];

    /// Wire key used in the `checks` object.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MinWidth => "min_width",
            Self::MinHeight => "min_height",
            Self::AspectRatio => "aspect_ratio",
            Self::FileSize => "file_size",
            Self::Format => "format",
            Self::NotBlurry => "not_blurry",
        }
    }

    /// Fixed human-readable rejection message for a failure of this check.
    ///
    /// Both resolution checks share one message; a frame failing both lists
    /// it twice, one entry per failed check.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::MinWidth | Self::MinHeight => "resolution too low",
            Self::AspectRatio => "incorrect orientation",
            Self::FileSize => "invalid file size",
            Self::Format => "unsupported format",
            Self::NotBlurry => "too blurry or low light",
        }
    }
}

/// Outcome of all six checks for one evaluation.
///
/// A fixed-key record rather than a map: all six keys are always present
/// and the serialized shape cannot gain or lose entries silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityChecks {
    /// Width meets the minimum resolution.
    pub min_width: bool,
    /// Height meets the minimum resolution.
    pub min_height: bool,
    /// Width/height ratio is portrait-to-near-square.
    pub aspect_ratio: bool,
    /// Encoded buffer size is within bounds.
    pub file_size: bool,
    /// Container format is JPEG or PNG.
    pub format: bool,
    /// Sharpness proxy clears the blur threshold.
    pub not_blurry: bool,
}

impl QualityChecks {
    /// Returns the result of a single check.
    #[must_use]
    pub const fn get(&self, check: QualityCheck) -> bool {
        match check {
            QualityCheck::MinWidth => self.min_width,
            QualityCheck::MinHeight => self.min_height,
            QualityCheck::AspectRatio => self.aspect_ratio,
            QualityCheck::FileSize => self.file_size,
            QualityCheck::Format => self.format,
            QualityCheck::NotBlurry => self.not_blurry,
        }
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        QualityCheck::ALL.iter().filter(|&&c| self.get(c)).count()
    }

    /// Failed checks in canonical order.
    pub fn failed(&self) -> impl Iterator<Item = QualityCheck> + '_ {
        QualityCheck::ALL.into_iter().filter(|&c| !self.get(c))
    }

    /// Whether every check passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == QualityCheck::ALL.len()
    }
}
