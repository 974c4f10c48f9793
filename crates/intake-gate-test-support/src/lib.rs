//! Test support utilities for intake-gate.
//!
//! Provides mocks, synthetic encoded-image builders, and utilities for
//! testing the intake quality gate.
//!
//! # Example
//!
//! ```
//! use intake_gate_test_support::{MockImageSource, SyntheticPhotoBuilder};
//!
//! // Create synthetic encoded buffers
//! let sharp = SyntheticPhotoBuilder::noise_png(800, 1000);
//! let blurry = SyntheticPhotoBuilder::flat_png(800, 1000, 128);
//!
//! // Create mock image source
//! let source = MockImageSource::from_buffers(vec![("sharp.png", sharp), ("flat.png", blurry)]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticPhotoBuilder;
pub use mocks::{MockImageSource, MockProgressSink, MockVerdictOutput};
