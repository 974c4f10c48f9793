//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the gate core and external
//! adapters.

mod image_source;
mod progress;
mod verdict_output;

pub use image_source::{ImageSource, RawImage};
pub use progress::{ProgressEvent, ProgressSink};
pub use verdict_output::VerdictOutput;
