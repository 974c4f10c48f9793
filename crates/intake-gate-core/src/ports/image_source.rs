//! Image source port for obtaining raw image buffers.

/// An encoded image buffer together with where it came from.
///
/// The gate only ever sees the bytes; the path travels alongside so batch
/// callers can attribute verdicts and report skips.
#[derive(Debug, Clone)]
pub struct RawImage {
    /// Path or identifier of the input.
    pub path: String,
    /// The raw encoded buffer.
    pub bytes: Vec<u8>,
}

/// Port for supplying raw image buffers from a source.
pub trait ImageSource: Send + Sync {
    /// Returns an iterator over raw images from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a buffer fails to load.
    fn images(&self) -> Box<dyn Iterator<Item = anyhow::Result<RawImage>> + Send + '_>;

    /// Returns the total number of images, if known.
    fn count_hint(&self) -> Option<usize>;
}
