//! Sharpness estimation.
//!
//! Uses pixel-intensity dispersion as a cheap proxy for focus: a blurry or
//! flat-lit frame has low intensity variance, a sharp one has high variance.
//! This is deliberately not edge-detection blur analysis; the only contract
//! is that the score lands in [0, 1] and higher means sharper.

use image::DynamicImage;

use crate::error::GateError;

/// Standard deviation at which the sharpness proxy saturates to 1.0.
const SATURATION_STD_DEV: f64 = 30.0;

/// Intensity dispersion of a single channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelStatistic {
    /// Standard deviation of pixel intensity in the channel.
    pub standard_deviation: f64,
}

/// Result of sharpness estimation.
#[derive(Debug, Clone)]
pub struct SharpnessAnalysis {
    /// Per-channel statistics after greyscale conversion (typically one).
    pub channels: Vec<ChannelStatistic>,
    /// Sharpness proxy in [0, 1]; higher means sharper.
    pub blur_score: f64,
}

/// 256-bin histogram of luminance values.
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: [u64; 256],
    total: u64,
}

impl Histogram {
    /// Compute histogram from a grayscale image.
    #[must_use]
    pub fn from_luma(image: &image::GrayImage) -> Self {
        let mut bins = [0u64; 256];
        for pixel in image.pixels() {
            bins[usize::from(pixel.0[0])] += 1;
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Returns the total pixel count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Calculate mean luminance.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64) * count)
            .sum();
        // Precision loss acceptable for statistical purposes
        sum as f64 / self.total as f64
    }

    /// Calculate standard deviation of luminance.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let diff = (i as f64) - mean;
                diff * diff * (count as f64)
            })
            .sum::<f64>()
            / (self.total as f64);
        variance.sqrt()
    }
}

/// Estimates sharpness of a decoded image.
///
/// Converts to greyscale, computes per-channel standard deviation, and maps
/// the mean deviation onto [0, 1] with saturation at
/// [`SATURATION_STD_DEV`].
///
/// # Errors
///
/// Returns [`GateError::Processing`] when the frame holds no readable
/// pixel data.
#[allow(clippy::cast_precision_loss)]
pub fn analyze(image: &DynamicImage) -> Result<SharpnessAnalysis, GateError> {
    let luma = image.to_luma8();
    let histogram = Histogram::from_luma(&luma);
    if histogram.total() == 0 {
        return Err(GateError::Processing(String::from(
            "image contains no pixel data",
        )));
    }

    let channels = vec![ChannelStatistic {
        standard_deviation: histogram.std_dev(),
    }];
    let mean_std_dev = channels
        .iter()
        .map(|c| c.standard_deviation)
        .sum::<f64>()
        / channels.len() as f64;
    let blur_score = (mean_std_dev / SATURATION_STD_DEV).min(1.0);

    Ok(SharpnessAnalysis {
        channels,
        blur_score,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_histogram_from_uniform() {
        let mut img = GrayImage::new(256, 1);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            pixel.0[0] = x as u8;
        }

        let hist = Histogram::from_luma(&img);
        assert_eq!(hist.total(), 256);
    }

    #[test]
    fn test_histogram_mean_flat() {
        let img = GrayImage::from_fn(100, 100, |_, _| Luma([128u8]));
        let hist = Histogram::from_luma(&img);
        assert!((hist.mean() - 128.0).abs() < 0.001);
    }

    #[test]
    fn test_histogram_std_dev_flat_is_zero() {
        let img = GrayImage::from_fn(100, 100, |_, _| Luma([100u8]));
        let hist = Histogram::from_luma(&img);
        assert!(hist.std_dev().abs() < 0.001);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram {
            bins: [0u64; 256],
            total: 0,
        };
        assert!((hist.mean() - 0.0).abs() < f64::EPSILON);
        assert!((hist.std_dev() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_frame_scores_fully_blurry() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |_, _| Luma([90u8])));
        let analysis = analyze(&img).expect("analysis succeeds");
        assert!((analysis.blur_score - 0.0).abs() < f64::EPSILON);
        assert_eq!(analysis.channels.len(), 1);
    }

    #[test]
    fn test_checkerboard_saturates_sharp() {
        // std dev ~127.5, far past the saturation point
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        }));
        let analysis = analyze(&img).expect("analysis succeeds");
        assert!((analysis.blur_score - 1.0).abs() < f64::EPSILON);
        assert!(analysis.channels[0].standard_deviation > 100.0);
    }

    #[test]
    fn test_gradient_scores_between() {
        // Gradient over 0..64 has std dev ~18.5 -> score ~0.62
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |x, _| Luma([(x) as u8])));
        let analysis = analyze(&img).expect("analysis succeeds");
        assert!(analysis.blur_score > 0.0 && analysis.blur_score < 1.0);
    }

    #[test]
    fn test_zero_pixel_frame_is_processing_error() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(0, 0));
        let err = analyze(&img).expect_err("empty frame fails");
        assert!(matches!(err, GateError::Processing(_)));
    }

    #[test]
    fn test_score_is_deterministic() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(32, 32, |x, y| {
            Luma([((x * 7 + y * 13) % 256) as u8])
        }));
        let first = analyze(&img).expect("analysis succeeds").blur_score;
        let second = analyze(&img).expect("analysis succeeds").blur_score;
        assert!((first - second).abs() < f64::EPSILON);
    }
}
