//! Per-color channel statistics for histogram consumers.
//!
//! [`sample`] reduces one device color to the five channels a histogram view
//! plots; [`sample_all`] maps a batch in parallel. Binning and smoothing are
//! left to the caller.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::{profiles, stats};
//!
//! let colors = [[255.0, 0.0, 0.0], [128.0, 128.0, 128.0]];
//! let samples = stats::sample_all(&colors, &profiles::SRGB);
//! assert_eq!(samples.len(), 2);
//! assert_eq!(samples[1].saturation, 0.0);
//! ```

use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;

use crate::{Color, Model, WorkingProfile};

/// Percent to byte scale.
const PERCENT_TO_BYTE: f64 = 255.0 / 100.0;

/// Channel values of one color, all on a 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ChannelSample {
    /// Device red
    pub red: f64,
    /// Device green
    pub green: f64,
    /// Device blue
    pub blue: f64,
    /// HSL saturation
    pub saturation: f64,
    /// HSL lightness
    pub lightness: f64,
}

/// Samples one device color (0-255) under `profile`.
pub fn sample(rgb: [f64; 3], profile: &WorkingProfile) -> ChannelSample {
    let [_, s, l] = Color::from_rgb(Model::Hsl, rgb, profile)
        .as_array3()
        .unwrap_or_default();
    ChannelSample {
        red: rgb[0],
        green: rgb[1],
        blue: rgb[2],
        saturation: s * PERCENT_TO_BYTE,
        lightness: l * PERCENT_TO_BYTE,
    }
}

/// Samples a batch in parallel, one output per input in input order.
pub fn sample_all(colors: &[[f64; 3]], profile: &WorkingProfile) -> Vec<ChannelSample> {
    trace!(count = colors.len(), "sampling channel statistics");
    colors.par_iter().map(|&rgb| sample(rgb, profile)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

    #[test]
    fn test_primary_red() {
        let s = sample([255.0, 0.0, 0.0], &profiles::SRGB);
        assert_eq!((s.red, s.green, s.blue), (255.0, 0.0, 0.0));
        assert!((s.saturation - 255.0).abs() < 1e-9);
        assert!((s.lightness - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_gray_has_no_saturation() {
        let s = sample([90.0, 90.0, 90.0], &profiles::SRGB);
        assert_eq!(s.saturation, 0.0);
    }

    #[test]
    fn test_batch_matches_single() {
        let p = &profiles::ADOBE_RGB;
        let colors: Vec<[f64; 3]> = (0..64).map(|i| [i as f64 * 4.0, 255.0 - i as f64, 100.0]).collect();
        let batch = sample_all(&colors, p);
        assert_eq!(batch.len(), colors.len());
        for (rgb, got) in colors.iter().zip(&batch) {
            assert_eq!(*got, sample(*rgb, p));
        }
    }
}
