//! sRGB gamut boundary in the Luv chroma plane.
//!
//! At a fixed lightness `L`, each face of the RGB cube (one channel pinned at
//! 0 or 1) projects to a straight line in the `(u, v)` plane. The six lines
//! enclose the reachable chroma; HSLuv and HPLuv normalize chroma against it.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::gamut;
//!
//! // Hue-free bound is the inscribed circle, never larger than any hue's bound
//! let any = gamut::max_chroma(50.0);
//! for h in [0.0, 90.0, 180.0, 270.0] {
//!     assert!(gamut::max_chroma_for_hue(50.0, h) >= any - 1e-9);
//! }
//! ```

use tint_core::cie::{EPSILON, KAPPA};
use tint_math::Mat3;

/// Lightness above which a color is treated as white.
pub const L_WHITE: f64 = 99.9999999;

/// Lightness below which a color is treated as black.
pub const L_BLACK: f64 = 1e-8;

/// Fixed sRGB (D65) XYZ to linear RGB basis used for the boundary.
pub const M: Mat3 = Mat3::from_rows([
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
]);

/// A boundary line `v = slope · u + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Slope
    pub slope: f64,
    /// Intercept
    pub intercept: f64,
}

impl Line {
    /// Perpendicular distance from the origin.
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope * self.slope + 1.0).sqrt()
    }

    /// Distance along the ray at `theta` radians to this line.
    ///
    /// Negative when the line lies behind the origin; infinite when parallel.
    #[inline]
    pub fn ray_length(&self, theta: f64) -> f64 {
        let (sin, cos) = theta.sin_cos();
        self.intercept / (sin - self.slope * cos)
    }
}

/// The six boundary lines at lightness `l`, ordered by channel then by
/// `t ∈ {0, 1}`.
pub fn bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line { slope: 0.0, intercept: 0.0 }; 6];
    for (channel, row) in M.m.iter().enumerate() {
        let [m1, m2, m3] = *row;
        for t in 0..2 {
            let t = t as f64;
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2 - 769_860.0 * t * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * t;
            lines[channel * 2 + t as usize] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

/// Largest chroma in gamut at lightness `l` for every hue.
pub fn max_chroma(l: f64) -> f64 {
    bounds(l)
        .iter()
        .map(Line::distance_from_origin)
        .fold(f64::MAX, f64::min)
}

/// Largest chroma in gamut at lightness `l` and hue `h` (degrees).
///
/// Intersections behind the origin are discarded.
pub fn max_chroma_for_hue(l: f64, h: f64) -> f64 {
    let theta = h.to_radians();
    bounds(l)
        .iter()
        .map(|line| line.ray_length(theta))
        .filter(|len| *len >= 0.0)
        .fold(f64::MAX, f64::min)
}
