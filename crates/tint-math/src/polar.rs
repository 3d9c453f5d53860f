//! Cartesian to polar (hue-chroma) transforms.
//!
//! Shared by every cylindrical family built on a Cartesian pair: LCHab from
//! Lab, LCHuv from Luv, and so on. Hue is in degrees and always normalized
//! into `[0, 360)`.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{from_polar, to_polar};
//!
//! let (c, h) = to_polar(0.0, 2.0);
//! assert!((c - 2.0).abs() < 1e-12);
//! assert!((h - 90.0).abs() < 1e-12);
//!
//! let (a, b) = from_polar(c, h);
//! assert!(a.abs() < 1e-12 && (b - 2.0).abs() < 1e-12);
//! ```

/// Wraps an angle in degrees into `[0, 360)`. Exactly 360 maps to 0.
///
/// # Example
///
/// ```rust
/// use tint_math::normalize_hue;
///
/// assert_eq!(normalize_hue(360.0), 0.0);
/// assert_eq!(normalize_hue(-90.0), 270.0);
/// assert_eq!(normalize_hue(725.0), 5.0);
/// ```
#[inline]
pub fn normalize_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Converts a Cartesian pair to `(chroma, hue_degrees)`.
///
/// Chroma is the Euclidean norm; hue is `atan2(b, a)` normalized to `[0, 360)`.
#[inline]
pub fn to_polar(a: f64, b: f64) -> (f64, f64) {
    let chroma = a.hypot(b);
    let hue = normalize_hue(b.atan2(a).to_degrees());
    (chroma, hue)
}

/// Converts `(chroma, hue_degrees)` back to a Cartesian pair.
#[inline]
pub fn from_polar(chroma: f64, hue: f64) -> (f64, f64) {
    let (sin, cos) = hue.to_radians().sin_cos();
    (chroma * cos, chroma * sin)
}

/// Signed angular difference `to - from` in degrees, in `(-180, 180]`.
#[inline]
pub fn hue_delta(from: f64, to: f64) -> f64 {
    let d = normalize_hue(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrants() {
        let cases = [(1.0, 0.0, 0.0), (0.0, 1.0, 90.0), (-1.0, 0.0, 180.0), (0.0, -1.0, 270.0)];
        for (a, b, expected) in cases {
            let (c, h) = to_polar(a, b);
            assert!((c - 1.0).abs() < 1e-12);
            assert!((h - expected).abs() < 1e-9, "({}, {}) -> {}", a, b, h);
        }
    }

    #[test]
    fn test_hue_range() {
        for i in -720..=720 {
            let h = normalize_hue(i as f64 * 0.5);
            assert!((0.0..360.0).contains(&h), "{} -> {}", i, h);
        }
        assert_eq!(normalize_hue(-1e-18), 0.0);
    }

    #[test]
    fn test_roundtrip() {
        for i in 0..36 {
            let h = i as f64 * 10.0;
            let (a, b) = from_polar(42.0, h);
            let (c, back) = to_polar(a, b);
            assert!((c - 42.0).abs() < 1e-9);
            assert!(hue_delta(h, back).abs() < 1e-9, "{} -> {}", h, back);
        }
    }

    #[test]
    fn test_zero_chroma() {
        let (c, h) = to_polar(0.0, 0.0);
        assert_eq!(c, 0.0);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_hue_delta() {
        assert!((hue_delta(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((hue_delta(10.0, 350.0) + 20.0).abs() < 1e-12);
    }
}
