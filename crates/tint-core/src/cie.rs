//! CIE constants.
//!
//! The exact rational forms of the L* threshold and slope (CIE 15:2004 as
//! amended), used by Lab, Luv and the Luv gamut search.

/// Threshold between the linear and cube-root segments of L*: `216 / 24389`.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// Slope of the linear segment of L*: `24389 / 27`.
pub const KAPPA: f64 = 24389.0 / 27.0;

/// CIE lightness from relative luminance (`y` relative to white, white = 1).
///
/// ```rust
/// use tint_core::cie::lightness;
///
/// assert!((lightness(1.0) - 100.0).abs() < 1e-9);
/// assert_eq!(lightness(0.0), 0.0);
/// ```
#[inline]
pub fn lightness(y: f64) -> f64 {
    if y > EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        KAPPA * y
    }
}

/// Relative luminance from CIE lightness; inverse of [`lightness`].
#[inline]
pub fn luminance(l: f64) -> f64 {
    if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    }
}
