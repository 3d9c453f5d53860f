//! Cross-profile chromatic adaptation.
//!
//! Moves a stimulus from one working profile's white to another's by scaling
//! its cone response in the source profile's adaptation basis.
//!
//! ```text
//! device RGB --decode--> linear --M_src--> XYZ --cone scale--> XYZ' --M_dst^-1--> linear --encode--> device RGB
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_color::adapt::adapt_rgb;
//! use tint_color::profiles;
//!
//! // White stays white across a D65 -> D50 change
//! let white = adapt_rgb([255.0; 3], &profiles::SRGB, &profiles::PROPHOTO_RGB)?;
//! assert!(white.iter().all(|c| (c - 255.0).abs() < 1e-6));
//! # Ok::<(), tint_core::Error>(())
//! ```

use tint_core::Result;
use tint_math::{cone_scale, Vec3};
use tracing::trace;

use crate::WorkingProfile;

/// Adapts XYZ from the `source` white to the `target` white.
///
/// Uses the source profile's adaptation basis.
///
/// # Errors
///
/// [`DegenerateProfile`](tint_core::Error::DegenerateProfile) when either
/// white has a zero cone response.
pub fn adapt_xyz(xyz: Vec3, source: &WorkingProfile, target: &WorkingProfile) -> Result<Vec3> {
    let method = source.adaptation();
    let scale = cone_scale(method, source.white_xyz(), target.white_xyz())?;
    let cone = method.matrix() * xyz;
    Ok(method.inverse() * (cone * scale))
}

/// Adapts device RGB (0-255) encoded under `source` into `target`.
///
/// Equal profiles return the input unchanged.
///
/// # Errors
///
/// Same as [`adapt_xyz`].
pub fn adapt_rgb(rgb: [f64; 3], source: &WorkingProfile, target: &WorkingProfile) -> Result<[f64; 3]> {
    if source == target {
        return Ok(rgb);
    }
    let linear = source.decode(Vec3::from_array(rgb) / 255.0);
    let xyz = adapt_xyz(source.to_xyz(linear), source, target)?;
    let out = (target.encode(target.from_xyz(xyz)) * 255.0).to_array();
    trace!(?rgb, ?out, method = %source.adaptation(), "adapted device color");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;
    use tint_primaries::Chromaticity;
    use tint_transfer::TransferCurve;

    #[test]
    fn test_equal_profiles_identity() {
        let rgb = [12.5, 200.0, 99.0];
        assert_eq!(adapt_rgb(rgb, &profiles::SRGB, &profiles::SRGB).unwrap(), rgb);
    }

    #[test]
    fn test_white_maps_to_white() {
        let src = &profiles::SRGB;
        let dst = &profiles::PROPHOTO_RGB;
        let out = adapt_xyz(src.white_xyz(), src, dst).unwrap();
        assert!((out - dst.white_xyz()).length() < 1e-12, "{:?}", out);
    }

    #[test]
    fn test_roundtrip() {
        let a = &profiles::SRGB;
        let b = &profiles::PROPHOTO_RGB;
        let rgb = [40.0, 150.0, 220.0];
        let there = adapt_rgb(rgb, a, b).unwrap();
        let back = adapt_rgb(there, b, a).unwrap();
        for (x, y) in back.iter().zip(rgb) {
            assert!((x - y).abs() < 1e-6, "{:?}", back);
        }
    }

    #[test]
    fn test_same_white_only_changes_primaries() {
        // sRGB -> Display P3 share D65: no cone scaling, pure matrix change
        let src = &profiles::SRGB;
        let dst = &profiles::DISPLAY_P3;
        let xyz = Vec3::new(0.2, 0.3, 0.4);
        let out = adapt_xyz(xyz, src, dst).unwrap();
        assert!((out - xyz).length() < 1e-12);
    }

    #[test]
    fn test_degenerate_white() {
        let broken =
            WorkingProfile::from_primaries(tint_primaries::SRGB, Chromaticity::new(0.3, 0.0), TransferCurve::Srgb);
        let err = adapt_rgb([10.0, 20.0, 30.0], &profiles::SRGB, &broken).unwrap_err();
        assert!(matches!(err, tint_core::Error::DegenerateProfile(_)));
    }
}
