//! Cone-response bases for chromatic adaptation.
//!
//! A chromatic adaptation transform moves XYZ into a cone-response space
//! with a fixed 3x3 basis, scales each cone channel by the ratio of the
//! destination and source whites, and moves back:
//!
//! ```text
//! XYZ' = M^-1 * diag(Wdst_cone / Wsrc_cone) * M * XYZ
//! ```
//!
//! # Supported Bases
//!
//! - [`BRADFORD`] - Default choice, used by ICC
//! - [`BRADFORD_SHARP`] - Spectrally sharpened Bradford
//! - [`VON_KRIES`] - Hunt-Pointer-Estevez for equal energy
//! - [`VON_KRIES_ADJUSTED`] - Hunt-Pointer-Estevez normalized to D65
//! - [`CAT97`], [`CAT2000`], [`CAT02`] - CMC and CIECAM fits
//! - [`XYZ_SCALING`] - Identity basis
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{adapt_matrix, AdaptationMethod, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//! let m = adapt_matrix(AdaptationMethod::Bradford, d65, d50).unwrap();
//!
//! let white = m * d65;
//! assert!((white.z - d50.z).abs() < 1e-9);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_core::{Error, Result};
use tracing::warn;

use crate::{Mat3, Vec3};

// ============================================================================
// Cone-Response Bases
// ============================================================================

/// Identity basis: scales XYZ directly.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Von Kries basis (Hunt-Pointer-Estevez, equal-energy normalized).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.00000, 0.00000, 1.00000],
]);

/// Von Kries basis (Hunt-Pointer-Estevez, D65 normalized).
pub const VON_KRIES_ADJUSTED: Mat3 = Mat3::from_rows([
    [0.4002, 0.7076, -0.0808],
    [-0.2263, 1.1653, 0.0457],
    [0.0000, 0.0000, 0.9182],
]);

/// Bradford basis.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0686, 1.0296],
]);

/// Spectrally sharpened Bradford basis.
pub const BRADFORD_SHARP: Mat3 = Mat3::from_rows([
    [1.2694, -0.0988, -0.1706],
    [-0.8364, 1.8006, 0.0357],
    [0.0297, -0.0315, 1.0018],
]);

/// CMCCAT97 basis.
pub const CAT97: Mat3 = Mat3::from_rows([
    [0.8562, 0.3372, -0.1934],
    [-0.8360, 1.8327, 0.0033],
    [0.0357, -0.00469, 1.0112],
]);

/// CMCCAT2000 basis.
pub const CAT2000: Mat3 = Mat3::from_rows([
    [0.7982, 0.3389, -0.1371],
    [-0.5918, 1.5512, 0.0406],
    [0.0008, 0.0239, 0.9753],
]);

/// CAT02 basis (CIECAM02).
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

// ============================================================================
// Method Selection
// ============================================================================

/// Selects a cone-response basis.
///
/// Serialized in snake_case (`bradford`, `von_kries_adjusted`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationMethod {
    /// [`XYZ_SCALING`]
    XyzScaling,
    /// [`VON_KRIES`]
    VonKries,
    /// [`VON_KRIES_ADJUSTED`]
    VonKriesAdjusted,
    /// [`BRADFORD`]
    #[default]
    Bradford,
    /// [`BRADFORD_SHARP`]
    BradfordSharp,
    /// [`CAT97`]
    Cat97,
    /// [`CAT2000`]
    Cat2000,
    /// [`CAT02`]
    Cat02,
}

impl AdaptationMethod {
    /// All methods in declaration order.
    pub const ALL: [AdaptationMethod; 8] = [
        Self::XyzScaling,
        Self::VonKries,
        Self::VonKriesAdjusted,
        Self::Bradford,
        Self::BradfordSharp,
        Self::Cat97,
        Self::Cat2000,
        Self::Cat02,
    ];

    /// The basis matrix (XYZ to cone response).
    pub const fn matrix(self) -> Mat3 {
        match self {
            Self::XyzScaling => XYZ_SCALING,
            Self::VonKries => VON_KRIES,
            Self::VonKriesAdjusted => VON_KRIES_ADJUSTED,
            Self::Bradford => BRADFORD,
            Self::BradfordSharp => BRADFORD_SHARP,
            Self::Cat97 => CAT97,
            Self::Cat2000 => CAT2000,
            Self::Cat02 => CAT02,
        }
    }

    /// The inverse basis (cone response to XYZ).
    ///
    /// Every published basis is non-singular.
    pub fn inverse(self) -> Mat3 {
        self.matrix().inverse().unwrap_or(Mat3::IDENTITY)
    }

    /// Short name as used in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XyzScaling => "xyz_scaling",
            Self::VonKries => "von_kries",
            Self::VonKriesAdjusted => "von_kries_adjusted",
            Self::Bradford => "bradford",
            Self::BradfordSharp => "bradford_sharp",
            Self::Cat97 => "cat97",
            Self::Cat2000 => "cat2000",
            Self::Cat02 => "cat02",
        }
    }
}

impl fmt::Display for AdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdaptationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| Error::lookup(format!("unknown adaptation method '{}'", s)))
    }
}

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Per-channel cone scale `dst_cone / src_cone` for two whites.
///
/// Fails with [`Error::DegenerateProfile`] if either white has a zero (or
/// non-finite) cone response.
pub fn cone_scale(method: AdaptationMethod, src_white: Vec3, dst_white: Vec3) -> Result<Vec3> {
    let basis = method.matrix();
    let src_cone = basis * src_white;
    let dst_cone = basis * dst_white;

    for (label, cone) in [("source", src_cone), ("target", dst_cone)] {
        let degenerate = !cone.is_finite() || cone.to_array().iter().any(|&c| c == 0.0);
        if degenerate {
            warn!(?method, ?cone, "{} white has a zero cone response", label);
            return Err(Error::degenerate(format!(
                "{} white {:?} has a zero {} cone response",
                label,
                cone.to_array(),
                method
            )));
        }
    }

    Ok(dst_cone / src_cone)
}

/// Full adaptation matrix `M^-1 * diag(scale) * M` between two whites.
///
/// # Example
///
/// ```rust
/// use tint_math::{adapt_matrix, AdaptationMethod, Mat3, Vec3};
///
/// let d65 = Vec3::new(0.95047, 1.0, 1.08883);
/// let same = adapt_matrix(AdaptationMethod::Cat02, d65, d65).unwrap();
/// assert!((same.m[0][0] - 1.0).abs() < 1e-12);
/// ```
pub fn adapt_matrix(method: AdaptationMethod, src_white: Vec3, dst_white: Vec3) -> Result<Mat3> {
    let s = cone_scale(method, src_white, dst_white)?;
    Ok(method.inverse() * Mat3::diagonal(s.x, s.y, s.z) * method.matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);
    const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

    #[test]
    fn test_white_maps_to_white() {
        for method in AdaptationMethod::ALL {
            let m = adapt_matrix(method, D65, D50).unwrap();
            let w = m * D65;
            assert!((w.x - D50.x).abs() < 1e-9, "{}: {:?}", method, w);
            assert!((w.y - D50.y).abs() < 1e-9, "{}: {:?}", method, w);
            assert!((w.z - D50.z).abs() < 1e-9, "{}: {:?}", method, w);
        }
    }

    #[test]
    fn test_adapt_matrix_roundtrip() {
        let fwd = adapt_matrix(AdaptationMethod::Bradford, D65, D50).unwrap();
        let back = adapt_matrix(AdaptationMethod::Bradford, D50, D65).unwrap();
        let roundtrip = back * fwd;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (roundtrip.m[i][j] - expected).abs() < 1e-12,
                    "roundtrip[{}][{}] = {} (expected {})",
                    i,
                    j,
                    roundtrip.m[i][j],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_known_bradford_d65_to_d50() {
        // Lindbloom's published Bradford D65 -> D50 matrix
        let m = adapt_matrix(AdaptationMethod::Bradford, D65, D50).unwrap();
        assert!((m.m[0][0] - 1.0478112).abs() < 1e-3);
        assert!((m.m[1][1] - 0.9904844).abs() < 1e-3);
        assert!((m.m[2][2] - 0.7521316).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_white() {
        let err = cone_scale(AdaptationMethod::Bradford, Vec3::ZERO, D65).unwrap_err();
        assert!(matches!(err, Error::DegenerateProfile(_)));

        let err = cone_scale(AdaptationMethod::XyzScaling, D65, Vec3::new(1.0, 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, Error::DegenerateProfile(_)));
    }

    #[test]
    fn test_parse_method() {
        assert_eq!("Bradford".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::Bradford);
        assert_eq!("von-kries".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::VonKries);
        assert_eq!("CAT02".parse::<AdaptationMethod>().unwrap(), AdaptationMethod::Cat02);
        assert!("hunt".parse::<AdaptationMethod>().is_err());
    }

    #[test]
    fn test_bases_invertible() {
        for method in AdaptationMethod::ALL {
            assert!(method.matrix().inverse().is_some(), "{} is singular", method);
        }
    }
}
