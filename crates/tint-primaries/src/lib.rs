//! # tint-primaries
//!
//! Color primaries, standard illuminants and RGB-XYZ matrix generation.
//!
//! A working profile's gamut is defined by the CIE xy chromaticities of its
//! three primaries; together with a reference white they determine the
//! matrix that takes linear RGB to XYZ.
//!
//! # Included Primaries
//!
//! | Primaries | Gamut Size | Primary Use |
//! |-----------|------------|-------------|
//! | sRGB / Rec.709 | Small | Web, HDTV |
//! | Apple RGB | Small | Legacy Mac displays |
//! | Adobe RGB | Medium | Print, photography |
//! | DCI-P3 / Display P3 | Medium | Cinema, Apple displays |
//! | Rec.2020 | Large | UHDTV, HDR |
//! | ACES AP1 | Large | Working space (ACEScg) |
//! | Wide Gamut | Large | Adobe Wide Gamut RGB |
//! | ProPhoto | Very Large | Raw processing |
//!
//! # Usage
//!
//! ```rust
//! use tint_primaries::{illuminant, rgb_to_xyz_matrix, SRGB};
//! use tint_math::Vec3;
//!
//! let m = rgb_to_xyz_matrix(&SRGB, illuminant::D65).unwrap();
//!
//! // White (1,1,1) maps to the white point with Y = 1
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - Error type
//! - [`tint-math`] - Matrix operations
//! - [`serde`] - Chromaticities in config files
//!
//! # Used By
//!
//! - `tint-color` - Working profiles

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod illuminant;

use serde::{Deserialize, Serialize};
use tint_core::{Error, Result};
use tint_math::{Mat3, Vec3};

// ============================================================================
// Chromaticity
// ============================================================================

/// CIE 1931 xy chromaticity.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Chromaticity {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tristimulus value with `Y = 1`: `(x/y, 1, (1-x-y)/y)`.
    ///
    /// `y == 0` has no finite tristimulus and yields [`Vec3::ZERO`].
    #[inline]
    pub const fn to_xyz(self) -> Vec3 {
        if self.y == 0.0 {
            Vec3::ZERO
        } else {
            Vec3::new(self.x / self.y, 1.0, (1.0 - self.x - self.y) / self.y)
        }
    }

    /// Chromaticity of a tristimulus value. A zero sum yields `None`.
    #[inline]
    pub fn from_xyz(xyz: Vec3) -> Option<Self> {
        let sum = xyz.sum();
        if sum == 0.0 || !sum.is_finite() {
            None
        } else {
            Some(Self::new(xyz.x / sum, xyz.y / sum))
        }
    }

    /// CIE 1960 UCS `(u, v)` coordinates.
    #[inline]
    pub fn to_uv(self) -> (f64, f64) {
        let d = -2.0 * self.x + 12.0 * self.y + 3.0;
        (4.0 * self.x / d, 6.0 * self.y / d)
    }

    /// CIE 1976 UCS `(u', v')` coordinates.
    #[inline]
    pub fn to_uv_prime(self) -> (f64, f64) {
        let (u, v) = self.to_uv();
        (u, 1.5 * v)
    }
}

impl From<[f64; 2]> for Chromaticity {
    fn from(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Chromaticity> for [f64; 2] {
    fn from(c: Chromaticity) -> Self {
        [c.x, c.y]
    }
}

// ============================================================================
// Primaries
// ============================================================================

/// Chromaticities of the three RGB primaries.
///
/// # Example
///
/// ```rust
/// use tint_primaries::{Chromaticity, Primaries};
///
/// let custom = Primaries::new(
///     Chromaticity::new(0.64, 0.33),
///     Chromaticity::new(0.30, 0.60),
///     Chromaticity::new(0.15, 0.06),
/// );
/// assert_eq!(custom, tint_primaries::SRGB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    /// Red primary
    pub red: Chromaticity,
    /// Green primary
    pub green: Chromaticity,
    /// Blue primary
    pub blue: Chromaticity,
}

impl Primaries {
    /// Creates a primaries set.
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        Self { red, green, blue }
    }

    const fn xy(r: (f64, f64), g: (f64, f64), b: (f64, f64)) -> Self {
        Self::new(
            Chromaticity::new(r.0, r.1),
            Chromaticity::new(g.0, g.1),
            Chromaticity::new(b.0, b.1),
        )
    }
}

/// sRGB primaries.
pub const SRGB: Primaries = Primaries::xy((0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600));

/// Rec.709 primaries (identical to sRGB).
pub const REC709: Primaries = SRGB;

/// Adobe RGB (1998) primaries.
pub const ADOBE_RGB: Primaries = Primaries::xy((0.6400, 0.3300), (0.2100, 0.7100), (0.1500, 0.0600));

/// Apple RGB primaries (Trinitron phosphors).
pub const APPLE_RGB: Primaries = Primaries::xy((0.6250, 0.3400), (0.2800, 0.5950), (0.1550, 0.0700));

/// ProPhoto RGB (ROMM) primaries.
pub const PROPHOTO_RGB: Primaries = Primaries::xy((0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001));

/// Rec.2020 primaries.
pub const REC2020: Primaries = Primaries::xy((0.7080, 0.2920), (0.1700, 0.7970), (0.1310, 0.0460));

/// DCI-P3 primaries.
pub const DCI_P3: Primaries = Primaries::xy((0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600));

/// Display P3 primaries (DCI-P3 primaries, paired with D65 by profiles).
pub const DISPLAY_P3: Primaries = DCI_P3;

/// ACES AP1 primaries (ACEScg).
pub const ACES_AP1: Primaries = Primaries::xy((0.7130, 0.2930), (0.1650, 0.8300), (0.1280, 0.0440));

/// Adobe Wide Gamut RGB primaries.
pub const WIDE_GAMUT: Primaries = Primaries::xy((0.7347, 0.2653), (0.1152, 0.8264), (0.1566, 0.0177));

/// Named primaries, in table order.
pub const ALL: [(&str, Primaries); 10] = [
    ("sRGB", SRGB),
    ("Rec.709", REC709),
    ("Adobe RGB", ADOBE_RGB),
    ("Apple RGB", APPLE_RGB),
    ("ProPhoto RGB", PROPHOTO_RGB),
    ("Rec.2020", REC2020),
    ("DCI-P3", DCI_P3),
    ("Display P3", DISPLAY_P3),
    ("ACES AP1", ACES_AP1),
    ("Wide Gamut", WIDE_GAMUT),
];

/// Looks up primaries by name, ignoring case, spaces and punctuation.
pub fn find(name: &str) -> Result<Primaries> {
    let key = simplify(name);
    ALL.iter()
        .find(|(n, _)| simplify(n) == key)
        .map(|(_, p)| *p)
        .ok_or_else(|| Error::lookup(format!("unknown primaries '{}'", name)))
}

fn simplify(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the linear RGB to XYZ matrix for primaries under a white.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for scaling factors so `(1,1,1)` maps to the white
/// 3. Multiply the primary columns by the scaling factors
///
/// Fails with [`Error::DegenerateProfile`] when the primaries are collinear
/// or the white has `y == 0`.
pub fn rgb_to_xyz_matrix(primaries: &Primaries, white: Chromaticity) -> Result<Mat3> {
    let r = primaries.red.to_xyz();
    let g = primaries.green.to_xyz();
    let b = primaries.blue.to_xyz();
    let w = white.to_xyz();

    if w == Vec3::ZERO {
        return Err(Error::degenerate(format!("white {:?} has y = 0", white)));
    }

    let m = Mat3::from_col_vecs(r, g, b);
    let m_inv = m
        .inverse()
        .ok_or_else(|| Error::degenerate(format!("primaries {:?} are singular", primaries)))?;
    let s = m_inv * w;

    Ok(Mat3::from_col_vecs(r * s.x, g * s.y, b * s.z))
}

/// Computes the XYZ to linear RGB matrix; the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries, white: Chromaticity) -> Result<Mat3> {
    rgb_to_xyz_matrix(primaries, white)?
        .inverse()
        .ok_or_else(|| Error::degenerate(format!("primaries {:?} are singular", primaries)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_srgb_matrix() {
        // Lindbloom's sRGB D65 matrix
        let m = rgb_to_xyz_matrix(&SRGB, illuminant::D65).unwrap();
        assert_relative_eq!(m.m[0][0], 0.4124564, epsilon = 1e-4);
        assert_relative_eq!(m.m[1][1], 0.7151522, epsilon = 1e-4);
        assert_relative_eq!(m.m[2][2], 0.9503041, epsilon = 1e-4);
    }

    #[test]
    fn test_luminance_row_sums_to_one() {
        for (name, p) in ALL {
            let m = rgb_to_xyz_matrix(&p, illuminant::D65).unwrap();
            let y = m.row(1).sum();
            assert!((y - 1.0).abs() < 1e-12, "{}: {}", name, y);
        }
    }

    #[test]
    fn test_inverse() {
        let to_xyz = rgb_to_xyz_matrix(&ADOBE_RGB, illuminant::D65).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&ADOBE_RGB, illuminant::D65).unwrap();
        let v = Vec3::new(0.2, 0.5, 0.9);
        let back = to_rgb * (to_xyz * v);
        assert!((back - v).length() < 1e-12);
    }

    #[test]
    fn test_degenerate() {
        let flat = Primaries::xy((0.2, 0.2), (0.3, 0.3), (0.4, 0.4));
        let err = rgb_to_xyz_matrix(&flat, illuminant::D65).unwrap_err();
        assert!(matches!(err, Error::DegenerateProfile(_)));

        let err = rgb_to_xyz_matrix(&SRGB, Chromaticity::new(0.3, 0.0)).unwrap_err();
        assert!(matches!(err, Error::DegenerateProfile(_)));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("adobe-rgb").unwrap(), ADOBE_RGB);
        assert_eq!(find("REC2020").unwrap(), REC2020);
        assert!(find("bt.601").is_err());
    }

    #[test]
    fn test_chromaticity_yaml() {
        let c: Chromaticity = serde_yaml::from_str("[0.3127, 0.329]").unwrap();
        assert_eq!(c, illuminant::D65);
        let back = Chromaticity::from_xyz(c.to_xyz()).unwrap();
        assert_relative_eq!(back.x, c.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, c.y, epsilon = 1e-12);
    }

    #[test]
    fn test_uv() {
        // D65 u'v' = (0.1978, 0.4683)
        let (u, v) = illuminant::D65.to_uv_prime();
        assert!((u - 0.1978).abs() < 1e-4);
        assert!((v - 0.4683).abs() < 1e-4);
    }
}
