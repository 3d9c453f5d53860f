//! Per-family conversion functions.
//!
//! Each family module exposes pairs of plain functions, `*_from_hub` /
//! `*_to_hub` (or `*_from_xyz` / `*_to_xyz` for the CIE families). The
//! [`convert`](crate::convert) dispatcher wires them to [`Model`](crate::Model)
//! tags. Cylindrical forms are built by composing a Cartesian family with
//! [`lch_from_lab`] / [`lab_from_lch`].

pub(crate) mod cam;
pub(crate) mod device;
pub(crate) mod hexcone;
pub(crate) mod hue;
pub(crate) mod jz;
pub(crate) mod lab;
pub(crate) mod luma;
pub(crate) mod luv;
pub(crate) mod ok;
pub(crate) mod quad;
pub(crate) mod tristimulus;

use tint_math::{adapt_matrix, from_polar, to_polar, Vec3};
use tint_primaries::illuminant;

use crate::WorkingProfile;

/// D65 tristimulus with `Y = 1`, the white Oklab and Jzazbz are built on.
pub(crate) const D65_XYZ: Vec3 = illuminant::D65.to_xyz();

/// Replaces NaN with 0. Infinities pass through.
#[inline]
pub(crate) fn nan0(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

/// `[nan0; N]` over an array.
#[inline]
pub(crate) fn nan0_all<const N: usize>(v: [f64; N]) -> [f64; N] {
    v.map(nan0)
}

/// `(L, a, b)` to `(L, C, H)`.
#[inline]
pub(crate) fn lch_from_lab([l, a, b]: [f64; 3]) -> [f64; 3] {
    let (c, h) = to_polar(a, b);
    [l, c, h]
}

/// `(L, C, H)` to `(L, a, b)`.
#[inline]
pub(crate) fn lab_from_lch([l, c, h]: [f64; 3]) -> [f64; 3] {
    let (a, b) = from_polar(c, h);
    [l, a, b]
}

/// Adapts XYZ under the profile white onto D65 with the profile's basis.
///
/// A degenerate profile white gives black.
pub(crate) fn to_d65(xyz: Vec3, p: &WorkingProfile) -> Vec3 {
    adapt_between(xyz, p.white_xyz(), D65_XYZ, p)
}

/// Inverse of [`to_d65`].
pub(crate) fn from_d65(xyz: Vec3, p: &WorkingProfile) -> Vec3 {
    adapt_between(xyz, D65_XYZ, p.white_xyz(), p)
}

fn adapt_between(xyz: Vec3, src: Vec3, dst: Vec3, p: &WorkingProfile) -> Vec3 {
    if src == dst {
        return xyz;
    }
    match adapt_matrix(p.adaptation(), src, dst) {
        Ok(m) => m * xyz,
        Err(_) => Vec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan0() {
        assert_eq!(nan0(f64::NAN), 0.0);
        assert_eq!(nan0(f64::INFINITY), f64::INFINITY);
        assert_eq!(nan0_all([1.0, f64::NAN, -2.0]), [1.0, 0.0, -2.0]);
    }

    #[test]
    fn test_d65_adaptation() {
        use crate::profiles;

        let srgb = &profiles::SRGB;
        let xyz = Vec3::new(0.3, 0.4, 0.2);
        assert_eq!(to_d65(xyz, srgb), xyz);

        let prophoto = &profiles::PROPHOTO_RGB;
        let white = to_d65(prophoto.white_xyz(), prophoto);
        assert!((white - D65_XYZ).length() < 1e-12, "{:?}", white);
        assert!((from_d65(to_d65(xyz, prophoto), prophoto) - xyz).length() < 1e-12);
    }

    #[test]
    fn test_polar_pair() {
        let lch = lch_from_lab([50.0, 0.0, -20.0]);
        assert!((lch[1] - 20.0).abs() < 1e-12);
        assert!((lch[2] - 270.0).abs() < 1e-9);
        let lab = lab_from_lch(lch);
        assert!(lab[1].abs() < 1e-12 && (lab[2] + 20.0).abs() < 1e-12);
    }
}
