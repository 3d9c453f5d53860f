//! CIE tristimulus families: xyY, xyYC, LCHxy, LMS, UCS and UVW.
//!
//! Inputs and outputs are XYZ relative to a white with `Y = 1`.

use tint_math::{from_polar, to_polar, AdaptationMethod, Vec3};
use tint_primaries::Chromaticity;

use super::nan0;

// ============================================================================
// xyY / xyYC / LCHxy
// ============================================================================

/// A zero sum yields the white chromaticity with `Y = 0`.
pub(crate) fn xyy_from_xyz(xyz: Vec3, white: Chromaticity) -> [f64; 3] {
    let sum = xyz.sum();
    if sum == 0.0 {
        return [white.x, white.y, 0.0];
    }
    [xyz.x / sum, xyz.y / sum, xyz.y]
}

pub(crate) fn xyy_to_xyz([x, y, big_y]: [f64; 3]) -> Vec3 {
    if y == 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(x * big_y / y, big_y, (1.0 - x - y) * big_y / y)
}

/// xyY with chromaticity measured from the white.
pub(crate) fn xyyc_from_xyz(xyz: Vec3, white: Chromaticity) -> [f64; 3] {
    let [x, y, big_y] = xyy_from_xyz(xyz, white);
    [x - white.x, y - white.y, big_y]
}

pub(crate) fn xyyc_to_xyz([x, y, big_y]: [f64; 3], white: Chromaticity) -> Vec3 {
    xyy_to_xyz([x + white.x, y + white.y, big_y])
}

/// Polar form of xyYC, ordered `(Y, C, H)`.
pub(crate) fn lchxy_from_xyz(xyz: Vec3, white: Chromaticity) -> [f64; 3] {
    let [x, y, big_y] = xyyc_from_xyz(xyz, white);
    let (c, h) = to_polar(x, y);
    [big_y, c, h]
}

pub(crate) fn lchxy_to_xyz([big_y, c, h]: [f64; 3], white: Chromaticity) -> Vec3 {
    let (x, y) = from_polar(c, h);
    xyyc_to_xyz([x, y, big_y], white)
}

// ============================================================================
// LMS
// ============================================================================

/// Cone response in the profile's adaptation basis.
pub(crate) fn lms_from_xyz(xyz: Vec3, method: AdaptationMethod) -> [f64; 3] {
    (method.matrix() * xyz).to_array()
}

pub(crate) fn lms_to_xyz(v: [f64; 3], method: AdaptationMethod) -> Vec3 {
    method.inverse() * Vec3::from_array(v)
}

// ============================================================================
// UCS (CIE 1960)
// ============================================================================

pub(crate) fn ucs_from_xyz(xyz: Vec3) -> [f64; 3] {
    let Vec3 { x, y, z } = xyz;
    [2.0 * x / 3.0, y, (-x + 3.0 * y + z) / 2.0]
}

pub(crate) fn ucs_to_xyz([u, v, w]: [f64; 3]) -> Vec3 {
    let x = 1.5 * u;
    Vec3::new(x, v, 2.0 * w + x - 3.0 * v)
}

// ============================================================================
// UVW (CIE 1964)
// ============================================================================

/// 1960 `(u, v)`; black falls back to the white's.
fn uv(xyz: Vec3, white: (f64, f64)) -> (f64, f64) {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if d == 0.0 {
        return white;
    }
    (4.0 * xyz.x / d, 6.0 * xyz.y / d)
}

pub(crate) fn uvw_from_xyz(xyz: Vec3, white: Chromaticity) -> [f64; 3] {
    let (u0, v0) = white.to_uv();
    let (u, v) = uv(xyz, (u0, v0));
    let w = 25.0 * (100.0 * xyz.y).cbrt() - 17.0;
    [13.0 * w * (u - u0), 13.0 * w * (v - v0), w]
}

pub(crate) fn uvw_to_xyz([big_u, big_v, w]: [f64; 3], white: Chromaticity) -> Vec3 {
    let (u0, v0) = white.to_uv();
    let y = ((w + 17.0) / 25.0).powi(3) / 100.0;
    let (u, v) = if w == 0.0 {
        (u0, v0)
    } else {
        (big_u / (13.0 * w) + u0, big_v / (13.0 * w) + v0)
    };
    if v == 0.0 {
        return Vec3::ZERO;
    }
    let x = 3.0 * u * y / (2.0 * v);
    let d = 6.0 * y / v;
    Vec3::new(x, y, nan0((d - x - 15.0 * y) / 3.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_primaries::illuminant::{D50, D65};

    const XYZ: Vec3 = Vec3::new(0.35, 0.42, 0.18);

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn test_xyy() {
        let xyy = xyy_from_xyz(XYZ, D65);
        assert!((xyy[0] + xyy[1] - 0.77 / 0.95).abs() < 1e-12);
        assert!(close(xyy_to_xyz(xyy), XYZ));
        assert_eq!(xyy_from_xyz(Vec3::ZERO, D65), [D65.x, D65.y, 0.0]);
    }

    #[test]
    fn test_white_centers_xyyc() {
        let white = D50.to_xyz();
        let [x, y, big_y] = xyyc_from_xyz(white, D50);
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
        assert_eq!(big_y, 1.0);
        assert!(close(lchxy_to_xyz(lchxy_from_xyz(XYZ, D50), D50), XYZ));
    }

    #[test]
    fn test_lms_roundtrip() {
        for method in AdaptationMethod::ALL {
            let back = lms_to_xyz(lms_from_xyz(XYZ, method), method);
            assert!(close(back, XYZ), "{}", method);
        }
    }

    #[test]
    fn test_ucs() {
        assert!(close(ucs_to_xyz(ucs_from_xyz(XYZ)), XYZ));
    }

    #[test]
    fn test_uvw() {
        let back = uvw_to_xyz(uvw_from_xyz(XYZ, D65), D65);
        assert!((back - XYZ).length() < 1e-9, "{:?}", back);

        // The white sits on the W axis
        let [u, v, w] = uvw_from_xyz(D65.to_xyz(), D65);
        assert!(u.abs() < 1e-9 && v.abs() < 1e-9);
        assert!((w - (25.0 * 100f64.cbrt() - 17.0)).abs() < 1e-9);
    }
}
