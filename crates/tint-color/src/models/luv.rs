//! CIE 1976 L\*u\*v\* and the Luv-derived perceptual models HSLuv and HPLuv.

use tint_core::cie::{lightness, luminance};
use tint_math::Vec3;

use super::{nan0, nan0_all};
use crate::gamut;

/// CIE 1976 `(u', v')`.
fn uv_prime(xyz: Vec3) -> (f64, f64) {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    (4.0 * xyz.x / d, 9.0 * xyz.y / d)
}

pub(crate) fn luv_from_xyz(xyz: Vec3, white: Vec3) -> [f64; 3] {
    let l = lightness(xyz.y / white.y);
    let (u, v) = uv_prime(xyz);
    let (ur, vr) = uv_prime(white);
    [nan0(l), nan0(13.0 * l * (u - ur)), nan0(13.0 * l * (v - vr))]
}

/// Negative or undefined tristimulus values clamp to 0.
pub(crate) fn luv_to_xyz([l, u, v]: [f64; 3], white: Vec3) -> Vec3 {
    let (u0, v0) = uv_prime(white);
    let y = luminance(l) * white.y;

    let a = (52.0 * l / (u + 13.0 * l * u0) - 1.0) / 3.0;
    let b = -5.0 * y;
    let c = -1.0 / 3.0;
    let d = y * (39.0 * l / (v + 13.0 * l * v0) - 5.0);

    let x = (d - b) / (a - c);
    let z = x * a + b;
    Vec3::from_array(nan0_all([x, y, z]).map(|t| t.max(0.0)))
}

// ============================================================================
// HSLuv / HPLuv
// ============================================================================

/// `(L, C, H)` to HSLuv `(H, S, L)`.
pub(crate) fn hsluv_from_lch([l, c, h]: [f64; 3]) -> [f64; 3] {
    if l > gamut::L_WHITE {
        return [h, 0.0, 100.0];
    }
    if l < gamut::L_BLACK {
        return [h, 0.0, 0.0];
    }
    [h, c / gamut::max_chroma_for_hue(l, h) * 100.0, l]
}

/// HSLuv `(H, S, L)` to `(L, C, H)`.
pub(crate) fn hsluv_to_lch([h, s, l]: [f64; 3]) -> [f64; 3] {
    if l > gamut::L_WHITE {
        return [100.0, 0.0, h];
    }
    if l < gamut::L_BLACK {
        return [0.0, 0.0, h];
    }
    [l, gamut::max_chroma_for_hue(l, h) / 100.0 * s, h]
}

/// `(L, C, H)` to HPLuv `(H, P, L)`.
pub(crate) fn hpluv_from_lch([l, c, h]: [f64; 3]) -> [f64; 3] {
    if l > gamut::L_WHITE {
        return [h, 0.0, 100.0];
    }
    if l < gamut::L_BLACK {
        return [h, 0.0, 0.0];
    }
    [h, c / gamut::max_chroma(l) * 100.0, l]
}

/// HPLuv `(H, P, L)` to `(L, C, H)`.
pub(crate) fn hpluv_to_lch([h, p, l]: [f64; 3]) -> [f64; 3] {
    if l > gamut::L_WHITE {
        return [100.0, 0.0, h];
    }
    if l < gamut::L_BLACK {
        return [0.0, 0.0, h];
    }
    [l, gamut::max_chroma(l) / 100.0 * p, h]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_primaries::illuminant::D65;

    #[test]
    fn test_luv_known_value() {
        // sRGB red under D65: Luv(53.24, 175.01, 37.76)
        let red = Vec3::new(0.4124564, 0.2126729, 0.0193339);
        let [l, u, v] = luv_from_xyz(red, D65.to_xyz());
        assert!((l - 53.24).abs() < 0.01, "L={}", l);
        assert!((u - 175.01).abs() < 0.1, "u={}", u);
        assert!((v - 37.76).abs() < 0.1, "v={}", v);
    }

    #[test]
    fn test_luv_roundtrip() {
        let w = D65.to_xyz();
        for xyz in [Vec3::new(0.2, 0.3, 0.1), Vec3::new(0.6, 0.5, 0.9), Vec3::new(0.004, 0.005, 0.002)] {
            let back = luv_to_xyz(luv_from_xyz(xyz, w), w);
            assert!((back - xyz).length() < 1e-12, "{:?}", back);
        }
    }

    #[test]
    fn test_luv_black() {
        let w = D65.to_xyz();
        assert_eq!(luv_from_xyz(Vec3::ZERO, w), [0.0, 0.0, 0.0]);
        assert_eq!(luv_to_xyz([0.0, 0.0, 0.0], w), Vec3::ZERO);
    }

    #[test]
    fn test_hsluv_extremes() {
        assert_eq!(hsluv_from_lch([100.0, 0.0, 12.0]), [12.0, 0.0, 100.0]);
        assert_eq!(hsluv_from_lch([0.0, 0.0, 12.0]), [12.0, 0.0, 0.0]);
        assert_eq!(hpluv_to_lch([12.0, 50.0, 0.0]), [0.0, 0.0, 12.0]);
    }

    #[test]
    fn test_hsluv_roundtrip() {
        let lch = [55.0, 30.0, 210.0];
        let back = hsluv_to_lch(hsluv_from_lch(lch));
        assert!((back[1] - 30.0).abs() < 1e-9);
        let back = hpluv_to_lch(hpluv_from_lch(lch));
        assert!((back[1] - 30.0).abs() < 1e-9);
    }
}
