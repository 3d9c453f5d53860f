//! CIE 1976 L\*a\*b\* and Hunter Lab.

use tint_core::cie::{lightness, EPSILON, KAPPA};
use tint_math::Vec3;

use super::nan0_all;

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(ft: f64) -> f64 {
    let t = ft * ft * ft;
    if t > EPSILON { t } else { (116.0 * ft - 16.0) / KAPPA }
}

/// XYZ to CIE Lab against `white` (both with the white at `Y = 1`).
pub(crate) fn lab_from_xyz(xyz: Vec3, white: Vec3) -> [f64; 3] {
    let r = xyz / white;
    let (fx, fy, fz) = (f(r.x), f(r.y), f(r.z));
    nan0_all([lightness(r.y), 500.0 * (fx - fy), 200.0 * (fy - fz)])
}

/// CIE Lab to XYZ against `white`.
pub(crate) fn lab_to_xyz([l, a, b]: [f64; 3], white: Vec3) -> Vec3 {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    let yr = if l > KAPPA * EPSILON { fy * fy * fy } else { l / KAPPA };
    Vec3::new(f_inv(fx), yr, f_inv(fz)) * white
}

// ============================================================================
// Hunter Lab
// ============================================================================

/// `(Ka, Kb)` for a white on the `Y = 100` scale.
fn hunter_k(white: Vec3) -> (f64, f64) {
    let w = white * 100.0;
    (175.0 / 198.04 * (w.x + w.y), 70.0 / 218.11 * (w.y + w.z))
}

pub(crate) fn labh_from_xyz(xyz: Vec3, white: Vec3) -> [f64; 3] {
    let (ka, kb) = hunter_k(white);
    let r = xyz / white;
    let sq = r.y.sqrt();
    if sq == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    nan0_all([100.0 * sq, ka * (r.x - r.y) / sq, kb * (r.y - r.z) / sq])
}

pub(crate) fn labh_to_xyz([l, a, b]: [f64; 3], white: Vec3) -> Vec3 {
    let (ka, kb) = hunter_k(white);
    let sq = l / 100.0;
    let yr = sq * sq;
    let xr = a / ka * sq + yr;
    let zr = yr - b / kb * sq;
    Vec3::from_array(nan0_all([xr, yr, zr])) * white
}
