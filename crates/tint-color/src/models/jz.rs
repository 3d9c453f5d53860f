//! Jzazbz (Labj) and IPT.
//!
//! Both take XYZ relative to D65 at `Y = 1`; the dispatcher adapts profile
//! XYZ onto D65 first. Jzazbz places that white at 100 cd/m² before applying
//! its PQ-shaped nonlinearity.

use tint_math::{Mat3, Vec3};

use super::nan0_all;

// ============================================================================
// Jzazbz
// ============================================================================

const B: f64 = 1.15;
const G: f64 = 0.66;
const C1: f64 = 3424.0 / 4096.0;
const C2: f64 = 2413.0 / 128.0;
const C3: f64 = 2392.0 / 128.0;
const N: f64 = 2610.0 / 16384.0;
const P: f64 = 1.7 * 2523.0 / 32.0;
const D: f64 = -0.56;
const D0: f64 = 1.6295499532821566e-11;

/// Absolute luminance of the reference white, cd/m².
const WHITE_LUMINANCE: f64 = 100.0;

const TO_LMS: Mat3 = Mat3::from_rows([
    [0.41478972, 0.579999, 0.0146480],
    [-0.2015100, 1.120649, 0.0531008],
    [-0.0166008, 0.264800, 0.6684799],
]);

const TO_IAB: Mat3 = Mat3::from_rows([
    [0.5, 0.5, 0.0],
    [3.524000, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
]);

/// PQ encode, mirrored for negative input.
fn pq(x: f64) -> f64 {
    let xn = (x.abs() / 10_000.0).powf(N);
    ((C1 + C2 * xn) / (1.0 + C3 * xn)).powf(P).copysign(x)
}

fn pq_inv(x: f64) -> f64 {
    let xp = x.abs().powf(1.0 / P);
    (10_000.0 * ((C1 - xp) / (C3 * xp - C2)).powf(1.0 / N)).copysign(x)
}

pub(crate) fn jzazbz_from_xyz(xyz: Vec3) -> [f64; 3] {
    let Vec3 { x, y, z } = xyz * WHITE_LUMINANCE;
    let xp = B * x - (B - 1.0) * z;
    let yp = G * y - (G - 1.0) * x;

    let lms = (TO_LMS * Vec3::new(xp, yp, z)).map(pq);
    let Vec3 { x: iz, y: az, z: bz } = TO_IAB * lms;
    let jz = (1.0 + D) * iz / (1.0 + D * iz) - D0;
    nan0_all([jz, az, bz])
}

pub(crate) fn jzazbz_to_xyz([jz, az, bz]: [f64; 3]) -> Vec3 {
    let (Some(iab_inv), Some(lms_inv)) = (TO_IAB.inverse(), TO_LMS.inverse()) else {
        return Vec3::ZERO;
    };
    let jz = jz + D0;
    let iz = jz / (1.0 + D - D * jz);

    let lms = (iab_inv * Vec3::new(iz, az, bz)).map(pq_inv);
    let Vec3 { x: xp, y: yp, z } = lms_inv * lms;

    let x = (xp + (B - 1.0) * z) / B;
    let y = (yp + (G - 1.0) * x) / G;
    Vec3::from_array(nan0_all([x, y, z])) / WHITE_LUMINANCE
}

// ============================================================================
// IPT
// ============================================================================

const HPE: Mat3 = Mat3::from_rows([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0, 0.0, 0.9184],
]);

const TO_IPT: Mat3 = Mat3::from_rows([
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

const IPT_EXPONENT: f64 = 0.43;

pub(crate) fn ipt_from_xyz(xyz: Vec3) -> [f64; 3] {
    let lms = (HPE * xyz).signed_powf(IPT_EXPONENT);
    (TO_IPT * lms).to_array()
}

pub(crate) fn ipt_to_xyz(ipt: [f64; 3]) -> Vec3 {
    let (Some(ipt_inv), Some(hpe_inv)) = (TO_IPT.inverse(), HPE.inverse()) else {
        return Vec3::ZERO;
    };
    let lms = (ipt_inv * Vec3::from_array(ipt)).signed_powf(1.0 / IPT_EXPONENT);
    hpe_inv * lms
}
