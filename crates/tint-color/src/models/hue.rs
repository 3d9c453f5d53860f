//! Hue-based models outside the hexcone: HCY, HSP, HSM, TSL, rgG and LCHrg.

use std::f64::consts::{FRAC_PI_3, TAU};

use tint_math::{from_polar, normalize_hue, to_polar, Vec3};

use super::{hexcone, nan0, nan0_all};

// ============================================================================
// HCY (HSI)
// ============================================================================

/// Hue by arccos of the chromaticity, C = 1 - min/I, Y = I on a 0..255 scale.
pub(crate) fn hcy_from_hub(rgb: Vec3) -> [f64; 3] {
    let sum = rgb.sum();
    let Vec3 { x: r, y: g, z: b } = rgb / sum;

    let num = 0.5 * ((r - g) + (r - b));
    let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();
    let mut h = (num / den).clamp(-1.0, 1.0).acos();
    if b > g {
        h = TAU - h;
    }

    let c = 1.0 - 3.0 * r.min(g).min(b);
    nan0_all([normalize_hue(h.to_degrees()), c * 100.0, sum / 3.0 * 255.0])
}

pub(crate) fn hcy_to_hub([h, c, y]: [f64; 3]) -> Vec3 {
    let mut h = normalize_hue(h).to_radians();
    let c = c / 100.0;
    let y = y / 255.0;

    // Each third of the circle pins one channel at y(1 - c)
    let sector = |h: f64| {
        let low = y * (1.0 - c);
        let high = y * (1.0 + c * h.cos() / (FRAC_PI_3 - h).cos());
        let mid = 3.0 * y - low - high;
        (low, high, mid)
    };

    let (r, g, b) = if h < 2.0 * FRAC_PI_3 {
        let (low, high, mid) = sector(h);
        (high, mid, low)
    } else if h < 4.0 * FRAC_PI_3 {
        h -= 2.0 * FRAC_PI_3;
        let (low, high, mid) = sector(h);
        (low, high, mid)
    } else {
        h -= 4.0 * FRAC_PI_3;
        let (low, high, mid) = sector(h);
        (mid, low, high)
    };
    Vec3::new(r, g, b)
}

// ============================================================================
// HSP
// ============================================================================

const PR: f64 = 0.299;
const PG: f64 = 0.587;
const PB: f64 = 0.114;

/// Hexcone hue, S = 1 - min/max, perceived brightness P.
pub(crate) fn hsp_from_hub(rgb: Vec3) -> [f64; 3] {
    let max = rgb.max_element();
    let s = if max == 0.0 { 0.0 } else { 1.0 - rgb.min_element() / max };
    let p = (PR * rgb.x * rgb.x + PG * rgb.y * rgb.y + PB * rgb.z * rgb.z).sqrt();
    [hexcone::hue(rgb), s * 100.0, nan0(p) * 100.0]
}

/// Exact sextant inverse of perceived brightness.
pub(crate) fn hsp_to_hub([h, s, p]: [f64; 3]) -> Vec3 {
    let h = normalize_hue(h) / 360.0;
    let s = s / 100.0;
    let p = p / 100.0;
    let min_over_max = 1.0 - s;

    // (weight of max, weight of mid, weight of min), hue fraction within the
    // sextant, and the channel order (max, mid, min) as indices into rgb.
    let (sextant, order, weights) = match (h * 6.0) as u8 {
        0 => (h * 6.0, [0, 1, 2], [PR, PG, PB]),
        1 => ((2.0 / 6.0 - h) * 6.0, [1, 0, 2], [PG, PR, PB]),
        2 => ((h - 2.0 / 6.0) * 6.0, [1, 2, 0], [PG, PB, PR]),
        3 => ((4.0 / 6.0 - h) * 6.0, [2, 1, 0], [PB, PG, PR]),
        4 => ((h - 4.0 / 6.0) * 6.0, [2, 0, 1], [PB, PR, PG]),
        _ => ((1.0 - h) * 6.0, [0, 2, 1], [PR, PB, PG]),
    };
    let [w_max, w_mid, w_min] = weights;

    let (max, mid, min) = if min_over_max > 0.0 {
        let part = 1.0 + sextant * (1.0 / min_over_max - 1.0);
        let min = p / (w_max / min_over_max / min_over_max + w_mid * part * part + w_min).sqrt();
        let max = min / min_over_max;
        (max, min + sextant * (max - min), min)
    } else {
        let max = (p * p / (w_max + w_mid * sextant * sextant)).sqrt();
        (max, max * sextant, 0.0)
    };

    let mut rgb = [0.0; 3];
    rgb[order[0]] = max;
    rgb[order[1]] = mid;
    rgb[order[2]] = min;
    Vec3::from_array(nan0_all(rgb))
}

// ============================================================================
// HSM
// ============================================================================

/// Normal of the mixture plane, `(4, 2, 1)`.
const MIX: Vec3 = Vec3::new(4.0, 2.0, 1.0);

/// In-plane axis through red, `(3, -4, -4) / √41`.
fn axis_u() -> Vec3 {
    Vec3::new(3.0, -4.0, -4.0) / 41f64.sqrt()
}

/// In-plane axis at +90°, `(4, 2, 1) × (3, -4, -4)` normalized.
fn axis_w() -> Vec3 {
    Vec3::new(-4.0, 19.0, -22.0) / 861f64.sqrt()
}

/// In-plane unit direction at hue `h`.
fn hsm_direction(h: f64) -> Vec3 {
    let (sin, cos) = h.to_radians().sin_cos();
    axis_u() * cos + axis_w() * sin
}

/// Distance from gray `m` along unit `dir` to the surface of the RGB cube.
///
/// Every in-gamut color therefore has `S <= 100%`, reaching 100% on the
/// cube's faces.
fn hsm_radius(m: f64, dir: Vec3) -> f64 {
    dir.to_array()
        .into_iter()
        .map(|d| {
            if d > 0.0 {
                (1.0 - m) / d
            } else if d < 0.0 {
                -m / d
            } else {
                f64::INFINITY
            }
        })
        .fold(f64::INFINITY, f64::min)
}

pub(crate) fn hsm_from_hub(rgb: Vec3) -> [f64; 3] {
    let m = rgb.dot(MIX) / 7.0;
    let d = rgb - Vec3::splat(m);
    let len = d.length();
    if len == 0.0 {
        return [0.0, 0.0, m * 100.0];
    }
    let h = normalize_hue(d.dot(axis_w()).atan2(d.dot(axis_u())).to_degrees());
    let s = nan0(len / hsm_radius(m, d / len));
    [h, s * 100.0, m * 100.0]
}

pub(crate) fn hsm_to_hub([h, s, m]: [f64; 3]) -> Vec3 {
    let m = m / 100.0;
    let dir = hsm_direction(h);
    let len = nan0(s / 100.0 * hsm_radius(m, dir));
    Vec3::splat(m) + dir * len
}

// ============================================================================
// TSL
// ============================================================================

/// Terrillon/Akamatsu tint, saturation and luma.
pub(crate) fn tsl_from_hub(rgb: Vec3) -> [f64; 3] {
    let sum = rgb.sum();
    let r = rgb.x / sum - 1.0 / 3.0;
    let g = rgb.y / sum - 1.0 / 3.0;

    let t = if g > 0.0 {
        (r / g).atan() / TAU + 0.25
    } else if g < 0.0 {
        (r / g).atan() / TAU + 0.75
    } else {
        0.0
    };
    let s = (9.0 / 5.0 * (r * r + g * g)).sqrt();
    let l = PR * rgb.x + PG * rgb.y + PB * rgb.z;
    nan0_all([t, s, l])
}

/// Inverse of [`tsl_from_hub`] that reads the stored tint divided by 4.
///
/// Feeding it `[4 T, S, L]` reproduces the forward input.
pub(crate) fn tsl_to_hub([t, s, l]: [f64; 3]) -> Vec3 {
    let t = t / 4.0;
    let angle = TAU * t;
    let x = -(angle.cos() / angle.sin());

    let b = 5.0 / (9.0 * (x * x + 1.0));
    let g = if t > 0.5 {
        -b.sqrt() * s
    } else if t < 0.5 {
        b.sqrt() * s
    } else {
        0.0
    };
    let r = if t == 0.0 { 5f64.sqrt() / 3.0 * s } else { x * g };

    let r = r + 1.0 / 3.0;
    let g = g + 1.0 / 3.0;
    let k = l / (r * 0.185 + g * 0.473 + 0.114);
    Vec3::from_array(nan0_all([k * r, k * g, k * (1.0 - r - g)]))
}

// ============================================================================
// rgG / LCHrg
// ============================================================================

pub(crate) fn rgg_from_hub(rgb: Vec3) -> [f64; 3] {
    let sum = rgb.sum();
    [nan0(rgb.x / sum), nan0(rgb.y / sum), rgb.y]
}

/// Green chromaticity 0 leaves the sum undetermined and yields black.
pub(crate) fn rgg_to_hub([r, g, green]: [f64; 3]) -> Vec3 {
    let sum = nan0(green / g);
    let red = r * sum;
    Vec3::new(red, green, sum - red - green)
}

pub(crate) fn lchrg_from_hub(rgb: Vec3) -> [f64; 3] {
    let [r, g, green] = rgg_from_hub(rgb);
    let (c, h) = to_polar(r - 1.0 / 3.0, g - 1.0 / 3.0);
    [green, c, h]
}

pub(crate) fn lchrg_to_hub([green, c, h]: [f64; 3]) -> Vec3 {
    let (r, g) = from_polar(c, h);
    rgg_to_hub([r + 1.0 / 3.0, g + 1.0 / 3.0, green])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Vec3; 5] = [
        Vec3::new(0.2, 0.5, 0.9),
        Vec3::new(0.9, 0.1, 0.3),
        Vec3::new(0.6, 0.6, 0.1),
        Vec3::new(0.05, 0.8, 0.4),
        Vec3::new(0.7, 0.3, 0.5),
    ];

    fn close(a: Vec3, b: Vec3, tol: f64) -> bool {
        (a - b).length() < tol
    }

    #[test]
    fn test_hcy_roundtrip() {
        for rgb in SAMPLES {
            let back = hcy_to_hub(hcy_from_hub(rgb));
            assert!(close(back, rgb, 1e-9), "{:?} -> {:?}", rgb, back);
        }
    }

    #[test]
    fn test_hcy_red() {
        let [h, c, y] = hcy_from_hub(Vec3::new(1.0, 0.0, 0.0));
        assert!(h.abs() < 1e-9);
        assert!((c - 100.0).abs() < 1e-9);
        assert!((y - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsp_roundtrip() {
        for rgb in SAMPLES {
            let back = hsp_to_hub(hsp_from_hub(rgb));
            assert!(close(back, rgb, 1e-9), "{:?} -> {:?}", rgb, back);
        }
        // Fully saturated branch
        let red = Vec3::new(0.8, 0.2, 0.0);
        assert!(close(hsp_to_hub(hsp_from_hub(red)), red, 1e-9));
    }

    #[test]
    fn test_hsp_brightness() {
        let [_, s, p] = hsp_from_hub(Vec3::ONE);
        assert_eq!(s, 0.0);
        assert!((p - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsm_roundtrip() {
        for rgb in SAMPLES {
            let back = hsm_to_hub(hsm_from_hub(rgb));
            assert!(close(back, rgb, 1e-9), "{:?} -> {:?}", rgb, back);
        }
    }

    #[test]
    fn test_hsm_axes() {
        assert!(axis_u().dot(MIX).abs() < 1e-12);
        assert!(axis_w().dot(MIX).abs() < 1e-12);
        assert!(axis_u().dot(axis_w()).abs() < 1e-12);
        let [h, _, _] = hsm_from_hub(Vec3::new(1.0, 0.0, 0.0));
        assert!(h.abs() < 1e-9);
    }

    #[test]
    fn test_hsm_saturation_bounded_by_cube() {
        let corners = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        for rgb in corners {
            let [_, s, _] = hsm_from_hub(rgb);
            assert!((s - 100.0).abs() < 1e-9, "{:?}: S = {}", rgb, s);
        }
        for rgb in SAMPLES {
            let [_, s, _] = hsm_from_hub(rgb);
            assert!(s <= 100.0 + 1e-9, "{:?}: S = {}", rgb, s);
        }
        assert_eq!(hsm_from_hub(Vec3::splat(0.3))[1], 0.0);
    }

    #[test]
    fn test_tsl_inverse_reads_quarter_tint() {
        for rgb in SAMPLES {
            let [t, s, l] = tsl_from_hub(rgb);
            let back = tsl_to_hub([4.0 * t, s, l]);
            assert!(close(back, rgb, 1e-9), "{:?} -> {:?}", rgb, back);
            // Stored directly, the tint is misread
            let skewed = tsl_to_hub([t, s, l]);
            assert!(!close(skewed, rgb, 1e-6));
        }
    }

    #[test]
    fn test_rgg_roundtrip() {
        for rgb in SAMPLES {
            assert!(close(rgg_to_hub(rgg_from_hub(rgb)), rgb, 1e-12));
            assert!(close(lchrg_to_hub(lchrg_from_hub(rgb)), rgb, 1e-12));
        }
        assert_eq!(rgg_from_hub(Vec3::ZERO), [0.0, 0.0, 0.0]);
    }
}
