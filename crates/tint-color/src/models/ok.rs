//! Oklab (Labk) and its sRGB-gamut cylinders Okhsl, Okhsv and Okhwb.
//!
//! The cylinders locate the sRGB gamut cusp per hue with Ottosson's
//! polynomial fits refined by one Halley step, so their saturation axes hit
//! 100% on the sRGB boundary and continue linearly beyond it.
//!
//! XYZ here is relative to D65; callers adapt profile XYZ with
//! [`to_d65`](super::to_d65) first.

use tint_math::{normalize_hue, Mat3, Vec3};

use super::{nan0_all, D65_XYZ};

/// XYZ (D65) to approximate cone response.
const M1: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Nonlinear cone response to Lab.
const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Cone response of D65. Dividing by it puts D65 at exactly `(1, 1, 1)`.
#[inline]
fn white_lms() -> Vec3 {
    M1 * D65_XYZ
}

/// Chroma below this is treated as neutral by the cylinders.
const ACHROMATIC: f64 = 1e-6;

/// Lightness at or above `1 - WHITE_EPS` is treated as white.
const WHITE_EPS: f64 = 1e-6;

/// Oklab of D65, `L` just under 1 with a residual `b` from the fitted `M2`.
fn white_lab() -> [f64; 3] {
    (M2 * Vec3::ONE).to_array()
}

/// Point on the neutral axis through [`white_lab`] at lightness `l`.
fn neutral(l: f64) -> [f64; 3] {
    let [wl, wa, wb] = white_lab();
    [l, wa * l / wl, wb * l / wl]
}

/// Oklab from XYZ relative to D65.
pub(crate) fn oklab_from_xyz(xyz: Vec3) -> [f64; 3] {
    let lms = (M1 * xyz / white_lms()).map(f64::cbrt);
    (M2 * lms).to_array()
}

/// XYZ relative to D65 from Oklab.
pub(crate) fn oklab_to_xyz(lab: [f64; 3]) -> Vec3 {
    let (Some(m1_inv), Some(m2_inv)) = (M1.inverse(), M2.inverse()) else {
        return Vec3::ZERO;
    };
    let lms = (m2_inv * Vec3::from_array(lab)).map(|c| c * c * c);
    m1_inv * (lms * white_lms())
}

// ============================================================================
// Gamut geometry (linear sRGB)
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Cusp {
    l: f64,
    c: f64,
}

#[derive(Debug, Clone, Copy)]
struct St {
    s: f64,
    t: f64,
}

impl From<Cusp> for St {
    fn from(cusp: Cusp) -> Self {
        Self {
            s: cusp.c / cusp.l,
            t: cusp.c / (1.0 - cusp.l),
        }
    }
}

/// Oklab to linear sRGB, the fixed basis the cusp fits were made for.
fn oklab_to_linear_srgb(l: f64, a: f64, b: f64) -> Vec3 {
    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let (l, m, s) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);
    Vec3::new(
        4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    )
}

/// Largest `S = C / L` inside sRGB for the unit hue direction `(a, b)`.
fn compute_max_saturation(a: f64, b: f64) -> f64 {
    // Coefficients depend on which channel leaves the gamut first
    let (k0, k1, k2, k3, k4, wl, wm, ws) = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        (1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245, 4.0767416621, -3.3077115913, 0.2309699292)
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        (0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204, -1.2684380046, 2.6097574011, -0.3413193965)
    } else {
        (1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167, -0.0041960863, -0.7034186147, 1.7076147010)
    };

    let mut s = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;

    let l_ = 1.0 + s * k_l;
    let m_ = 1.0 + s * k_m;
    let s_ = 1.0 + s * k_s;

    let (l, m, s3) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);
    let (l_ds, m_ds, s_ds) = (3.0 * k_l * l_ * l_, 3.0 * k_m * m_ * m_, 3.0 * k_s * s_ * s_);
    let (l_ds2, m_ds2, s_ds2) = (6.0 * k_l * k_l * l_, 6.0 * k_m * k_m * m_, 6.0 * k_s * k_s * s_);

    let f = wl * l + wm * m + ws * s3;
    let f1 = wl * l_ds + wm * m_ds + ws * s_ds;
    let f2 = wl * l_ds2 + wm * m_ds2 + ws * s_ds2;

    s -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    s
}

fn find_cusp(a: f64, b: f64) -> Cusp {
    let s_cusp = compute_max_saturation(a, b);
    let rgb = oklab_to_linear_srgb(1.0, s_cusp * a, s_cusp * b);
    let l = (1.0 / rgb.max_element()).cbrt();
    Cusp { l, c: l * s_cusp }
}

/// Intersection of `L = L0 (1 - t) + t L1, C = t C1` with the gamut boundary.
fn find_gamut_intersection(a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Cusp) -> f64 {
    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // Lower half
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // Upper half: triangle estimate then one Halley step
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let dl = l1 - l0;
    let dc = c1;
    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;
    let (l_dt, m_dt, s_dt) = (dl + dc * k_l, dl + dc * k_m, dl + dc * k_s);

    let light = l0 * (1.0 - t) + t * l1;
    let chroma = t * c1;
    let l_ = light + chroma * k_l;
    let m_ = light + chroma * k_m;
    let s_ = light + chroma * k_s;

    let lms = Vec3::new(l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);
    let dt = Vec3::new(3.0 * l_dt * l_ * l_, 3.0 * m_dt * m_ * m_, 3.0 * s_dt * s_ * s_);
    let dt2 = Vec3::new(6.0 * l_dt * l_dt * l_, 6.0 * m_dt * m_dt * m_, 6.0 * s_dt * s_dt * s_);

    let rows = [
        Vec3::new(4.0767416621, -3.3077115913, 0.2309699292),
        Vec3::new(-1.2684380046, 2.6097574011, -0.3413193965),
        Vec3::new(-0.0041960863, -0.7034186147, 1.7076147010),
    ];
    let step = rows
        .iter()
        .map(|w| {
            let f = w.dot(lms) - 1.0;
            let f1 = w.dot(dt);
            let f2 = w.dot(dt2);
            let u = f1 / (f1 * f1 - 0.5 * f * f2);
            if u >= 0.0 { -f * u } else { f64::MAX }
        })
        .fold(f64::MAX, f64::min);

    t += step;
    t
}

fn toe(x: f64) -> f64 {
    const K1: f64 = 0.206;
    const K2: f64 = 0.03;
    const K3: f64 = (1.0 + K1) / (1.0 + K2);
    0.5 * (K3 * x - K1 + ((K3 * x - K1) * (K3 * x - K1) + 4.0 * K2 * K3 * x).sqrt())
}

fn toe_inv(x: f64) -> f64 {
    const K1: f64 = 0.206;
    const K2: f64 = 0.03;
    const K3: f64 = (1.0 + K1) / (1.0 + K2);
    (x * x + K1 * x) / (K3 * (x + K2))
}

/// Smooth approximation of the cusp's `(S, T)`.
fn st_mid(a: f64, b: f64) -> St {
    let s = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b
                + a * (-2.19557347
                    + 1.75198401 * b
                    + a * (-2.13704948 - 10.02301043 * b + a * (-4.24894561 + 5.38770819 * b + 4.69891013 * a))));
    let t = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b
                + a * (0.40370612
                    + 0.90148123 * b
                    + a * (-0.27087943 + 0.61223990 * b + a * (0.00299215 - 0.45399568 * b - 0.14661872 * a))));
    St { s, t }
}

/// `(C_0, C_mid, C_max)` at lightness `l` for hue direction `(a, b)`.
fn chroma_stops(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let cusp = find_cusp(a, b);
    let c_max = find_gamut_intersection(a, b, l, 1.0, l, cusp);
    let st_max = St::from(cusp);

    let k = c_max / (l * st_max.s).min((1.0 - l) * st_max.t);

    let mid = st_mid(a, b);
    let (ca, cb) = (l * mid.s, (1.0 - l) * mid.t);
    let c_mid = 0.9 * k * (1.0 / (1.0 / ca.powi(4) + 1.0 / cb.powi(4))).sqrt().sqrt();

    let (ca, cb) = (l * 0.4, (1.0 - l) * 0.8);
    let c_0 = (1.0 / (1.0 / (ca * ca) + 1.0 / (cb * cb))).sqrt();

    (c_0, c_mid, c_max)
}

fn unit_hue(h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (cos, sin)
}

fn hue_of(a: f64, b: f64) -> f64 {
    normalize_hue(b.atan2(a).to_degrees())
}

// ============================================================================
// Okhsl
// ============================================================================

const MID: f64 = 0.8;
const MID_INV: f64 = 1.25;

/// Saturation slope past `C_max`, continuing the outer segment linearly.
fn okhsl_outer_slope(c_0: f64, c_mid: f64, c_max: f64) -> f64 {
    let k1 = (1.0 - MID) * c_mid * c_mid * MID_INV * MID_INV / c_0;
    let span = c_max - c_mid;
    (1.0 - MID) * k1 / (span * span)
}

/// Oklab to Okhsl `(H°, S%, L%)`.
///
/// Neutrals and anything at or above white get zero saturation. Colors
/// outside sRGB extend the saturation axis linearly past 100%.
pub(crate) fn okhsl_from_oklab([l, a, b]: [f64; 3]) -> [f64; 3] {
    let c = a.hypot(b);
    let h = hue_of(a, b);
    if l <= 0.0 {
        return [h, 0.0, 0.0];
    }
    if l >= 1.0 - WHITE_EPS {
        return [h, 0.0, 100.0];
    }
    if c < ACHROMATIC {
        return [h, 0.0, toe(l) * 100.0];
    }

    let (c_0, c_mid, c_max) = chroma_stops(l, a / c, b / c);
    let s = if c < c_mid {
        let k1 = MID * c_0;
        let k2 = 1.0 - k1 / c_mid;
        let t = c / (k1 + k2 * c);
        t * MID
    } else if c <= c_max {
        let k0 = c_mid;
        let k1 = (1.0 - MID) * c_mid * c_mid * MID_INV * MID_INV / c_0;
        let k2 = 1.0 - k1 / (c_max - c_mid);
        let t = (c - k0) / (k1 + k2 * (c - k0));
        MID + (1.0 - MID) * t
    } else {
        1.0 + (c - c_max) * okhsl_outer_slope(c_0, c_mid, c_max)
    };
    nan0_all([h, s * 100.0, toe(l) * 100.0])
}

/// Okhsl `(H°, S%, L%)` to Oklab.
pub(crate) fn okhsl_to_oklab([h, s, l]: [f64; 3]) -> [f64; 3] {
    let (s, l) = (s / 100.0, l / 100.0);
    if l >= 1.0 {
        return white_lab();
    }
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let l = toe_inv(l);
    if s <= 0.0 {
        return neutral(l);
    }

    let (a_, b_) = unit_hue(h);
    let (c_0, c_mid, c_max) = chroma_stops(l, a_, b_);

    let c = if s < MID {
        let t = MID_INV * s;
        let k1 = MID * c_0;
        let k2 = 1.0 - k1 / c_mid;
        t * k1 / (1.0 - k2 * t)
    } else if s > 1.0 {
        c_max + (s - 1.0) / okhsl_outer_slope(c_0, c_mid, c_max)
    } else {
        let t = (s - MID) / (1.0 - MID);
        let k0 = c_mid;
        let k1 = (1.0 - MID) * c_mid * c_mid * MID_INV * MID_INV / c_0;
        let k2 = 1.0 - k1 / (c_max - c_mid);
        k0 + t * k1 / (1.0 - k2 * t)
    };
    nan0_all([l, c * a_, c * b_])
}

// ============================================================================
// Okhsv / Okhwb
// ============================================================================

const S0: f64 = 0.5;

/// Okhsv saturation at `c_v` on the triangle edge, for cusp `(S, T)`.
///
/// Past the cusp the curve continues along its tangent so that colors
/// outside sRGB keep an invertible saturation.
fn okhsv_saturation(c_v: f64, cusp: Cusp) -> f64 {
    let st = St::from(cusp);
    let k = 1.0 - S0 / st.s;
    if c_v <= cusp.c {
        (S0 + st.t) * c_v / (st.t * S0 + st.t * k * c_v)
    } else {
        1.0 + (c_v - cusp.c) * okhsv_outer_slope(cusp)
    }
}

/// Inverse of [`okhsv_saturation`], giving `(L_v, C_v)`.
fn okhsv_edge(s: f64, cusp: Cusp) -> (f64, f64) {
    let st = St::from(cusp);
    let k = 1.0 - S0 / st.s;
    if s <= 1.0 {
        let d = S0 + st.t - st.t * k * s;
        (1.0 - s * S0 / d, s * st.t * S0 / d)
    } else {
        let c_v = cusp.c + (s - 1.0) / okhsv_outer_slope(cusp);
        (1.0 - c_v / st.t, c_v)
    }
}

/// `dS / dC_v` at the cusp.
fn okhsv_outer_slope(cusp: Cusp) -> f64 {
    let st = St::from(cusp);
    st.t * S0 / ((S0 + st.t) * cusp.c * cusp.c)
}

/// Oklab to Okhsv `(H°, S%, V%)`.
///
/// Neutrals get zero saturation. Anything at or above white reads as
/// `V = 100%`.
pub(crate) fn okhsv_from_oklab([l, a, b]: [f64; 3]) -> [f64; 3] {
    let c = a.hypot(b);
    let h = hue_of(a, b);
    if l <= 0.0 {
        return [h, 0.0, 0.0];
    }
    if c < ACHROMATIC {
        let v = if l >= 1.0 - WHITE_EPS { 1.0 } else { toe(l) };
        return [h, 0.0, v * 100.0];
    }
    let (a_, b_) = (a / c, b / c);

    let cusp = find_cusp(a_, b_);
    let st_max = St::from(cusp);

    let t = st_max.t / (c + l * st_max.t);
    let l_v = t * l;
    let c_v = t * c;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let rgb_scale = oklab_to_linear_srgb(l_vt, a_ * c_vt, b_ * c_vt);
    let scale_l = (1.0 / rgb_scale.max_element().max(0.0)).cbrt();

    let l = toe(l / scale_l);

    let v = l / l_v;
    let s = okhsv_saturation(c_v, cusp);
    nan0_all([h, s * 100.0, v * 100.0])
}

/// Okhsv `(H°, S%, V%)` to Oklab.
pub(crate) fn okhsv_to_oklab([h, s, v]: [f64; 3]) -> [f64; 3] {
    let (s, v) = (s / 100.0, v / 100.0);
    if v <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    if s <= 0.0 {
        return if v >= 1.0 { white_lab() } else { neutral(toe_inv(v)) };
    }
    let (a_, b_) = unit_hue(h);

    let cusp = find_cusp(a_, b_);
    let (l_v, c_v) = okhsv_edge(s, cusp);

    let l = v * l_v;
    let c = v * c_v;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let l_new = toe_inv(l);
    let c = c * l_new / l;
    let l = l_new;

    let rgb_scale = oklab_to_linear_srgb(l_vt, a_ * c_vt, b_ * c_vt);
    let scale_l = (1.0 / rgb_scale.max_element().max(0.0)).cbrt();

    let (l, c) = (l * scale_l, c * scale_l);
    nan0_all([l, c * a_, c * b_])
}

/// Oklab to Okhwb `(H°, W%, B%)` via Okhsv.
pub(crate) fn okhwb_from_oklab(lab: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = okhsv_from_oklab(lab);
    let (s, v) = (s / 100.0, v / 100.0);
    [h, (1.0 - s) * v * 100.0, (1.0 - v) * 100.0]
}

/// Okhwb `(H°, W%, B%)` to Oklab via Okhsv.
pub(crate) fn okhwb_to_oklab([h, w, b]: [f64; 3]) -> [f64; 3] {
    let (w, b) = (w / 100.0, b / 100.0);
    let v = 1.0 - b;
    let s = if v == 0.0 { 0.0 } else { 1.0 - w / v };
    okhsv_to_oklab([h, s * 100.0, v * 100.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

    fn srgb_lab(rgb: Vec3) -> [f64; 3] {
        oklab_from_xyz(profiles::LINEAR_SRGB.to_xyz(rgb))
    }

    fn close3(a: [f64; 3], b: [f64; 3], tol: f64) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < tol)
    }

    #[test]
    fn test_oklab_white() {
        let [l, a, b] = srgb_lab(Vec3::ONE);
        assert!((l - 1.0).abs() < 1e-7, "L={}", l);
        assert!(a.hypot(b) < ACHROMATIC, "a={} b={}", a, b);
    }

    #[test]
    fn test_white_has_no_saturation() {
        let white = srgb_lab(Vec3::ONE);
        assert_eq!(okhsl_from_oklab(white)[1..], [0.0, 100.0]);
        assert_eq!(okhsv_from_oklab(white)[1..], [0.0, 100.0]);
        assert_eq!(okhwb_from_oklab(white)[1..], [100.0, 0.0]);

        assert!(close3(okhsl_to_oklab([0.0, 0.0, 100.0]), white, 1e-12));
        assert!(close3(okhsv_to_oklab([0.0, 0.0, 100.0]), white, 1e-12));
        assert!(close3(okhwb_to_oklab([0.0, 100.0, 0.0]), white, 1e-12));
    }

    #[test]
    fn test_grays_have_no_saturation() {
        for g in [0.999, 0.5, 0.2, 0.001] {
            let lab = srgb_lab(Vec3::splat(g));
            let [_, s, l] = okhsl_from_oklab(lab);
            assert_eq!(s, 0.0, "gray {}", g);
            let [_, sv, v] = okhsv_from_oklab(lab);
            assert_eq!(sv, 0.0, "gray {}", g);
            assert!((l - v).abs() < 1e-12);

            let back = okhsl_to_oklab(okhsl_from_oklab(lab));
            assert!(close3(back, lab, 1e-12), "{:?} -> {:?}", lab, back);
            let back = okhsv_to_oklab(okhsv_from_oklab(lab));
            assert!(close3(back, lab, 1e-12), "{:?} -> {:?}", lab, back);
        }
    }

    #[test]
    fn test_outside_srgb_roundtrips() {
        // Rec.2020 green and a violet beyond the sRGB blue corner
        for xyz in [Vec3::new(0.1446, 0.6780, 0.0281), Vec3::new(0.25, 0.05, 1.2)] {
            let lab = oklab_from_xyz(xyz);

            let hsl = okhsl_from_oklab(lab);
            assert!(hsl[1] > 100.0, "{:?}", hsl);
            assert!(close3(okhsl_to_oklab(hsl), lab, 1e-9), "{:?}", hsl);

            let hsv = okhsv_from_oklab(lab);
            assert!(hsv[1] > 100.0, "{:?}", hsv);
            assert!(close3(okhsv_to_oklab(hsv), lab, 1e-9), "{:?}", hsv);
        }
    }

    #[test]
    fn test_oklab_roundtrip() {
        let xyz = Vec3::new(0.3, 0.4, 0.2);
        let back = oklab_to_xyz(oklab_from_xyz(xyz));
        assert!((back - xyz).length() < 1e-12);
    }

    #[test]
    fn test_cusp_is_on_boundary() {
        for h in [0.0, 60.0, 150.0, 264.0, 330.0] {
            let (a, b) = unit_hue(h);
            let cusp = find_cusp(a, b);
            let rgb = oklab_to_linear_srgb(cusp.l, cusp.c * a, cusp.c * b);
            assert!((rgb.max_element() - 1.0).abs() < 1e-6, "h={} {:?}", h, rgb);
            assert!(rgb.min_element().abs() < 1e-3, "h={} {:?}", h, rgb);
        }
    }

    #[test]
    fn test_toe_inverse() {
        for i in 0..=10 {
            let x = i as f64 / 10.0;
            assert!((toe_inv(toe(x)) - x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_okhsl_roundtrip() {
        for rgb in [Vec3::new(0.2, 0.5, 0.9), Vec3::new(0.8, 0.3, 0.1), Vec3::new(0.4, 0.45, 0.4)] {
            let lab = srgb_lab(rgb);
            let back = okhsl_to_oklab(okhsl_from_oklab(lab));
            assert!(close3(back, lab, 1e-9), "{:?} -> {:?}", lab, back);
        }
    }

    #[test]
    fn test_okhsv_roundtrip() {
        for rgb in [Vec3::new(0.2, 0.5, 0.9), Vec3::new(0.8, 0.3, 0.1), Vec3::new(0.4, 0.45, 0.4)] {
            let lab = srgb_lab(rgb);
            let back = okhsv_to_oklab(okhsv_from_oklab(lab));
            assert!(close3(back, lab, 1e-9), "{:?} -> {:?}", lab, back);
            let back = okhwb_to_oklab(okhwb_from_oklab(lab));
            assert!(close3(back, lab, 1e-9), "{:?} -> {:?}", lab, back);
        }
    }

    #[test]
    fn test_okhsv_saturated_red() {
        let [h, s, v] = okhsv_from_oklab(srgb_lab(Vec3::new(1.0, 0.0, 0.0)));
        assert!((h - 29.2).abs() < 0.5, "h={}", h);
        assert!((s - 100.0).abs() < 0.5, "s={}", s);
        assert!((v - 100.0).abs() < 0.5, "v={}", v);
    }
}
