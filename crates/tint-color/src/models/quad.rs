//! Four-component models: CMYK, CMYW, RGBK and RGBW.

use tint_math::Vec3;

use super::nan0;

const PERCENT: f64 = 100.0;
const BYTE: f64 = 255.0;

/// Key black `k = 1 - max`; pure black yields `(0, 0, 0, 100)`.
pub(crate) fn cmyk_from_hub(rgb: Vec3) -> [f64; 4] {
    let k = 1.0 - rgb.max_element();
    let ink = |c: f64| nan0((1.0 - c - k) / (1.0 - k)) * PERCENT;
    [ink(rgb.x), ink(rgb.y), ink(rgb.z), k * PERCENT]
}

pub(crate) fn cmyk_to_hub([c, m, y, k]: [f64; 4]) -> Vec3 {
    let k = k / PERCENT;
    Vec3::new(c, m, y).map(|v| (1.0 - v / PERCENT) * (1.0 - k))
}

/// White ink `w = min`; pure white yields `(0, 0, 0, 100)`.
pub(crate) fn cmyw_from_hub(rgb: Vec3) -> [f64; 4] {
    let w = rgb.min_element();
    let ink = |c: f64| nan0(1.0 - (c - w) / (1.0 - w)) * PERCENT;
    let [c, m, y] = if w == 1.0 { [0.0; 3] } else { [ink(rgb.x), ink(rgb.y), ink(rgb.z)] };
    [c, m, y, w * PERCENT]
}

pub(crate) fn cmyw_to_hub([c, m, y, w]: [f64; 4]) -> Vec3 {
    let w = w / PERCENT;
    Vec3::new(c, m, y).map(|v| (1.0 - v / PERCENT) * (1.0 - w) + w)
}

pub(crate) fn rgbk_from_hub(rgb: Vec3) -> [f64; 4] {
    let max = rgb.max_element();
    let chroma = (rgb / max).map(nan0);
    [chroma.x * BYTE, chroma.y * BYTE, chroma.z * BYTE, (1.0 - max) * BYTE]
}

pub(crate) fn rgbk_to_hub([r, g, b, k]: [f64; 4]) -> Vec3 {
    Vec3::new(r, g, b) / BYTE * (1.0 - k / BYTE)
}

pub(crate) fn rgbw_from_hub(rgb: Vec3) -> [f64; 4] {
    let w = rgb.min_element();
    let chroma = rgb - Vec3::splat(w);
    [chroma.x * BYTE, chroma.y * BYTE, chroma.z * BYTE, w * BYTE]
}

pub(crate) fn rgbw_to_hub([r, g, b, w]: [f64; 4]) -> Vec3 {
    (Vec3::new(r, g, b) + Vec3::splat(w)) / BYTE
}
