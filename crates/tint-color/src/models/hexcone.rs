//! CMY and the hexcone family (HSB, HSL, HCV, HWB).
//!
//! All functions work on nominal `[0, 1]` RGB triples; the hexcone models
//! scale saturation-like channels to percent.

use tint_math::{normalize_hue, Vec3};

/// Hexcone hue in degrees; achromatic input yields 0.
pub(crate) fn hue(rgb: Vec3) -> f64 {
    let max = rgb.max_element();
    let delta = max - rgb.min_element();
    if delta == 0.0 {
        return 0.0;
    }
    let Vec3 { x: r, y: g, z: b } = rgb;
    let h = if max == r {
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_hue(h * 60.0)
}

/// Rebuilds RGB from hue, chroma and the offset added to every channel.
pub(crate) fn from_hue_chroma(h: f64, c: f64, m: f64) -> Vec3 {
    let hp = normalize_hue(h) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Vec3::new(r + m, g + m, b + m)
}

// ============================================================================
// CMY
// ============================================================================

pub(crate) fn cmy_from_hub(hub: Vec3) -> [f64; 3] {
    (Vec3::ONE - hub).to_array()
}

pub(crate) fn cmy_to_hub(v: [f64; 3]) -> Vec3 {
    Vec3::ONE - Vec3::from_array(v)
}

// ============================================================================
// HSB
// ============================================================================

pub(crate) fn hsb_from_hub(rgb: Vec3) -> [f64; 3] {
    let max = rgb.max_element();
    let delta = max - rgb.min_element();
    let s = if max == 0.0 { 0.0 } else { delta / max };
    [hue(rgb), s * 100.0, max * 100.0]
}

pub(crate) fn hsb_to_hub([h, s, v]: [f64; 3]) -> Vec3 {
    let v = v / 100.0;
    let c = v * s / 100.0;
    from_hue_chroma(h, c, v - c)
}

// ============================================================================
// HSL
// ============================================================================

pub(crate) fn hsl_from_hub(rgb: Vec3) -> [f64; 3] {
    let max = rgb.max_element();
    let min = rgb.min_element();
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    [hue(rgb), super::nan0(s) * 100.0, l * 100.0]
}

pub(crate) fn hsl_to_hub([h, s, l]: [f64; 3]) -> Vec3 {
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s / 100.0;
    from_hue_chroma(h, c, l - c / 2.0)
}

// ============================================================================
// HCV
// ============================================================================

pub(crate) fn hcv_from_hub(rgb: Vec3) -> [f64; 3] {
    let max = rgb.max_element();
    let delta = max - rgb.min_element();
    [hue(rgb), delta * 100.0, max * 100.0]
}

pub(crate) fn hcv_to_hub([h, c, v]: [f64; 3]) -> Vec3 {
    let (c, v) = (c / 100.0, v / 100.0);
    from_hue_chroma(h, c, v - c)
}

// ============================================================================
// HWB
// ============================================================================

pub(crate) fn hwb_from_hub(rgb: Vec3) -> [f64; 3] {
    [hue(rgb), rgb.min_element() * 100.0, (1.0 - rgb.max_element()) * 100.0]
}

/// Whiteness plus blackness at or above 100% collapses to gray.
pub(crate) fn hwb_to_hub([h, w, b]: [f64; 3]) -> Vec3 {
    let (w, b) = (w / 100.0, b / 100.0);
    if w + b >= 1.0 {
        return Vec3::splat(w / (w + b));
    }
    let v = 1.0 - b;
    from_hue_chroma(h, v - w, w)
}
