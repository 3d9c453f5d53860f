//! Luma/chroma models as affine maps `offset + M · rgb`.
//!
//! | Model | Standard | Scale |
//! |-------|----------|-------|
//! | YIQ | NTSC 1953 | Y 0..1 |
//! | YUV | BT.601 analog | Y 0..1 |
//! | YPbPr | BT.709 analog | Y 0..1 |
//! | YCbCr | BT.601 studio range | 8-bit |
//! | JPEG | BT.601 full range (JFIF) | 8-bit |
//! | xvYCC | BT.709 studio range | 8-bit |
//! | YDbDr | SECAM | Y 0..1 |
//! | YES | Xerox | 0..1 |
//! | YCoCg | lifting transform | 0..1 |

use tint_math::{Mat3, Vec3};

/// An invertible affine transform.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Affine {
    offset: Vec3,
    matrix: Mat3,
}

impl Affine {
    const fn new(offset: Vec3, matrix: Mat3) -> Self {
        Self { offset, matrix }
    }

    pub(crate) fn forward(&self, rgb: Vec3) -> [f64; 3] {
        (self.offset + self.matrix * rgb).to_array()
    }

    pub(crate) fn inverse(&self, v: [f64; 3]) -> Vec3 {
        match self.matrix.inverse() {
            Some(inv) => inv * (Vec3::from_array(v) - self.offset),
            None => Vec3::ZERO,
        }
    }
}

/// Y'PbPr rows for luma coefficients `kr`, `kb`.
const fn ypbpr(kr: f64, kb: f64) -> Mat3 {
    let kg = 1.0 - kr - kb;
    let pb = 2.0 * (1.0 - kb);
    let pr = 2.0 * (1.0 - kr);
    Mat3::from_rows([
        [kr, kg, kb],
        [-kr / pb, -kg / pb, 0.5],
        [0.5, -kg / pr, -kb / pr],
    ])
}

/// Scales each row of `m`.
const fn scale_rows(m: Mat3, s: [f64; 3]) -> Mat3 {
    let r = m.m;
    Mat3::from_rows([
        [r[0][0] * s[0], r[0][1] * s[0], r[0][2] * s[0]],
        [r[1][0] * s[1], r[1][1] * s[1], r[1][2] * s[1]],
        [r[2][0] * s[2], r[2][1] * s[2], r[2][2] * s[2]],
    ])
}

const STUDIO: [f64; 3] = [219.0, 224.0, 224.0];
const STUDIO_OFFSET: Vec3 = Vec3::new(16.0, 128.0, 128.0);

pub(crate) const YIQ: Affine = Affine::new(
    Vec3::ZERO,
    Mat3::from_rows([
        [0.299, 0.587, 0.114],
        [0.5959, -0.2746, -0.3213],
        [0.2115, -0.5227, 0.3112],
    ]),
);

pub(crate) const YUV: Affine = Affine::new(
    Vec3::ZERO,
    Mat3::from_rows([
        [0.299, 0.587, 0.114],
        [-0.14713, -0.28886, 0.436],
        [0.615, -0.51499, -0.10001],
    ]),
);

pub(crate) const YPBPR: Affine = Affine::new(Vec3::ZERO, ypbpr(0.2126, 0.0722));

pub(crate) const YCBCR: Affine = Affine::new(STUDIO_OFFSET, scale_rows(ypbpr(0.299, 0.114), STUDIO));

pub(crate) const JPEG: Affine = Affine::new(
    Vec3::new(0.0, 128.0, 128.0),
    scale_rows(ypbpr(0.299, 0.114), [255.0, 255.0, 255.0]),
);

pub(crate) const XVYCC: Affine = Affine::new(STUDIO_OFFSET, scale_rows(ypbpr(0.2126, 0.0722), STUDIO));

pub(crate) const YDBDR: Affine = Affine::new(
    Vec3::ZERO,
    Mat3::from_rows([
        [0.299, 0.587, 0.114],
        [-0.450, -0.883, 1.333],
        [-1.333, 1.116, 0.217],
    ]),
);

pub(crate) const YES: Affine = Affine::new(
    Vec3::ZERO,
    Mat3::from_rows([
        [0.253, 0.684, 0.063],
        [0.500, -0.500, 0.0],
        [0.250, 0.250, -0.500],
    ]),
);

// ============================================================================
// YCoCg
// ============================================================================

/// Stored as `(Y, Cg, Co)`.
pub(crate) fn ycocg_from_hub(rgb: Vec3) -> [f64; 3] {
    let Vec3 { x: r, y: g, z: b } = rgb;
    let y = 0.25 * r + 0.5 * g + 0.25 * b;
    let cg = -0.25 * r + 0.5 * g - 0.25 * b;
    let co = 0.5 * r - 0.5 * b;
    [y, cg, co]
}

pub(crate) fn ycocg_to_hub([y, cg, co]: [f64; 3]) -> Vec3 {
    let c = y - cg;
    Vec3::new(c + co, y + cg, c - co)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, Affine); 8] = [
        ("YIQ", YIQ),
        ("YUV", YUV),
        ("YPbPr", YPBPR),
        ("YCbCr", YCBCR),
        ("JPEG", JPEG),
        ("xvYCC", XVYCC),
        ("YDbDr", YDBDR),
        ("YES", YES),
    ];

    #[test]
    fn test_affine_roundtrip() {
        let rgb = Vec3::new(0.3, 0.7, 0.2);
        for (name, t) in ALL {
            let back = t.inverse(t.forward(rgb));
            assert!((back - rgb).length() < 1e-9, "{}: {:?}", name, back);
        }
    }

    #[test]
    fn test_studio_range() {
        let black = YCBCR.forward(Vec3::ZERO);
        let white = YCBCR.forward(Vec3::ONE);
        assert_eq!(black, [16.0, 128.0, 128.0]);
        assert!((white[0] - 235.0).abs() < 1e-9);
        assert!((white[1] - 128.0).abs() < 1e-9);
        assert!((white[2] - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_ypbpr_extremes() {
        let blue = YPBPR.forward(Vec3::new(0.0, 0.0, 1.0));
        assert!((blue[1] - 0.5).abs() < 1e-12);
        let red = YPBPR.forward(Vec3::new(1.0, 0.0, 0.0));
        assert!((red[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ycocg_lifting() {
        let rgb = Vec3::new(0.25, 0.5, 0.75);
        let [y, cg, co] = ycocg_from_hub(rgb);
        assert_eq!([y, cg, co], [0.5, 0.0, -0.25]);
        assert_eq!(ycocg_to_hub([y, cg, co]), rgb);
    }
}
