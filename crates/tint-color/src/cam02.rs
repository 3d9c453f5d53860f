//! CIECAM02 color appearance model.
//!
//! Computes the appearance correlates lightness `J`, brightness `Q`, chroma
//! `C`, colorfulness `M`, saturation `s` and hue angle `h` for a stimulus
//! under a fixed set of viewing conditions, and inverts them back to XYZ.
//!
//! XYZ inputs and outputs use the `Y = 100` scale.
//!
//! # Black and imaginary stimuli
//!
//! A stimulus whose achromatic response `A` is zero or negative gets
//! `J = Q = 0`. Inverting any `J = 0` (or `Q = 0`) triple gives black.
//! Stimuli outside the spectral locus can land there: ProPhoto RGB's
//! imaginary blue primary has almost no luminance and strongly negative
//! red and green cone responses, so `[0, 0, 255]` under that profile reads
//! as `J = 0` and decodes to black in all six appearance models.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::cam02::Cam02Conditions;
//! use tint_color::ViewingConditions;
//! use tint_color::math::Vec3;
//!
//! let white = Vec3::new(95.047, 100.0, 108.883);
//! let cam = Cam02Conditions::new(white, &ViewingConditions::DEFAULT);
//!
//! let jch = cam.forward(Vec3::new(19.31, 23.93, 10.14));
//! let back = cam.from_jch(jch.j, jch.c, jch.h);
//! assert!((back.y - 23.93).abs() < 1e-6);
//! ```
//!
//! # Reference
//!
//! CIE 159:2004, *A colour appearance model for colour management systems:
//! CIECAM02*.

use tint_math::{normalize_hue, Mat3, Vec3, CAT02, VON_KRIES};

use crate::ViewingConditions;

/// Hunt-Pointer-Estevez cone space.
const HPE: Mat3 = VON_KRIES;

/// Appearance correlates of one stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cam02Correlates {
    /// Lightness
    pub j: f64,
    /// Chroma
    pub c: f64,
    /// Hue angle in degrees
    pub h: f64,
    /// Brightness
    pub q: f64,
    /// Colorfulness
    pub m: f64,
    /// Saturation
    pub s: f64,
}

/// Precomputed viewing-condition factors for a reference white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam02Conditions {
    white: Vec3,
    white_cone: Vec3,
    /// Degree of adaptation
    pub d: f64,
    /// Background induction factor `Yb / Yw`
    pub n: f64,
    /// Brightness background factor
    pub nbb: f64,
    /// Chromatic background factor
    pub ncb: f64,
    /// Base exponential nonlinearity
    pub z: f64,
    /// Luminance-level adaptation factor
    pub fl: f64,
    /// Achromatic response of the white
    pub aw: f64,
    /// Impact of surround
    pub c: f64,
    /// Chromatic induction factor
    pub nc: f64,
    /// `Fl^0.25`
    fl_root: f64,
    /// `(1.64 - 0.29^n)^0.73`
    chroma_factor: f64,
}

impl Cam02Conditions {
    /// Derives the model factors for `white` (`Y = 100` scale).
    pub fn new(white: Vec3, viewing: &ViewingConditions) -> Self {
        let la = viewing.adapting_luminance;
        let f = viewing.surround.f();
        let c = viewing.surround.c();
        let nc = viewing.surround.nc();

        let d = if viewing.discounting {
            1.0
        } else {
            (f * (1.0 - (1.0 / 3.6) * ((-la - 42.0) / 92.0).exp())).clamp(0.0, 1.0)
        };

        let k = 1.0 / (5.0 * la + 1.0);
        let k4 = k.powi(4);
        let fl = 0.2 * k4 * (5.0 * la) + 0.1 * (1.0 - k4).powi(2) * (5.0 * la).cbrt();

        let n = viewing.background / white.y;
        let nbb = 0.725 * n.powf(-0.2);
        let z = 1.48 + n.sqrt();

        let white_cone = CAT02 * white;
        let mut cond = Self {
            white,
            white_cone,
            d,
            n,
            nbb,
            ncb: nbb,
            z,
            fl,
            aw: 0.0,
            c,
            nc,
            fl_root: fl.powf(0.25),
            chroma_factor: (1.64 - 0.29f64.powf(n)).powf(0.73),
        };
        let rgb_aw = cond.post_adaptation(white);
        cond.aw = cond.achromatic(rgb_aw);
        cond
    }

    /// Reference white on the `Y = 100` scale.
    pub fn white(&self) -> Vec3 {
        self.white
    }

    /// Per-channel von Kries gain in the CAT02 space.
    fn gain(&self) -> Vec3 {
        Vec3::splat(self.d * self.white.y) / self.white_cone + Vec3::splat(1.0 - self.d)
    }

    fn compress(&self, x: f64) -> f64 {
        let p = (self.fl * x.abs() / 100.0).powf(0.42);
        (400.0 * p / (27.13 + p)).copysign(x) + 0.1
    }

    fn expand(&self, x: f64) -> f64 {
        let v = x - 0.1;
        let a = v.abs();
        ((100.0 / self.fl) * (27.13 * a / (400.0 - a)).powf(1.0 / 0.42)).copysign(v)
    }

    /// XYZ to compressed, adapted HPE cone response.
    fn post_adaptation(&self, xyz: Vec3) -> Vec3 {
        let adapted = (CAT02 * xyz) * self.gain();
        let cat_inv = CAT02.inverse().unwrap_or(Mat3::ZERO);
        (HPE * (cat_inv * adapted)).map(|x| self.compress(x))
    }

    fn achromatic(&self, rgb: Vec3) -> f64 {
        (2.0 * rgb.x + rgb.y + rgb.z / 20.0 - 0.305) * self.nbb
    }

    fn eccentricity(h: f64) -> f64 {
        0.25 * ((h.to_radians() + 2.0).cos() + 3.8)
    }

    /// Appearance correlates of `xyz`.
    pub fn forward(&self, xyz: Vec3) -> Cam02Correlates {
        let rgb = self.post_adaptation(xyz);

        let a = rgb.x - 12.0 * rgb.y / 11.0 + rgb.z / 11.0;
        let b = (rgb.x + rgb.y - 2.0 * rgb.z) / 9.0;
        let h = if a == 0.0 && b == 0.0 { 0.0 } else { normalize_hue(b.atan2(a).to_degrees()) };

        let achromatic = self.achromatic(rgb);
        let j = 100.0 * (achromatic / self.aw).max(0.0).powf(self.c * self.z);
        let q = (4.0 / self.c) * (j / 100.0).sqrt() * (self.aw + 4.0) * self.fl_root;

        let et = Self::eccentricity(h);
        let t = (50_000.0 / 13.0 * self.nc * self.ncb * et * a.hypot(b))
            / (rgb.x + rgb.y + 21.0 * rgb.z / 20.0);
        let c = t.max(0.0).powf(0.9) * (j / 100.0).sqrt() * self.chroma_factor;
        let m = c * self.fl_root;
        let s = if q == 0.0 { 0.0 } else { 100.0 * (m / q).sqrt() };

        Cam02Correlates { j, c, h, q, m, s }
    }

    // ========================================================================
    // Inverse
    // ========================================================================

    /// Lightness from brightness.
    pub fn j_from_q(&self, q: f64) -> f64 {
        6.25 * (self.c * q / ((self.aw + 4.0) * self.fl_root)).powi(2)
    }

    /// Brightness from lightness.
    pub fn q_from_j(&self, j: f64) -> f64 {
        (4.0 / self.c) * (j / 100.0).sqrt() * (self.aw + 4.0) * self.fl_root
    }

    /// XYZ from lightness, chroma and hue.
    pub fn from_jch(&self, j: f64, c: f64, h: f64) -> Vec3 {
        if j <= 0.0 {
            return Vec3::ZERO;
        }
        let t = (c / ((j / 100.0).sqrt() * self.chroma_factor)).powf(1.0 / 0.9);
        let et = Self::eccentricity(h);
        let achromatic = self.aw * (j / 100.0).powf(1.0 / (self.c * self.z));

        let p2 = achromatic / self.nbb + 0.305;
        let p3 = 21.0 / 20.0;
        let (sin, cos) = h.to_radians().sin_cos();

        let (a, b) = if t == 0.0 || !t.is_finite() {
            (0.0, 0.0)
        } else {
            let p1 = (50_000.0 / 13.0 * self.nc * self.ncb * et) / t;
            if sin.abs() >= cos.abs() {
                let p4 = p1 / sin;
                let b = p2 * (2.0 + p3) * (460.0 / 1403.0)
                    / (p4 + (2.0 + p3) * (220.0 / 1403.0) * (cos / sin) - 27.0 / 1403.0
                        + p3 * (6300.0 / 1403.0));
                (b * cos / sin, b)
            } else {
                let p5 = p1 / cos;
                let a = p2 * (2.0 + p3) * (460.0 / 1403.0)
                    / (p5 + (2.0 + p3) * (220.0 / 1403.0)
                        - (27.0 / 1403.0 - p3 * (6300.0 / 1403.0)) * (sin / cos));
                (a, a * sin / cos)
            }
        };

        let rgb = Vec3::new(
            (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0,
            (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0,
            (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0,
        )
        .map(|x| self.expand(x));

        let hpe_inv = HPE.inverse().unwrap_or(Mat3::ZERO);
        let cat_inv = CAT02.inverse().unwrap_or(Mat3::ZERO);
        let adapted = CAT02 * (hpe_inv * rgb);
        (cat_inv * (adapted / self.gain())).map(|v| if v.is_nan() { 0.0 } else { v })
    }

    /// XYZ from lightness, colorfulness and hue.
    pub fn from_jmh(&self, j: f64, m: f64, h: f64) -> Vec3 {
        self.from_jch(j, m / self.fl_root, h)
    }

    /// XYZ from lightness, saturation and hue.
    pub fn from_jsh(&self, j: f64, s: f64, h: f64) -> Vec3 {
        let m = (s / 100.0).powi(2) * self.q_from_j(j);
        self.from_jmh(j, m, h)
    }

    /// XYZ from brightness, chroma and hue.
    pub fn from_qch(&self, q: f64, c: f64, h: f64) -> Vec3 {
        self.from_jch(self.j_from_q(q), c, h)
    }

    /// XYZ from brightness, colorfulness and hue.
    pub fn from_qmh(&self, q: f64, m: f64, h: f64) -> Vec3 {
        self.from_jmh(self.j_from_q(q), m, h)
    }

    /// XYZ from brightness, saturation and hue.
    pub fn from_qsh(&self, q: f64, s: f64, h: f64) -> Vec3 {
        let m = (s / 100.0).powi(2) * q;
        self.from_jmh(self.j_from_q(q), m, h)
    }
}
