//! Model identifiers and per-channel descriptors.
//!
//! [`Model`] names every supported color model. Its declaration order is the
//! external index contract: [`Model::ALL`] lists the models in that order and
//! the built-in [`Registry`](crate::Registry) assigns indices from it.
//!
//! # Families
//!
//! | Family | Models |
//! |--------|--------|
//! | Device RGB and hue wheels | RGB, RYB, RGV, RCA |
//! | Hexcone and hue-based | CMY, HSB, HSL, HCV, HWB, HCY, HSP, HSM, TSL, rgG, LCHrg |
//! | Luma/chroma | YIQ, YUV, YPbPr, YCbCr, JPEG, xvYCC, YDbDr, YES, YCoCg |
//! | CIE tristimulus | XYZ, xyY, xyYC, LCHxy, LMS, UCS, UVW |
//! | Lab family | Lab, Labh, Labj, Labk, IPT, Luv and their polar forms |
//! | Oklab cylinders | Labksl, Labksb, Labkwb |
//! | Luv perceptual | HSLuv, HPLuv |
//! | Appearance (CIECAM02) | JCh, JMh, Jsh, QCh, QMh, Qsh |
//! | Four-component | CMYK, CMYW, RGBK, RGBW |

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tint_core::{Component, Error, Result, Unit};

/// A color model identifier.
///
/// Variants are declared in registry order; the discriminant is the
/// built-in index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Model {
    Rca,
    Rgb,
    Rgv,
    Ryb,
    Cmy,
    Hcv,
    Hcy,
    Hpluv,
    Hsb,
    Hsl,
    Hsluv,
    Hsm,
    Hsp,
    Hwb,
    Ipt,
    Jch,
    Jmh,
    Jsh,
    Jpeg,
    Lab,
    Labh,
    Labj,
    Labk,
    Labksl,
    Labksb,
    Labkwb,
    LchAb,
    LchAbh,
    LchAbj,
    LchRg,
    LchUv,
    LchXy,
    Lms,
    Luv,
    Qch,
    Qmh,
    Qsh,
    RgG,
    Tsl,
    Ucs,
    Uvw,
    XvYcc,
    XyY,
    XyYC,
    Xyz,
    YCbCr,
    YCoCg,
    YDbDr,
    Yes,
    Yiq,
    YPbPr,
    Yuv,
    Cmyk,
    Cmyw,
    Rgbk,
    Rgbw,
}

// ============================================================================
// Descriptor Tables
// ============================================================================

const fn span(min: f64, max: f64, symbol: &'static str, name: &'static str) -> Component {
    Component::new(min, max, Unit::None, symbol, name)
}

const RGB8: [Component; 3] = [
    Component::upto(255.0, "R", "Red"),
    Component::upto(255.0, "G", "Green"),
    Component::upto(255.0, "B", "Blue"),
];
const RCA: [Component; 3] = [
    Component::upto(255.0, "R", "Red"),
    Component::upto(255.0, "C", "Chartreuse"),
    Component::upto(255.0, "A", "Azure"),
];
const RGV: [Component; 3] = [
    Component::upto(255.0, "R", "Red"),
    Component::upto(255.0, "G", "Green"),
    Component::upto(255.0, "V", "Violet"),
];
const RYB: [Component; 3] = [
    Component::upto(255.0, "R", "Red"),
    Component::upto(255.0, "Y", "Yellow"),
    Component::upto(255.0, "B", "Blue"),
];
const CMY: [Component; 3] = [
    Component::upto(1.0, "C", "Cyan"),
    Component::upto(1.0, "M", "Magenta"),
    Component::upto(1.0, "Y", "Yellow"),
];
const HCV: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "C", "Chroma"),
    Component::percent(100.0, "V", "Value"),
];
const HCY: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "C", "Chroma"),
    Component::upto(255.0, "Y", "Luminance"),
];
const HPLUV: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "P", "Saturation"),
    Component::percent(100.0, "L", "Lightness"),
];
const HSB: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "S", "Saturation"),
    Component::percent(100.0, "B", "Brightness"),
];
const HSL: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "S", "Saturation"),
    Component::percent(100.0, "L", "Lightness"),
];
const HSM: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "S", "Saturation"),
    Component::percent(100.0, "M", "Mixture"),
];
const HSP: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "S", "Saturation"),
    Component::percent(100.0, "P", "Perceived brightness"),
];
const HWB: [Component; 3] = [
    Component::hue("H"),
    Component::percent(100.0, "W", "Whiteness"),
    Component::percent(100.0, "B", "Blackness"),
];
const IPT: [Component; 3] = [
    Component::upto(1.0, "I", "Intensity"),
    span(-1.0, 1.0, "P", "Protan"),
    span(-1.0, 1.0, "T", "Tritan"),
];
const JCH: [Component; 3] = [
    Component::upto(100.0, "J", "Lightness"),
    Component::upto(100.0, "C", "Chroma"),
    Component::hue("h"),
];
const JMH: [Component; 3] = [
    Component::upto(100.0, "J", "Lightness"),
    Component::upto(100.0, "M", "Colorfulness"),
    Component::hue("h"),
];
const JSH: [Component; 3] = [
    Component::upto(100.0, "J", "Lightness"),
    Component::upto(100.0, "s", "Saturation"),
    Component::hue("h"),
];
const JPEG: [Component; 3] = [
    Component::upto(255.0, "Y", "Luma"),
    Component::upto(255.0, "Cb", "Blue difference"),
    Component::upto(255.0, "Cr", "Red difference"),
];
const LAB: [Component; 3] = [
    Component::percent(100.0, "L*", "Lightness"),
    span(-128.0, 127.0, "a*", "Green/red"),
    span(-128.0, 127.0, "b*", "Blue/yellow"),
];
const LABH: [Component; 3] = [
    Component::percent(100.0, "L", "Lightness"),
    span(-100.0, 100.0, "a", "Green/red"),
    span(-100.0, 100.0, "b", "Blue/yellow"),
];
const LABJ: [Component; 3] = [
    Component::upto(1.0, "Jz", "Lightness"),
    span(-0.5, 0.5, "az", "Green/red"),
    span(-0.5, 0.5, "bz", "Blue/yellow"),
];
const LABK: [Component; 3] = [
    Component::upto(1.0, "L", "Perceived lightness"),
    span(-0.5, 0.5, "a", "Green/red"),
    span(-0.5, 0.5, "b", "Blue/yellow"),
];
const LABKSL: [Component; 3] = HSL;
const LABKSB: [Component; 3] = HSB;
const LABKWB: [Component; 3] = HWB;
const LCHAB: [Component; 3] = [
    Component::percent(100.0, "L", "Lightness"),
    Component::upto(150.0, "C", "Chroma"),
    Component::hue("H"),
];
const LCHABH: [Component; 3] = [
    Component::percent(100.0, "L", "Lightness"),
    Component::upto(150.0, "C", "Chroma"),
    Component::hue("H"),
];
const LCHABJ: [Component; 3] = [
    Component::upto(1.0, "Jz", "Lightness"),
    Component::upto(0.5, "Cz", "Chroma"),
    Component::hue("hz"),
];
const LCHRG: [Component; 3] = [
    Component::upto(1.0, "G", "Green"),
    Component::upto(1.0, "C", "Chroma"),
    Component::hue("H"),
];
const LCHUV: [Component; 3] = [
    Component::percent(100.0, "L", "Lightness"),
    Component::upto(180.0, "C", "Chroma"),
    Component::hue("H"),
];
const LCHXY: [Component; 3] = [
    Component::upto(1.0, "Y", "Luminance"),
    Component::upto(1.0, "C", "Chroma"),
    Component::hue("H"),
];
const LMS: [Component; 3] = [
    Component::upto(1.0, "L", "Long"),
    Component::upto(1.0, "M", "Medium"),
    Component::upto(1.0, "S", "Short"),
];
const LUV: [Component; 3] = [
    Component::percent(100.0, "L*", "Lightness"),
    span(-134.0, 224.0, "u*", "u*"),
    span(-140.0, 122.0, "v*", "v*"),
];
const QCH: [Component; 3] = [
    Component::upto(200.0, "Q", "Brightness"),
    Component::upto(100.0, "C", "Chroma"),
    Component::hue("h"),
];
const QMH: [Component; 3] = [
    Component::upto(200.0, "Q", "Brightness"),
    Component::upto(100.0, "M", "Colorfulness"),
    Component::hue("h"),
];
const QSH: [Component; 3] = [
    Component::upto(200.0, "Q", "Brightness"),
    Component::upto(100.0, "s", "Saturation"),
    Component::hue("h"),
];
const RGG: [Component; 3] = [
    Component::upto(1.0, "r", "Red chromaticity"),
    Component::upto(1.0, "g", "Green chromaticity"),
    Component::upto(1.0, "G", "Green"),
];
const TSL: [Component; 3] = [
    Component::upto(1.0, "T", "Tint"),
    Component::upto(1.0, "S", "Saturation"),
    Component::upto(1.0, "L", "Lightness"),
];
const UCS: [Component; 3] = [
    Component::upto(1.0, "U", "U"),
    Component::upto(1.0, "V", "V"),
    Component::upto(1.0, "W", "W"),
];
const UVW: [Component; 3] = [
    span(-82.0, 171.0, "U*", "U*"),
    span(-87.0, 70.0, "V*", "V*"),
    span(-17.0, 100.0, "W*", "W*"),
];
const XVYCC: [Component; 3] = [
    Component::upto(255.0, "Y", "Luma"),
    Component::upto(255.0, "Cb", "Blue difference"),
    Component::upto(255.0, "Cr", "Red difference"),
];
const XYY: [Component; 3] = [
    Component::upto(1.0, "x", "Chromaticity x"),
    Component::upto(1.0, "y", "Chromaticity y"),
    Component::upto(1.0, "Y", "Luminance"),
];
const XYYC: [Component; 3] = [
    span(-0.5, 0.5, "x", "Chromaticity x"),
    span(-0.5, 0.5, "y", "Chromaticity y"),
    Component::upto(1.0, "Y", "Luminance"),
];
const XYZ: [Component; 3] = [
    Component::upto(1.0, "X", "X"),
    Component::upto(1.0, "Y", "Luminance"),
    Component::upto(1.0, "Z", "Z"),
];
const YCBCR: [Component; 3] = [
    span(16.0, 235.0, "Y", "Luma"),
    span(16.0, 240.0, "Cb", "Blue difference"),
    span(16.0, 240.0, "Cr", "Red difference"),
];
const YCOCG: [Component; 3] = [
    Component::upto(1.0, "Y", "Luminance"),
    span(-0.5, 0.5, "Cg", "Chrominance green"),
    span(-0.5, 0.5, "Co", "Chrominance orange"),
];
const YDBDR: [Component; 3] = [
    Component::upto(1.0, "Y", "Luminance"),
    span(-1.333, 1.333, "Db", "Blue difference"),
    span(-1.333, 1.333, "Dr", "Red difference"),
];
const YES: [Component; 3] = [
    Component::upto(1.0, "Y", "Luminance"),
    Component::upto(1.0, "E", "E-factor"),
    Component::upto(1.0, "S", "S-factor"),
];
const YIQ: [Component; 3] = [
    Component::upto(1.0, "Y", "Luma"),
    span(-0.5957, 0.5957, "I", "In-phase"),
    span(-0.5226, 0.5226, "Q", "Quadrature"),
];
const YPBPR: [Component; 3] = [
    Component::upto(1.0, "Y", "Luma"),
    span(-0.5, 0.5, "Pb", "Blue difference"),
    span(-0.5, 0.5, "Pr", "Red difference"),
];
const YUV: [Component; 3] = [
    Component::upto(1.0, "Y", "Luma"),
    span(-0.436, 0.436, "U", "Blue projection"),
    span(-0.615, 0.615, "V", "Red projection"),
];
const CMYK: [Component; 4] = [
    Component::percent(100.0, "C", "Cyan"),
    Component::percent(100.0, "M", "Magenta"),
    Component::percent(100.0, "Y", "Yellow"),
    Component::percent(100.0, "K", "Black"),
];
const CMYW: [Component; 4] = [
    Component::percent(100.0, "C", "Cyan"),
    Component::percent(100.0, "M", "Magenta"),
    Component::percent(100.0, "Y", "Yellow"),
    Component::percent(100.0, "W", "White"),
];
const RGBK: [Component; 4] = [
    Component::upto(255.0, "R", "Red"),
    Component::upto(255.0, "G", "Green"),
    Component::upto(255.0, "B", "Blue"),
    Component::upto(255.0, "K", "Black"),
];
const RGBW: [Component; 4] = [
    Component::upto(255.0, "R", "Red"),
    Component::upto(255.0, "G", "Green"),
    Component::upto(255.0, "B", "Blue"),
    Component::upto(255.0, "W", "White"),
];

impl Model {
    /// Every model in registry order.
    pub const ALL: [Model; 56] = [
        Self::Rca,
        Self::Rgb,
        Self::Rgv,
        Self::Ryb,
        Self::Cmy,
        Self::Hcv,
        Self::Hcy,
        Self::Hpluv,
        Self::Hsb,
        Self::Hsl,
        Self::Hsluv,
        Self::Hsm,
        Self::Hsp,
        Self::Hwb,
        Self::Ipt,
        Self::Jch,
        Self::Jmh,
        Self::Jsh,
        Self::Jpeg,
        Self::Lab,
        Self::Labh,
        Self::Labj,
        Self::Labk,
        Self::Labksl,
        Self::Labksb,
        Self::Labkwb,
        Self::LchAb,
        Self::LchAbh,
        Self::LchAbj,
        Self::LchRg,
        Self::LchUv,
        Self::LchXy,
        Self::Lms,
        Self::Luv,
        Self::Qch,
        Self::Qmh,
        Self::Qsh,
        Self::RgG,
        Self::Tsl,
        Self::Ucs,
        Self::Uvw,
        Self::XvYcc,
        Self::XyY,
        Self::XyYC,
        Self::Xyz,
        Self::YCbCr,
        Self::YCoCg,
        Self::YDbDr,
        Self::Yes,
        Self::Yiq,
        Self::YPbPr,
        Self::Yuv,
        Self::Cmyk,
        Self::Cmyw,
        Self::Rgbk,
        Self::Rgbw,
    ];

    /// Canonical display name, e.g. `"LCHab"` or `"xyY"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rca => "RCA",
            Self::Rgb => "RGB",
            Self::Rgv => "RGV",
            Self::Ryb => "RYB",
            Self::Cmy => "CMY",
            Self::Hcv => "HCV",
            Self::Hcy => "HCY",
            Self::Hpluv => "HPLuv",
            Self::Hsb => "HSB",
            Self::Hsl => "HSL",
            Self::Hsluv => "HSLuv",
            Self::Hsm => "HSM",
            Self::Hsp => "HSP",
            Self::Hwb => "HWB",
            Self::Ipt => "IPT",
            Self::Jch => "JCh",
            Self::Jmh => "JMh",
            Self::Jsh => "Jsh",
            Self::Jpeg => "JPEG",
            Self::Lab => "Lab",
            Self::Labh => "Labh",
            Self::Labj => "Labj",
            Self::Labk => "Labk",
            Self::Labksl => "Labksl",
            Self::Labksb => "Labksb",
            Self::Labkwb => "Labkwb",
            Self::LchAb => "LCHab",
            Self::LchAbh => "LCHabh",
            Self::LchAbj => "LCHabj",
            Self::LchRg => "LCHrg",
            Self::LchUv => "LCHuv",
            Self::LchXy => "LCHxy",
            Self::Lms => "LMS",
            Self::Luv => "Luv",
            Self::Qch => "QCh",
            Self::Qmh => "QMh",
            Self::Qsh => "Qsh",
            Self::RgG => "rgG",
            Self::Tsl => "TSL",
            Self::Ucs => "UCS",
            Self::Uvw => "UVW",
            Self::XvYcc => "xvYCC",
            Self::XyY => "xyY",
            Self::XyYC => "xyYC",
            Self::Xyz => "XYZ",
            Self::YCbCr => "YCbCr",
            Self::YCoCg => "YCoCg",
            Self::YDbDr => "YDbDr",
            Self::Yes => "YES",
            Self::Yiq => "YIQ",
            Self::YPbPr => "YPbPr",
            Self::Yuv => "YUV",
            Self::Cmyk => "CMYK",
            Self::Cmyw => "CMYW",
            Self::Rgbk => "RGBK",
            Self::Rgbw => "RGBW",
        }
    }

    /// Ordered channel descriptors.
    pub const fn components(self) -> &'static [Component] {
        match self {
            Self::Rca => &RCA,
            Self::Rgb => &RGB8,
            Self::Rgv => &RGV,
            Self::Ryb => &RYB,
            Self::Cmy => &CMY,
            Self::Hcv => &HCV,
            Self::Hcy => &HCY,
            Self::Hpluv => &HPLUV,
            Self::Hsb => &HSB,
            Self::Hsl => &HSL,
            Self::Hsluv => &HSL,
            Self::Hsm => &HSM,
            Self::Hsp => &HSP,
            Self::Hwb => &HWB,
            Self::Ipt => &IPT,
            Self::Jch => &JCH,
            Self::Jmh => &JMH,
            Self::Jsh => &JSH,
            Self::Jpeg => &JPEG,
            Self::Lab => &LAB,
            Self::Labh => &LABH,
            Self::Labj => &LABJ,
            Self::Labk => &LABK,
            Self::Labksl => &LABKSL,
            Self::Labksb => &LABKSB,
            Self::Labkwb => &LABKWB,
            Self::LchAb => &LCHAB,
            Self::LchAbh => &LCHABH,
            Self::LchAbj => &LCHABJ,
            Self::LchRg => &LCHRG,
            Self::LchUv => &LCHUV,
            Self::LchXy => &LCHXY,
            Self::Lms => &LMS,
            Self::Luv => &LUV,
            Self::Qch => &QCH,
            Self::Qmh => &QMH,
            Self::Qsh => &QSH,
            Self::RgG => &RGG,
            Self::Tsl => &TSL,
            Self::Ucs => &UCS,
            Self::Uvw => &UVW,
            Self::XvYcc => &XVYCC,
            Self::XyY => &XYY,
            Self::XyYC => &XYYC,
            Self::Xyz => &XYZ,
            Self::YCbCr => &YCBCR,
            Self::YCoCg => &YCOCG,
            Self::YDbDr => &YDBDR,
            Self::Yes => &YES,
            Self::Yiq => &YIQ,
            Self::YPbPr => &YPBPR,
            Self::Yuv => &YUV,
            Self::Cmyk => &CMYK,
            Self::Cmyw => &CMYW,
            Self::Rgbk => &RGBK,
            Self::Rgbw => &RGBW,
        }
    }

    /// Number of components.
    #[inline]
    pub const fn arity(self) -> usize {
        self.components().len()
    }

    /// Built-in registry index (declaration order).
    #[inline]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns true for models whose first or last channel is a hue angle.
    pub fn has_hue(self) -> bool {
        self.components().iter().any(|c| c.unit == Unit::Degree)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = Error;

    /// Case-insensitive lookup by canonical name.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::lookup(format!("unknown color model '{}'", s)))
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_discriminant() {
        for (i, m) in Model::ALL.iter().enumerate() {
            assert_eq!(m.ordinal(), i, "{}", m);
        }
    }

    #[test]
    fn test_external_indices() {
        assert_eq!(Model::Rca.ordinal(), 0);
        assert_eq!(Model::Rgb.ordinal(), 1);
        assert_eq!(Model::Hsluv.ordinal(), 10);
        assert_eq!(Model::Lab.ordinal(), 19);
        assert_eq!(Model::LchUv.ordinal(), 30);
        assert_eq!(Model::Xyz.ordinal(), 44);
        assert_eq!(Model::Cmyk.ordinal(), 52);
        assert_eq!(Model::Rgbw.ordinal(), 55);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Model::Lab.arity(), 3);
        assert_eq!(Model::Cmyk.arity(), 4);
        assert_eq!(Model::ALL.iter().filter(|m| m.arity() == 4).count(), 4);
    }

    #[test]
    fn test_names_roundtrip() {
        for m in Model::ALL {
            assert_eq!(m.name().parse::<Model>().unwrap(), m);
        }
        assert_eq!("lchab".parse::<Model>().unwrap(), Model::LchAb);
        // Case-insensitive names collide only if two canonical names differ by case
        assert_eq!("XYY".parse::<Model>().unwrap(), Model::XyY);
        assert!("Lch".parse::<Model>().unwrap_err().is_lookup());
    }

    #[test]
    fn test_descriptors_valid() {
        for m in Model::ALL {
            for c in m.components() {
                assert!(c.is_valid(), "{} {}", m, c.symbol);
            }
        }
    }

    #[test]
    fn test_has_hue() {
        assert!(Model::Hsl.has_hue());
        assert!(Model::LchAb.has_hue());
        assert!(!Model::Lab.has_hue());
    }
}
