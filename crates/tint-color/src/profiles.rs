//! Named working profiles.
//!
//! | Preset | Primaries | White | Transfer |
//! |--------|-----------|-------|----------|
//! | [`SRGB`] (default) | sRGB | D65 | sRGB |
//! | [`LINEAR_SRGB`] | sRGB | D65 | linear |
//! | [`ADOBE_RGB`] | Adobe RGB | D65 | gamma 2.2 |
//! | [`APPLE_RGB`] | Apple RGB | D65 | gamma 1.8 |
//! | [`PROPHOTO_RGB`] | ProPhoto | D50 | gamma 1.8 |
//! | [`REC709`] | Rec.709 | D65 | Rec.709 |
//! | [`REC2020`] | Rec.2020 | D65 | Rec.709 |
//! | [`REC2100_HLG`] | Rec.2020 | D65 | HLG |
//! | [`DCI_P3`] | DCI-P3 | DCI | gamma 2.6 |
//! | [`DISPLAY_P3`] | Display P3 | D65 | sRGB |
//! | [`ACESCG`] | ACES AP1 | D60 | linear |
//! | [`WIDE_GAMUT`] | Wide Gamut | D50 | gamma 2.2 |
//!
//! Presets are `static`s so their derived matrices are computed once.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::profiles;
//!
//! let p = profiles::find("display-p3").unwrap();
//! assert_eq!(p, &profiles::DISPLAY_P3);
//! ```

use tint_core::{Error, Result};
use tint_primaries::{self as primaries, illuminant};
use tint_transfer::TransferCurve;

use crate::WorkingProfile;

/// sRGB, the default profile.
pub static SRGB: WorkingProfile =
    WorkingProfile::from_primaries(primaries::SRGB, illuminant::D65, TransferCurve::Srgb);

/// sRGB primaries without companding.
pub static LINEAR_SRGB: WorkingProfile =
    WorkingProfile::from_primaries(primaries::SRGB, illuminant::D65, TransferCurve::Linear);

/// Adobe RGB (1998).
pub static ADOBE_RGB: WorkingProfile =
    WorkingProfile::from_primaries(primaries::ADOBE_RGB, illuminant::D65, TransferCurve::Gamma(2.2));

/// Apple RGB.
pub static APPLE_RGB: WorkingProfile =
    WorkingProfile::from_primaries(primaries::APPLE_RGB, illuminant::D65, TransferCurve::Gamma(1.8));

/// ProPhoto RGB.
pub static PROPHOTO_RGB: WorkingProfile =
    WorkingProfile::from_primaries(primaries::PROPHOTO_RGB, illuminant::D50, TransferCurve::Gamma(1.8));

/// Rec.709.
pub static REC709: WorkingProfile =
    WorkingProfile::from_primaries(primaries::REC709, illuminant::D65, TransferCurve::Rec709);

/// Rec.2020 (SDR).
pub static REC2020: WorkingProfile =
    WorkingProfile::from_primaries(primaries::REC2020, illuminant::D65, TransferCurve::Rec709);

/// Rec.2100 with hybrid log-gamma.
pub static REC2100_HLG: WorkingProfile =
    WorkingProfile::from_primaries(primaries::REC2020, illuminant::D65, TransferCurve::Hlg);

/// DCI-P3 theatrical.
pub static DCI_P3: WorkingProfile =
    WorkingProfile::from_primaries(primaries::DCI_P3, illuminant::DCI, TransferCurve::Gamma(2.6));

/// Display P3.
pub static DISPLAY_P3: WorkingProfile =
    WorkingProfile::from_primaries(primaries::DISPLAY_P3, illuminant::D65, TransferCurve::Srgb);

/// ACEScg.
pub static ACESCG: WorkingProfile =
    WorkingProfile::from_primaries(primaries::ACES_AP1, illuminant::D60, TransferCurve::Linear);

/// Adobe Wide Gamut RGB.
pub static WIDE_GAMUT: WorkingProfile =
    WorkingProfile::from_primaries(primaries::WIDE_GAMUT, illuminant::D50, TransferCurve::Gamma(2.2));

/// Every preset with its display name, in table order.
pub static ALL: [(&str, &WorkingProfile); 12] = [
    ("sRGB", &SRGB),
    ("Linear sRGB", &LINEAR_SRGB),
    ("Adobe RGB", &ADOBE_RGB),
    ("Apple RGB", &APPLE_RGB),
    ("ProPhoto RGB", &PROPHOTO_RGB),
    ("Rec.709", &REC709),
    ("Rec.2020", &REC2020),
    ("Rec.2100 HLG", &REC2100_HLG),
    ("DCI-P3", &DCI_P3),
    ("Display P3", &DISPLAY_P3),
    ("ACEScg", &ACESCG),
    ("Wide Gamut", &WIDE_GAMUT),
];

/// Resolves a preset by name, ignoring case, spaces and punctuation.
pub fn find(name: &str) -> Result<&'static WorkingProfile> {
    let key = simplify(name);
    ALL.iter()
        .find(|(n, _)| simplify(n) == key)
        .map(|(_, p)| *p)
        .ok_or_else(|| Error::lookup(format!("unknown profile '{}'", name)))
}

pub(crate) fn simplify(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
