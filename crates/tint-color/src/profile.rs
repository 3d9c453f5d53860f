//! Working profiles.
//!
//! A [`WorkingProfile`] parameterizes every conversion: which primaries the
//! hub's linear RGB refers to, the reference white, the transfer curve used
//! at the device boundary, the cone-response basis for adaptation and the
//! viewing conditions used by the appearance models.
//!
//! Profiles are immutable values. "Changing" a profile means building a new
//! one with [`WorkingProfile::new`] or one of the `with_*` methods.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::{profiles, WorkingProfile};
//! use tint_color::primaries::{illuminant, ADOBE_RGB};
//! use tint_color::transfer::TransferCurve;
//!
//! let adobe = WorkingProfile::from_primaries(ADOBE_RGB, illuminant::D65, TransferCurve::Gamma(2.2));
//! assert_eq!(adobe, profiles::ADOBE_RGB);
//!
//! let white = adobe.rgb_to_xyz() * tint_color::math::Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tint_core::{Error, Result};
use tint_math::{AdaptationMethod, Mat3, Vec3};
use tint_primaries::{illuminant, rgb_to_xyz_matrix, Chromaticity, Primaries};
use tint_transfer::TransferCurve;
use tracing::warn;

// ============================================================================
// Viewing Conditions
// ============================================================================

/// Surround of the viewing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surround {
    /// Surface colors (reflection prints)
    #[default]
    Average,
    /// Television and monitors in a dim room
    Dim,
    /// Projection in a dark room
    Dark,
}

impl Surround {
    /// Factor determining degree of adaptation `F`.
    pub const fn f(self) -> f64 {
        match self {
            Self::Average => 1.0,
            Self::Dim => 0.9,
            Self::Dark => 0.8,
        }
    }

    /// Impact of surround `c`.
    pub const fn c(self) -> f64 {
        match self {
            Self::Average => 0.69,
            Self::Dim => 0.59,
            Self::Dark => 0.525,
        }
    }

    /// Chromatic induction factor `Nc`.
    pub const fn nc(self) -> f64 {
        match self {
            Self::Average => 1.0,
            Self::Dim => 0.9,
            Self::Dark => 0.8,
        }
    }
}

/// Viewing conditions for the CIECAM02 appearance models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewingConditions {
    /// Adapting field luminance `La` in cd/m²
    pub adapting_luminance: f64,
    /// Relative background luminance `Yb` (white = 100)
    pub background: f64,
    /// Surround
    pub surround: Surround,
    /// Discount the illuminant (`D = 1`)
    pub discounting: bool,
}

impl ViewingConditions {
    /// 64 lux ambient over a grey-world background: `La = 64 / (5π)`, `Yb = 20`.
    pub const DEFAULT: Self = Self {
        adapting_luminance: 64.0 / (5.0 * PI),
        background: 20.0,
        surround: Surround::Average,
        discounting: false,
    };

    /// Creates viewing conditions.
    pub const fn new(adapting_luminance: f64, background: f64, surround: Surround, discounting: bool) -> Self {
        Self {
            adapting_luminance,
            background,
            surround,
            discounting,
        }
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Working Profile
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Matrices {
    to_xyz: Mat3,
    to_rgb: Mat3,
}

/// Primaries, reference white, transfer curve, adaptation basis and viewing
/// conditions.
///
/// Equality compares those five fields. The white tristimulus is derived at
/// construction; the RGB/XYZ matrices are derived on first use and cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProfileDef", into = "ProfileDef")]
pub struct WorkingProfile {
    primaries: Primaries,
    white: Chromaticity,
    transfer: TransferCurve,
    adaptation: AdaptationMethod,
    viewing: ViewingConditions,
    white_xyz: Vec3,
    matrices: OnceLock<Matrices>,
}

impl WorkingProfile {
    /// Creates a profile.
    ///
    /// A white with `y == 0` yields a zero white tristimulus; conversions
    /// that need the white then fail with [`Error::DegenerateProfile`] or
    /// produce zeros.
    pub const fn new(
        primaries: Primaries,
        white: Chromaticity,
        transfer: TransferCurve,
        adaptation: AdaptationMethod,
        viewing: ViewingConditions,
    ) -> Self {
        Self {
            primaries,
            white,
            transfer,
            adaptation,
            viewing,
            white_xyz: white.to_xyz(),
            matrices: OnceLock::new(),
        }
    }

    /// Profile with Bradford adaptation and default viewing conditions.
    pub const fn from_primaries(primaries: Primaries, white: Chromaticity, transfer: TransferCurve) -> Self {
        Self::new(primaries, white, transfer, AdaptationMethod::Bradford, ViewingConditions::DEFAULT)
    }

    /// RGB primaries.
    #[inline]
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// Reference white chromaticity.
    #[inline]
    pub fn white(&self) -> Chromaticity {
        self.white
    }

    /// Reference white tristimulus with `Y = 1`.
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        self.white_xyz
    }

    /// Transfer curve at the device boundary.
    #[inline]
    pub fn transfer(&self) -> TransferCurve {
        self.transfer
    }

    /// Cone-response basis for adaptation and LMS.
    #[inline]
    pub fn adaptation(&self) -> AdaptationMethod {
        self.adaptation
    }

    /// Viewing conditions for the appearance models.
    #[inline]
    pub fn viewing(&self) -> &ViewingConditions {
        &self.viewing
    }

    /// Linear RGB to XYZ.
    ///
    /// Degenerate primaries produce a zero matrix (and a warning); use
    /// [`validate`](Self::validate) to reject them up front.
    #[inline]
    pub fn rgb_to_xyz(&self) -> Mat3 {
        self.matrices().to_xyz
    }

    /// XYZ to linear RGB.
    #[inline]
    pub fn xyz_to_rgb(&self) -> Mat3 {
        self.matrices().to_rgb
    }

    /// Linear RGB to XYZ, for a hub value.
    #[inline]
    pub fn to_xyz(&self, hub: Vec3) -> Vec3 {
        self.rgb_to_xyz() * hub
    }

    /// XYZ to linear RGB (the hub).
    #[inline]
    pub fn from_xyz(&self, xyz: Vec3) -> Vec3 {
        self.xyz_to_rgb() * xyz
    }

    /// Device signal (0..1) to linear.
    #[inline]
    pub fn decode(&self, device: Vec3) -> Vec3 {
        device.map(|c| self.transfer.decode(c))
    }

    /// Linear to device signal (0..1).
    #[inline]
    pub fn encode(&self, linear: Vec3) -> Vec3 {
        linear.map(|c| self.transfer.encode(c))
    }

    /// Checks that the white and primaries produce invertible matrices and
    /// that the white has a non-zero cone response.
    pub fn validate(&self) -> Result<()> {
        rgb_to_xyz_matrix(&self.primaries, self.white)?
            .inverse()
            .ok_or_else(|| Error::degenerate("RGB to XYZ matrix is singular"))?;
        tint_math::cone_scale(self.adaptation, self.white_xyz, self.white_xyz)?;
        self.transfer.validate()?;
        Ok(())
    }

    /// Same profile with another transfer curve.
    pub fn with_transfer(&self, transfer: TransferCurve) -> Self {
        Self::new(self.primaries, self.white, transfer, self.adaptation, self.viewing)
    }

    /// Same profile with another adaptation basis.
    pub fn with_adaptation(&self, adaptation: AdaptationMethod) -> Self {
        Self::new(self.primaries, self.white, self.transfer, adaptation, self.viewing)
    }

    /// Same profile with other viewing conditions.
    pub fn with_viewing(&self, viewing: ViewingConditions) -> Self {
        Self::new(self.primaries, self.white, self.transfer, self.adaptation, viewing)
    }

    /// Same profile with another reference white.
    pub fn with_white(&self, white: Chromaticity) -> Self {
        Self::new(self.primaries, white, self.transfer, self.adaptation, self.viewing)
    }

    fn matrices(&self) -> &Matrices {
        self.matrices.get_or_init(|| {
            let derived = rgb_to_xyz_matrix(&self.primaries, self.white)
                .and_then(|to_xyz| {
                    let to_rgb = to_xyz
                        .inverse()
                        .ok_or_else(|| Error::degenerate("RGB to XYZ matrix is singular"))?;
                    Ok(Matrices { to_xyz, to_rgb })
                });
            derived.unwrap_or_else(|err| {
                warn!(%err, "degenerate working profile, conversions will yield zeros");
                Matrices {
                    to_xyz: Mat3::ZERO,
                    to_rgb: Mat3::ZERO,
                }
            })
        })
    }
}

impl PartialEq for WorkingProfile {
    fn eq(&self, other: &Self) -> bool {
        self.primaries == other.primaries
            && self.white == other.white
            && self.transfer == other.transfer
            && self.adaptation == other.adaptation
            && self.viewing == other.viewing
    }
}

impl Default for WorkingProfile {
    fn default() -> Self {
        crate::profiles::SRGB.clone()
    }
}

impl fmt::Display for WorkingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let white = match illuminant::name_of(self.white) {
            Some(name) => name.to_string(),
            None => format!("({}, {})", self.white.x, self.white.y),
        };
        write!(f, "white {}, {}, {}", white, self.transfer, self.adaptation)
    }
}

// ============================================================================
// Serde representation
// ============================================================================

/// A reference white given as an illuminant name or an `[x, y]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhiteDef {
    /// Illuminant name, e.g. `D65`
    Named(String),
    /// Explicit chromaticity
    Xy(Chromaticity),
}

impl WhiteDef {
    /// Resolves to a chromaticity.
    pub fn resolve(&self) -> Result<Chromaticity> {
        match self {
            Self::Named(name) => illuminant::find(name),
            Self::Xy(xy) => Ok(*xy),
        }
    }
}

impl From<Chromaticity> for WhiteDef {
    fn from(xy: Chromaticity) -> Self {
        match illuminant::name_of(xy) {
            Some(name) => Self::Named(name.to_string()),
            None => Self::Xy(xy),
        }
    }
}

/// Primaries given as a named set or explicit chromaticities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimariesDef {
    /// Named set, e.g. `adobe-rgb`
    Named(String),
    /// Explicit chromaticities
    Explicit(Primaries),
}

impl PrimariesDef {
    /// Resolves to primaries.
    pub fn resolve(&self) -> Result<Primaries> {
        match self {
            Self::Named(name) => tint_primaries::find(name),
            Self::Explicit(p) => Ok(*p),
        }
    }
}

/// Plain serializable form of a [`WorkingProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDef {
    /// RGB primaries
    pub primaries: PrimariesDef,
    /// Reference white
    pub white: WhiteDef,
    /// Transfer curve
    #[serde(default)]
    pub transfer: TransferCurve,
    /// Adaptation basis
    #[serde(default)]
    pub adaptation: AdaptationMethod,
    /// Viewing conditions
    #[serde(default)]
    pub viewing: ViewingConditions,
}

impl ProfileDef {
    /// Builds and validates the profile.
    pub fn build(&self) -> Result<WorkingProfile> {
        let profile = WorkingProfile::new(
            self.primaries.resolve()?,
            self.white.resolve()?,
            self.transfer,
            self.adaptation,
            self.viewing,
        );
        profile.validate()?;
        Ok(profile)
    }
}

impl TryFrom<ProfileDef> for WorkingProfile {
    type Error = Error;

    fn try_from(def: ProfileDef) -> Result<Self> {
        def.build()
    }
}

impl From<WorkingProfile> for ProfileDef {
    fn from(p: WorkingProfile) -> Self {
        Self {
            primaries: PrimariesDef::Explicit(p.primaries),
            white: p.white.into(),
            transfer: p.transfer,
            adaptation: p.adaptation,
            viewing: p.viewing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;
    use tint_primaries::{SRGB, WIDE_GAMUT};

    #[test]
    fn test_white_tristimulus() {
        let p = WorkingProfile::from_primaries(SRGB, illuminant::D65, TransferCurve::Srgb);
        let w = p.white_xyz();
        assert!((w.x - 0.95047).abs() < 1e-4);
        assert_eq!(w.y, 1.0);
        assert!((w.z - 1.08883).abs() < 1e-3);
    }

    #[test]
    fn test_white_maps_from_unit_rgb() {
        for p in profiles::ALL.iter().map(|(_, p)| *p) {
            let w = p.rgb_to_xyz() * Vec3::ONE;
            assert!((w - p.white_xyz()).length() < 1e-9, "{}", p);
        }
    }

    #[test]
    fn test_matrices_invert() {
        let p = &profiles::WIDE_GAMUT;
        let v = Vec3::new(0.1, 0.7, 0.3);
        let back = p.from_xyz(p.to_xyz(v));
        assert!((back - v).length() < 1e-12);
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = WorkingProfile::from_primaries(WIDE_GAMUT, illuminant::D50, TransferCurve::Gamma(2.2));
        let _ = a.rgb_to_xyz();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, a.with_adaptation(AdaptationMethod::Cat02));
    }

    #[test]
    fn test_zero_y_white() {
        let p = profiles::SRGB.with_white(Chromaticity::new(0.3, 0.0));
        assert_eq!(p.white_xyz(), Vec3::ZERO);
        assert!(matches!(p.validate().unwrap_err(), Error::DegenerateProfile(_)));
        assert_eq!(p.rgb_to_xyz(), Mat3::ZERO);
    }

    #[test]
    fn test_serde_roundtrip() {
        let yaml = serde_yaml::to_string(&profiles::PROPHOTO_RGB).unwrap();
        assert!(yaml.contains("D50"));
        let back: WorkingProfile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, profiles::PROPHOTO_RGB);
    }

    #[test]
    fn test_deserialize_named() {
        let yaml = "primaries: adobe-rgb\nwhite: D65\ntransfer: { gamma: 2.2 }\n";
        let p: WorkingProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(p, profiles::ADOBE_RGB);
        assert_eq!(*p.viewing(), ViewingConditions::DEFAULT);
    }

    #[test]
    fn test_surround_factors() {
        assert_eq!(Surround::Dim.f(), 0.9);
        assert_eq!(Surround::Dark.c(), 0.525);
        assert_eq!(Surround::Average.nc(), 1.0);
    }
}
