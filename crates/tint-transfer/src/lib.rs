//! # tint-transfer
//!
//! Transfer curves (companding) for working profiles.
//!
//! A transfer curve converts between linear light and the nonlinear device
//! signal stored in RGB-like models. Every other model works on linear light,
//! so the curve is consulted only at the device boundary.
//!
//! # Terminology
//!
//! - **encode** (OETF direction): linear -> device signal
//! - **decode** (EOTF direction): device signal -> linear
//!
//! # Supported Curves
//!
//! | Curve | Use Case |
//! |-------|----------|
//! | [`TransferCurve::Linear`] | Scene-linear working spaces (ACEScg) |
//! | [`TransferCurve::Srgb`] | sRGB, Display P3 |
//! | [`TransferCurve::Gamma`] | Adobe RGB (2.2), ProPhoto (1.8), DCI (2.6) |
//! | [`TransferCurve::Rec709`] | HDTV, Rec.2020 |
//! | [`TransferCurve::Hlg`] | Rec.2100 hybrid log-gamma |
//!
//! All curves are mirrored around zero, so out-of-gamut (negative) linear
//! values survive an encode/decode round trip.
//!
//! # Usage
//!
//! ```rust
//! use tint_transfer::TransferCurve;
//!
//! let curve = TransferCurve::Srgb;
//! let linear = curve.decode(0.5);
//! assert!((curve.encode(linear) - 0.5).abs() < 1e-12);
//!
//! let adobe: TransferCurve = "gamma 2.2".parse().unwrap();
//! assert_eq!(adobe, TransferCurve::Gamma(2.2));
//! ```
//!
//! # Configuration
//!
//! In YAML a curve is either a name or a gamma map:
//!
//! ```yaml
//! transfer: srgb          # linear | srgb | rec709 | hlg
//! transfer: { gamma: 2.2 }
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - Error type
//! - [`serde`] - Config representation
//!
//! # Used By
//!
//! - `tint-color` - Working profiles and device RGB models

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod hlg;
pub mod rec709;
pub mod srgb;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tint_core::{Error, Result};

/// A companding curve between linear light and device signal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CurveRepr", into = "CurveRepr")]
pub enum TransferCurve {
    /// Identity.
    Linear,
    /// IEC 61966-2-1 piecewise curve.
    #[default]
    Srgb,
    /// Pure power law with the given exponent.
    Gamma(f64),
    /// BT.709 / BT.2020 OETF.
    Rec709,
    /// BT.2100 hybrid log-gamma.
    Hlg,
}

impl TransferCurve {
    /// Named curves that can be listed without a parameter.
    pub const NAMED: [TransferCurve; 4] = [Self::Linear, Self::Srgb, Self::Rec709, Self::Hlg];

    /// Linear -> device signal.
    #[inline]
    pub fn encode(self, linear: f64) -> f64 {
        match self {
            Self::Linear => linear,
            Self::Srgb => srgb::encode(linear),
            Self::Gamma(g) => gamma::encode(linear, g),
            Self::Rec709 => rec709::encode(linear),
            Self::Hlg => hlg::encode(linear),
        }
    }

    /// Device signal -> linear.
    #[inline]
    pub fn decode(self, signal: f64) -> f64 {
        match self {
            Self::Linear => signal,
            Self::Srgb => srgb::decode(signal),
            Self::Gamma(g) => gamma::decode(signal, g),
            Self::Rec709 => rec709::decode(signal),
            Self::Hlg => hlg::decode(signal),
        }
    }

    /// Encodes an RGB triplet.
    #[inline]
    pub fn encode3(self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.encode(c))
    }

    /// Decodes an RGB triplet.
    #[inline]
    pub fn decode3(self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|c| self.decode(c))
    }

    /// Checks that a gamma exponent is usable.
    pub fn validate(self) -> Result<Self> {
        match self {
            Self::Gamma(g) if !(g.is_finite() && g > 0.0) => {
                Err(Error::invalid(format!("gamma must be positive and finite, got {}", g)))
            }
            other => Ok(other),
        }
    }
}

impl fmt::Display for TransferCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Srgb => f.write_str("srgb"),
            Self::Gamma(g) => write!(f, "gamma {}", g),
            Self::Rec709 => f.write_str("rec709"),
            Self::Hlg => f.write_str("hlg"),
        }
    }
}

impl FromStr for TransferCurve {
    type Err = Error;

    /// Accepts `linear`, `srgb`, `rec709`, `hlg` and `gamma <g>` (also
    /// `gamma:<g>` or `gamma<g>`), case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.replace(['.', '-', '_', ' '], "").as_str() {
            "linear" => return Ok(Self::Linear),
            "srgb" => return Ok(Self::Srgb),
            "rec709" | "bt709" | "rec2020" => return Ok(Self::Rec709),
            "hlg" | "loggamma" => return Ok(Self::Hlg),
            _ => {}
        }
        if let Some(rest) = key.strip_prefix("gamma") {
            let value = rest.trim_start_matches([':', '=', ' ']).trim();
            let g: f64 = value
                .parse()
                .map_err(|_| Error::invalid(format!("bad gamma value '{}'", value)))?;
            return Self::Gamma(g).validate();
        }
        Err(Error::lookup(format!("unknown transfer curve '{}'", s)))
    }
}

// ============================================================================
// Serde representation
// ============================================================================

/// On-disk form: a curve name or `{ gamma: g }`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CurveRepr {
    Name(String),
    Gamma { gamma: f64 },
}

impl TryFrom<CurveRepr> for TransferCurve {
    type Error = Error;

    fn try_from(repr: CurveRepr) -> Result<Self> {
        match repr {
            CurveRepr::Name(name) => name.parse(),
            CurveRepr::Gamma { gamma } => Self::Gamma(gamma).validate(),
        }
    }
}

impl From<TransferCurve> for CurveRepr {
    fn from(curve: TransferCurve) -> Self {
        match curve {
            TransferCurve::Gamma(gamma) => CurveRepr::Gamma { gamma },
            named => CurveRepr::Name(named.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all() {
        let curves = [
            TransferCurve::Linear,
            TransferCurve::Srgb,
            TransferCurve::Gamma(2.2),
            TransferCurve::Gamma(1.8),
            TransferCurve::Rec709,
            TransferCurve::Hlg,
        ];
        for curve in curves {
            for i in -10..=110 {
                let l = i as f64 / 100.0;
                let back = curve.decode(curve.encode(l));
                assert!((l - back).abs() < 1e-9, "{}: {} -> {}", curve, l, back);
            }
        }
    }

    #[test]
    fn test_endpoints() {
        for curve in TransferCurve::NAMED {
            assert_eq!(curve.encode(0.0), 0.0, "{}", curve);
            assert!((curve.encode(1.0) - 1.0).abs() < 1e-6, "{}", curve);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("sRGB".parse::<TransferCurve>().unwrap(), TransferCurve::Srgb);
        assert_eq!("Rec.709".parse::<TransferCurve>().unwrap(), TransferCurve::Rec709);
        assert_eq!("log-gamma".parse::<TransferCurve>().unwrap(), TransferCurve::Hlg);
        assert_eq!("gamma:2.6".parse::<TransferCurve>().unwrap(), TransferCurve::Gamma(2.6));
        assert_eq!("Gamma 1.8".parse::<TransferCurve>().unwrap(), TransferCurve::Gamma(1.8));
        assert!("pq".parse::<TransferCurve>().unwrap_err().is_lookup());
        assert!("gamma -1".parse::<TransferCurve>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for curve in [TransferCurve::Gamma(2.2), TransferCurve::Hlg, TransferCurve::Srgb] {
            assert_eq!(curve.to_string().parse::<TransferCurve>().unwrap(), curve);
        }
    }

    #[test]
    fn test_yaml() {
        let curve: TransferCurve = serde_yaml::from_str("srgb").unwrap();
        assert_eq!(curve, TransferCurve::Srgb);

        let curve: TransferCurve = serde_yaml::from_str("{ gamma: 2.2 }").unwrap();
        assert_eq!(curve, TransferCurve::Gamma(2.2));

        let text = serde_yaml::to_string(&TransferCurve::Gamma(1.8)).unwrap();
        let back: TransferCurve = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, TransferCurve::Gamma(1.8));

        assert!(serde_yaml::from_str::<TransferCurve>("{ gamma: 0.0 }").is_err());
    }
}
