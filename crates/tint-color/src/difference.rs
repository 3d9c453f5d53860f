//! Color difference metrics in CIE Lab.
//!
//! | Metric | Notes |
//! |--------|-------|
//! | [`Cie76`] | Euclidean distance |
//! | [`Cie94`] | Graphic-arts weights by default |
//! | [`Ciede2000`] | Sharma, Wu and Dalal formulation |
//!
//! # Usage
//!
//! ```rust
//! use tint_color::difference::{Ciede2000, ColorDifference, Lab};
//!
//! let a = Lab::new(50.0, 2.6772, -79.7751);
//! let b = Lab::new(50.0, 0.0, -82.7485);
//! let de = Ciede2000::default().difference(&a, &b);
//! assert!((de - 2.0425).abs() < 1e-4);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use tint_core::{Error, Result};

/// A CIE Lab triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Creates a Lab triple.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma `√(a² + b²)`.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<[f64; 3]> for Lab {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self::new(l, a, b)
    }
}

/// A distance between two Lab colors.
pub trait ColorDifference {
    /// Difference between `a` and `b`; zero for identical colors.
    fn difference(&self, a: &Lab, b: &Lab) -> f64;
}

// ============================================================================
// CIE76
// ============================================================================

/// CIE 1976 ΔE*ab.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cie76;

impl ColorDifference for Cie76 {
    fn difference(&self, a: &Lab, b: &Lab) -> f64 {
        ((a.l - b.l).powi(2) + (a.a - b.a).powi(2) + (a.b - b.b).powi(2)).sqrt()
    }
}

// ============================================================================
// CIE94
// ============================================================================

/// CIE 1994 ΔE*94. `a` is the reference color.
#[derive(Debug, Clone, Copy)]
pub struct Cie94 {
    /// Lightness weight
    pub kl: f64,
    /// Chroma weight factor
    pub k1: f64,
    /// Hue weight factor
    pub k2: f64,
}

impl Cie94 {
    /// Graphic arts weights.
    pub const GRAPHIC_ARTS: Self = Self { kl: 1.0, k1: 0.045, k2: 0.015 };

    /// Textile weights.
    pub const TEXTILES: Self = Self { kl: 2.0, k1: 0.048, k2: 0.014 };
}

impl Default for Cie94 {
    fn default() -> Self {
        Self::GRAPHIC_ARTS
    }
}

impl ColorDifference for Cie94 {
    fn difference(&self, a: &Lab, b: &Lab) -> f64 {
        let dl = a.l - b.l;
        let (c1, c2) = (a.chroma(), b.chroma());
        let dc = c1 - c2;
        let dh2 = ((a.a - b.a).powi(2) + (a.b - b.b).powi(2) - dc * dc).max(0.0);

        let sc = 1.0 + self.k1 * c1;
        let sh = 1.0 + self.k2 * c1;
        ((dl / self.kl).powi(2) + (dc / sc).powi(2) + dh2 / (sh * sh)).sqrt()
    }
}

// ============================================================================
// CIEDE2000
// ============================================================================

/// CIEDE2000 ΔE00.
#[derive(Debug, Clone, Copy)]
pub struct Ciede2000 {
    /// Lightness weight
    pub kl: f64,
    /// Chroma weight
    pub kc: f64,
    /// Hue weight
    pub kh: f64,
}

impl Default for Ciede2000 {
    fn default() -> Self {
        Self { kl: 1.0, kc: 1.0, kh: 1.0 }
    }
}

fn hue_deg(b: f64, a: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

impl ColorDifference for Ciede2000 {
    fn difference(&self, x: &Lab, y: &Lab) -> f64 {
        let c_bar = (x.chroma() + y.chroma()) / 2.0;
        let c7 = c_bar.powi(7);
        let g = 0.5 * (1.0 - (c7 / (c7 + 25f64.powi(7))).sqrt());

        let a1 = (1.0 + g) * x.a;
        let a2 = (1.0 + g) * y.a;
        let c1 = a1.hypot(x.b);
        let c2 = a2.hypot(y.b);
        let h1 = hue_deg(x.b, a1);
        let h2 = hue_deg(y.b, a2);

        let dl = y.l - x.l;
        let dc = c2 - c1;
        let dh = if c1 * c2 == 0.0 {
            0.0
        } else if (h2 - h1).abs() <= 180.0 {
            h2 - h1
        } else if h2 - h1 > 180.0 {
            h2 - h1 - 360.0
        } else {
            h2 - h1 + 360.0
        };
        let dh_big = 2.0 * (c1 * c2).sqrt() * (dh.to_radians() / 2.0).sin();

        let l_bar = (x.l + y.l) / 2.0;
        let c_bar = (c1 + c2) / 2.0;
        let h_bar = if c1 * c2 == 0.0 {
            h1 + h2
        } else if (h1 - h2).abs() <= 180.0 {
            (h1 + h2) / 2.0
        } else if h1 + h2 < 360.0 {
            (h1 + h2 + 360.0) / 2.0
        } else {
            (h1 + h2 - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
            + 0.24 * (2.0 * h_bar).to_radians().cos()
            + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
            - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();
        let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
        let c7 = c_bar.powi(7);
        let rc = 2.0 * (c7 / (c7 + 25f64.powi(7))).sqrt();
        let l50 = (l_bar - 50.0).powi(2);
        let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
        let sc = 1.0 + 0.045 * c_bar;
        let sh = 1.0 + 0.015 * c_bar * t;
        let rt = -(2.0 * d_theta * PI / 180.0).sin() * rc;

        let tl = dl / (self.kl * sl);
        let tc = dc / (self.kc * sc);
        let th = dh_big / (self.kh * sh);
        (tl * tl + tc * tc + th * th + rt * tc * th).sqrt()
    }
}

// ============================================================================
// Metric Selection
// ============================================================================

/// Selects a difference metric by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifferenceMetric {
    /// [`Cie76`]
    Cie76,
    /// [`Cie94`] with graphic-arts weights
    Cie94,
    /// [`Ciede2000`]
    #[default]
    Ciede2000,
}

impl DifferenceMetric {
    /// All metrics.
    pub const ALL: [DifferenceMetric; 3] = [Self::Cie76, Self::Cie94, Self::Ciede2000];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cie76 => "cie76",
            Self::Cie94 => "cie94",
            Self::Ciede2000 => "ciede2000",
        }
    }
}

impl ColorDifference for DifferenceMetric {
    fn difference(&self, a: &Lab, b: &Lab) -> f64 {
        match self {
            Self::Cie76 => Cie76.difference(a, b),
            Self::Cie94 => Cie94::default().difference(a, b),
            Self::Ciede2000 => Ciede2000::default().difference(a, b),
        }
    }
}

impl fmt::Display for DifferenceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifferenceMetric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match key.as_str() {
            "cie76" | "de76" => Ok(Self::Cie76),
            "cie94" | "de94" => Ok(Self::Cie94),
            "ciede2000" | "de2000" | "cie2000" => Ok(Self::Ciede2000),
            _ => Err(Error::lookup(format!("unknown difference metric '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sharma, Wu and Dalal (2005) test pairs
    const SHARMA: [([f64; 3], [f64; 3], f64); 6] = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 2.8361, -74.0200], [50.0, 0.0, -82.7485], 3.4412),
        ([50.0, -1.3802, -84.2814], [50.0, 0.0, -82.7485], 1.0000),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
    ];

    #[test]
    fn test_ciede2000_reference_pairs() {
        let de = Ciede2000::default();
        for (a, b, expected) in SHARMA {
            let got = de.difference(&a.into(), &b.into());
            assert!((got - expected).abs() < 1e-4, "{:?} {:?}: {} vs {}", a, b, got, expected);
        }
    }

    #[test]
    fn test_ciede2000_symmetric() {
        let de = Ciede2000::default();
        let (a, b) = (Lab::new(40.0, 20.0, -10.0), Lab::new(45.0, -5.0, 15.0));
        assert!((de.difference(&a, &b) - de.difference(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn test_cie76() {
        let d = Cie76.difference(&Lab::new(50.0, 3.0, 4.0), &Lab::new(50.0, 0.0, 0.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_cie94_lightness_only() {
        let d = Cie94::default().difference(&Lab::new(50.0, 0.0, 0.0), &Lab::new(60.0, 0.0, 0.0));
        assert!((d - 10.0).abs() < 1e-12);
        // Textile lightness weight halves the lightness term
        let d = Cie94::TEXTILES.difference(&Lab::new(50.0, 0.0, 0.0), &Lab::new(60.0, 0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_is_zero() {
        let lab = Lab::new(33.0, 12.0, -40.0);
        for metric in DifferenceMetric::ALL {
            assert_eq!(metric.difference(&lab, &lab), 0.0, "{}", metric);
        }
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!("CIEDE2000".parse::<DifferenceMetric>().unwrap(), DifferenceMetric::Ciede2000);
        assert_eq!("cie-94".parse::<DifferenceMetric>().unwrap(), DifferenceMetric::Cie94);
        assert!("delta".parse::<DifferenceMetric>().unwrap_err().is_lookup());
    }
}
