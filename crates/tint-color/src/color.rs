//! Color values: a model tag plus its component tuple.
//!
//! A [`Color`] never holds a tuple whose length differs from its model's
//! arity. Every conversion goes through the hub (linear-light RGB of a
//! [`WorkingProfile`]), so converting between any two models is two hops.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::{profiles, Color, Model};
//!
//! let p = &profiles::SRGB;
//! let red = Color::from_rgb(Model::Lab, [255.0, 0.0, 0.0], p);
//! let [l, _, _] = red.as_array3()?;
//! assert!((l - 53.24).abs() < 0.01);
//!
//! let hsl = red.convert_to(Model::Hsl, p);
//! assert_eq!(hsl.model(), Model::Hsl);
//!
//! // Arity is checked at construction
//! assert!(Color::new(Model::Cmyk, &[0.0, 0.0, 0.0]).is_err());
//! # Ok::<(), tint_core::Error>(())
//! ```

use std::fmt;

use serde::Serialize;
use tint_core::{Error, Result};
use tint_math::Vec3;

use crate::adapt::adapt_rgb;
use crate::convert;
use crate::difference::{ColorDifference, DifferenceMetric, Lab};
use crate::{Model, WorkingProfile};

// ============================================================================
// Components
// ============================================================================

/// A component tuple tagged by its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Components {
    /// Two components
    Two([f64; 2]),
    /// Three components
    Three([f64; 3]),
    /// Four components
    Four([f64; 4]),
}

impl Components {
    /// Builds a tuple from a slice of 2, 3 or 4 values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match *values {
            [a, b] => Some(Self::Two([a, b])),
            [a, b, c] => Some(Self::Three([a, b, c])),
            [a, b, c, d] => Some(Self::Four([a, b, c, d])),
            _ => None,
        }
    }

    /// Values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Two(v) => v,
            Self::Three(v) => v,
            Self::Four(v) => v,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        match self {
            Self::Two(v) => v,
            Self::Three(v) => v,
            Self::Four(v) => v,
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

// ============================================================================
// Color
// ============================================================================

/// A color in one model.
///
/// Equality compares model and components; colors of different models are
/// never equal even when they describe the same stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    model: Model,
    value: Components,
}

impl Color {
    /// Creates a color from a slice.
    ///
    /// # Errors
    ///
    /// [`Error::Dimensionality`] when `values.len()` differs from the arity.
    pub fn new(model: Model, values: &[f64]) -> Result<Self> {
        match Components::from_slice(values) {
            Some(value) if value.len() == model.arity() => Ok(Self { model, value }),
            _ => Err(Error::dimensionality(model.name(), model.arity(), values.len())),
        }
    }

    /// Color with every component set to `v`.
    pub fn splat(model: Model, v: f64) -> Self {
        let value = match model.arity() {
            2 => Components::Two([v; 2]),
            4 => Components::Four([v; 4]),
            _ => Components::Three([v; 3]),
        };
        Self { model, value }
    }

    fn with_arity(model: Model, value: Components) -> Result<Self> {
        if value.len() != model.arity() {
            return Err(Error::not_supported(format!(
                "{} has {} components, not {}",
                model,
                model.arity(),
                value.len()
            )));
        }
        Ok(Self { model, value })
    }

    /// Two-component factory.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] unless the model has two components.
    pub fn new2(model: Model, v: [f64; 2]) -> Result<Self> {
        Self::with_arity(model, Components::Two(v))
    }

    /// Three-component factory.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] unless the model has three components.
    pub fn new3(model: Model, v: [f64; 3]) -> Result<Self> {
        Self::with_arity(model, Components::Three(v))
    }

    /// Four-component factory.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] unless the model has four components.
    pub fn new4(model: Model, v: [f64; 4]) -> Result<Self> {
        Self::with_arity(model, Components::Four(v))
    }

    /// Model tag.
    #[inline]
    pub fn model(&self) -> Model {
        self.model
    }

    /// Component tuple.
    #[inline]
    pub fn components(&self) -> &Components {
        &self.value
    }

    /// Component values in model order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        self.value.as_slice()
    }

    /// Values as a pair.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] when the model does not have two components.
    pub fn as_array2(&self) -> Result<[f64; 2]> {
        match self.value {
            Components::Two(v) => Ok(v),
            _ => Err(self.wrong_width(2)),
        }
    }

    /// Values as a triple.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] when the model does not have three components.
    pub fn as_array3(&self) -> Result<[f64; 3]> {
        match self.value {
            Components::Three(v) => Ok(v),
            _ => Err(self.wrong_width(3)),
        }
    }

    /// Values as a quadruple.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`] when the model does not have four components.
    pub fn as_array4(&self) -> Result<[f64; 4]> {
        match self.value {
            Components::Four(v) => Ok(v),
            _ => Err(self.wrong_width(4)),
        }
    }

    fn wrong_width(&self, n: usize) -> Error {
        Error::not_supported(format!("{} has {} components, cannot view as {}", self.model, self.value.len(), n))
    }

    /// Copy with each component clamped to its descriptor range.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for (v, desc) in out.value.as_mut_slice().iter_mut().zip(self.model.components()) {
            *v = desc.clamp(*v);
        }
        out
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Builds a color of `model` from a hub value.
    pub fn from_hub(model: Model, hub: Vec3, profile: &WorkingProfile) -> Self {
        Self {
            model,
            value: convert::from_hub(model, hub, profile),
        }
    }

    /// Linear-light RGB of this color under `profile`.
    pub fn to_hub(&self, profile: &WorkingProfile) -> Vec3 {
        convert::to_hub(self.model, &self.value, profile)
    }

    /// Builds a color of `model` from device RGB (0-255).
    pub fn from_rgb(model: Model, rgb: [f64; 3], profile: &WorkingProfile) -> Self {
        let hub = profile.decode(Vec3::from_array(rgb) / 255.0);
        Self::from_hub(model, hub, profile)
    }

    /// Device RGB (0-255) of this color under `profile`.
    pub fn to_rgb(&self, profile: &WorkingProfile) -> [f64; 3] {
        (profile.encode(self.to_hub(profile)) * 255.0).to_array()
    }

    /// The same stimulus in another model.
    pub fn convert_to(&self, model: Model, profile: &WorkingProfile) -> Self {
        Self::from_hub(model, self.to_hub(profile), profile)
    }

    /// Re-expresses this color for `target`, compensating the white change.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateProfile`] when either white has a zero cone response.
    pub fn adapt(&mut self, source: &WorkingProfile, target: &WorkingProfile) -> Result<()> {
        *self = self.adapted(source, target)?;
        Ok(())
    }

    /// By-value form of [`adapt`](Self::adapt).
    pub fn adapted(&self, source: &WorkingProfile, target: &WorkingProfile) -> Result<Self> {
        let rgb = adapt_rgb(self.to_rgb(source), source, target)?;
        Ok(Self::from_rgb(self.model, rgb, target))
    }

    /// Perceptual difference to `other`, measured in CIE Lab under `profile`.
    pub fn difference(&self, other: &Color, metric: DifferenceMetric, profile: &WorkingProfile) -> f64 {
        let lab = |c: &Color| Lab::from(convert::to_lab(c.to_hub(profile), profile));
        metric.difference(&lab(self), &lab(other))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(f, "{}(", self.model)?;
        for (i, v) in self.values().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.*}", precision, v)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

    #[test]
    fn test_construction_checks_arity() {
        assert!(Color::new(Model::Lab, &[50.0, 0.0, 0.0]).is_ok());
        let err = Color::new(Model::Cmyk, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.is_shape_error());
        assert!(matches!(err, Error::Dimensionality { expected: 4, actual: 3, .. }));
        assert!(Color::new(Model::Rgb, &[]).is_err());
    }

    #[test]
    fn test_factories_and_accessors() {
        assert!(matches!(Color::new4(Model::Lab, [0.0; 4]), Err(Error::NotSupported(_))));
        assert!(matches!(Color::new2(Model::Rgb, [0.0; 2]), Err(Error::NotSupported(_))));

        let c = Color::new4(Model::Cmyk, [10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(c.as_array4().unwrap(), [10.0, 20.0, 30.0, 40.0]);
        assert!(matches!(c.as_array3(), Err(Error::NotSupported(_))));

        let s = Color::splat(Model::Rgbw, 7.0);
        assert_eq!(s.values(), &[7.0; 4]);
    }

    #[test]
    fn test_equality_is_model_aware() {
        let a = Color::new3(Model::Hsl, [10.0, 20.0, 30.0]).unwrap();
        let b = Color::new3(Model::Hsb, [10.0, 20.0, 30.0]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Color::new(Model::Hsl, &[10.0, 20.0, 30.0]).unwrap());
    }

    #[test]
    fn test_rgb_roundtrip() {
        let p = &profiles::SRGB;
        let c = Color::from_rgb(Model::Luv, [12.0, 200.0, 99.0], p);
        let rgb = c.to_rgb(p);
        for (a, b) in rgb.iter().zip([12.0, 200.0, 99.0]) {
            assert!((a - b).abs() < 1e-9, "{:?}", rgb);
        }
    }

    #[test]
    fn test_convert_is_two_hops() {
        let p = &profiles::DISPLAY_P3;
        let c = Color::from_rgb(Model::Hsl, [30.0, 60.0, 90.0], p);
        let direct = c.convert_to(Model::Lab, p);
        let via_hub = Color::from_hub(Model::Lab, c.to_hub(p), p);
        assert_eq!(direct, via_hub);
    }

    #[test]
    fn test_clamped() {
        let c = Color::new3(Model::Rgb, [-5.0, 300.0, 12.0]).unwrap().clamped();
        assert_eq!(c.values(), &[0.0, 255.0, 12.0]);
    }

    #[test]
    fn test_adapt_same_profile_is_identity() {
        let p = &profiles::SRGB;
        let mut c = Color::from_rgb(Model::Hsb, [40.0, 80.0, 160.0], p);
        let before = c;
        c.adapt(p, p).unwrap();
        for (a, b) in c.values().iter().zip(before.values()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_display() {
        let c = Color::new3(Model::Lab, [50.0, -1.5, 2.26]).unwrap();
        assert_eq!(format!("{}", c), "Lab(50.0000, -1.5000, 2.2600)");
        assert_eq!(format!("{:.1}", c), "Lab(50.0, -1.5, 2.3)");
    }

    #[test]
    fn test_difference_zero_for_same() {
        let p = &profiles::SRGB;
        let c = Color::from_rgb(Model::Rgb, [10.0, 120.0, 200.0], p);
        let other = c.convert_to(Model::Hsl, p);
        assert!(c.difference(&other, DifferenceMetric::Ciede2000, p) < 1e-6);
    }
}
