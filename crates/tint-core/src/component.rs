//! Per-channel component descriptors.
//!
//! Every registered model carries an ordered list of [`Component`]s, one per
//! numeric channel. Descriptors are display and clamping metadata only: a
//! color may hold out-of-range values while it is being converted.

use serde::Serialize;

/// Unit attached to a component value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Plain number
    #[default]
    None,
    /// Percentage
    Percent,
    /// Angle in degrees
    Degree,
}

impl Unit {
    /// Display symbol for this unit (empty for [`Unit::None`]).
    pub const fn symbol(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Percent => "%",
            Unit::Degree => "°",
        }
    }
}

/// Immutable description of one channel of one model.
///
/// # Example
///
/// ```rust
/// use tint_core::{Component, Unit};
///
/// let l = Component::new(0.0, 100.0, Unit::Percent, "L", "Lightness");
/// assert!(l.contains(50.0));
/// assert_eq!(l.normalize(25.0), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Component {
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Unit
    pub unit: Unit,
    /// Short label
    pub symbol: &'static str,
    /// Long label
    pub name: &'static str,
}

impl Component {
    /// Creates a descriptor.
    #[inline]
    pub const fn new(min: f64, max: f64, unit: Unit, symbol: &'static str, name: &'static str) -> Self {
        Self {
            min,
            max,
            unit,
            symbol,
            name,
        }
    }

    /// Descriptor with a `[0, max]` range and no unit.
    #[inline]
    pub const fn upto(max: f64, symbol: &'static str, name: &'static str) -> Self {
        Self::new(0.0, max, Unit::None, symbol, name)
    }

    /// Hue descriptor over `[0, 360]` degrees.
    #[inline]
    pub const fn hue(symbol: &'static str) -> Self {
        Self::new(0.0, 360.0, Unit::Degree, symbol, "Hue")
    }

    /// Percentage descriptor over `[0, max]`.
    #[inline]
    pub const fn percent(max: f64, symbol: &'static str, name: &'static str) -> Self {
        Self::new(0.0, max, Unit::Percent, symbol, name)
    }

    /// Returns `max - min`.
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `min <= max`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Returns `true` if `v` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamps `v` into `[min, max]`.
    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    /// Maps `v` from `[min, max]` to `[0, 1]`. A zero-width range maps to 0.
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        let r = self.range();
        if r == 0.0 { 0.0 } else { (v - self.min) / r }
    }

    /// Maps `t` from `[0, 1]` back to `[min, max]`.
    #[inline]
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + t * self.range()
    }

    /// Label with unit, e.g. `"H (°)"`.
    pub fn label(&self) -> String {
        match self.unit {
            Unit::None => self.symbol.to_string(),
            unit => format!("{} ({})", self.symbol, unit.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let c = Component::new(-128.0, 127.0, Unit::None, "a", "Green-Red");
        assert_eq!(c.clamp(200.0), 127.0);
        assert_eq!(c.clamp(-200.0), -128.0);
        assert_eq!(c.clamp(3.5), 3.5);
    }

    #[test]
    fn test_normalize_roundtrip() {
        let c = Component::upto(255.0, "R", "Red");
        let t = c.normalize(51.0);
        assert!((t - 0.2).abs() < 1e-12);
        assert!((c.denormalize(t) - 51.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_width() {
        let c = Component::new(1.0, 1.0, Unit::None, "k", "Constant");
        assert!(c.is_valid());
        assert_eq!(c.normalize(1.0), 0.0);
    }

    #[test]
    fn test_invalid_order() {
        let c = Component::new(10.0, 0.0, Unit::None, "x", "Broken");
        assert!(!c.is_valid());
    }

    #[test]
    fn test_label() {
        assert_eq!(Component::hue("H").label(), "H (°)");
        assert_eq!(Component::upto(1.0, "x", "x").label(), "x");
    }
}
