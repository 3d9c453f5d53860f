//! Model registry: dense indices and channel descriptors.
//!
//! The registry maps each [`Model`] to a stable integer index and its
//! ordered [`Component`] descriptors. It is reflection data for index-based
//! consumers (UIs, serialized palettes); conversions never consult it.
//!
//! # Architecture
//!
//! [`Registry::builtin()`] builds the table in the fixed external order.
//! [`Registry::global()`] holds one process-wide instance behind a
//! `OnceLock`; [`Registry::init()`] forces it up front.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{Model, Registry};
//!
//! let registry = Registry::global();
//! assert_eq!(registry.len(), 56);
//! assert_eq!(registry.index_of(Model::Lab)?, 19);
//! assert_eq!(registry.model_at(44)?, Model::Xyz);
//!
//! let lab = registry.create(19, &[50.0, 10.0, -10.0])?;
//! assert_eq!(lab.model(), Model::Lab);
//! # Ok::<(), tint_core::Error>(())
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use tint_core::{Component, Error, Result};
use tracing::debug;

use crate::{Color, Model};

/// One registered model.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Model tag
    pub model: Model,
    /// Dense index
    pub index: usize,
    /// Channel descriptors in component order
    pub descriptors: Vec<Component>,
}

/// Bijective model/index table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    by_model: HashMap<Model, usize>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in model in the fixed external order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for model in Model::ALL {
            // Built-in descriptors are valid and unique by construction
            if let Err(err) = registry.register(model, model.components()) {
                debug!(%err, %model, "skipping built-in model");
            }
        }
        registry
    }

    /// Initializes the process-wide registry and returns it.
    ///
    /// Later calls, and [`global`](Self::global), return the same instance.
    pub fn init() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            let registry = Self::builtin();
            debug!(models = registry.len(), "color model registry initialized");
            registry
        })
    }

    /// The process-wide registry, initialized on first use.
    pub fn global() -> &'static Registry {
        Self::init()
    }

    /// Appends `model` at the next index.
    ///
    /// # Errors
    ///
    /// - [`Error::Lookup`] if the model is already registered
    /// - [`Error::Dimensionality`] if the descriptor count differs from the arity
    /// - [`Error::InvalidValue`] if a descriptor has `min > max`
    pub fn register(&mut self, model: Model, descriptors: &[Component]) -> Result<usize> {
        if self.by_model.contains_key(&model) {
            return Err(Error::lookup(format!("{} is already registered", model)));
        }
        if descriptors.len() != model.arity() {
            return Err(Error::dimensionality(model.name(), model.arity(), descriptors.len()));
        }
        if let Some(bad) = descriptors.iter().find(|d| d.min > d.max) {
            return Err(Error::invalid(format!(
                "{} component {} has min {} > max {}",
                model, bad.symbol, bad.min, bad.max
            )));
        }

        let index = self.entries.len();
        self.entries.push(Entry {
            model,
            index,
            descriptors: descriptors.to_vec(),
        });
        self.by_model.insert(model, index);
        Ok(index)
    }

    /// Index of a registered model.
    pub fn index_of(&self, model: Model) -> Result<usize> {
        self.by_model
            .get(&model)
            .copied()
            .ok_or_else(|| Error::lookup(format!("{} is not registered", model)))
    }

    /// Model at a registered index.
    pub fn model_at(&self, index: usize) -> Result<Model> {
        self.entry_at(index).map(|e| e.model)
    }

    fn entry_at(&self, index: usize) -> Result<&Entry> {
        self.entries
            .get(index)
            .ok_or_else(|| Error::lookup(format!("no model at index {} (have {})", index, self.entries.len())))
    }

    fn entry(&self, model: Model) -> Result<&Entry> {
        let index = self.index_of(model)?;
        self.entry_at(index)
    }

    /// Ordered descriptors of a registered model.
    pub fn descriptors(&self, model: Model) -> Result<&[Component]> {
        self.entry(model).map(|e| e.descriptors.as_slice())
    }

    /// Per-channel maxima.
    pub fn maximum(&self, model: Model) -> Result<Vec<f64>> {
        Ok(self.descriptors(model)?.iter().map(|d| d.max).collect())
    }

    /// Per-channel minima.
    pub fn minimum(&self, model: Model) -> Result<Vec<f64>> {
        Ok(self.descriptors(model)?.iter().map(|d| d.min).collect())
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Builds a color of the model at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::Lookup`] for an unknown index, [`Error::Dimensionality`] for
    /// a wrong value count.
    pub fn create(&self, index: usize, values: &[f64]) -> Result<Color> {
        Color::new(self.model_at(index)?, values)
    }

    /// Case-insensitive lookup by model name.
    pub fn find(&self, name: &str) -> Result<Model> {
        let model: Model = name.parse()?;
        self.index_of(model)?;
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::Unit;

    #[test]
    fn test_builtin_order_is_contract() {
        let r = Registry::builtin();
        assert_eq!(r.len(), 56);
        for (i, entry) in r.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(r.model_at(i).unwrap(), entry.model);
            assert_eq!(r.index_of(entry.model).unwrap(), i);
        }
        assert_eq!(r.index_of(Model::Rca).unwrap(), 0);
        assert_eq!(r.index_of(Model::Hsluv).unwrap(), 10);
        assert_eq!(r.index_of(Model::Rgbw).unwrap(), 55);
    }

    #[test]
    fn test_lookup_errors() {
        let r = Registry::builtin();
        assert!(r.model_at(56).unwrap_err().is_lookup());
        assert!(Registry::new().index_of(Model::Lab).unwrap_err().is_lookup());
        assert!(r.find("nope").unwrap_err().is_lookup());
        assert_eq!(r.find("lchuv").unwrap(), Model::LchUv);
    }

    #[test]
    fn test_register_validation() {
        let mut r = Registry::new();
        assert_eq!(r.register(Model::Rgb, Model::Rgb.components()).unwrap(), 0);
        assert!(r.register(Model::Rgb, Model::Rgb.components()).unwrap_err().is_lookup());
        assert!(r.register(Model::Cmyk, Model::Rgb.components()).unwrap_err().is_shape_error());

        let inverted = [
            Component::new(1.0, 0.0, Unit::None, "A", "Alpha"),
            Component::upto(1.0, "B", "Beta"),
            Component::upto(1.0, "C", "Gamma"),
        ];
        assert!(matches!(r.register(Model::Cmy, &inverted), Err(Error::InvalidValue(_))));
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_bounds() {
        let r = Registry::builtin();
        assert_eq!(r.maximum(Model::Rgb).unwrap(), vec![255.0; 3]);
        assert_eq!(r.minimum(Model::Cmyk).unwrap(), vec![0.0; 4]);
        assert_eq!(r.maximum(Model::Hsl).unwrap()[0], 360.0);
    }

    #[test]
    fn test_create_by_index() {
        let r = Registry::global();
        let c = r.create(52, &[0.0, 10.0, 20.0, 30.0]).unwrap();
        assert_eq!(c.model(), Model::Cmyk);
        assert!(r.create(52, &[0.0, 10.0, 20.0]).unwrap_err().is_shape_error());
        assert!(r.create(99, &[0.0; 3]).unwrap_err().is_lookup());
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Registry::init(), Registry::global()));
    }
}
