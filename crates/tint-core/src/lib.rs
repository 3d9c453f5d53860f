//! # tint-core
//!
//! Core types shared by every tint crate.
//!
//! - [`Error`], [`Result`] - Unified error handling for conversions, lookups and config
//! - [`Component`], [`Unit`] - Per-channel descriptors (range, unit, labels)
//! - [`cie`] - CIE constants used by the Lab/Luv families
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal dependencies:
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-math (vectors, matrices, cone-response bases)
//!    +-- tint-primaries (chromaticities, illuminants)
//!    +-- tint-color (profiles, registry, model conversions)
//!    +-- tint-cli
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Component, Error, Unit};
//!
//! let hue = Component::new(0.0, 360.0, Unit::Degree, "H", "Hue");
//! assert_eq!(hue.clamp(400.0), 360.0);
//!
//! let err = Error::dimensionality("HSL", 3, 4);
//! assert!(err.to_string().contains("HSL"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error derive
//! - [`serde`] - Descriptor export
//! - [`serde_yaml`] - Config parse errors
//!
//! # Used By
//!
//! - `tint-math`, `tint-primaries`, `tint-color`, `tint-cli`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cie;
pub mod component;
pub mod error;

pub use component::{Component, Unit};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cie::{EPSILON, KAPPA};
    pub use crate::component::{Component, Unit};
    pub use crate::error::{Error, Result};
}
