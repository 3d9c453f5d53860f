//! # tint-color
//!
//! Color models and conversions around a linear-RGB hub.
//!
//! Every [`Model`] converts to and from the hub, linear RGB in `[0, 1]` under
//! a [`WorkingProfile`]. Any-to-any conversion is two hops:
//!
//! ```text
//!  source model --to_hub--> linear RGB --from_hub--> target model
//!                               |
//!                     profile.rgb_to_xyz()
//!                               |
//!                              XYZ --> Lab, Luv, LMS, CAM02, Jzazbz, ...
//! ```
//!
//! - [`Model`] - the 56 supported models and their channel descriptors
//! - [`Color`] - a tagged component tuple
//! - [`WorkingProfile`] - primaries, white, transfer curve, adaptation basis
//!   and viewing conditions; presets live in [`profiles`]
//! - [`Registry`] - dense model indices for index-based consumers
//! - [`adapt`] - moving device colors between profiles
//! - [`cam02`] - CIECAM02 appearance correlates
//! - [`gamut`] - sRGB chroma bounds in LCHuv for HSLuv/HPLuv
//! - [`difference`] - ΔE metrics
//! - [`stats`] - channel samples for histograms
//! - [`config`] - YAML profile definitions
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::prelude::*;
//!
//! let red = Color::new(Model::Rgb, &[255.0, 0.0, 0.0])?;
//! let hsl = red.convert_to(Model::Hsl, &profiles::SRGB);
//! let [h, s, l] = hsl.as_array3()?;
//! assert!(h.abs() < 1e-9 && (s - 100.0).abs() < 1e-9 && (l - 50.0).abs() < 1e-9);
//!
//! let lab = red.convert_to(Model::Lab, &profiles::SRGB);
//! assert!((lab.values()[0] - 53.24).abs() < 0.01);
//! # Ok::<(), tint_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - Error type, component descriptors, CIE constants
//! - [`tint-math`] - Vec3/Mat3, adaptation bases, polar helpers
//! - [`tint-transfer`] - Transfer curves
//! - [`tint-primaries`] - Primaries, illuminants, RGB/XYZ matrices
//! - [`serde`] / [`serde_yaml`] - Profile config
//! - [`rayon`] - Batch statistics
//!
//! # Used By
//!
//! - `tint-cli` - Command line front end
//! - `tint-tests` - Cross-crate property tests
//! - `tint-bench` - Conversion benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod convert;
mod model;
mod models;

pub mod adapt;
pub mod cam02;
pub mod config;
pub mod difference;
pub mod gamut;
pub mod profile;
pub mod profiles;
pub mod registry;
pub mod stats;

pub use color::{Color, Components};
pub use config::ProfileSet;
pub use difference::DifferenceMetric;
pub use model::Model;
pub use profile::{Surround, ViewingConditions, WorkingProfile};
pub use registry::Registry;

// Re-export sub-crates for convenience
pub use tint_core::{Component, Error, Result, Unit};
pub use tint_math as math;
pub use tint_primaries as primaries;
pub use tint_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        profiles,
        Color,
        Components,
        DifferenceMetric,
        Model,
        ProfileSet,
        Registry,
        Surround,
        ViewingConditions,
        WorkingProfile,
    };

    pub use crate::difference::{ColorDifference, Lab};
    pub use tint_core::{Component, Error, Result, Unit};
    pub use tint_math::{AdaptationMethod, Mat3, Vec3};
    pub use tint_transfer::TransferCurve;
}
