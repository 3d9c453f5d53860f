//! # tint-math
//!
//! Math primitives for colorimetry.
//!
//! - [`Mat3`] - 3x3 matrices for linear color transforms
//! - [`Vec3`] - 3D vectors for RGB/XYZ/LMS triplets
//! - Cone-response bases and adaptation matrices ([`AdaptationMethod`], [`adapt_matrix`])
//! - Polar helpers for hue-chroma families ([`to_polar`], [`from_polar`], [`normalize_hue`])
//! - Interpolation ([`lerp`], [`remap`], [`piecewise`])
//!
//! # Design
//!
//! All arithmetic is `f64`. Matrices are **row-major** with **column vectors**
//! and interoperate with [`glam`]'s `DMat3`/`DVec3`:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 0.5, 0.25);
//! assert!(xyz.y > 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Matrix inverse and interop
//! - [`tint-core`] - Error type
//! - [`serde`] - Adaptation method config names
//!
//! # Used By
//!
//! - `tint-primaries` - RGB/XYZ matrix generation
//! - `tint-color` - Model conversions and chromatic adaptation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod interp;
mod mat3;
mod polar;
mod vec3;

pub use adapt::*;
pub use interp::*;
pub use mat3::*;
pub use polar::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DVec3};
}
