//! Error types for tint operations.
//!
//! All failures are programming or configuration errors raised at the point
//! of violation. Nothing here is transient and nothing is retried.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check_arity(model: &'static str, expected: usize, values: &[f64]) -> Result<()> {
//!     if values.len() != expected {
//!         return Err(Error::dimensionality(model, expected, values.len()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_arity("Lab", 3, &[50.0, 0.0, 0.0]).is_ok());
//! assert!(check_arity("Lab", 3, &[50.0, 0.0]).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by color construction, conversion, registry lookups and config loading.
///
/// # Categories
///
/// - **Shape errors**: [`Dimensionality`](Error::Dimensionality), [`NotSupported`](Error::NotSupported)
/// - **Registry errors**: [`Lookup`](Error::Lookup)
/// - **Profile errors**: [`DegenerateProfile`](Error::DegenerateProfile)
/// - **Input errors**: [`InvalidValue`](Error::InvalidValue)
/// - **Config errors**: [`Io`](Error::Io), [`Yaml`](Error::Yaml)
#[derive(Debug, Error)]
pub enum Error {
    /// Tuple length does not match the model's declared arity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Error;
    ///
    /// let err = Error::dimensionality("CMYK", 4, 3);
    /// assert!(err.to_string().contains("expects 4"));
    /// ```
    #[error("{model} expects {expected} components, got {actual}")]
    Dimensionality {
        /// Model name
        model: &'static str,
        /// Declared arity
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Factory or conversion request is incompatible with the target arity.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// Unregistered model, unknown index or unknown name.
    #[error("lookup failed: {0}")]
    Lookup(String),

    /// A reference white has a zero cone response.
    #[error("degenerate profile: {0}")]
    DegenerateProfile(String),

    /// Invalid descriptor or parameter.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates an [`Error::Dimensionality`] error.
    #[inline]
    pub fn dimensionality(model: &'static str, expected: usize, actual: usize) -> Self {
        Self::Dimensionality {
            model,
            expected,
            actual,
        }
    }

    /// Creates an [`Error::NotSupported`] error.
    #[inline]
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }

    /// Creates an [`Error::Lookup`] error.
    #[inline]
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Creates an [`Error::DegenerateProfile`] error.
    #[inline]
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateProfile(msg.into())
    }

    /// Creates an [`Error::InvalidValue`] error.
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Returns `true` for [`Error::Lookup`].
    #[inline]
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }

    /// Returns `true` for shape errors (dimensionality or not supported).
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Dimensionality { .. } | Self::NotSupported(_))
    }

    /// Returns `true` for config errors (I/O or YAML).
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Yaml(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionality_message() {
        let err = Error::dimensionality("HSLuv", 3, 4);
        let msg = err.to_string();
        assert!(msg.contains("HSLuv"));
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
        assert!(err.is_shape_error());
    }

    #[test]
    fn test_lookup() {
        let err = Error::lookup("index 99");
        assert!(err.is_lookup());
        assert!(!err.is_shape_error());
        assert!(err.to_string().contains("index 99"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "profiles.yaml");
        let err: Error = io_err.into();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parsed: std::result::Result<Vec<u32>, _> = serde_yaml::from_str("{ not: [a list");
        let err: Error = parsed.unwrap_err().into();
        assert!(err.is_config_error());
        assert!(err.to_string().starts_with("YAML"));
    }
}
