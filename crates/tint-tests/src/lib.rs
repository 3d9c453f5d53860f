//! Integration tests for tint crates.
//!
//! This crate contains end-to-end tests that exercise conversions, profiles,
//! adaptation and the registry together through the public API.
