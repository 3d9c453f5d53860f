//! CLI command implementations

pub mod adapt;
pub mod convert;
pub mod diff;
pub mod models;
pub mod profiles;

use anyhow::{Context, Result};
use std::path::Path;
use tint_color::{Model, ProfileSet, WorkingProfile};

/// Loads the profile config from `path`, or from `$TINT_CONFIG`.
pub fn load_profiles(path: Option<&Path>) -> Result<ProfileSet> {
    match path {
        Some(path) => ProfileSet::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => ProfileSet::from_env().context("Failed to load config from TINT_CONFIG"),
    }
}

/// Resolves a profile name, falling back to the configured default.
pub fn resolve_profile<'a>(set: &'a ProfileSet, name: Option<&str>) -> Result<&'a WorkingProfile> {
    match name {
        Some(name) => set
            .get(name)
            .with_context(|| format!("Unknown profile: {}", name)),
        None => Ok(set.default_profile()),
    }
}

/// Parses a model name.
pub fn parse_model(name: &str) -> Result<Model> {
    name.parse::<Model>()
        .with_context(|| format!("Unknown color model: {}", name))
}

/// Copies exactly three values out of a parsed argument list.
pub fn triple(values: &[f64]) -> Result<[f64; 3]> {
    values
        .try_into()
        .with_context(|| format!("Expected 3 values, got {}", values.len()))
}
