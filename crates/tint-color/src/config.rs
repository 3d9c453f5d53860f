//! YAML working-profile configuration.
//!
//! A config file names custom working profiles and picks a default:
//!
//! ```yaml
//! default: studio
//! profiles:
//!   - name: studio
//!     primaries: { red: [0.64, 0.33], green: [0.30, 0.60], blue: [0.15, 0.06] }
//!     white: D65            # illuminant name or [x, y]
//!     transfer: srgb        # linear | srgb | rec709 | hlg | { gamma: 2.2 }
//!     adaptation: bradford
//!     viewing: { adapting_luminance: 4.07, background: 20.0, surround: average, discounting: false }
//! ```
//!
//! Name lookups try configured profiles first, then the built-in
//! [`profiles`](crate::profiles) presets.
//!
//! # Usage
//!
//! ```rust
//! use tint_color::config::ProfileSet;
//!
//! let set = ProfileSet::from_yaml_str("
//! default: wide
//! profiles:
//!   - name: wide
//!     primaries: wide-gamut
//!     white: D50
//!     transfer: { gamma: 2.2 }
//! ")?;
//! assert_eq!(set.default_profile(), set.get("wide")?);
//! assert!(set.get("srgb").is_ok());
//! # Ok::<(), tint_core::Error>(())
//! ```

use std::path::Path;

use serde::Deserialize;
use tint_core::{Error, Result};
use tint_math::AdaptationMethod;
use tint_transfer::TransferCurve;
use tracing::debug;

use crate::profile::{PrimariesDef, ProfileDef, WhiteDef};
use crate::profiles::{self, simplify};
use crate::{ViewingConditions, WorkingProfile};

/// Environment variable holding the config path.
pub const CONFIG_ENV: &str = "TINT_CONFIG";

/// Configured working profiles plus the built-in presets.
#[derive(Debug, Clone, Default)]
pub struct ProfileSet {
    profiles: Vec<(String, WorkingProfile)>,
    default: Option<usize>,
}

impl ProfileSet {
    /// Preset-only set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, [`Error::Yaml`] if it does not
    /// parse, and [`Error::Lookup`] or [`Error::DegenerateProfile`] for bad
    /// entries.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), profiles = set.profiles.len(), "loaded profile config");
        Ok(set)
    }

    /// Parses config YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    /// Loads the file named by `TINT_CONFIG`; preset-only when it is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::new()),
        }
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let mut set = Self::new();
        for entry in raw.profiles {
            let key = simplify(&entry.name);
            if set.profiles.iter().any(|(name, _)| simplify(name) == key) {
                return Err(Error::invalid(format!("profile '{}' is defined twice", entry.name)));
            }
            let def = ProfileDef {
                primaries: entry.primaries,
                white: entry.white,
                transfer: entry.transfer,
                adaptation: entry.adaptation,
                viewing: entry.viewing,
            };
            let profile = def.build()?;
            set.profiles.push((entry.name, profile));
        }

        if let Some(name) = raw.default {
            let key = simplify(&name);
            match set.profiles.iter().position(|(n, _)| simplify(n) == key) {
                Some(i) => set.default = Some(i),
                None => {
                    // A preset may be the default too
                    let preset = profiles::find(&name)?;
                    set.profiles.push((name, preset.clone()));
                    set.default = Some(set.profiles.len() - 1);
                }
            }
        }
        Ok(set)
    }

    /// Resolves a profile by name: configured first, then presets.
    pub fn get(&self, name: &str) -> Result<&WorkingProfile> {
        let key = simplify(name);
        match self.profiles.iter().find(|(n, _)| simplify(n) == key) {
            Some((_, p)) => Ok(p),
            None => profiles::find(name),
        }
    }

    /// The configured default, or sRGB.
    pub fn default_profile(&self) -> &WorkingProfile {
        match self.default {
            Some(i) => &self.profiles[i].1,
            None => &profiles::SRGB,
        }
    }

    /// Names of configured profiles in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.profiles.iter().map(|(n, _)| n.as_str())
    }

    /// Configured profiles in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorkingProfile)> + '_ {
        self.profiles.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Number of configured profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` when only presets are available.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

// ============================================================================
// Raw YAML structures
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    profiles: Vec<RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    primaries: PrimariesDef,
    white: WhiteDef,
    #[serde(default)]
    transfer: TransferCurve,
    #[serde(default)]
    adaptation: AdaptationMethod,
    #[serde(default)]
    viewing: ViewingConditions,
}
