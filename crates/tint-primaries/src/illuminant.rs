//! Standard illuminant chromaticities (CIE 1931 2° observer).
//!
//! # Usage
//!
//! ```rust
//! use tint_primaries::illuminant;
//!
//! let white = illuminant::find("d65").unwrap();
//! assert_eq!(white, illuminant::D65);
//! ```

use tint_core::{Error, Result};

use crate::Chromaticity;

/// Incandescent / tungsten (~2856K).
pub const A: Chromaticity = Chromaticity::new(0.44757, 0.40745);

/// Average daylight, obsolete (~6774K).
pub const C: Chromaticity = Chromaticity::new(0.31006, 0.31616);

/// Horizon light, ICC profile connection space (~5003K).
pub const D50: Chromaticity = Chromaticity::new(0.34567, 0.35850);

/// Mid-morning daylight (~5503K).
pub const D55: Chromaticity = Chromaticity::new(0.33242, 0.34743);

/// ACES white (~6000K).
pub const D60: Chromaticity = Chromaticity::new(0.32168, 0.33767);

/// Noon daylight, sRGB and Rec.709 white (~6504K).
pub const D65: Chromaticity = Chromaticity::new(0.31270, 0.32900);

/// North sky daylight (~7504K).
pub const D75: Chromaticity = Chromaticity::new(0.29902, 0.31485);

/// Equal energy.
pub const E: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

/// Cool white fluorescent.
pub const F2: Chromaticity = Chromaticity::new(0.37208, 0.37529);

/// Broadband daylight fluorescent.
pub const F7: Chromaticity = Chromaticity::new(0.31292, 0.32933);

/// Narrow tri-band fluorescent.
pub const F11: Chromaticity = Chromaticity::new(0.38052, 0.37713);

/// DCI theatrical projector white.
pub const DCI: Chromaticity = Chromaticity::new(0.31400, 0.35100);

/// Every named illuminant, in table order.
pub const ALL: [(&str, Chromaticity); 12] = [
    ("A", A),
    ("C", C),
    ("D50", D50),
    ("D55", D55),
    ("D60", D60),
    ("D65", D65),
    ("D75", D75),
    ("E", E),
    ("F2", F2),
    ("F7", F7),
    ("F11", F11),
    ("DCI", DCI),
];

/// Looks up an illuminant by name, case-insensitive.
pub fn find(name: &str) -> Result<Chromaticity> {
    let key = name.trim();
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(key))
        .map(|(_, xy)| *xy)
        .ok_or_else(|| Error::lookup(format!("unknown illuminant '{}'", name)))
}

/// Reverse lookup of a chromaticity's illuminant name.
pub fn name_of(xy: Chromaticity) -> Option<&'static str> {
    ALL.iter().find(|(_, w)| *w == xy).map(|(n, _)| *n)
}
