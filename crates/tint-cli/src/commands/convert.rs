//! Model conversion command.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use tint_color::{Color, ProfileSet};
use tracing::debug;

/// Runs the convert command.
pub fn run(args: ConvertArgs, profiles: &ProfileSet, verbose: u8) -> Result<()> {
    let from = super::parse_model(&args.from)?;
    let to = super::parse_model(&args.to)?;
    let profile = super::resolve_profile(profiles, args.profile.as_deref())?;

    let color = Color::new(from, &args.values)
        .with_context(|| format!("Invalid {} value", from))?;
    debug!(%from, %to, %profile, "converting");

    let out = color.convert_to(to, profile);
    if verbose > 0 {
        println!("{:.*} -> {:.*}", args.precision, color, args.precision, out);
    } else {
        println!("{:.*}", args.precision, out);
    }
    Ok(())
}
