//! Cross-profile adaptation command.

use crate::AdaptArgs;
use anyhow::{Context, Result};
use tint_color::adapt::adapt_rgb;
use tint_color::ProfileSet;

/// Runs the adapt command.
pub fn run(args: AdaptArgs, profiles: &ProfileSet, verbose: u8) -> Result<()> {
    let source = super::resolve_profile(profiles, Some(&args.source))?;
    let target = super::resolve_profile(profiles, Some(&args.target))?;
    let rgb = super::triple(&args.rgb)?;

    let [r, g, b] = adapt_rgb(rgb, source, target)
        .with_context(|| format!("Failed to adapt {} -> {}", args.source, args.target))?;

    if verbose > 0 {
        println!("Source: {} ({})", args.source, source);
        println!("Target: {} ({})", args.target, target);
    }
    println!("{:.4} {:.4} {:.4}", r, g, b);
    Ok(())
}
