//! Color difference command.

use crate::DiffArgs;
use anyhow::{Context, Result, bail};
use tint_color::{Color, DifferenceMetric, Model, ProfileSet};

/// Runs the diff command.
pub fn run(args: DiffArgs, profiles: &ProfileSet, verbose: u8) -> Result<()> {
    let metric: DifferenceMetric = args
        .metric
        .parse()
        .with_context(|| format!("Unknown metric: {}", args.metric))?;
    let profile = super::resolve_profile(profiles, args.profile.as_deref())?;

    if args.rgb.len() != 6 {
        bail!("Expected 6 values (r g b r g b), got {}", args.rgb.len());
    }
    let a = Color::new3(Model::Rgb, super::triple(&args.rgb[..3])?)?;
    let b = Color::new3(Model::Rgb, super::triple(&args.rgb[3..])?)?;

    let de = a.difference(&b, metric, profile);
    if verbose > 0 {
        let lab_a = a.convert_to(Model::Lab, profile);
        let lab_b = b.convert_to(Model::Lab, profile);
        println!("A: {} {}", a, lab_a);
        println!("B: {} {}", b, lab_b);
    }
    println!("{} {:.4}", metric, de);
    Ok(())
}
