//! Working profile listing command.

use crate::ProfilesArgs;
use anyhow::Result;
use tint_color::{profiles, ProfileSet, WorkingProfile};

/// Runs the profiles command.
pub fn run(args: ProfilesArgs, set: &ProfileSet, verbose: u8) -> Result<()> {
    let default = set.default_profile();

    println!("Presets:");
    for &(name, profile) in profiles::ALL.iter() {
        print_profile(name, profile, profile == default, args.all || verbose > 1);
    }

    if !set.is_empty() {
        println!("Configured:");
        for (name, profile) in set.iter() {
            print_profile(name, profile, profile == default, args.all || verbose > 1);
        }
    }
    Ok(())
}

fn print_profile(name: &str, profile: &WorkingProfile, is_default: bool, matrices: bool) {
    let marker = if is_default { "*" } else { " " };
    println!("{} {:<14} {}", marker, name, profile);
    if matrices {
        for row in profile.rgb_to_xyz().m {
            println!("    [{:>9.6} {:>9.6} {:>9.6}]", row[0], row[1], row[2]);
        }
    }
}
