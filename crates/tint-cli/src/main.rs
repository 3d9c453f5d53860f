//! tint - color model conversion CLI
//!
//! Converts values between color models, adapts device colors between
//! working profiles and measures color differences.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Color model conversion CLI")]
#[command(long_about = "
Converts color values between 56 color models through a linear-RGB hub.

Examples:
  tint models                               # List registered models
  tint models --json                        # Component descriptors as JSON
  tint convert --from rgb --to lab 255 0 0  # sRGB red to CIE Lab
  tint convert --from hsl --to cmyk -p adobe-rgb 120 50 50
  tint adapt --source srgb --target prophoto-rgb 200 100 50
  tint diff --metric cie94 255 0 0 250 10 10
  tint --config studio.yaml profiles        # Presets plus configured profiles
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Profile config file (defaults to $TINT_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered color models
    #[command(visible_alias = "m")]
    Models(ModelsArgs),

    /// Convert a color between models
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Adapt a device color between working profiles
    #[command(visible_alias = "a")]
    Adapt(AdaptArgs),

    /// List working profiles
    #[command(visible_alias = "p")]
    Profiles(ProfilesArgs),

    /// Color difference between two device colors
    #[command(visible_alias = "d")]
    Diff(DiffArgs),
}

/// Arguments for the `models` command.
#[derive(Args)]
struct ModelsArgs {
    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Source model name
    #[arg(short, long)]
    from: String,

    /// Target model name
    #[arg(short, long)]
    to: String,

    /// Working profile (preset or configured name)
    #[arg(short, long)]
    profile: Option<String>,

    /// Decimal places in the output
    #[arg(long, default_value = "4")]
    precision: usize,

    /// Component values in the source model's units
    #[arg(required = true, num_args = 2..=4, allow_negative_numbers = true)]
    values: Vec<f64>,
}

/// Arguments for the `adapt` command.
#[derive(Args)]
struct AdaptArgs {
    /// Source working profile
    #[arg(short, long)]
    source: String,

    /// Target working profile
    #[arg(short, long)]
    target: String,

    /// Device red, green and blue (0-255)
    #[arg(required = true, num_args = 3, allow_negative_numbers = true)]
    rgb: Vec<f64>,
}

/// Arguments for the `profiles` command.
#[derive(Args)]
struct ProfilesArgs {
    /// Show derived matrices
    #[arg(short, long)]
    all: bool,
}

/// Arguments for the `diff` command.
#[derive(Args)]
struct DiffArgs {
    /// Metric: cie76, cie94, ciede2000
    #[arg(short, long, default_value = "ciede2000")]
    metric: String,

    /// Working profile for both colors
    #[arg(short, long)]
    profile: Option<String>,

    /// Two device colors: r g b r g b (0-255)
    #[arg(required = true, num_args = 6, allow_negative_numbers = true)]
    rgb: Vec<f64>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let profiles = commands::load_profiles(cli.config.as_deref())?;

    match cli.command {
        Commands::Models(args) => commands::models::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, &profiles, cli.verbose),
        Commands::Adapt(args) => commands::adapt::run(args, &profiles, cli.verbose),
        Commands::Profiles(args) => commands::profiles::run(args, &profiles, cli.verbose),
        Commands::Diff(args) => commands::diff::run(args, &profiles, cli.verbose),
    }
}
