//! rampconv — converts ramp textures into per-row RGBA curve files.
//!
//! Acts as the host around `rampconv-core`: every input image is treated as
//! a selected texture asset, the ramp conversion action is invoked on the
//! selection, and each resulting curve set is written as JSON.

mod config;
mod image_loader;
mod provider;
mod store;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};

use rampconv_core::actions::{ActionContext, GenerateCurvesAction};

use crate::config::AppConfig;
use crate::provider::FileSourceProvider;
use crate::store::JsonCurveStore;

#[derive(Parser)]
#[command(name = "rampconv")]
#[command(author, version, about = "Convert ramp textures into RGBA curves")]
#[command(long_about = "
Reads each row of a ramp texture and writes it as a four-channel curve
(one keyframe per pixel column, times spread over 0..1).

Examples:
  rampconv T_Fire.png                     # writes curves/T_Fire_Curve_<row>.json
  rampconv ramps/*.png -o out --package /Game/Ramps
  rampconv --linear T_Mask.png            # bytes are not sRGB encoded
")]
struct Cli {
    /// Input ramp images
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (default: $RAMPCONV_OUTPUT or ./curves)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat inputs as linear instead of sRGB
    #[arg(long)]
    linear: bool,

    /// Package path prefix for generated names (default: $RAMPCONV_PACKAGE or /Game)
    #[arg(long)]
    package: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command-line overrides on top of environment defaults.
    fn into_config(self) -> (AppConfig, Vec<PathBuf>) {
        let mut config = AppConfig::default();
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(package) = self.package {
            config.package_root = package;
        }
        if self.linear {
            config.srgb = false;
        }
        config.verbose = self.verbose;
        (config, self.inputs)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let (config, inputs) = Cli::parse().into_config();
    init_logging(config.verbose);

    let mut sources = FileSourceProvider::new(config.srgb);
    let selection = inputs
        .iter()
        .map(|path| sources.add(path, &config))
        .collect::<Result<Vec<_>, _>>()
        .context("input file names must be unique")?;

    let mut ctx =
        ActionContext::with_default_actions(sources, JsonCurveStore::new(&config.output_dir));
    if ctx.menu_for(&selection).is_empty() {
        bail!("no action applies to the given inputs");
    }

    let report = ctx
        .invoke(GenerateCurvesAction::ID, &selection)
        .with_context(|| format!("failed to write curves to {}", config.output_dir.display()))?;

    for skipped in &report.skipped {
        warn!(asset = %skipped.asset, reason = ?skipped.reason, "skipped");
    }
    info!(
        curves = report.created.len(),
        files = ctx.store().written().len(),
        dir = %ctx.store().dir().display(),
        "done"
    );

    if report.created.is_empty() {
        bail!("no curves were generated");
    }
    Ok(())
}
