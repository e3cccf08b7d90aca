mod chart;
mod cli;
mod data;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use cli::Args;
use data::aggregate::aggregate;
use data::reader::read_samples;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = if args.inputs.is_empty() {
        discover_inputs(&args.dir)?
    } else {
        args.inputs.clone()
    };
    if inputs.is_empty() {
        log::warn!("No sweep files found in {}", args.dir.display());
        return Ok(());
    }

    let mut failures = 0usize;
    for input in &inputs {
        if let Err(e) = process_file(input, args.discard_bottom) {
            log::error!("Failed to plot {}: {e:#}", input.display());
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} of {} sweep file(s) failed", inputs.len());
    }
    Ok(())
}

/// Every `*.txt` file directly under `dir`, sorted for a stable batch order.
fn discover_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.txt");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("non-UTF-8 path {}", dir.display()))?;

    let mut inputs = Vec::new();
    for entry in glob::glob(pattern).context("globbing sweep files")? {
        inputs.push(entry.context("reading directory entry")?);
    }
    inputs.sort();
    Ok(inputs)
}

/// Full pipeline for one sweep file: read → aggregate → render.
fn process_file(input: &Path, discard_bottom: bool) -> Result<()> {
    let samples = read_samples(input)?;
    let points = aggregate(&samples, discard_bottom);
    log::info!(
        "Loaded {} samples over {} temperatures from {}",
        samples.len(),
        points.len(),
        input.display()
    );
    chart::render(&points, &chart::series_label(input), &chart::output_path(input))
}
