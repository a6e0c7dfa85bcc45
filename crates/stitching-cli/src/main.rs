use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use stitching_core::Real;
use stitching_pipeline::{SubsetInput, SubsetReport, SubsetterConfig, run_subset};

/// Keep the largest group of mutually matching images for panorama stitching.
#[derive(Debug, Parser)]
#[command(author, version, about = "Panorama image subsetting stage")]
struct Args {
    /// Path to JSON file containing SubsetInput.
    #[arg(long)]
    input: PathBuf,

    /// Optional path to JSON SubsetterConfig. Defaults are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the confidence threshold for linking two images.
    #[arg(long)]
    conf_thresh: Option<Real>,

    /// Write the Graphviz match graph to this path.
    #[arg(long)]
    save_graph: Option<PathBuf>,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))
}

fn resolve_config(args: &Args) -> Result<SubsetterConfig> {
    let mut config = match &args.config {
        Some(path) => load_json_file::<SubsetterConfig>(path)?,
        None => SubsetterConfig::default(),
    };
    if let Some(threshold) = args.conf_thresh {
        config.confidence_threshold = threshold;
    }
    if let Some(path) = &args.save_graph {
        config.matches_graph_dot_file = Some(path.clone());
    }
    Ok(config)
}

fn run_subset_from_files(args: &Args) -> Result<SubsetReport> {
    let input: SubsetInput = load_json_file(&args.input)?;
    let config = resolve_config(args)?;
    run_subset(&input, &config)
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let report = run_subset_from_files(&args)?;
    if let Some(reason) = &report.diagnostics_error {
        warn!("match graph export failed: {reason}");
        eprintln!("warning: {reason}");
    }

    let json = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
