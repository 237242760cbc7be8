use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use xrdview::dataset::WorkingSet;
use xrdview::render::{ChartOptions, ChartSpec};

/// Load pattern files and write the chart JSON
pub fn run(files: Vec<PathBuf>, out: Option<PathBuf>, x_min: f64, x_max: f64) -> Result<()> {
    if x_min >= x_max {
        bail!("Invalid 2θ range: {} .. {}", x_min, x_max);
    }

    let mut set = WorkingSet::new();
    let report = set.load_files(&files);

    for (path, err) in &report.failed {
        warn!("Could not load {}: {}", path.display(), err);
    }
    if set.is_empty() {
        bail!("None of the {} input files contained a diffraction pattern", files.len());
    }
    info!("Loaded {} of {} files", report.loaded.len(), files.len());

    let chart = ChartSpec::build(&set, ChartOptions::xrd(x_min, x_max));
    let json = chart.to_json().context("Failed to serialize chart")?;

    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote chart with {} series to {}", chart.datasets.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
