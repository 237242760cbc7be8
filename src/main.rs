//! # xrdview
//!
//! Command-line front end for loading, plotting and managing X-ray diffraction
//! patterns.
//!
//! ## Usage
//!
//! ```bash
//! # Prepare a chart of several patterns
//! xrdview plot si_300K.xy si_10K.xy --out chart.json
//!
//! # Save a pattern as a new record
//! xrdview save si_300K.xy --owner alice --material Si -e Si -t 300
//!
//! # Overwrite record 12 (asks first)
//! xrdview save si_300K_v2.xy --id 12
//!
//! # Export record 12 as an .xlsx workbook (or --format csv)
//! xrdview export 12 --dir exports
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
