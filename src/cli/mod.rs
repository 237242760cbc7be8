use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use xrdview::export::ExportFormat;
use xrdview::reconcile::Reconciler;
use xrdview::remote::HttpRecordStore;

mod config;
mod delete;
mod export;
mod list;
mod plot;
mod save;

pub use config::Config;

/// xrdview - X-ray diffraction pattern viewer and record manager
#[derive(Parser)]
#[command(name = "xrdview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Base URL of the record store API (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// File format of the export command.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// Excel workbook with an `XRD data` sheet
    #[default]
    Xlsx,
    /// Comma-separated text
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xlsx => ExportFormat::Xlsx,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load pattern files and write the prepared chart as JSON
    Plot {
        /// Two-column `2θ intensity` text files
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Output JSON path (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        out: Option<PathBuf>,

        /// Lower bound of the 2θ axis
        #[arg(long)]
        x_min: Option<f64>,

        /// Upper bound of the 2θ axis
        #[arg(long)]
        x_max: Option<f64>,
    },

    /// List records in the remote store
    List,

    /// Save a pattern as a remote record
    ///
    /// Without --id a new record is created. With --id the pattern is
    /// reconciled against that record: it is overwritten after confirmation,
    /// or created anew if it no longer exists.
    Save {
        /// Pattern file (defaults to the stored data of --id)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Owner name
        #[arg(long)]
        owner: Option<String>,

        /// Material name
        #[arg(long)]
        material: Option<String>,

        /// Element symbol; repeat for each element
        #[arg(short, long = "element", value_name = "SYMBOL")]
        elements: Vec<String>,

        /// Temperature in kelvin
        #[arg(short, long)]
        temperature: Option<f64>,

        /// Remote record to update
        #[arg(long)]
        id: Option<i64>,

        /// Overwrite without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Export a remote record as a spreadsheet
    Export {
        /// Record id
        #[arg(value_name = "ID")]
        id: i64,

        /// Output directory (overrides the config file)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Output file format
        #[arg(short, long, default_value = "xlsx", value_enum)]
        format: FormatArg,
    },

    /// Delete a remote record
    Delete {
        /// Record id
        #[arg(value_name = "ID")]
        id: i64,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn connect(config: &Config, url: Option<&str>) -> Result<Reconciler<HttpRecordStore>> {
    let base_url = config.remote.base_url(url);
    let store = HttpRecordStore::with_timeout(&base_url, config.remote.timeout())
        .with_context(|| format!("Failed to create HTTP client for {}", base_url))?;
    Ok(Reconciler::new(store))
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let url = cli.url.as_deref();

    match cli.command {
        Commands::Plot {
            files,
            out,
            x_min,
            x_max,
        } => {
            let (x_min, x_max) = config.chart.x_range(x_min, x_max);
            plot::run(files, out, x_min, x_max)
        }
        Commands::List => list::run(&connect(&config, url)?),
        Commands::Save {
            file,
            owner,
            material,
            elements,
            temperature,
            id,
            yes,
        } => save::run(
            &connect(&config, url)?,
            save::SaveArgs {
                file,
                owner,
                material,
                elements,
                temperature,
                id,
                yes,
            },
        ),
        Commands::Export { id, dir, format } => export::run(
            &connect(&config, url)?,
            id,
            config.export.directory(dir),
            format.into(),
        ),
        Commands::Delete { id } => delete::run(&connect(&config, url)?, id),
    }
}
