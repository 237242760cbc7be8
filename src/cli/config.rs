//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in a
//! config file (`--config FILE`, or `xrdview.toml` in the working directory):
//!
//! ```toml
//! # xrdview.toml
//! [remote]
//! base_url = "http://localhost:8000/api/v1"
//! timeout_secs = 30
//!
//! [chart]
//! x_min = 0.0
//! x_max = 120.0
//!
//! [export]
//! directory = "exports"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use xrdview::remote::DEFAULT_TIMEOUT;
use xrdview::render::{DEFAULT_X_MAX, DEFAULT_X_MIN};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "xrdview.toml";

/// Base URL used when neither the config file nor `--url` names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Export directory used when neither the config file nor `--dir` names one.
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Root configuration structure for xrdview.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Remote record store settings.
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Chart settings for the plot command.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Settings for the export command.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Remote record store settings.
#[derive(Debug, Default, Deserialize)]
pub struct RemoteConfig {
    /// API root, e.g. `http://localhost:8000/api/v1`.
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Chart settings.
#[derive(Debug, Default, Deserialize)]
pub struct ChartConfig {
    /// Lower bound of the 2θ axis.
    pub x_min: Option<f64>,

    /// Upper bound of the 2θ axis.
    pub x_max: Option<f64>,
}

/// Export settings.
#[derive(Debug, Default, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to.
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load `path` if given, else `xrdview.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

impl RemoteConfig {
    /// Effective base URL, `flag` winning over the file.
    pub fn base_url(&self, flag: Option<&str>) -> String {
        flag.or(self.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// Effective request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }
}

impl ChartConfig {
    /// Effective 2θ range, flags winning over the file.
    pub fn x_range(&self, x_min: Option<f64>, x_max: Option<f64>) -> (f64, f64) {
        (
            x_min.or(self.x_min).unwrap_or(DEFAULT_X_MIN),
            x_max.or(self.x_max).unwrap_or(DEFAULT_X_MAX),
        )
    }
}

impl ExportConfig {
    /// Effective export directory, `flag` winning over the file.
    pub fn directory(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.directory.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR))
    }
}
