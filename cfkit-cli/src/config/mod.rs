//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Solving configuration
    #[serde(default)]
    pub solve: SolveConfig,

    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Solving-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolveConfig {
    /// Output format used when `--format` is not given
    pub default_format: String,

    /// Number of input files from which cases are solved in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            parallel_threshold: 8,
            worker_threads: 0,
        }
    }
}

impl SolveConfig {
    /// Resolve the configured default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_name(&self.default_format).ok_or_else(|| {
            CliError::ConfigError(format!("unknown output format '{}'", self.default_format))
                .into()
        })
    }

    /// Worker threads to use, resolving 0 to the number of CPUs
    pub fn threads(&self) -> usize {
        if self.worker_threads == 0 {
            num_cpus::get()
        } else {
            self.worker_threads
        }
    }
}

/// Catalog-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory scanned for solution files
    pub solutions_dir: PathBuf,

    /// Tags shown per problem in tables
    pub max_tags: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            solutions_dir: PathBuf::from("."),
            max_tags: 3,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load configuration from a file when given, else use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<()> {
        self.solve.output_format()?;

        if self.solve.parallel_threshold == 0 {
            return Err(
                CliError::ConfigError("parallel_threshold must be greater than 0".into()).into(),
            );
        }

        if self.catalog.max_tags == 0 {
            return Err(CliError::ConfigError("max_tags must be greater than 0".into()).into());
        }

        Ok(())
    }
}
