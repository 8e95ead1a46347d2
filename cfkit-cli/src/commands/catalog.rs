//! Catalog command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_directory;
use crate::output::{create_formatter, open_writer, CatalogReport, OutputFormat};
use anyhow::{Context, Result};
use cfkit_core::{refresh_readme, Catalog, CatalogStats};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the catalog command
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Directory holding solution files (default: from configuration, else .)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Refresh badge, date and dashboard of this README instead of printing a report
    #[arg(short, long, value_name = "FILE")]
    pub readme: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Express scanned paths relative to the directory they were found in
fn relative_to(dir: &Path, files: &[PathBuf]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|path| {
            path.strip_prefix(dir)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone())
        })
        .collect()
}

/// Rewrite a README in place from catalog statistics
pub fn update_readme_file(path: &Path, stats: &CatalogStats, updated: &str) -> Result<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read README: {}", path.display()))?;
    let refreshed = refresh_readme(&content, stats, updated);

    if refreshed == content {
        log::warn!("{} has nothing to update", path.display());
        return Ok(());
    }

    fs::write(path, refreshed)
        .with_context(|| format!("Failed to write README: {}", path.display()))?;
    Ok(())
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let dir = self
            .dir
            .clone()
            .unwrap_or_else(|| config.catalog.solutions_dir.clone());

        log::info!("Scanning {} for solutions", dir.display());
        let files = resolve_directory(&dir)?;
        let catalog = Catalog::from_paths(relative_to(&dir, &files));
        log::info!(
            "Found {} solution(s) among {} file(s)",
            catalog.len(),
            files.len()
        );

        if let Some(readme) = &self.readme {
            let stats = catalog.stats();
            let updated = chrono::Local::now().format("%B %Y").to_string();
            update_readme_file(readme, &stats, &updated)?;

            println!("✓ {} updated", readme.display());
            println!("  Total problems: {}", stats.total);
            return Ok(());
        }

        let format = match self.format {
            Some(format) => format,
            None => config.solve.output_format()?,
        };
        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer);
        formatter.format_catalog(&CatalogReport::new(&catalog, config.catalog.max_tags))?;
        formatter.finish()?;

        Ok(())
    }
}
