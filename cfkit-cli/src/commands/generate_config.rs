//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to suit your solutions directory");
        println!("2. Validate your configuration:");
        println!("   cfkit validate --config {}", self.output.display());
        println!("3. Use it when solving or cataloguing:");
        println!("   cfkit catalog --config {}", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        let defaults = CliConfig::default();
        format!(
            r#"# cfkit configuration

[solve]
# Output format when --format is not given: "text", "json" or "markdown"
default_format = "{}"

# Number of input files from which cases are solved in parallel
parallel_threshold = {}

# Worker threads for parallel solving (0 = one per CPU)
worker_threads = {}

[catalog]
# Directory scanned for solution files such as 71A_Way_Too_Long_Words.cpp
solutions_dir = "{}"

# Tags shown per problem in tables
max_tags = {}
"#,
            defaults.solve.default_format,
            defaults.solve.parallel_threshold,
            defaults.solve.worker_threads,
            defaults.catalog.solutions_dir.display(),
            defaults.catalog.max_tags,
        )
    }
}
