//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use cfkit_core::Problem;
use clap::{Subcommand, ValueEnum};

pub mod catalog;
pub mod generate_config;
pub mod solve;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Solve a problem for input from stdin or files
    Solve(solve::SolveArgs),

    /// Summarize solution files found in a directory
    Catalog(catalog::CatalogArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List registered problems
    Problems,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Solve(args) => args.execute(quiet),
            Commands::Catalog(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Render the listing
    pub fn render(&self) -> String {
        match self {
            ListCommands::Problems => Problem::ALL
                .iter()
                .map(|problem| {
                    let info = problem.info();
                    format!(
                        "{:<6} {:<20} {} ({})\n",
                        info.code(),
                        info.slug,
                        info.name,
                        info.rating
                    )
                })
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(|format| format!("{:<10} {}\n", format.as_str(), format.description()))
                .collect(),
        }
    }
}
