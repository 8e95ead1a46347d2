//! Output formatting module

use anyhow::{Context, Result};
use cfkit_core::{Catalog, CatalogStats, Problem};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Answers exactly as the judge expects them
    Text,
    /// JSON with sources and metadata
    Json,
    /// Markdown report
    Markdown,
}

impl OutputFormat {
    /// Look a format up by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "answers only, one per case",
            OutputFormat::Json => "JSON array or object with sources and metadata",
            OutputFormat::Markdown => "Markdown report with tables",
        }
    }
}

/// One solved case
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CaseOutput {
    /// Where the input came from
    pub source: String,
    /// The problem solved
    pub problem: Problem,
    /// The answer, without trailing newline
    pub answer: String,
}

/// A catalog with its statistics, ready to render
#[derive(Debug, Serialize)]
pub struct CatalogReport<'a> {
    /// Summary counts
    pub stats: CatalogStats,
    /// The catalog itself
    pub catalog: &'a Catalog,
    /// Tags shown per problem in tables
    #[serde(skip)]
    pub max_tags: usize,
}

impl<'a> CatalogReport<'a> {
    /// Build a report over a catalog
    pub fn new(catalog: &'a Catalog, max_tags: usize) -> Self {
        Self {
            stats: catalog.stats(),
            catalog,
            max_tags,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single solved case
    fn format_case(&mut self, case: &CaseOutput) -> Result<()>;

    /// Format and output a solution catalog
    fn format_catalog(&mut self, report: &CatalogReport<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Boxed writer shared by all formatters
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Open the output file, or stdout when no path is given
pub fn open_writer(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Create the formatter for a format
pub fn create_formatter(format: OutputFormat, writer: OutputWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
