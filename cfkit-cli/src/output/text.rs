//! Plain text output formatter

use super::{CaseOutput, CatalogReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs answers exactly as a judge expects them
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_case(&mut self, case: &CaseOutput) -> Result<()> {
        writeln!(self.writer, "{}", case.answer)?;
        Ok(())
    }

    fn format_catalog(&mut self, report: &CatalogReport<'_>) -> Result<()> {
        writeln!(self.writer, "Total problems: {}", report.stats.total)?;
        for (rating, count) in &report.stats.by_rating {
            writeln!(self.writer, "  {rating}: {count}")?;
        }

        for entry in &report.catalog.entries {
            writeln!(
                self.writer,
                "{:<6} {:<24} {:<8} {}",
                entry.solution.code(),
                entry.title(),
                entry.rating_label(),
                entry.solution.path.display()
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
