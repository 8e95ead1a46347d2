//! JSON output formatter

use super::{CaseOutput, CatalogReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs cases as a JSON array, catalogs as an object
pub struct JsonFormatter<W: Write> {
    writer: W,
    cases: Vec<CaseOutput>,
    wrote_catalog: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cases: Vec::new(),
            wrote_catalog: false,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_case(&mut self, case: &CaseOutput) -> Result<()> {
        self.cases.push(case.clone());
        Ok(())
    }

    fn format_catalog(&mut self, report: &CatalogReport<'_>) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.wrote_catalog = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.wrote_catalog {
            serde_json::to_writer_pretty(&mut self.writer, &self.cases)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
