//! Markdown output formatter

use super::{CaseOutput, CatalogReport, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs cases as sections, catalogs as tables
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    case_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            case_count: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_case(&mut self, case: &CaseOutput) -> Result<()> {
        self.case_count += 1;
        writeln!(
            self.writer,
            "### {}. {} ({})",
            self.case_count,
            case.source,
            case.problem.info().code()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer, "{}", case.answer)?;
        writeln!(self.writer, "```")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_catalog(&mut self, report: &CatalogReport<'_>) -> Result<()> {
        let stats = &report.stats;
        writeln!(self.writer, "### Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Count |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| **Total Problems** | {} |", stats.total)?;
        for (rating, count) in &stats.by_rating {
            writeln!(self.writer, "| **{rating}** | {count} |")?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Problems")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| # | Problem | Difficulty | Status | Solution | Tags |"
        )?;
        writeln!(
            self.writer,
            "|---|---------|------------|--------|----------|------|"
        )?;
        for (i, entry) in report.catalog.entries.iter().enumerate() {
            let tags = entry
                .tags
                .iter()
                .take(report.max_tags)
                .map(|tag| format!("`{tag}`"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                self.writer,
                "| {} | [{} - {}]({}) | {} | Solved | [Code](./{}) | {} |",
                i + 1,
                entry.solution.code(),
                entry.title(),
                entry.url,
                entry.rating_label(),
                entry.solution.path.display(),
                tags
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.case_count > 0 {
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total cases: {}*", self.case_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfkit_core::{Catalog, Problem};

    #[test]
    fn test_cases_with_footer() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_case(&CaseOutput {
                source: "maths.txt".to_string(),
                problem: Problem::HelpfulMaths,
                answer: "1+2+3".to_string(),
            })
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.starts_with("### 1. maths.txt (339A)\n"));
        assert!(out.contains("```\n1+2+3\n```\n"));
        assert!(out.ends_with("---\n*Total cases: 1*\n"));
    }

    #[test]
    fn test_catalog_table_limits_tags() {
        let catalog = Catalog::from_paths(["800_rated/339A_Helpful_Maths.cpp"]);
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter
            .format_catalog(&CatalogReport::new(&catalog, 2))
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(out.contains("| **Total Problems** | 1 |"));
        assert!(out.contains("| # | Problem | Difficulty | Status | Solution | Tags |"));
        assert!(out.contains(
            "| 1 | [339A - Helpful Maths](https://codeforces.com/problemset/problem/339/A) | 800 | Solved | [Code](./800_rated/339A_Helpful_Maths.cpp) | `greedy`, `implementation` |"
        ));
        assert!(!out.contains("Total cases"));
    }
}
