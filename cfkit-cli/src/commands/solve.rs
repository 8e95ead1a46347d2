//! Solve command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, open_writer, CaseOutput, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use cfkit_core::{CoreError, Problem};
use clap::Args;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Source label used for standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Arguments for the solve command
#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Problem to solve, by contest code (339A) or name (helpful-maths)
    #[arg(value_name = "PROBLEM", value_parser = parse_problem)]
    pub problem: Problem,

    /// Input files or patterns, one case per file (default: stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Solve cases in parallel regardless of their number
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

fn parse_problem(s: &str) -> Result<Problem, String> {
    s.parse().map_err(|e: CoreError| e.to_string())
}

/// Solve one case, labelling errors with its source
pub fn solve_case(problem: Problem, source: &str, input: &str) -> Result<CaseOutput> {
    let answer = problem
        .solve(input)
        .map_err(|e| CliError::ProcessingError(format!("{source}: {e}")))?;

    log::debug!("{source}: solved {}", problem.info().code());
    Ok(CaseOutput {
        source: source.to_string(),
        problem,
        answer,
    })
}

fn solve_file(problem: Problem, path: &Path) -> Result<CaseOutput> {
    let input = FileReader::read_text(path)?;
    solve_case(problem, &path.display().to_string(), &input)
}

impl SolveArgs {
    /// Execute the solve command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Solving {}", self.problem);
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.solve.output_format()?,
        };

        let cases = if self.input.is_empty() {
            let input = FileReader::read_stdin()?;
            vec![solve_case(self.problem, STDIN_SOURCE, &input)?]
        } else {
            self.solve_files(&config, quiet)?
        };

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer);
        for case in &cases {
            formatter.format_case(case)?;
        }
        formatter.finish()?;

        log::info!("Solved {} case(s)", cases.len());
        Ok(())
    }

    fn solve_files(&self, config: &CliConfig, quiet: bool) -> Result<Vec<CaseOutput>> {
        let files = resolve_patterns(&self.input)?;
        let parallel = self.parallel || files.len() >= config.solve.parallel_threshold;
        log::info!(
            "Found {} input file(s), solving {}",
            files.len(),
            if parallel { "in parallel" } else { "sequentially" }
        );

        let mut progress = ProgressReporter::new(quiet);
        progress.init_cases(files.len() as u64);

        let solve = |path: &PathBuf| {
            let case = solve_file(self.problem, path);
            progress.case_completed(&path.display().to_string());
            case
        };

        let cases = if parallel {
            let threads = config.solve.threads();
            log::debug!("Using {threads} worker thread(s)");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| files.par_iter().map(solve).collect::<Result<Vec<_>>>())
        } else {
            files.iter().map(solve).collect::<Result<Vec<_>>>()
        };

        progress.finish();
        cases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(problem: Problem, input: Vec<String>, output: PathBuf) -> SolveArgs {
        SolveArgs {
            problem,
            input,
            output: Some(output),
            format: None,
            parallel: false,
            config: None,
        }
    }

    #[test]
    fn test_parse_problem() {
        assert_eq!(parse_problem("339A").unwrap(), Problem::HelpfulMaths);
        assert_eq!(parse_problem("word").unwrap(), Problem::Word);
        assert_eq!(parse_problem("1A").unwrap_err(), "unknown problem: 1A");
    }

    #[test]
    fn test_solve_case_labels_errors() {
        let err = solve_case(Problem::HelpfulMaths, "bad.txt", "1+").unwrap_err();
        assert!(err.to_string().contains("bad.txt"));
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_execute_files_in_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("1.txt"), "6\nADAAAA\n").unwrap();
        fs::write(temp_dir.path().join("2.txt"), "4\nDADA\n").unwrap();
        fs::write(temp_dir.path().join("3.txt"), "1\nD\n").unwrap();
        let output = temp_dir.path().join("answers.txt");

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        args(Problem::AntonAndDanik, vec![pattern], output.clone())
            .execute(true)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Anton\nFriendship\nDanik\n"
        );
    }

    #[test]
    fn test_execute_parallel_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let cases_dir = temp_dir.path().join("cases");
        fs::create_dir(&cases_dir).unwrap();
        for i in 0..20 {
            let (a, b) = (9 - i % 10, i % 10);
            fs::write(cases_dir.join(format!("{i:02}.txt")), format!("{a}+{b}")).unwrap();
        }
        let output = temp_dir.path().join("answers.txt");

        let mut solve_args = args(
            Problem::HelpfulMaths,
            vec![format!("{}/*.txt", cases_dir.display())],
            output.clone(),
        );
        solve_args.parallel = true;
        solve_args.execute(true).unwrap();

        let expected: String = (0..20)
            .map(|i| {
                let (a, b) = (9 - i % 10, i % 10);
                format!("{}+{}\n", a.min(b), a.max(b))
            })
            .collect();
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn test_execute_reports_failing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.txt"), "3\nDA\n").unwrap();
        let output = temp_dir.path().join("answers.txt");

        let pattern = format!("{}/bad.txt", temp_dir.path().display());
        let err = args(Problem::AntonAndDanik, vec![pattern], output)
            .execute(true)
            .unwrap_err();
        assert!(err.to_string().contains("bad.txt"));
    }
}
