//! Solvers for a small set of 800-rated Codeforces problems
//!
//! Every problem is a pure transformation from one contest-format input to
//! one contest-format output. The crate exposes both the underlying text
//! transformations and a [`Solver`] per problem that handles the exact
//! input and output formats.
//!
//! # Example
//!
//! ```rust
//! use cfkit_core::Problem;
//!
//! let answer = Problem::HelpfulMaths.solve("3+2+1\n").unwrap();
//! assert_eq!(answer, "1+2+3");
//!
//! let problem: Problem = "71A".parse().unwrap();
//! assert_eq!(problem.solve("1\nlocalization\n").unwrap(), "l10n");
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod problems;
pub mod readme;
pub mod scanner;

// Re-export key types
pub use catalog::{Catalog, CatalogEntry, CatalogStats, SolutionFile};
pub use error::{CoreError, Result};
pub use problems::abbreviation::{abbreviate, ABBREVIATION_THRESHOLD};
pub use problems::casing::{normalize_case, Casing, LetterCounts};
pub use problems::expression::{normalize_expression, Expression};
pub use problems::tally::{Outcome, Tally};
pub use problems::{Problem, ProblemInfo, Solver};
pub use readme::{refresh_readme, render_dashboard};
pub use scanner::TokenScanner;
