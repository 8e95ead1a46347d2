//! Problem registry and per-problem solvers

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub mod abbreviation;
pub mod casing;
pub mod expression;
pub mod tally;

/// Solves one problem from its raw contest input
pub trait Solver {
    /// Parse `input` and render the answer
    ///
    /// The answer never carries a trailing newline; answers spanning
    /// several lines are joined with `\n`.
    fn solve(&self, input: &str) -> Result<String>;
}

/// Static metadata about a registered problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemInfo {
    /// Contest number
    pub contest_id: u32,
    /// Problem letter within the contest
    pub index: char,
    /// Problem title
    pub name: &'static str,
    /// Command-line name
    pub slug: &'static str,
    /// Difficulty rating
    pub rating: u32,
    /// Problemset tags
    pub tags: &'static [&'static str],
}

impl ProblemInfo {
    /// Contest code such as `339A`
    pub fn code(&self) -> String {
        format!("{}{}", self.contest_id, self.index)
    }

    /// Problemset URL
    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/problemset/problem/{}/{}",
            self.contest_id, self.index
        )
    }
}

/// Registered problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Problem {
    /// 339A: sort the terms of a sum of single digits
    HelpfulMaths,
    /// 59A: re-case a word by its majority letter case
    Word,
    /// 71A: abbreviate words longer than ten characters
    WayTooLongWords,
    /// 734A: decide the winner of a series of games
    AntonAndDanik,
}

const HELPFUL_MATHS: ProblemInfo = ProblemInfo {
    contest_id: 339,
    index: 'A',
    name: "Helpful Maths",
    slug: "helpful-maths",
    rating: 800,
    tags: &["greedy", "implementation", "sortings", "strings"],
};

const WORD: ProblemInfo = ProblemInfo {
    contest_id: 59,
    index: 'A',
    name: "Word",
    slug: "word",
    rating: 800,
    tags: &["implementation", "strings"],
};

const WAY_TOO_LONG_WORDS: ProblemInfo = ProblemInfo {
    contest_id: 71,
    index: 'A',
    name: "Way Too Long Words",
    slug: "way-too-long-words",
    rating: 800,
    tags: &["strings"],
};

const ANTON_AND_DANIK: ProblemInfo = ProblemInfo {
    contest_id: 734,
    index: 'A',
    name: "Anton and Danik",
    slug: "anton-and-danik",
    rating: 800,
    tags: &["implementation", "strings"],
};

impl Problem {
    /// Every registered problem, in contest order
    pub const ALL: [Problem; 4] = [
        Problem::Word,
        Problem::WayTooLongWords,
        Problem::HelpfulMaths,
        Problem::AntonAndDanik,
    ];

    /// Static metadata for this problem
    pub fn info(&self) -> &'static ProblemInfo {
        match self {
            Problem::HelpfulMaths => &HELPFUL_MATHS,
            Problem::Word => &WORD,
            Problem::WayTooLongWords => &WAY_TOO_LONG_WORDS,
            Problem::AntonAndDanik => &ANTON_AND_DANIK,
        }
    }

    /// Look a problem up by contest code, ignoring case
    pub fn from_code(code: &str) -> Option<Problem> {
        Self::ALL
            .into_iter()
            .find(|problem| problem.info().code().eq_ignore_ascii_case(code))
    }

    /// Look a problem up by its command-line name
    pub fn from_slug(slug: &str) -> Option<Problem> {
        Self::ALL
            .into_iter()
            .find(|problem| problem.info().slug.eq_ignore_ascii_case(slug))
    }

    /// Solve this problem for the given contest input
    pub fn solve(&self, input: &str) -> Result<String> {
        match self {
            Problem::HelpfulMaths => expression::HelpfulMaths.solve(input),
            Problem::Word => casing::WordCase.solve(input),
            Problem::WayTooLongWords => abbreviation::WayTooLongWords.solve(input),
            Problem::AntonAndDanik => tally::AntonAndDanik.solve(input),
        }
    }
}

impl Solver for Problem {
    fn solve(&self, input: &str) -> Result<String> {
        Problem::solve(self, input)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.info();
        write!(f, "{} {}", info.code(), info.name)
    }
}

impl FromStr for Problem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_code(s)
            .or_else(|| Self::from_slug(s))
            .ok_or_else(|| CoreError::UnknownProblem(s.to_string()))
    }
}
