//! Catalog of solution files found on disk
//!
//! Solution files follow the `<contest><INDEX>_<Name>.<ext>` naming used
//! throughout the solutions directory, e.g. `71A_Way_Too_Long_Words.cpp`.
//! Files are matched against the problem registry to pick up rating, tags
//! and problemset link.

use crate::problems::{Problem, ProblemInfo};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static SOLUTION_NAME: OnceLock<Regex> = OnceLock::new();

fn solution_name() -> &'static Regex {
    SOLUTION_NAME.get_or_init(|| {
        Regex::new(r"^(\d+)([A-Z])_(.+)\.[A-Za-z0-9]+$").expect("solution name pattern is valid")
    })
}

/// Label used for problems without a known rating
pub const UNRATED: &str = "Unrated";

/// A solution file recognised by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionFile {
    /// Contest number
    pub contest_id: u32,
    /// Problem letter
    pub index: char,
    /// Title taken from the file name, underscores replaced by spaces
    pub name: String,
    /// Where the file was found
    pub path: PathBuf,
}

impl SolutionFile {
    /// Recognise a solution file from its name alone
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let caps = solution_name().captures(file_name)?;
        let contest_id = caps[1].parse().ok()?;
        let index = caps[2].chars().next()?;

        Some(Self {
            contest_id,
            index,
            name: caps[3].replace('_', " "),
            path: PathBuf::from(file_name),
        })
    }

    /// Recognise a solution file from a path, keeping the full path
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let mut solution = Self::from_file_name(file_name)?;
        solution.path = path.to_path_buf();
        Some(solution)
    }

    /// Contest code such as `71A`
    pub fn code(&self) -> String {
        format!("{}{}", self.contest_id, self.index)
    }
}

/// A solution file joined with registry metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// The file on disk
    pub solution: SolutionFile,
    /// Registered problem, if the code is known
    pub problem: Option<Problem>,
    /// Difficulty rating, if known
    pub rating: Option<u32>,
    /// Problemset tags
    pub tags: Vec<String>,
    /// Problemset link
    pub url: String,
}

impl CatalogEntry {
    /// Join a solution file with the registry
    pub fn new(solution: SolutionFile) -> Self {
        let problem = Problem::from_code(&solution.code());
        let info: Option<&ProblemInfo> = problem.as_ref().map(Problem::info);

        Self {
            rating: info.map(|info| info.rating),
            tags: info
                .map(|info| info.tags.iter().map(|tag| tag.to_string()).collect())
                .unwrap_or_default(),
            url: format!(
                "https://codeforces.com/problemset/problem/{}/{}",
                solution.contest_id, solution.index
            ),
            problem,
            solution,
        }
    }

    /// Title, preferring the registered name over the file name
    pub fn title(&self) -> &str {
        match self.problem {
            Some(problem) => problem.info().name,
            None => self.solution.name.as_str(),
        }
    }

    /// Rating as displayed, `Unrated` when unknown
    pub fn rating_label(&self) -> String {
        self.rating
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| UNRATED.to_string())
    }
}

/// Summary counts over a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Number of distinct problems solved
    pub total: usize,
    /// Problems per rating label
    pub by_rating: BTreeMap<String, usize>,
    /// Problems per tag
    pub tags: BTreeMap<String, usize>,
}

/// Distinct solutions, ordered by rating and then contest code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Catalog entries
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from candidate paths
    ///
    /// Paths whose names are not solution files are skipped. When several
    /// files solve the same problem, the first one wins.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut entries: Vec<CatalogEntry> = paths
            .into_iter()
            .filter_map(|path| SolutionFile::from_path(path.as_ref()))
            .filter(|solution| seen.insert(solution.code()))
            .map(CatalogEntry::new)
            .collect();

        entries.sort_by_key(|entry| {
            (
                entry.rating.unwrap_or(u32::MAX),
                entry.solution.contest_id,
                entry.solution.index,
            )
        });

        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no solution was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute summary counts
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.entries.len(),
            ..CatalogStats::default()
        };

        for entry in &self.entries {
            *stats.by_rating.entry(entry.rating_label()).or_insert(0) += 1;
            for tag in &entry.tags {
                *stats.tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        stats
    }
}
