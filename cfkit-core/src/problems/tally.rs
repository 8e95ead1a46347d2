//! 734A Anton and Danik: count game wins and name the winner

use super::Solver;
use crate::error::{CoreError, Result};
use crate::scanner::TokenScanner;
use std::fmt;

const CODE: &str = "734A";

/// Win counts over a series of games
///
/// `'A'` is a win for Anton; any other symbol is a win for Danik.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by Anton
    pub anton: usize,
    /// Games won by Danik
    pub danik: usize,
}

/// Result of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Anton won more games
    Anton,
    /// Danik won more games
    Danik,
    /// Both won the same number of games
    Friendship,
}

impl Outcome {
    /// Output label
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Anton => "Anton",
            Outcome::Danik => "Danik",
            Outcome::Friendship => "Friendship",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Tally {
    /// Count wins in a single pass over `rounds`
    pub fn count(rounds: &str) -> Self {
        rounds.chars().fold(Self::default(), |mut tally, round| {
            if round == 'A' {
                tally.anton += 1;
            } else {
                tally.danik += 1;
            }
            tally
        })
    }

    /// Total games counted
    pub fn rounds(&self) -> usize {
        self.anton + self.danik
    }

    /// Who won the series
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.anton.cmp(&self.danik) {
            Ordering::Greater => Outcome::Anton,
            Ordering::Equal => Outcome::Friendship,
            Ordering::Less => Outcome::Danik,
        }
    }
}

/// Solver for 734A
#[derive(Debug, Clone, Copy, Default)]
pub struct AntonAndDanik;

impl Solver for AntonAndDanik {
    fn solve(&self, input: &str) -> Result<String> {
        let mut scanner = TokenScanner::new(input);
        let count = scanner.next_count("round count")?;
        let rounds = scanner.next_token("game results")?;

        let tally = Tally::count(rounds);
        if tally.rounds() != count {
            return Err(CoreError::malformed(
                CODE,
                format!("expected {count} games, got {}", tally.rounds()),
            ));
        }
        Ok(tally.outcome().label().to_string())
    }
}
