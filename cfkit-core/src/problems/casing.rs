//! 59A Word: re-case a word by its majority letter case

use super::Solver;
use crate::error::Result;
use crate::scanner::TokenScanner;

/// Case applied to every character of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// All uppercase
    Upper,
    /// All lowercase
    Lower,
}

/// Lowercase and uppercase counts of a word
///
/// Only ASCII lowercase letters count as lower; every other character is
/// counted as upper, so the two counts always add up to the word length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts {
    /// Characters that are ASCII lowercase
    pub lower: usize,
    /// All other characters
    pub upper: usize,
}

impl LetterCounts {
    /// Count the characters of `word`
    pub fn of(word: &str) -> Self {
        word.chars().fold(Self::default(), |mut counts, ch| {
            if ch.is_ascii_lowercase() {
                counts.lower += 1;
            } else {
                counts.upper += 1;
            }
            counts
        })
    }

    /// Uppercase only when uppercase is the strict majority; ties go lower
    pub fn decide(&self) -> Casing {
        if self.lower < self.upper {
            Casing::Upper
        } else {
            Casing::Lower
        }
    }
}

/// Re-case `word` entirely to its majority case
pub fn normalize_case(word: &str) -> String {
    match LetterCounts::of(word).decide() {
        Casing::Upper => word.to_ascii_uppercase(),
        Casing::Lower => word.to_ascii_lowercase(),
    }
}

/// Solver for 59A
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCase;

impl Solver for WordCase {
    fn solve(&self, input: &str) -> Result<String> {
        let mut scanner = TokenScanner::new(input);
        let word = scanner.next_token("word")?;
        Ok(normalize_case(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let counts = LetterCounts::of("HoUSE");
        assert_eq!(counts, LetterCounts { lower: 1, upper: 4 });
        assert_eq!(counts.lower + counts.upper, 5);
    }

    #[test]
    fn test_majority_lower() {
        assert_eq!(normalize_case("HoUse"), "house");
        assert_eq!(normalize_case("maTRIxes"), "matrixes");
    }

    #[test]
    fn test_majority_upper() {
        assert_eq!(normalize_case("cOMPUTER"), "COMPUTER");
        assert_eq!(normalize_case("HoUSE"), "HOUSE");
        assert_eq!(normalize_case("ViP"), "VIP");
    }

    #[test]
    fn test_tie_goes_lower() {
        assert_eq!(LetterCounts::of("Aa").decide(), Casing::Lower);
        assert_eq!(normalize_case("Aa"), "aa");
        assert_eq!(normalize_case("aBcD"), "abcd");
    }

    #[test]
    fn test_non_letters_count_as_upper() {
        // digits are not lowercase, so they side with uppercase
        assert_eq!(LetterCounts::of("a1").decide(), Casing::Lower);
        assert_eq!(normalize_case("a12"), "A12");
    }

    #[test]
    fn test_solver() {
        assert_eq!(WordCase.solve("maTRIx\n").unwrap(), "matrix");
        assert!(WordCase.solve("").is_err());
    }
}
