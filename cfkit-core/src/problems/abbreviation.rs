//! 71A Way Too Long Words: shorten long words to first letter, interior length, last letter

use super::Solver;
use crate::error::Result;
use crate::scanner::TokenScanner;
use std::borrow::Cow;

/// Words up to this many characters are kept verbatim
pub const ABBREVIATION_THRESHOLD: usize = 10;

/// Abbreviate `word` if it is longer than [`ABBREVIATION_THRESHOLD`]
///
/// `localization` becomes `l10n`. Short words are returned borrowed.
pub fn abbreviate(word: &str) -> Cow<'_, str> {
    let len = word.chars().count();
    if len <= ABBREVIATION_THRESHOLD {
        return Cow::Borrowed(word);
    }

    let mut chars = word.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => Cow::Owned(format!("{first}{}{last}", len - 2)),
        // unreachable past the threshold
        _ => Cow::Borrowed(word),
    }
}

/// Solver for 71A
#[derive(Debug, Clone, Copy, Default)]
pub struct WayTooLongWords;

impl Solver for WayTooLongWords {
    fn solve(&self, input: &str) -> Result<String> {
        let mut scanner = TokenScanner::new(input);
        let count = scanner.next_count("word count")?;

        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            let word = scanner.next_token("word")?;
            lines.push(abbreviate(word));
        }
        Ok(lines.join("\n"))
    }
}
