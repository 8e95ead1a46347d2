//! Whitespace-separated token reading in the style of contest input

use crate::error::{CoreError, Result};
use std::str::SplitAsciiWhitespace;

/// Reads whitespace-separated tokens from a contest input
///
/// Line breaks carry no meaning: a count followed by words may arrive on one
/// line or on many.
#[derive(Debug, Clone)]
pub struct TokenScanner<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> TokenScanner<'a> {
    /// Create a scanner over the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
        }
    }

    /// Read the next token
    ///
    /// `expected` names the token in the error raised when input ran out.
    pub fn next_token(&mut self, expected: &'static str) -> Result<&'a str> {
        self.tokens
            .next()
            .ok_or(CoreError::UnexpectedEnd { expected })
    }

    /// Read the next token as a non-negative count
    pub fn next_count(&mut self, expected: &'static str) -> Result<usize> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| CoreError::InvalidCount {
            token: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_across_lines() {
        let mut scanner = TokenScanner::new("2\nfoo   bar\r\n");
        assert_eq!(scanner.next_count("count").unwrap(), 2);
        assert_eq!(scanner.next_token("word").unwrap(), "foo");
        assert_eq!(scanner.next_token("word").unwrap(), "bar");
        assert_eq!(
            scanner.next_token("word"),
            Err(CoreError::UnexpectedEnd { expected: "word" })
        );
    }

    #[test]
    fn test_empty_input() {
        let mut scanner = TokenScanner::new("   \n");
        assert_eq!(
            scanner.next_count("round count"),
            Err(CoreError::UnexpectedEnd {
                expected: "round count"
            })
        );
    }

    #[test]
    fn test_invalid_count() {
        let mut scanner = TokenScanner::new("-1 word");
        assert_eq!(
            scanner.next_count("count"),
            Err(CoreError::InvalidCount {
                token: "-1".to_string()
            })
        );
    }
}
