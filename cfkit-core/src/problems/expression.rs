//! 339A Helpful Maths: put the terms of a sum in non-decreasing order

use super::Solver;
use crate::error::{CoreError, Result};
use crate::scanner::TokenScanner;

const CODE: &str = "339A";

/// A sum of single-digit terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Digit values in input order
    pub terms: Vec<u8>,
    /// Number of `+` operators seen
    pub operators: usize,
}

impl Expression {
    /// Parse a sum such as `3+2+1`
    ///
    /// Accepted input always has exactly one fewer operator than terms.
    pub fn parse(expr: &str) -> Result<Self> {
        let mut terms = Vec::with_capacity(expr.len() / 2 + 1);
        let mut operators = 0;
        let mut expect_digit = true;

        for ch in expr.chars() {
            match ch {
                '0'..='9' if expect_digit => {
                    terms.push(ch as u8 - b'0');
                    expect_digit = false;
                }
                '0'..='9' => {
                    return Err(CoreError::malformed(
                        CODE,
                        format!("term '{ch}' is not separated by '+'"),
                    ));
                }
                '+' if !expect_digit => {
                    operators += 1;
                    expect_digit = true;
                }
                '+' => {
                    return Err(CoreError::malformed(CODE, "'+' without a preceding term"));
                }
                other => {
                    return Err(CoreError::malformed(
                        CODE,
                        format!("unexpected character '{other}'"),
                    ));
                }
            }
        }

        if expect_digit {
            let reason = if terms.is_empty() {
                "empty expression"
            } else {
                "trailing '+'"
            };
            return Err(CoreError::malformed(CODE, reason));
        }

        Ok(Self { terms, operators })
    }

    /// Render the terms in non-decreasing order, keeping the operator count
    pub fn normalized(&self) -> String {
        let mut terms = self.terms.clone();
        terms.sort_unstable();

        let mut operators = self.operators;
        let mut out = String::with_capacity(terms.len() + operators);
        for term in terms {
            out.push(char::from(b'0' + term));
            if operators > 0 {
                out.push('+');
                operators -= 1;
            }
        }
        out
    }
}

/// Sort the terms of a sum of single digits
pub fn normalize_expression(expr: &str) -> Result<String> {
    Expression::parse(expr).map(|expression| expression.normalized())
}

/// Solver for 339A
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpfulMaths;

impl Solver for HelpfulMaths {
    fn solve(&self, input: &str) -> Result<String> {
        let mut scanner = TokenScanner::new(input);
        let expr = scanner.next_token("sum expression")?;
        normalize_expression(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_terms() {
        assert_eq!(normalize_expression("3+2+1").unwrap(), "1+2+3");
        assert_eq!(normalize_expression("1+1+3+1+3").unwrap(), "1+1+1+3+3");
        assert_eq!(normalize_expression("2").unwrap(), "2");
    }

    #[test]
    fn test_single_term_unchanged() {
        for digit in '0'..='9' {
            let expr = digit.to_string();
            assert_eq!(normalize_expression(&expr).unwrap(), expr);
        }
    }

    #[test]
    fn test_parse_counts_operators() {
        let expression = Expression::parse("9+0+9").unwrap();
        assert_eq!(expression.terms, vec![9, 0, 9]);
        assert_eq!(expression.operators, 2);
    }

    #[test]
    fn test_rejects_malformed() {
        for expr in ["", "+1", "1+", "1++2", "12", "1-2", "1 + 2"] {
            assert!(
                matches!(
                    Expression::parse(expr),
                    Err(CoreError::MalformedInput { problem: "339A", .. })
                ),
                "{expr:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_solver_reads_first_token() {
        assert_eq!(HelpfulMaths.solve("2+1\n").unwrap(), "1+2");
        assert_eq!(
            HelpfulMaths.solve("\n"),
            Err(CoreError::UnexpectedEnd {
                expected: "sum expression"
            })
        );
    }
}
