//! Property-based tests for the solvers

use cfkit_core::{abbreviate, normalize_case, normalize_expression, Tally, ABBREVIATION_THRESHOLD};
use proptest::prelude::*;

// Strategy for well-formed sums of single digits
fn expression() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, 1..50).prop_map(|digits| {
        digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("+")
    })
}

fn digits_of(expr: &str) -> Vec<char> {
    let mut digits: Vec<char> = expr.chars().filter(char::is_ascii_digit).collect();
    digits.sort_unstable();
    digits
}

proptest! {
    #[test]
    fn expression_keeps_digit_multiset(expr in expression()) {
        let normalized = normalize_expression(&expr).unwrap();
        prop_assert_eq!(digits_of(&normalized), digits_of(&expr));
    }

    #[test]
    fn expression_is_sorted(expr in expression()) {
        let normalized = normalize_expression(&expr).unwrap();
        let terms: Vec<&str> = normalized.split('+').collect();
        prop_assert!(terms.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn expression_keeps_operator_count(expr in expression()) {
        let normalized = normalize_expression(&expr).unwrap();
        prop_assert_eq!(
            normalized.matches('+').count(),
            expr.matches('+').count()
        );
        prop_assert!(!normalized.ends_with('+'));
    }

    #[test]
    fn expression_is_idempotent(expr in expression()) {
        let once = normalize_expression(&expr).unwrap();
        let twice = normalize_expression(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn case_is_uniform(word in "[a-zA-Z]{1,100}") {
        let normalized = normalize_case(&word);
        prop_assert_eq!(normalized.len(), word.len());
        prop_assert!(
            normalized == word.to_ascii_uppercase() || normalized == word.to_ascii_lowercase()
        );
    }

    #[test]
    fn case_is_a_fixed_point(word in "[a-zA-Z]{1,100}") {
        let once = normalize_case(&word);
        prop_assert_eq!(normalize_case(&once), once.clone());
    }

    #[test]
    fn short_words_unchanged(word in "[a-z]{1,10}") {
        prop_assert_eq!(abbreviate(&word), word.as_str());
    }

    #[test]
    fn long_words_abbreviated(word in "[a-z]{11,100}") {
        let abbreviated = abbreviate(&word);
        let expected = format!(
            "{}{}{}",
            &word[..1],
            word.len() - 2,
            &word[word.len() - 1..]
        );
        prop_assert!(word.len() > ABBREVIATION_THRESHOLD);
        prop_assert_eq!(abbreviated.as_ref(), expected.as_str());
        prop_assert!(abbreviated.len() <= 4);
    }

    #[test]
    fn tally_counts_every_round(rounds in "[AD]{1,100}") {
        let tally = Tally::count(&rounds);
        prop_assert_eq!(tally.rounds(), rounds.len());
        prop_assert_eq!(tally.anton, rounds.matches('A').count());
    }
}
