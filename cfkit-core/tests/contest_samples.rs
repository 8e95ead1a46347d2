//! Sample tests from the problem statements, run through the registry

use cfkit_core::{CoreError, Problem, Solver};

fn solve(code: &str, input: &str) -> String {
    let problem: Problem = code.parse().unwrap();
    problem.solve(input).unwrap()
}

#[test]
fn test_helpful_maths_samples() {
    assert_eq!(solve("339A", "3+2+1\n"), "1+2+3");
    assert_eq!(solve("339A", "1+1+3+1+3\n"), "1+1+1+3+3");
    assert_eq!(solve("339A", "2\n"), "2");
}

#[test]
fn test_word_samples() {
    assert_eq!(solve("59A", "HoUse\n"), "house");
    assert_eq!(solve("59A", "ViP\n"), "VIP");
    assert_eq!(solve("59A", "maTRIx\n"), "matrix");
    assert_eq!(solve("59A", "cOMPUTER\n"), "COMPUTER");
}

#[test]
fn test_way_too_long_words_sample() {
    let input = "4\nword\nlocalization\ninternationalization\npneumonoultramicroscopicsilicovolcanoconiosis\n";
    assert_eq!(solve("71A", input), "word\nl10n\ni18n\np43s");
}

#[test]
fn test_anton_and_danik_samples() {
    assert_eq!(solve("734A", "6\nADAAAA\n"), "Anton");
    assert_eq!(solve("734A", "7\nDDDAADA\n"), "Danik");
    assert_eq!(solve("734A", "6\nDADADA\n"), "Friendship");
    assert_eq!(solve("734A", "4\nDADA\n"), "Friendship");
    assert_eq!(solve("734A", "1\nD\n"), "Danik");
}

#[test]
fn test_solvers_as_trait_objects() {
    let solvers: Vec<(Box<dyn Solver>, &str, &str)> = vec![
        (Box::new(Problem::HelpfulMaths), "5", "5"),
        (Box::new(Problem::Word), "Aa", "aa"),
        (Box::new(Problem::WayTooLongWords), "1 abcdefghijk", "a9k"),
        (Box::new(Problem::AntonAndDanik), "2 AD", "Friendship"),
    ];

    for (solver, input, expected) in solvers {
        assert_eq!(solver.solve(input).unwrap(), expected);
    }
}

#[test]
fn test_errors_surface() {
    let err = Problem::WayTooLongWords.solve("many\nwords").unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidCount {
            token: "many".to_string()
        }
    );
}
