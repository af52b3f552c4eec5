use blowup::{Backtracker, Builder};
use regex as rust_regex;

/// Compile a pattern for the backtracker, with and without a step limit
/// large enough to never trigger on the test inputs.
pub fn compile_all(pattern: &str) -> Option<(Backtracker, Backtracker)> {
    let unlimited = Builder::new(pattern).backtrack();
    let limited = Builder::new(pattern).step_limit(Some(1 << 20)).backtrack();
    match (unlimited, limited) {
        (Ok(a), Ok(b)) => Some((a, b)),
        (Err(_), Err(_)) => None,
        _ => panic!("Inconsistency detected for {pattern:?}"),
    }
}

/// Match a pattern against a given input with the backtracker and with
/// rust-regex, and compare the result of both compilation and execution.
pub fn check_backtracker(pattern: &str, input: &str) {
    // Reference engine
    let rust = rust_regex::Regex::new(pattern);
    let ours = compile_all(pattern);

    match (rust, ours) {
        (Ok(rust_re), Some((re, re_limited))) => {
            let expected = rust_re.is_match(input);
            assert_eq!(
                re.is_match(input),
                Ok(expected),
                "Mismatch for pattern {pattern:?} input {input:?}"
            );
            assert_eq!(re_limited.is_match(input), Ok(expected));
        }
        (Err(_), None) => {} // All failed, that's good
        (Ok(_), None) => panic!("Backtracker failed to compile but rust-regex succeeded"),
        (Err(e), Some(_)) => panic!("rust-regex failed to compile but the backtracker succeeded: {e}"),
    }
}
