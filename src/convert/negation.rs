//! Prefix negation expansion
//!
//! Rewrites a run of `!` immediately followed by an opening parenthesis or a
//! lowercase letter into spelled-out negation. Every symbol in the run is
//! expanded individually, so double negation stays double: `!!x` becomes
//! `not not x`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static NEGATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(!+)([a-z(])").unwrap());

/// Expand prefix negation symbols into `not ` tokens.
pub fn rewrite(code: &str) -> String {
    NEGATION
        .replace_all(code, |caps: &Captures| {
            format!("{}{}", "not ".repeat(caps[1].len()), &caps[2])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("!x", "not x")]
    #[case("!(a and b)", "not (a and b)")]
    #[case("!!ready", "not not ready")]
    #[case("if (!connected)", "if (not connected)")]
    fn test_negation_expansion(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite(input), expected);
    }

    #[test]
    fn test_inequality_is_untouched() {
        assert_eq!(rewrite("a != b"), "a != b");
    }

    #[test]
    fn test_uppercase_follower_is_untouched() {
        assert_eq!(rewrite("!Flag"), "!Flag");
    }
}
