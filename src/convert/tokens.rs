//! Fixed token and operator substitution
//!
//! A single ordered table of literal replacements, applied twice per line:
//!
//! - the *bounded* pass runs before identifier casing; alphabetic patterns
//!   match as whole words, symbolic patterns as the exact symbol padded with
//!   one space on each side
//! - the *plain* pass runs after identifier casing as an unconditional
//!   substring replacement of the same table, catching residual spellings
//!
//! The plain pass is strictly looser than the bounded one (it will rewrite
//! inside longer words). Both passes and their relative order are observed
//! behavior and must be preserved.

use once_cell::sync::Lazy;
use regex::Regex;

/// Replacement table. Order matters: entries are applied in declaration order.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("&&", "and"),
    ("||", "or"),
    ("null", "None"),
    ("true", "True"),
    ("false", "False"),
    ("this", "self"),
    ("push", "append"),
    ("splice", "pop"),
    ("function", "def"),
];

/// Alphabetic patterns are keywords matched as whole words; everything else
/// is an operator matched space-padded.
fn is_word(pattern: &str) -> bool {
    pattern.chars().all(|c| c.is_ascii_alphabetic())
}

/// Bounded forms of the table, compiled once.
static BOUNDED: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    REPLACEMENTS
        .iter()
        .map(|&(pattern, replacement)| {
            if is_word(pattern) {
                (
                    Regex::new(&format!(r"\b{}\b", pattern)).unwrap(),
                    replacement.to_string(),
                )
            } else {
                (
                    Regex::new(&format!(" {} ", regex::escape(pattern))).unwrap(),
                    format!(" {} ", replacement),
                )
            }
        })
        .collect()
});

/// First substitution pass: word-bounded keywords, space-padded operators.
pub fn substitute_bounded(code: &str) -> String {
    let mut out = code.to_string();
    for (pattern, replacement) in BOUNDED.iter() {
        out = pattern.replace_all(&out, replacement.as_str()).into_owned();
    }
    out
}

/// Second substitution pass: plain substring replacement, no boundary check.
pub fn substitute_plain(code: &str) -> String {
    let mut out = code.to_string();
    for &(pattern, replacement) in REPLACEMENTS {
        if is_word(pattern) {
            out = out.replace(pattern, replacement);
        } else {
            out = out.replace(
                &format!(" {} ", pattern),
                &format!(" {} ", replacement),
            );
        }
    }
    out
}
