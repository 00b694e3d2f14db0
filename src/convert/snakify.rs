//! Identifier case normalization
//!
//! Converts a mixed-case identifier into underscore-separated form using a
//! run-based scan. The algorithm is heuristic and the run rules below are
//! authoritative; they are not derived from any grammar of "intended"
//! camel-case:
//!
//! - all-upper and all-lower tokens are already segmented or constant-like
//!   and pass through, as do tokens with an embedded underscore
//! - an upper-mode run consumes upper/neutral characters; when a lower
//!   character arrives, a run longer than 2 splits before its last character
//!   (`ABCd` gives `AB` + `Cd`), a run of 2 or fewer flips to lower mode in
//!   place (`ABdefQ` gives `ABdef` + `Q`)
//! - a lower-mode run ends at the first upper character
//! - non-letters are neutral and attach to whichever run is active
//!
//! Runs are joined with `_`; the joined form is lowercased unless it equals
//! its own uppercasing (which preserves acronym-like results).
//!
//! The surrounding pipeline only feeds in tokens that start with a lowercase
//! letter and are not entirely lowercase. Upper-camel and constant-style
//! names are left completely untouched, even though the algorithm itself
//! could process them.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Normalize every eligible identifier in a code portion.
pub fn normalize_identifiers(code: &str) -> String {
    IDENTIFIER
        .replace_all(code, |caps: &Captures| {
            let token = &caps[0];
            if is_candidate(token) {
                snakify(token)
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// Caller-side gate: lower-camel-case-style names only.
fn is_candidate(token: &str) -> bool {
    let starts_lower = token.chars().next().is_some_and(|c| c.is_lowercase());
    starts_lower && token != token.to_lowercase()
}

/// Convert one identifier to underscore-separated form, or return it
/// unchanged when there is nothing to segment.
pub fn snakify(token: &str) -> String {
    // Uniform case: nothing to segment.
    if token == token.to_uppercase() || token == token.to_lowercase() {
        return token.to_string();
    }
    // An underscore past the first character marks an already-segmented name.
    if token.chars().skip(1).any(|c| c == '_') {
        return token.to_string();
    }

    let chars: Vec<char> = token.chars().collect();
    let mut runs: Vec<String> = Vec::new();
    let mut run = String::new();
    run.push(chars[0]);
    let mut upper_mode = !chars[0].is_lowercase();

    for &c in &chars[1..] {
        if upper_mode {
            if c.is_lowercase() {
                if run.chars().count() > 2 {
                    // The trailing character belongs to the next run.
                    let boundary = run.pop().unwrap();
                    runs.push(std::mem::take(&mut run));
                    run.push(boundary);
                }
                run.push(c);
                upper_mode = false;
            } else {
                run.push(c);
            }
        } else if c.is_uppercase() {
            runs.push(std::mem::take(&mut run));
            run.push(c);
            upper_mode = true;
        } else {
            run.push(c);
        }
    }
    runs.push(run);

    let joined = runs.join("_");
    if joined == joined.to_uppercase() {
        joined
    } else {
        joined.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("myVariableName", "my_variable_name")]
    #[case("ABCd", "ab_cd")]
    #[case("ABdefQ", "abdef_q")]
    #[case("serviceIndex", "service_index")]
    #[case("deviceId", "device_id")]
    #[case("aB", "a_b")]
    fn test_snakify_segments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(snakify(input), expected);
    }

    #[rstest]
    #[case("lower")]
    #[case("UPPER")]
    #[case("UPPER_CASE")]
    #[case("already_snake")]
    #[case("my_Mixed")]
    #[case("x")]
    fn test_snakify_passes_through(#[case] token: &str) {
        assert_eq!(snakify(token), token);
    }

    #[test]
    fn test_digits_attach_to_active_run() {
        assert_eq!(snakify("crc16calc"), "crc16calc");
        assert_eq!(snakify("readU32Value"), "read_u32_value");
    }

    #[test]
    fn test_short_upper_run_flips_in_place() {
        // Two-or-fewer upper characters absorb the following lower run.
        assert_eq!(snakify("ABd"), "abd");
    }

    #[test]
    fn test_gate_requires_lowercase_start() {
        assert_eq!(normalize_identifiers("HTTPServer.start()"), "HTTPServer.start()");
        assert_eq!(normalize_identifiers("MAX_SIZE"), "MAX_SIZE");
    }

    #[test]
    fn test_gate_skips_all_lowercase() {
        assert_eq!(normalize_identifiers("plain tokens here"), "plain tokens here");
    }

    #[test]
    fn test_normalize_rewrites_each_identifier() {
        assert_eq!(
            normalize_identifiers("pktSize = buf.readValue(maxPower)"),
            "pkt_size = buf.read_value(max_power)"
        );
    }
}
