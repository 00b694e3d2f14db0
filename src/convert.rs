//! Line conversion pipeline
//!
//! This module wires the individual rewrite stages into the fixed per-line
//! pipeline. Stage order is load-bearing and must not be rearranged:
//!
//! 1. Segment the raw line into code and trailing comment
//! 2. Eliminate closing-brace-only lines (possibly dropping the line)
//! 3. Token/operator substitution, bounded pass
//! 4. Negation expansion
//! 5. Control-flow reshaping
//! 6. Identifier case normalization
//! 7. Token/operator substitution, plain substring pass
//! 8. Reassemble code and comment
//!
//! The substitution table runs twice on purpose: the bounded pass does the
//! real work before identifier casing, and the looser substring pass catches
//! residual spellings afterwards. Lines are fully independent; no state
//! carries across lines.

pub mod braces;
pub mod control;
pub mod line;
pub mod negation;
pub mod snakify;
pub mod tokens;

pub use self::line::SourceLine;
pub use self::snakify::snakify;

use self::braces::Disposition;

/// Convert one raw input line.
///
/// Returns `None` when the line is eliminated entirely (a bare closing-brace
/// line with no trailing comment), otherwise the converted line.
pub fn convert_line(raw: &str) -> Option<String> {
    let mut line = SourceLine::segment(raw);

    if let Disposition::Drop = braces::eliminate(&mut line) {
        return None;
    }

    line.code = tokens::substitute_bounded(&line.code);
    line.code = negation::rewrite(&line.code);
    line.code = control::reshape(&line.code);
    line.code = snakify::normalize_identifiers(&line.code);
    line.code = tokens::substitute_plain(&line.code);

    Some(line.reassemble())
}

/// Convert a complete source document.
///
/// Splits the input on line boundaries (tolerating `\r\n`), converts each
/// line, and joins the surviving lines in input order, each terminated by a
/// newline.
pub fn convert_source(source: &str) -> String {
    let mut output = String::new();
    for raw in source.lines() {
        if let Some(converted) = convert_line(raw) {
            output.push_str(&converted);
            output.push('\n');
        }
    }
    output
}
