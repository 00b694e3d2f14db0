//! Closing-brace line elision
//!
//! A line whose code portion is nothing but a closing block marker carries no
//! content in the target style: the marker's job is done by dedentation. Such
//! a line is dropped outright, unless it carries a trailing comment, in which
//! case the comment survives on its own line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::convert::line::SourceLine;

static CLOSING_BRACE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\}$").unwrap());

/// What the eliminator decided about a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The line continues through the pipeline
    Keep,
    /// The line produces no output at all
    Drop,
}

/// Eliminate a closing-brace-only line.
///
/// When the code is solely a closing marker and a comment is present, the
/// code is blanked so the line survives as a comment-only line. Anything
/// else passes through unchanged.
pub fn eliminate(line: &mut SourceLine) -> Disposition {
    if !CLOSING_BRACE_LINE.is_match(&line.code) {
        return Disposition::Keep;
    }
    if line.comment.is_empty() {
        return Disposition::Drop;
    }
    line.code.clear();
    Disposition::Keep
}
