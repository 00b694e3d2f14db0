//! Line segmentation and reassembly
//!
//! Splits a raw line into its code portion and an optional trailing comment,
//! normalizing the comment marker to the target spelling. The scan for the
//! comment marker is purely lexical: a `//` inside a string literal is
//! misidentified as a comment start. This is a documented limitation of the
//! conversion, preserved deliberately.

/// Comment marker in the source language.
const SOURCE_COMMENT: &str = "//";

/// Comment marker in the target language.
const TARGET_COMMENT: &str = "#";

/// One input line, split into code and trailing comment.
///
/// `comment` includes its leading whitespace and the normalized marker, so
/// `code + comment` reconstructs the trimmed line with the marker respelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// Content before any comment marker, trailing whitespace stripped
    pub code: String,
    /// Leading whitespace + normalized marker + comment text, or empty
    pub comment: String,
}

impl SourceLine {
    /// Segment a raw line into code and comment portions.
    ///
    /// Trailing whitespace is stripped first. If a comment marker is found,
    /// the whitespace between the code and the marker travels with the
    /// comment.
    pub fn segment(raw: &str) -> Self {
        let trimmed = raw.trim_end();

        match trimmed.find(SOURCE_COMMENT) {
            Some(idx) => {
                let before = &trimmed[..idx];
                let code = before.trim_end();
                let gap = &before[code.len()..];
                let text = &trimmed[idx + SOURCE_COMMENT.len()..];
                SourceLine {
                    code: code.to_string(),
                    comment: format!("{}{}{}", gap, TARGET_COMMENT, text),
                }
            }
            None => SourceLine {
                code: trimmed.to_string(),
                comment: String::new(),
            },
        }
    }

    /// Recombine the (transformed) code with its untouched comment suffix.
    pub fn reassemble(&self) -> String {
        format!("{}{}", self.code, self.comment)
    }
}
