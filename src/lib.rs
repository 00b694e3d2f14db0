//! # unbrace
//!
//! A best-effort, line-by-line converter from brace-delimited source text to
//! Python-style text. The conversion is purely textual: each input line runs
//! through a fixed, ordered pipeline of rewrite stages and is emitted (or
//! dropped) independently of every other line. There is no parser and no
//! semantic analysis; content that matches no rule passes through verbatim.
//!
//! ## Testing
//!
//! Each stage carries its own unit tests; whole-document conversions are
//! covered by the integration tests under `tests/`.

pub mod convert;

pub use convert::{convert_line, convert_source};
