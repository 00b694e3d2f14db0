//! Control-flow reshaping
//!
//! A fixed sequence of structural line rewrites. The rules run in exactly
//! this order; later rules depend on earlier ones having already fired. In
//! particular the paren-stripping rule anchors on the trailing colon that the
//! brace-to-colon rule introduces, so it must come last.

use once_cell::sync::Lazy;
use regex::Regex;

/// `if (COND) STMT` with a return-like single-line body.
static INLINE_GUARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bif \((.+)\) ((?:return|break|continue)\b.*)$").unwrap());

/// Closing marker glued to an `else`.
static BRACE_ELSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s*else\b").unwrap());

static ELSE_IF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\belse if\b").unwrap());

/// Leading variable-declaration keyword, either spelling.
static DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)(?:let|const)\s+").unwrap());

/// Event emission; event codes live in the EV constant namespace.
static EMIT_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bemit\(").unwrap());

/// Trailing block-opening marker.
static OPEN_BRACE_EOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\{$").unwrap());

/// `KEYWORD (COND):` as produced by the brace-to-colon rule above.
static PAREN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(if|elif|while) \((.*)\):$").unwrap());

/// Apply the ordered control-flow rewrites to one code portion.
pub fn reshape(code: &str) -> String {
    let code = INLINE_GUARD.replace(code, "if $1: $2");
    let code = BRACE_ELSE.replace(&code, "else");
    let code = ELSE_IF.replace(&code, "elif");
    let code = DECLARATION.replace(&code, "$1");
    let code = EMIT_CALL.replace_all(&code, "emit(EV.");
    let code = OPEN_BRACE_EOL.replace(&code, ":");
    let code = PAREN_HEADER.replace(&code, "$1$2 $3:");
    code.into_owned()
}
