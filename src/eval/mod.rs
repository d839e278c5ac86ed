//! Markup-to-math evaluation.
//!
//! Consumes the editor's markup through its public text surface and
//! independently translates it into an evaluable expression. Mid-edit
//! or malformed markup is an ordinary [`ParseError`], never a crash:
//! callers degrade to "no curve drawn".

mod expr;
mod parser;

pub use expr::{Expr, MathFn};
pub use parser::{parse, ParseError};

use std::sync::LazyLock;

use regex::Regex;

use crate::editor::CURSOR_MARKER;

static FRAC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\frac\{(.*?)\}\{(.*?)\}").unwrap());
static LOG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\log_\{(.*?)\}\{(.*?)\}").unwrap());
static EXPONENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^\{(.*?)\}").unwrap());
static FN_BRACES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(sin|cos|tan|sqrt)\{(.*?)\}").unwrap());

/// Rewrite LaTeX-like markup into the plain form [`parse`] accepts.
///
/// `\frac{a}{b}` becomes `(a)/(b)`, `\log_{b}{a}` becomes `log(b,a)`,
/// `^{a}` becomes `^(a)`, function braces become parentheses, and any
/// stray braces are dropped. The rewrites are non-greedy and shallow;
/// deeply nested slots may leave residue that the parser then rejects,
/// which downstream treats the same as any other malformed input.
pub fn preprocess(latex: &str) -> String {
    let mut expr: String = latex.chars().filter(|&c| c != CURSOR_MARKER).collect();

    // Two-slot templates first, while their backslash tokens are intact.
    expr = FRAC_RE.replace_all(&expr, "($1)/($2)").into_owned();
    expr = LOG_RE.replace_all(&expr, "log($1,$2)").into_owned();
    expr = EXPONENT_RE.replace_all(&expr, "^($1)").into_owned();

    for name in ["sin", "cos", "tan", "sqrt"] {
        expr = expr.replace(&format!("\\{name}"), name);
    }
    expr = FN_BRACES_RE.replace_all(&expr, "$1($2)").into_owned();

    // Stray-brace cleanup for whatever the rewrites did not consume.
    expr.chars().filter(|&c| c != '{' && c != '}').collect()
}

/// Preprocess and parse in one step.
///
/// # Errors
///
/// Any [`ParseError`] from the plain-math parser; empty markup maps to
/// [`ParseError::Empty`].
pub fn compile(latex: &str) -> Result<Expr, ParseError> {
    parse(&preprocess(latex))
}
