use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref ASSIGNMENT: Regex = Regex::new(r"^.+=.+$").unwrap();
}

/// The category of a single trimmed input line.
///
/// Every line falls into exactly one category. The session dispatches on it
/// to pick the handler that produces the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An empty line. Produces no output.
    Blank,
    /// A line starting with `/`, such as `/help`.
    Command,
    /// A lone identifier, printed as its resolved value.
    Variable,
    /// A lone integer literal, echoed back unchanged.
    Number,
    /// `identifier = value`.
    Assignment,
    /// Anything else, evaluated as an arithmetic expression.
    Expression,
}

/// Classifies a trimmed input line.
///
/// The checks run in a fixed order: blank, command, bare identifier, bare
/// number, assignment, and finally expression. The assignment pattern is loose
/// (any `=` with text on both sides) so it only runs once the stricter shapes
/// have been ruled out.
///
/// # Example
/// ```
/// use smartcalc::interpreter::classifier::{LineKind, classify};
///
/// assert_eq!(classify(""), LineKind::Blank);
/// assert_eq!(classify("/exit"), LineKind::Command);
/// assert_eq!(classify("count"), LineKind::Variable);
/// assert_eq!(classify("-42"), LineKind::Number);
/// assert_eq!(classify("x = 5"), LineKind::Assignment);
/// assert_eq!(classify("x + 5"), LineKind::Expression);
/// ```
#[must_use]
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with('/') {
        LineKind::Command
    } else if is_identifier(line) {
        LineKind::Variable
    } else if is_number(line) {
        LineKind::Number
    } else if ASSIGNMENT.is_match(line) {
        LineKind::Assignment
    } else {
        LineKind::Expression
    }
}

/// Whether `text` is a valid identifier: one or more ASCII letters.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// Whether `text` is an integer literal with an optional leading `-`.
#[must_use]
pub fn is_number(text: &str) -> bool {
    NUMBER.is_match(text)
}
