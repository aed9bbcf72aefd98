use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

lazy_static! {
    static ref DOUBLED_OPERATOR: Regex = Regex::new(r"\*{2,}|/{2,}").unwrap();
}

/// Checks raw expression text before it is tokenized.
///
/// Two checks are made:
/// - the number of `(` equals the number of `)`. Only the counts are
///   compared, so `)(` passes here and is rejected later by the converter.
/// - there is no run of two or more `*` or two or more `/`. Repeated `+` and
///   `-` are allowed, they are collapsed by the tokenizer.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` if either check fails.
///
/// # Example
/// ```
/// use smartcalc::interpreter::parser::validate::validate_expression;
///
/// assert!(validate_expression("(1 + 2) * 3").is_ok());
/// assert!(validate_expression("5 --- 2").is_ok());
/// assert!(validate_expression("(1 + 2").is_err());
/// assert!(validate_expression("2 ** 3").is_err());
/// assert!(validate_expression("8 // 2").is_err());
/// ```
pub fn validate_expression(source: &str) -> ParseResult<()> {
    if !parentheses_balanced(source) {
        return Err(ParseError::invalid_expression("unbalanced parentheses"));
    }
    if DOUBLED_OPERATOR.is_match(source) {
        return Err(ParseError::invalid_expression("doubled multiplicative operator"));
    }
    Ok(())
}

fn parentheses_balanced(source: &str) -> bool {
    let open = source.chars().filter(|&c| c == '(').count();
    let close = source.chars().filter(|&c| c == ')').count();
    open == close
}
