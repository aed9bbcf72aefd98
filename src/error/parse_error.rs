#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur before an input line is evaluated.
pub enum ParseError {
    /// The left side of an assignment is not a valid identifier.
    #[error("Invalid identifier")]
    InvalidIdentifier {
        /// The rejected identifier text.
        name: String,
    },
    /// The assignment has more than one `=` or an unusable right side.
    #[error("Invalid assignment")]
    InvalidAssignment {
        /// The offending input, with whitespace removed.
        input: String,
    },
    /// The expression failed validation, tokenizing or conversion.
    #[error("Invalid expression")]
    InvalidExpression {
        /// Why the expression was rejected. Only used for logging.
        reason: &'static str,
    },
}

impl ParseError {
    /// Shorthand for an [`ParseError::InvalidExpression`] with a reason.
    #[must_use]
    pub const fn invalid_expression(reason: &'static str) -> Self {
        Self::InvalidExpression { reason }
    }
}
