/// Parsing errors.
///
/// Defines the errors raised while classifying, validating and converting an
/// input line, before anything is evaluated. Their `Display` text is the exact
/// message the calculator prints.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while resolving variables and evaluating
/// postfix expressions, such as unknown variables or division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error the calculator can report for a single input line.
///
/// The session prints the `Display` form of this error in place of a result.
/// Both wrapped kinds are transparent, so the printed message is always the
/// inner error's message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// A validation failure detected before evaluation.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A failure raised during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for operations that may fail either while parsing or while
/// evaluating.
pub type CalcResult<T> = Result<T, CalcError>;
