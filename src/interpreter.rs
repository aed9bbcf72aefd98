/// The classifier module sorts input lines by shape.
///
/// Every trimmed line is assigned exactly one category (blank, command,
/// variable, number, assignment or expression) before any parsing happens.
pub mod classifier;
/// The evaluator module computes results and owns the variables.
///
/// # Responsibilities
/// - Stores variables and resolves chains of variables to literals.
/// - Validates and commits assignments.
/// - Evaluates postfix expressions in fixed or arbitrary precision.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces numbers, identifiers,
/// collapsed sign runs, operators and parentheses. Any other character is a
/// lexical error.
pub mod lexer;
/// The operator table.
///
/// Declares the binary operators with their precedence and associativity.
pub mod operator;
/// The parser module turns expression text into postfix order.
///
/// # Responsibilities
/// - Rejects unbalanced parentheses and doubled `*` or `/` up front.
/// - Tokenizes the expression.
/// - Converts infix tokens to postfix with the shunting-yard algorithm and
///   rejects structurally malformed expressions.
pub mod parser;
/// The value module defines the integer representation used by the
/// evaluator.
pub mod value;
