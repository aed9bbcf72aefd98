/// Shared parser types and the tokenizer entry point.
///
/// Turns a validated expression into a vector of normalized tokens.
pub mod core;

/// Pre-tokenizing validation of raw expression text.
///
/// Rejects unbalanced parentheses and doubled multiplicative operators before
/// any further work is done.
pub mod validate;

/// Infix-to-postfix conversion.
///
/// Implements the shunting-yard algorithm over normalized tokens and reports
/// structurally malformed expressions.
pub mod postfix;
