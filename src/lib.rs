//! # smartcalc
//!
//! smartcalc is a line-oriented integer calculator written in Rust.
//! It classifies each input line, stores variables, validates expressions,
//! converts them to postfix order and evaluates them, switching to
//! arbitrary-precision integers when an expression calls for it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be reported for an input line.
/// The `Display` text of each error is the exact message the calculator
/// prints.
///
/// # Responsibilities
/// - Defines error enums for validation and evaluation failures.
/// - Combines them into a single error type for the session.
pub mod error;
/// Orchestrates the handling of a single input line.
///
/// This module ties together classification, the lexer, the postfix
/// converter, the evaluator and the value representation.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for assigning variables and evaluating
///   expressions.
pub mod interpreter;
/// The read/respond loop.
///
/// Dispatches classified lines to their handlers, turns errors into messages
/// and reports when the user asked to exit.
pub mod session;
/// General numeric utilities.
///
/// Provides the constants describing the fixed-width integer type and safe
/// conversions out of floating point.
pub mod util;

pub use session::{Outcome, Session};

/// Evaluates a sequence of input lines in a fresh session and returns the
/// printed output lines.
///
/// Processing stops after `/exit`, whose `Bye!` is included.
///
/// # Example
/// ```
/// use smartcalc::get_output;
///
/// let output = get_output(["x = 10", "y = x", "y % 4", "/exit"]);
/// assert_eq!(output, vec!["2".to_string(), "Bye!".to_string()]);
/// ```
pub fn get_output<'a, I>(lines: I) -> Vec<String>
    where I: IntoIterator<Item = &'a str>
{
    let mut session = Session::new();
    let mut output = Vec::new();

    for line in lines {
        match session.handle_line(line) {
            Outcome::Silent => {},
            Outcome::Print(text) => output.push(text),
            Outcome::Exit => {
                output.push(session::EXIT_TEXT.to_string());
                break;
            },
        }
    }

    output
}
