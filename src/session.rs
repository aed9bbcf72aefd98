use std::io::{self, BufRead, Write};

use crate::interpreter::{
    classifier::{LineKind, classify},
    evaluator::core::Context,
};

/// Text printed by `/help`.
pub const HELP_TEXT: &str =
    "The program evaluates integer expressions with + - * / % ^, parentheses and variables";
/// Text printed by `/exit` before the session ends.
pub const EXIT_TEXT: &str = "Bye!";
/// Text printed for any other `/` command.
pub const UNKNOWN_COMMAND_TEXT: &str = "Unknown command";

/// The response to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing is printed.
    Silent,
    /// A single line is printed.
    Print(String),
    /// `Bye!` is printed and the session ends.
    Exit,
}

/// The commands a line starting with `/` can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/help`: prints a short description of the calculator.
    Help,
    /// `/exit`: prints `Bye!` and ends the session.
    Exit,
    /// Any other line starting with `/`.
    Unknown,
}

impl Command {
    /// Parses a command line, including its leading `/`.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.strip_prefix('/') {
            Some("help") => Self::Help,
            Some("exit") => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// An interactive calculator session.
///
/// The session owns the evaluation context, so variables live exactly as
/// long as the session. Lines are handled strictly one at a time.
#[derive(Debug, Default)]
pub struct Session {
    context: Context,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one input line and returns what should be printed.
    ///
    /// Errors never escape this function: they are turned into their
    /// message, and the session stays usable.
    ///
    /// # Example
    /// ```
    /// use smartcalc::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.handle_line("x = 5"), Outcome::Silent);
    /// assert_eq!(session.handle_line("x ^ 2"), Outcome::Print("25".to_string()));
    /// assert_eq!(session.handle_line("z"), Outcome::Print("Unknown variable".to_string()));
    /// assert_eq!(session.handle_line("/exit"), Outcome::Exit);
    /// ```
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let kind = classify(line);
        log::debug!("classified {line:?} as {kind:?}");

        match kind {
            LineKind::Blank => Outcome::Silent,
            LineKind::Command => match Command::parse(line) {
                Command::Help => Outcome::Print(HELP_TEXT.to_string()),
                Command::Exit => Outcome::Exit,
                Command::Unknown => Outcome::Print(UNKNOWN_COMMAND_TEXT.to_string()),
            },
            LineKind::Number => Outcome::Print(line.to_string()),
            LineKind::Variable => {
                Outcome::Print(self.context.lookup(line).unwrap_or_else(|e| e.to_string()))
            },
            LineKind::Assignment => match self.context.assign(line) {
                Ok(()) => Outcome::Silent,
                Err(e) => Outcome::Print(e.to_string()),
            },
            LineKind::Expression => {
                Outcome::Print(self.context.evaluate(line).unwrap_or_else(|e| e.to_string()))
            },
        }
    }

    /// Reads lines from `input` and writes responses to `output` until `/exit`
    /// or the end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily, so they are
    /// answered like any other malformed line instead of ending the session.
    ///
    /// # Returns
    /// `true` if the session ended with `/exit`, `false` on end of input.
    ///
    /// # Errors
    /// Returns an error if reading or writing fails.
    ///
    /// # Example
    /// ```
    /// use smartcalc::session::Session;
    ///
    /// let input = "a = 3\n\na * (2 + 1)\n/exit\n1 + 1\n";
    /// let mut output = Vec::new();
    /// let exited = Session::new().run(input.as_bytes(), &mut output).unwrap();
    ///
    /// assert!(exited);
    /// assert_eq!(String::from_utf8(output).unwrap(), "9\nBye!\n");
    /// ```
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<bool> {
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                return Ok(false);
            }
            let line = String::from_utf8_lossy(&buffer);

            match self.handle_line(&line) {
                Outcome::Silent => {},
                Outcome::Print(text) => writeln!(output, "{text}")?,
                Outcome::Exit => {
                    writeln!(output, "{EXIT_TEXT}")?;
                    output.flush()?;
                    return Ok(true);
                },
            }
            output.flush()?;
        }
    }
}
