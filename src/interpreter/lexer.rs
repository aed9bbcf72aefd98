use logos::Logos;

/// Represents a lexical token of an arithmetic expression.
///
/// Literals and identifiers keep their raw text: numbers may be arbitrarily
/// long and are only converted once the evaluation precision is known.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Unsigned integer literal tokens, such as `42` or `007`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens, such as `x` or `total`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A run of `+` and `-` characters collapsed into a single sign.
    #[regex(r"[+-]+", parse_sign_run)]
    Sign(Sign),
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The sign a `+`/`-` run reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Combines two adjacent signs: equal signs give `+`, different signs `-`.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::lexer::Sign;
    ///
    /// assert_eq!(Sign::Minus.combine(Sign::Minus), Sign::Plus);
    /// assert_eq!(Sign::Plus.combine(Sign::Minus), Sign::Minus);
    /// ```
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Plus, Self::Plus) | (Self::Minus, Self::Minus) => Self::Plus,
            _ => Self::Minus,
        }
    }
}

/// Folds a run of `+`/`-` characters left to right into a single sign.
///
/// An all-`+` run is `+`, an all-`-` run is `+` for an even length and `-`
/// for an odd one, and mixed runs reduce pairwise.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The resulting sign.
fn parse_sign_run(lex: &logos::Lexer<Token>) -> Sign {
    lex.slice()
       .chars()
       .map(|c| if c == '-' { Sign::Minus } else { Sign::Plus })
       .fold(Sign::Plus, Sign::combine)
}
