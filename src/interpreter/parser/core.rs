use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            postfix::{PostfixToken, to_postfix},
            validate::validate_expression,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Splits an expression into normalized tokens.
///
/// Parentheses always become standalone tokens, whitespace is discarded and
/// every run of `+`/`-` characters collapses into a single sign token.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` if the text contains a character
/// that is not part of the expression grammar.
///
/// # Example
/// ```
/// use smartcalc::interpreter::{
///     lexer::{Sign, Token},
///     parser::core::tokenize,
/// };
///
/// let tokens = tokenize("5 --- (a)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("5".to_string()),
///                 Token::Sign(Sign::Minus),
///                 Token::LParen,
///                 Token::Identifier("a".to_string()),
///                 Token::RParen]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                log::debug!("unexpected character sequence {:?}", lexer.slice());
                return Err(ParseError::invalid_expression("unexpected character"));
            },
        }
    }

    Ok(tokens)
}

/// Runs the full front end on an expression: validation, tokenizing and
/// conversion to postfix order.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` if any stage rejects the input.
///
/// # Example
/// ```
/// use smartcalc::interpreter::{
///     operator::Operator,
///     parser::{core::parse_expression, postfix::PostfixToken},
/// };
///
/// let postfix = parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(postfix,
///            vec![PostfixToken::Literal("2".to_string()),
///                 PostfixToken::Literal("3".to_string()),
///                 PostfixToken::Literal("4".to_string()),
///                 PostfixToken::Operator(Operator::Mul),
///                 PostfixToken::Operator(Operator::Add)]);
/// ```
pub fn parse_expression(source: &str) -> ParseResult<Vec<PostfixToken>> {
    validate_expression(source)?;
    let tokens = tokenize(source)?;
    let postfix = to_postfix(&tokens)?;
    log::trace!("postfix of {source:?}: {postfix:?}");
    Ok(postfix)
}
