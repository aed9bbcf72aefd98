use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Sign, Token},
        operator::{NEGATION_PRECEDENCE, Operator},
        parser::core::ParseResult,
    },
};

/// One element of an expression in postfix (reverse Polish) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixToken {
    /// An unsigned integer literal, kept as written.
    Literal(String),
    /// A variable name, resolved when the evaluator reaches it.
    Variable(String),
    /// A binary operator applied to the two preceding operands.
    Operator(Operator),
    /// Prefix negation of the preceding operand.
    Negate,
}

/// An entry waiting on the operator stack.
#[derive(Debug)]
enum Pending {
    Operator(Operator),
    Negate,
    Group,
}

impl Pending {
    const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Operator(op) => Some(op.precedence()),
            Self::Negate => Some(NEGATION_PRECEDENCE),
            Self::Group => None,
        }
    }

    fn into_postfix(self) -> ParseResult<PostfixToken> {
        match self {
            Self::Operator(op) => Ok(PostfixToken::Operator(op)),
            Self::Negate => Ok(PostfixToken::Negate),
            Self::Group => Err(ParseError::invalid_expression("unmatched '('")),
        }
    }
}

/// Maps a token to the binary operator it denotes, if any.
const fn binary_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Sign(Sign::Plus) => Some(Operator::Add),
        Token::Sign(Sign::Minus) => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Percent => Some(Operator::Mod),
        Token::Caret => Some(Operator::Pow),
        _ => None,
    }
}

/// Converts normalized infix tokens to postfix order (shunting-yard).
///
/// Operands go straight to the output. An incoming operator first pops every
/// stacked operator that binds at least as tightly (strictly tighter for the
/// right-associative `^`), then is pushed. `(` is pushed, `)` pops until the
/// matching `(`, which is dropped. Remaining operators are popped at the end.
///
/// A sign token found where an operand is expected is a prefix sign: `-`
/// becomes a negation, `+` is dropped.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` for two operands in a row, an
/// operator missing an operand, an empty group or an unmatched parenthesis.
///
/// # Example
/// ```
/// use smartcalc::interpreter::{
///     operator::Operator,
///     parser::{
///         core::tokenize,
///         postfix::{PostfixToken, to_postfix},
///     },
/// };
///
/// let tokens = tokenize("(a + 1) ^ 2").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(postfix,
///            vec![PostfixToken::Variable("a".to_string()),
///                 PostfixToken::Literal("1".to_string()),
///                 PostfixToken::Operator(Operator::Add),
///                 PostfixToken::Literal("2".to_string()),
///                 PostfixToken::Operator(Operator::Pow)]);
///
/// assert!(to_postfix(&tokenize("8 * / 2").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<PostfixToken>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut expect_operand = true;

    for token in tokens {
        match token {
            Token::Number(text) | Token::Identifier(text) => {
                if !expect_operand {
                    return Err(ParseError::invalid_expression("missing operator"));
                }
                output.push(if matches!(token, Token::Number(_)) {
                                PostfixToken::Literal(text.clone())
                            } else {
                                PostfixToken::Variable(text.clone())
                            });
                expect_operand = false;
            },
            Token::Sign(sign) if expect_operand => {
                if *sign == Sign::Minus {
                    stack.push(Pending::Negate);
                }
            },
            Token::LParen => {
                if !expect_operand {
                    return Err(ParseError::invalid_expression("missing operator"));
                }
                stack.push(Pending::Group);
            },
            Token::RParen => {
                if expect_operand {
                    return Err(ParseError::invalid_expression("missing operand"));
                }
                loop {
                    match stack.pop() {
                        Some(Pending::Group) => break,
                        Some(pending) => output.push(pending.into_postfix()?),
                        None => return Err(ParseError::invalid_expression("unmatched ')'")),
                    }
                }
            },
            _ => {
                let Some(op) = binary_operator(token) else {
                    return Err(ParseError::invalid_expression("unexpected token"));
                };
                if expect_operand {
                    return Err(ParseError::invalid_expression("missing operand"));
                }
                while let Some(stacked) = stack.last().and_then(Pending::precedence)
                      && op.yields_to(stacked)
                {
                    if let Some(pending) = stack.pop() {
                        output.push(pending.into_postfix()?);
                    }
                }
                stack.push(Pending::Operator(op));
                expect_operand = true;
            },
        }
    }

    if expect_operand {
        return Err(ParseError::invalid_expression("missing operand"));
    }

    while let Some(pending) = stack.pop() {
        output.push(pending.into_postfix()?);
    }

    Ok(output)
}
