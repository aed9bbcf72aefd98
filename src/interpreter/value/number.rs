use std::fmt;

use num_bigint::BigInt;

use crate::{
    error::ParseError,
    interpreter::parser::core::ParseResult,
    util::num::{MAX_FIXED_DIGIT_SUM, MAX_FIXED_DIGITS, literal_digit_sum},
};

/// Represents an integer value during evaluation.
///
/// Values start out as `Fixed` whenever they fit and the evaluation runs in
/// fixed precision. An operation whose fixed-width result would overflow
/// produces a `Big` value instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    /// A 64 bit signed integer.
    Fixed(i64),
    /// An arbitrary-precision integer.
    Big(BigInt),
}

/// The arithmetic mode of a whole evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Operands are `i64` where they fit, `^` goes through floating point.
    Fixed,
    /// Every operand is a big integer and `^` is exact.
    Arbitrary,
}

impl Precision {
    /// Picks the precision for an evaluation from its literal operands.
    ///
    /// The evaluation is arbitrary-precision as soon as one literal is
    /// classified as large by [`is_large_literal`]. Variables do not take part
    /// in the decision.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::value::number::Precision;
    ///
    /// assert_eq!(Precision::for_literals(["12", "3"]), Precision::Arbitrary);
    /// assert_eq!(Precision::for_literals(["99999999999"]), Precision::Fixed);
    /// assert_eq!(Precision::for_literals(Vec::<&str>::new()), Precision::Fixed);
    /// ```
    pub fn for_literals<'a, I>(literals: I) -> Self
        where I: IntoIterator<Item = &'a str>
    {
        if literals.into_iter().any(is_large_literal) {
            Self::Arbitrary
        } else {
            Self::Fixed
        }
    }
}

/// Decides whether a literal counts as "large".
///
/// A literal is large when it has at most as many digits as `i64::MAX` and
/// the sum of its digits is below the digit sum of `i64::MAX`. This is a
/// heuristic, not an overflow test: most short literals are classified as
/// large, while a number such as `99999999999` (digit sum 99) is not, even
/// though it fits in an `i64`. Callers rely on this exact behaviour.
///
/// # Example
/// ```
/// use smartcalc::interpreter::value::number::is_large_literal;
///
/// assert!(is_large_literal("5"));
/// assert!(is_large_literal("1000000000000000000"));
/// assert!(!is_large_literal("99999999999"));
/// assert!(!is_large_literal("10000000000000000000"));
/// ```
#[must_use]
pub fn is_large_literal(literal: &str) -> bool {
    let digits = literal.trim_start_matches(['-', '+']);
    digits.len() <= MAX_FIXED_DIGITS && literal_digit_sum(digits) < MAX_FIXED_DIGIT_SUM
}

impl Number {
    /// Parses an integer literal in the representation required by
    /// `precision`.
    ///
    /// In fixed precision a literal that does not fit in an `i64` is still
    /// parsed exactly, as a big integer.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidExpression` if `text` is not an integer
    /// literal.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use smartcalc::interpreter::value::number::{Number, Precision};
    ///
    /// assert_eq!(Number::parse("-12", Precision::Fixed).unwrap(), Number::Fixed(-12));
    /// assert_eq!(Number::parse("12", Precision::Arbitrary).unwrap(),
    ///            Number::Big(BigInt::from(12)));
    /// assert!(Number::parse("x", Precision::Fixed).is_err());
    /// ```
    pub fn parse(text: &str, precision: Precision) -> ParseResult<Self> {
        if precision == Precision::Fixed
           && let Ok(value) = text.parse::<i64>()
        {
            return Ok(Self::Fixed(value));
        }

        text.parse::<BigInt>()
            .map(Self::Big)
            .map_err(|_| ParseError::invalid_expression("malformed integer literal"))
    }

    /// Returns the value as a big integer, promoting if needed.
    #[must_use]
    pub fn into_big(self) -> BigInt {
        match self {
            Self::Fixed(value) => BigInt::from(value),
            Self::Big(value) => value,
        }
    }

    /// Negates the value, promoting `i64::MIN` to a big integer.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Fixed(value) => value.checked_neg()
                                       .map_or_else(|| Self::Big(-BigInt::from(value)), Self::Fixed),
            Self::Big(value) => Self::Big(-value),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Fixed(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::Big(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Big(value) => write!(f, "{value}"),
        }
    }
}
