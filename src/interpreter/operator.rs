use std::fmt;

/// The side an operator groups toward when it repeats without parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The binary operators understood by the calculator.
///
/// Each operator carries a fixed precedence and associativity, used by the
/// infix-to-postfix conversion, and a symbol used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

/// Precedence of prefix negation. Binds tighter than `*`, looser than `^`.
pub const NEGATION_PRECEDENCE: u8 = 7;

impl Operator {
    /// Returns the operator's precedence rank. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert!(Operator::Pow.precedence() > Operator::Mod.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div | Self::Mod => 5,
            Self::Pow => 10,
        }
    }

    /// Only `^` is right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }

    /// Whether an operator of precedence `stacked`, waiting on the operator
    /// stack, must be emitted before `self` is pushed.
    #[must_use]
    pub const fn yields_to(self, stacked: u8) -> bool {
        match self.associativity() {
            Associativity::Left => stacked >= self.precedence(),
            Associativity::Right => stacked > self.precedence(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
