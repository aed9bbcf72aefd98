use crate::{
    error::{CalcResult, ParseError, RuntimeError},
    interpreter::{
        evaluator::{binary::eval_binary, store::VariableStore},
        parser::{core::parse_expression, postfix::PostfixToken},
        value::number::{Number, Precision},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the variable store for the lifetime of a session. It is
/// created once and every assignment, variable lookup and expression
/// evaluation goes through it.
#[derive(Debug, Default)]
pub struct Context {
    /// Variables assigned so far.
    pub store: VariableStore,
}

/// An operand waiting on the evaluation stack.
#[derive(Debug)]
enum Operand<'a> {
    Literal(&'a str),
    Variable(&'a str),
    Value(Number),
}

impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable and returns the literal its chain ends in.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` or
    /// `RuntimeError::CyclicReference` if the variable cannot be resolved.
    pub fn lookup(&self, name: &str) -> EvalResult<String> {
        self.store.resolve(name).map(str::to_string)
    }

    /// Validates, converts and evaluates an arithmetic expression.
    ///
    /// This is the main entry point for expression evaluation. The result is
    /// returned as the text to print.
    ///
    /// # Errors
    /// Returns a `ParseError` if the expression is malformed and a
    /// `RuntimeError` if evaluating it fails.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.assign("n = 4").unwrap();
    /// assert_eq!(context.evaluate("2 + 3 * n").unwrap(), "14");
    /// assert_eq!(context.evaluate("(2 + 3) * n").unwrap(), "20");
    /// assert_eq!(context.evaluate("5 --- 2").unwrap(), "3");
    /// ```
    pub fn evaluate(&self, expression: &str) -> CalcResult<String> {
        let postfix = parse_expression(expression)?;
        self.eval_postfix(&postfix)
    }

    /// Evaluates a postfix token sequence.
    ///
    /// The precision is decided once from the literal tokens. Operands are
    /// kept as raw text until an operator needs them; a lone literal is
    /// returned exactly as written.
    ///
    /// # Errors
    /// - `ParseError::InvalidExpression` if an operator lacks operands or more
    ///   than one value remains.
    /// - Any `RuntimeError` raised while resolving variables or computing.
    pub fn eval_postfix(&self, postfix: &[PostfixToken]) -> CalcResult<String> {
        let precision = Precision::for_literals(postfix.iter().filter_map(|token| match token {
                                                    PostfixToken::Literal(text) => Some(text.as_str()),
                                                    _ => None,
                                                }));
        log::debug!("evaluating {} tokens with {precision:?} precision", postfix.len());

        let mut stack: Vec<Operand> = Vec::with_capacity(postfix.len());

        for token in postfix {
            match token {
                PostfixToken::Literal(text) => stack.push(Operand::Literal(text)),
                PostfixToken::Variable(name) => stack.push(Operand::Variable(name)),
                PostfixToken::Negate => {
                    let operand = pop_operand(&mut stack)?;
                    let value = self.to_number(operand, precision)?;
                    stack.push(Operand::Value(value.negate()));
                },
                PostfixToken::Operator(op) => {
                    let right = pop_operand(&mut stack)?;
                    let left = pop_operand(&mut stack)?;
                    let right = self.to_number(right, precision)?;
                    let left = self.to_number(left, precision)?;
                    stack.push(Operand::Value(eval_binary(*op, left, right)?));
                },
            }
        }

        let result = pop_operand(&mut stack)?;
        if !stack.is_empty() {
            return Err(ParseError::invalid_expression("dangling operands").into());
        }

        match result {
            Operand::Literal(text) => Ok(text.to_string()),
            Operand::Variable(name) => Ok(self.lookup(name)?),
            Operand::Value(value) => Ok(value.to_string()),
        }
    }

    fn to_number(&self, operand: Operand<'_>, precision: Precision) -> CalcResult<Number> {
        match operand {
            Operand::Literal(text) => Ok(Number::parse(text, precision)?),
            Operand::Variable(name) => Ok(Number::parse(self.store.resolve(name)?, precision)?),
            Operand::Value(value) => Ok(value),
        }
    }
}

fn pop_operand<'a>(stack: &mut Vec<Operand<'a>>) -> CalcResult<Operand<'a>> {
    stack.pop()
         .ok_or_else(|| ParseError::invalid_expression("missing operand").into())
}
