use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::Operator, value::number::Number},
    util::num::{exponent_to_f64, f64_to_i64_truncated},
};

/// Evaluates a binary operation between two numbers.
///
/// Two fixed-width operands use checked `i64` arithmetic; a result that does
/// not fit is computed again with big integers. If either operand is a big
/// integer both are promoted and the exact big-integer operation is used.
///
/// | Operator | Fixed | Big |
/// |---|---|---|
/// | `+ - *` | checked | exact |
/// | `/` | truncating toward zero | truncating toward zero |
/// | `%` | floored, sign of the divisor | floored, sign of the divisor |
/// | `^` | through `f64`, truncated | exact |
///
/// # Errors
/// - `RuntimeError::DivisionByZero` for `/` or `%` by zero, and for zero
///   raised to a negative power in fixed precision.
/// - `RuntimeError::NegativeExponent` for an exact power with a negative
///   exponent.
/// - `RuntimeError::ExponentTooLarge` for an exact power whose exponent is not
///   a `u32` and whose base is not `0`, `1` or `-1`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use smartcalc::interpreter::{
///     evaluator::binary::eval_binary,
///     operator::Operator,
///     value::number::Number,
/// };
///
/// let result = eval_binary(Operator::Mod, Number::Fixed(-7), Number::Fixed(3)).unwrap();
/// assert_eq!(result, Number::Fixed(2));
///
/// let result = eval_binary(Operator::Add, Number::Fixed(i64::MAX), Number::Fixed(1)).unwrap();
/// assert_eq!(result, Number::Big(BigInt::from(i64::MAX) + 1));
/// ```
pub fn eval_binary(op: Operator, left: Number, right: Number) -> EvalResult<Number> {
    match (left, right) {
        (Number::Fixed(a), Number::Fixed(b)) => eval_fixed(op, a, b),
        (left, right) => eval_big(op, &left.into_big(), &right.into_big()).map(Number::from),
    }
}

fn eval_fixed(op: Operator, a: i64, b: i64) -> EvalResult<Number> {
    let checked = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            a.checked_div(b)
        },
        Operator::Mod => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            // i64::MIN % -1 overflows, the floored result is 0.
            Some(a.checked_rem(b).map_or(0, |_| a.mod_floor(&b)))
        },
        Operator::Pow => return eval_fixed_pow(a, b),
    };

    match checked {
        Some(value) => Ok(Number::from(value)),
        None => eval_big(op, &BigInt::from(a), &BigInt::from(b)).map(Number::from),
    }
}

/// Raises `base` to `exponent` through floating point and truncates.
///
/// Bases `0`, `1` and `-1` are answered directly for any exponent. Results
/// beyond the exactly representable `f64` range are recomputed as an exact
/// big-integer power.
fn eval_fixed_pow(base: i64, exponent: i64) -> EvalResult<Number> {
    match base {
        0 if exponent < 0 => return Err(RuntimeError::DivisionByZero),
        0 => return Ok(Number::Fixed(i64::from(exponent == 0))),
        1 => return Ok(Number::Fixed(1)),
        -1 => return Ok(Number::Fixed(if exponent % 2 == 0 { 1 } else { -1 })),
        _ => {},
    }

    #[allow(clippy::cast_precision_loss)]
    let result = (base as f64).powf(exponent_to_f64(exponent)?);

    if let Some(value) = f64_to_i64_truncated(result) {
        return Ok(Number::from(value));
    }

    big_pow(&BigInt::from(base), &BigInt::from(exponent)).map(Number::from)
}

fn eval_big(op: Operator, a: &BigInt, b: &BigInt) -> EvalResult<BigInt> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(a / b)
        },
        Operator::Mod => {
            if b.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(a.mod_floor(b))
        },
        Operator::Pow => big_pow(a, b),
    }
}

fn big_pow(base: &BigInt, exponent: &BigInt) -> EvalResult<BigInt> {
    if exponent.is_negative() {
        return Err(RuntimeError::NegativeExponent);
    }
    if let Some(exponent) = exponent.to_u32() {
        return Ok(base.pow(exponent));
    }

    // Only 0, 1 and -1 have a representable power for such an exponent.
    if base.is_zero() {
        Ok(BigInt::zero())
    } else if base.magnitude().is_one() {
        Ok(if base.is_negative() && exponent.is_odd() { -BigInt::one() } else { BigInt::one() })
    } else {
        Err(RuntimeError::ExponentTooLarge)
    }
}
