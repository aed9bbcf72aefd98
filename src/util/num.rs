use crate::error::RuntimeError;

/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Number of decimal digits of `i64::MAX`.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_FIXED_DIGITS: usize = (i64::MAX.ilog10() + 1) as usize;

/// Sum of the decimal digits of `i64::MAX`.
#[allow(clippy::cast_sign_loss)]
pub const MAX_FIXED_DIGIT_SUM: u32 = digit_sum(i64::MAX as u64);

/// Adds up the decimal digits of `value`.
///
/// ## Example
/// ```
/// use smartcalc::util::num::{MAX_FIXED_DIGIT_SUM, digit_sum};
///
/// assert_eq!(digit_sum(907), 16);
/// assert_eq!(MAX_FIXED_DIGIT_SUM, 88);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub const fn digit_sum(mut value: u64) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += (value % 10) as u32;
        value /= 10;
    }
    sum
}

/// Adds up the decimal digits of a literal, ignoring a leading sign.
///
/// Characters that are not ASCII digits are skipped.
///
/// ## Example
/// ```
/// use smartcalc::util::num::literal_digit_sum;
///
/// assert_eq!(literal_digit_sum("-1234"), 10);
/// ```
pub fn literal_digit_sum(literal: &str) -> u32 {
    literal.chars().filter_map(|c| c.to_digit(10)).sum()
}

/// Truncates an `f64` toward zero and converts it to `i64` if the result is
/// still exactly representable.
///
/// ## Returns
/// - `Some(i64)`: The truncated value if it is finite and within
///   `MAX_SAFE_I64_INT` in absolute value.
/// - `None`: If the value is not finite or too large to have kept every digit.
///
/// ## Example
/// ```
/// use smartcalc::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(0.5), Some(0));
/// assert_eq!(f64_to_i64_truncated(-7.9), Some(-7));
/// assert_eq!(f64_to_i64_truncated(1e300), None);
/// assert_eq!(f64_to_i64_truncated(f64::INFINITY), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Converts an `i64` exponent to `f64` for the floating-point power path.
///
/// ## Errors
/// Returns `RuntimeError::ExponentTooLarge` if the exponent cannot be
/// represented exactly.
#[allow(clippy::cast_precision_loss)]
pub const fn exponent_to_f64(value: i64) -> Result<f64, RuntimeError> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(RuntimeError::ExponentTooLarge);
    }
    Ok(value as f64)
}
