/// Numeric conversion helpers.
///
/// This module provides the constants that describe the fixed-width integer
/// type used by the calculator, and safe conversions out of floating point
/// for the power operator. Use these helpers instead of raw `as` casts so
/// that precision loss is detected instead of silently accepted.
pub mod num;
