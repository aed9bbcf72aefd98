/// Integer values and evaluation precision.
///
/// Defines the `Number` type, which holds either a fixed-width `i64` or an
/// arbitrary-precision integer, and the `Precision` chosen once per
/// evaluation from the literals of an expression.
///
/// # Responsibilities
/// - Parses literal text into the representation required by the precision.
/// - Promotes fixed-width values to arbitrary precision on demand.
/// - Implements the literal-size heuristic that selects the precision.
pub mod number;
