/// Core evaluation logic and context management.
///
/// Contains the evaluation context that owns the variable store and the
/// postfix evaluation loop.
pub mod core;

/// Variable storage.
///
/// Maps identifiers to their raw assigned text and follows chains of
/// variables down to a literal.
pub mod store;

/// Assignment handling.
///
/// Validates `identifier = value` lines and commits them to the store.
pub mod assignment;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic of every operator in fixed and arbitrary
/// precision.
pub mod binary;
