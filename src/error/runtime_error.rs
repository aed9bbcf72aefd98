#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    #[error("Unknown variable")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Following a variable chain came back to an identifier already visited.
    #[error("Cyclic variable reference")]
    CyclicReference {
        /// The variable whose resolution was requested.
        name: String,
    },
    /// Attempted division or modulus by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// An exact power was requested with a negative exponent.
    #[error("Negative exponent")]
    NegativeExponent,
    /// An exact power was requested with an exponent that does not fit in
    /// `u32`.
    #[error("Exponent is too large")]
    ExponentTooLarge,
}
