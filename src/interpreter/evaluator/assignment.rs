use crate::{
    error::{CalcResult, ParseError, RuntimeError},
    interpreter::{
        classifier::{is_identifier, is_number},
        evaluator::core::Context,
    },
};

impl Context {
    /// Handles an `identifier = value` line.
    ///
    /// Whitespace is removed before splitting on `=`. The right side must be
    /// an integer literal or an already defined variable; its raw text is
    /// stored, so a variable assigned from another one follows later changes
    /// to it. The store is only modified when every check passes.
    ///
    /// # Errors
    /// - `ParseError::InvalidAssignment` if there is more than one `=`, or the
    ///   right side is neither a literal nor an identifier.
    /// - `ParseError::InvalidIdentifier` if the left side is not an
    ///   identifier.
    /// - `RuntimeError::UnknownVariable` if the right side names an undefined
    ///   variable.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.assign("a = 5").unwrap();
    /// context.assign("b = a").unwrap();
    /// context.assign("a = 7").unwrap();
    /// assert_eq!(context.lookup("b").unwrap(), "7");
    ///
    /// assert_eq!(context.assign("1x = 5").unwrap_err().to_string(), "Invalid identifier");
    /// assert_eq!(context.assign("a = c").unwrap_err().to_string(), "Unknown variable");
    /// assert_eq!(context.assign("a = 7 = 8").unwrap_err().to_string(), "Invalid assignment");
    /// ```
    pub fn assign(&mut self, line: &str) -> CalcResult<()> {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        let mut sides = compact.split('=');

        let (Some(target), Some(value), None) = (sides.next(), sides.next(), sides.next()) else {
            return Err(ParseError::InvalidAssignment { input: compact }.into());
        };

        if !is_identifier(target) {
            return Err(ParseError::InvalidIdentifier { name: target.to_string() }.into());
        }

        if !is_number(value) {
            if !is_identifier(value) {
                return Err(ParseError::InvalidAssignment { input: compact }.into());
            }
            if !self.store.contains(value) {
                return Err(RuntimeError::UnknownVariable { name: value.to_string() }.into());
            }
        }

        log::debug!("assigning {target} = {value}");
        self.store.set(target, value);
        Ok(())
    }
}
