use std::collections::{HashMap, HashSet};

use crate::{error::RuntimeError, interpreter::classifier::is_number};

/// Stores variables by name.
///
/// Each identifier maps to the raw text it was assigned: either an integer
/// literal or the name of another variable. Names are never pre-resolved, so
/// re-assigning a variable changes every variable that refers to it.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    values: HashMap<String, String>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, overwriting any previous value.
    ///
    /// No validation is performed here.
    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Returns whether `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the raw text stored under `name`, without resolving it.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Resolves a variable to the integer literal at the end of its chain.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name`, or any variable the chain
    ///   passes through, is not defined.
    /// - `RuntimeError::CyclicReference` if the chain visits a variable twice.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{error::RuntimeError, interpreter::evaluator::store::VariableStore};
    ///
    /// let mut store = VariableStore::new();
    /// store.set("a", "5");
    /// store.set("b", "a");
    /// assert_eq!(store.resolve("b").unwrap(), "5");
    ///
    /// store.set("a", "b");
    /// assert!(matches!(store.resolve("b"), Err(RuntimeError::CyclicReference { .. })));
    /// assert!(matches!(store.resolve("z"), Err(RuntimeError::UnknownVariable { .. })));
    /// ```
    pub fn resolve<'a>(&'a self, name: &'a str) -> Result<&'a str, RuntimeError> {
        let mut visited = HashSet::new();
        let mut current = name;

        loop {
            let stored = self.raw(current)
                             .ok_or_else(|| RuntimeError::UnknownVariable { name:
                                                                                current.to_string() })?;
            if is_number(stored) {
                return Ok(stored);
            }
            if !visited.insert(current) {
                log::debug!("variable chain from {name:?} loops back to {current:?}");
                return Err(RuntimeError::CyclicReference { name: name.to_string() });
            }
            current = stored;
        }
    }
}
