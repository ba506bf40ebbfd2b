use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, value::Value},
};

/// A name to value binding store.
///
/// An environment is one scope node. It may own an enclosing scope that
/// lookups fall through to; definitions always land in the innermost node.
/// The language currently only ever uses a single global node.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Box<Self>>,
}

impl Environment {
    /// Creates an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope nested inside `enclosing`.
    #[must_use]
    pub fn with_enclosing(enclosing: Self) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(Box::new(enclosing)), }
    }

    /// Drops this scope and hands back the one it was nested in.
    #[must_use]
    pub fn into_enclosing(self) -> Option<Self> {
        self.enclosing.map(|enclosing| *enclosing)
    }

    /// Binds `name` to `value` in this scope.
    ///
    /// Defining a name that already exists overwrites the old binding.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    /// environment.define("x", Value::Number(1.0));
    /// environment.define("x", Value::Number(2.0));
    ///
    /// assert!(environment.contains("x"));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Whether `name` is bound in this scope or any enclosing one.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
        || self.enclosing.as_ref().is_some_and(|enclosing| enclosing.contains(name))
    }

    /// Looks up the value bound to `name`.
    ///
    /// Lookup starts in this scope and proceeds outward. It never falls back
    /// to a default value.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` when no scope binds the name.
    pub fn get(&self, name: &Token) -> Result<&Value, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value);
        }

        match &self.enclosing {
            Some(enclosing) => enclosing.get(name),
            None => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
        }
    }
}
