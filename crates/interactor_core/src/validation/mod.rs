//! Field validation and its error representation.
//!
//! The pipeline consumes the rule engine ([`checker`]) only through
//! [`validate`], which turns the engine's violation list into a stable
//! [`ErrorMap`]: field name → messages, in evaluation order.

pub mod checker;
pub mod number;
pub mod rules;
pub mod value;

use core::fmt;
use core::ops::Index;

use indexmap::IndexMap;
use thiserror::Error;

pub use checker::{Checker, Validate, Violation};
pub use number::Number;
pub use rules::{Literal, Rule};
pub use value::{FieldValue, Value};

/// Field-keyed validation messages.
///
/// A field is present iff at least one of its rules failed. Fields keep the
/// order in which the engine reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    fields: IndexMap<String, Vec<String>>,
}

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` under `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns the messages recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if `field` failed at least one rule.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates failed fields and their messages, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Iterates the failed field names, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the map, returning the underlying field map.
    #[must_use]
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.fields
    }
}

impl Index<&str> for ErrorMap {
    type Output = [String];

    /// # Panics
    ///
    /// Panics if `field` has no messages.
    fn index(&self, field: &str) -> &[String] {
        match self.get(field) {
            Some(messages) => messages,
            None => panic!("no validation messages for field '{field}'"),
        }
    }
}

impl FromIterator<Violation> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        let mut map = ErrorMap::new();
        for violation in iter {
            let message = message(&violation.field, violation.tag);
            map.push(violation.field, message);
        }
        map
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                f.write_str(message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The unit failed one or more field rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {errors}")]
pub struct ValidationError {
    errors: ErrorMap,
}

impl ValidationError {
    /// Wraps a non-empty error map.
    #[must_use]
    pub fn new(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// Returns the field-keyed messages.
    #[must_use]
    pub fn error_map(&self) -> &ErrorMap {
        &self.errors
    }

    /// Consumes the error, returning the field-keyed messages.
    #[must_use]
    pub fn into_error_map(self) -> ErrorMap {
        self.errors
    }
}

impl From<Vec<Violation>> for ValidationError {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(violations.into_iter().collect())
    }
}

/// Formats the message recorded for a failed rule.
#[must_use]
pub fn message(field: &str, tag: &str) -> String {
    format!("Field validation for '{field}' failed on the '{tag}' tag")
}

/// Runs the rules `unit` declares.
///
/// A unit without rules and a unit whose rules all pass are treated alike.
///
/// # Errors
///
/// Returns a [`ValidationError`] whose map holds one entry per failed field.
pub fn validate<T: Validate + ?Sized>(unit: &T) -> Result<(), ValidationError> {
    checker::check(unit).map_err(ValidationError::from)
}
