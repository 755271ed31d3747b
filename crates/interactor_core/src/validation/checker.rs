//! The rule engine: runs a unit's declared rules and collects violations.
//!
//! Units describe their rules through [`Validate`], usually derived:
//!
//! ```ignore
//! #[derive(Validate)]
//! struct Signup {
//!     #[validate(required, min = 3)]
//!     name: String,
//!     #[validate(nested)]
//!     address: Address,
//! }
//! ```
//!
//! The derive emits one [`Checker::field`] call per annotated field, in
//! declaration order. Each field's rules are evaluated left to right and the
//! first failing rule ends that field's evaluation.

use core::fmt;

use super::rules::Rule;
use super::value::FieldValue;

/// A failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the field, e.g. `age` or `address.zip`.
    pub field: String,
    /// Tag of the failed rule, e.g. `gte`.
    pub tag: &'static str,
    /// The rule's parameter, e.g. `4` for `gte = 4`.
    pub param: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(param) => write!(f, "{}: failed '{}={}'", self.field, self.tag, param),
            None => write!(f, "{}: failed '{}'", self.field, self.tag),
        }
    }
}

/// Declares the field rules of a type.
///
/// The default implementation declares no rules, which always passes.
pub trait Validate {
    /// Reports every rule-bearing field to `checker`.
    fn validate_fields(&self, checker: &mut Checker) {
        let _ = checker;
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Field(String),
    Index(usize),
}

/// Collects violations while a [`Validate`] implementation reports its fields.
#[derive(Debug, Default)]
pub struct Checker {
    path: Vec<Segment>,
    violations: Vec<Violation>,
}

impl Checker {
    /// Creates an empty checker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `rules` against the field `name`.
    ///
    /// Stops at the first failing rule. `omitempty` skips the remaining rules
    /// when the value is empty. An `Option` is empty iff it is `None`; any
    /// other value is empty when it is its zero value. `required` fails
    /// exactly when the value is empty.
    pub fn field<V>(&mut self, name: &str, value: &V, rules: &[Rule])
    where
        V: FieldValue + ?Sized,
    {
        let empty = match value.presence() {
            Some(present) => !present,
            None => value.field_value().is_zero(),
        };
        let value = value.field_value();

        for rule in rules {
            let passed = match rule {
                Rule::OmitEmpty if empty => return,
                Rule::Required => !empty,
                _ => rule.check(&value),
            };

            if !passed {
                let violation = Violation {
                    field: self.key(name),
                    tag: rule.tag(),
                    param: rule.param(),
                };
                tracing::trace!(%violation, "rule failed");
                self.violations.push(violation);
                return;
            }
        }
    }

    /// Validates the nested value stored in field `name`.
    ///
    /// Its violations are keyed `name.<inner>`.
    pub fn nested<V>(&mut self, name: &str, value: &V)
    where
        V: Validate + ?Sized,
    {
        self.path.push(Segment::Field(name.to_string()));
        value.validate_fields(self);
        self.path.pop();
    }

    /// Validates the element at `index` of the collection being walked.
    ///
    /// Its violations are keyed `<collection>[index].<inner>`.
    pub fn element<V>(&mut self, index: usize, value: &V)
    where
        V: Validate + ?Sized,
    {
        self.path.push(Segment::Index(index));
        value.validate_fields(self);
        self.path.pop();
    }

    /// Returns the violations collected so far.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the checker, returning the violations if there are any.
    ///
    /// # Errors
    ///
    /// Returns every collected violation, in evaluation order.
    pub fn finish(self) -> Result<(), Vec<Violation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }

    fn key(&self, leaf: &str) -> String {
        let mut key = String::new();
        for segment in &self.path {
            match segment {
                Segment::Field(name) => {
                    if !key.is_empty() {
                        key.push('.');
                    }
                    key.push_str(name);
                }
                Segment::Index(index) => {
                    key.push('[');
                    key.push_str(&index.to_string());
                    key.push(']');
                }
            }
        }
        if !key.is_empty() {
            key.push('.');
        }
        key.push_str(leaf);
        key
    }
}

/// Runs the rules `value` declares.
///
/// # Errors
///
/// Returns the violations in evaluation order if any rule failed.
pub fn check<V: Validate + ?Sized>(value: &V) -> Result<(), Vec<Violation>> {
    let mut checker = Checker::new();
    value.validate_fields(&mut checker);
    checker.finish()
}

impl<T: Validate> Validate for Option<T> {
    fn validate_fields(&self, checker: &mut Checker) {
        if let Some(value) = self {
            value.validate_fields(checker);
        }
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate_fields(&self, checker: &mut Checker) {
        (**self).validate_fields(checker);
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate_fields(&self, checker: &mut Checker) {
        (**self).validate_fields(checker);
    }
}

impl<T: Validate> Validate for [T] {
    fn validate_fields(&self, checker: &mut Checker) {
        for (index, value) in self.iter().enumerate() {
            checker.element(index, value);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_fields(&self, checker: &mut Checker) {
        self.as_slice().validate_fields(checker);
    }
}
