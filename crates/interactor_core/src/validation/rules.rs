//! Field rules understood by the built-in engine.
//!
//! Rules are attached with `#[validate(...)]` and evaluated left to right.
//! Size rules (`gte`, `min`, `len`, ...) compare numbers by value, strings by
//! character count and collections by length. Integers compare exactly;
//! only a float on either side is compared as `f64`.

use core::cmp::Ordering;
use core::fmt;

use super::number::Number;
use super::value::Value;

/// A literal operand of `eq` / `ne`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// Compared against numbers by value, against strings by their rendering
    /// and against collections by length.
    Number(Number),
    /// Compared against strings.
    Text(&'static str),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

/// A single field rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// The value must not be its zero value.
    ///
    /// On an `Option` field the checker tests presence instead, so
    /// `Some(0)` passes and `None` fails.
    Required,
    /// Skips the remaining rules when the value is its zero value, or when
    /// an `Option` field is `None`.
    OmitEmpty,
    /// Size must be `>=` the bound.
    Gte(Number),
    /// Size must be `>` the bound.
    Gt(Number),
    /// Size must be `<=` the bound.
    Lte(Number),
    /// Size must be `<` the bound.
    Lt(Number),
    /// Size must be `>=` the bound, reported as `min`.
    Min(Number),
    /// Size must be `<=` the bound, reported as `max`.
    Max(Number),
    /// Size must equal the bound.
    Len(Number),
    /// Value must equal the literal.
    Eq(Literal),
    /// Value must differ from the literal.
    Ne(Literal),
    /// Text (or rendered number) must be one of the options.
    OneOf(&'static [&'static str]),
    /// Text must be non-empty ASCII letters.
    Alpha,
    /// Text must be non-empty ASCII letters or digits.
    Alphanumeric,
    /// Text must parse as a number.
    Numeric,
}

impl Rule {
    /// Returns the tag the rule is declared and reported under.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::OmitEmpty => "omitempty",
            Rule::Gte(_) => "gte",
            Rule::Gt(_) => "gt",
            Rule::Lte(_) => "lte",
            Rule::Lt(_) => "lt",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Len(_) => "len",
            Rule::Eq(_) => "eq",
            Rule::Ne(_) => "ne",
            Rule::OneOf(_) => "oneof",
            Rule::Alpha => "alpha",
            Rule::Alphanumeric => "alphanum",
            Rule::Numeric => "numeric",
        }
    }

    /// Returns the rule's parameter as declared, if it has one.
    #[must_use]
    pub fn param(&self) -> Option<String> {
        match self {
            Rule::Gte(n)
            | Rule::Gt(n)
            | Rule::Lte(n)
            | Rule::Lt(n)
            | Rule::Min(n)
            | Rule::Max(n)
            | Rule::Len(n) => Some(n.to_string()),
            Rule::Eq(lit) | Rule::Ne(lit) => Some(lit.to_string()),
            Rule::OneOf(options) => Some(options.join(" ")),
            Rule::Required | Rule::OmitEmpty | Rule::Alpha | Rule::Alphanumeric | Rule::Numeric => {
                None
            }
        }
    }

    /// Returns `true` if `value` satisfies the rule.
    ///
    /// [`OmitEmpty`](Rule::OmitEmpty) always passes; the checker applies its
    /// short-circuit. A missing value fails every rule except `omitempty`.
    #[must_use]
    pub fn check(&self, value: &Value<'_>) -> bool {
        match *self {
            Rule::OmitEmpty => true,
            Rule::Required => !value.is_zero(),
            Rule::Gte(bound) | Rule::Min(bound) => compare(value, bound, Ordering::is_ge),
            Rule::Gt(bound) => compare(value, bound, Ordering::is_gt),
            Rule::Lte(bound) | Rule::Max(bound) => compare(value, bound, Ordering::is_le),
            Rule::Lt(bound) => compare(value, bound, Ordering::is_lt),
            Rule::Len(bound) => compare(value, bound, Ordering::is_eq),
            Rule::Eq(lit) => equals(value, lit).unwrap_or(false),
            Rule::Ne(lit) => equals(value, lit).is_some_and(|eq| !eq),
            Rule::OneOf(options) => match *value {
                Value::Text(s) => options.iter().any(|opt| *opt == s),
                Value::Number(n) => options
                    .iter()
                    .any(|opt| Number::parse(opt).is_some_and(|parsed| n.same_as(parsed))),
                _ => false,
            },
            Rule::Alpha => text_matches(value, |c| c.is_ascii_alphabetic()),
            Rule::Alphanumeric => text_matches(value, |c| c.is_ascii_alphanumeric()),
            Rule::Numeric => match *value {
                Value::Text(s) => s.parse::<f64>().is_ok(),
                Value::Number(_) => true,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(param) => write!(f, "{}={}", self.tag(), param),
            None => f.write_str(self.tag()),
        }
    }
}

fn compare(value: &Value<'_>, bound: Number, pred: impl FnOnce(Ordering) -> bool) -> bool {
    value
        .magnitude()
        .and_then(|size| size.compare(bound))
        .is_some_and(pred)
}

/// `None` when the value and literal cannot be compared.
fn equals(value: &Value<'_>, lit: Literal) -> Option<bool> {
    match (*value, lit) {
        (Value::Text(s), Literal::Text(expected)) => Some(s == expected),
        (Value::Text(s), Literal::Number(expected)) => Some(s == expected.to_string()),
        (Value::Bool(b), Literal::Text(expected)) => expected.parse::<bool>().ok().map(|e| e == b),
        (Value::Number(n), Literal::Number(expected)) => Some(n.same_as(expected)),
        (Value::Collection(len), Literal::Number(expected)) => {
            Some(Number::from(len).same_as(expected))
        }
        _ => None,
    }
}

fn text_matches(value: &Value<'_>, pred: impl Fn(char) -> bool) -> bool {
    match *value {
        Value::Text(s) => !s.is_empty() && s.chars().all(pred),
        _ => false,
    }
}
