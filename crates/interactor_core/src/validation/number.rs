//! Numbers as the rule engine compares them.
//!
//! Integers keep their exact value: a `u64` field at `2^53 + 1` never rounds
//! onto a bound of `2^53`. Only a comparison with a float side goes through
//! `f64`.

use core::cmp::Ordering;
use core::fmt;

/// A field value or rule bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A signed integer.
    Int(i128),
    /// An unsigned integer.
    Uint(u128),
    /// A float.
    Float(f64),
}

impl Number {
    /// Returns `true` for zero of any kind.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Uint(n) => n == 0,
            Number::Float(n) => n == 0.0,
        }
    }

    /// Compares two numbers, exactly unless one side is a float.
    ///
    /// Returns `None` only when a float side is NaN.
    #[must_use]
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Uint(a), Number::Uint(b)) => Some(a.cmp(&b)),
            (Number::Int(a), Number::Uint(b)) => Some(signed_cmp(a, b)),
            (Number::Uint(a), Number::Int(b)) => Some(signed_cmp(b, a).reverse()),
            (Number::Float(a), other) => a.partial_cmp(&other.as_f64()),
            (this, Number::Float(b)) => this.as_f64().partial_cmp(&b),
        }
    }

    /// Returns `true` if both sides denote the same number.
    #[must_use]
    pub fn same_as(self, other: Number) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }

    /// Parses a decimal integer or float, preferring the exact kinds.
    #[must_use]
    pub fn parse(text: &str) -> Option<Number> {
        if let Ok(n) = text.parse::<u128>() {
            return Some(Number::Uint(n));
        }
        if let Ok(n) = text.parse::<i128>() {
            return Some(Number::Int(n));
        }
        text.parse::<f64>().ok().map(Number::Float)
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Uint(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

/// Orders a signed against an unsigned integer without widening either.
fn signed_cmp(signed: i128, unsigned: u128) -> Ordering {
    match u128::try_from(signed) {
        Ok(signed) => signed.cmp(&unsigned),
        Err(_) => Ordering::Less,
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Uint(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::Uint(n as u128)
    }
}
