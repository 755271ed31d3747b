//! Typed views of field values for rule evaluation.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::number::Number;

/// What a rule sees of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// An absent optional value.
    Missing,
    /// A boolean.
    Bool(bool),
    /// Any integer or float; integers stay exact.
    Number(Number),
    /// A string.
    Text(&'a str),
    /// A collection, by length.
    Collection(usize),
}

impl Value<'_> {
    /// Returns `true` for the type's zero value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            Value::Missing => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.is_zero(),
            Value::Text(s) => s.is_empty(),
            Value::Collection(len) => len == 0,
        }
    }

    /// Returns the magnitude compared by size rules.
    ///
    /// Numbers compare by value, strings by character count and collections
    /// by length. Booleans and missing values have no magnitude.
    #[must_use]
    pub fn magnitude(&self) -> Option<Number> {
        match *self {
            Value::Number(n) => Some(n),
            Value::Text(s) => Some(Number::from(s.chars().count())),
            Value::Collection(len) => Some(Number::from(len)),
            Value::Bool(_) | Value::Missing => None,
        }
    }
}

/// Exposes a field to the rule engine.
pub trait FieldValue {
    /// Returns the rule engine's view of `self`.
    fn field_value(&self) -> Value<'_>;

    /// Whether an optional field holds a value.
    ///
    /// `None` for non-optional types, whose emptiness is their zero value.
    /// `required` and `omitempty` test presence when this is `Some`.
    fn presence(&self) -> Option<bool> {
        None
    }
}

macro_rules! impl_number {
    ($kind:ident as $wide:ty: $($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn field_value(&self) -> Value<'_> {
                    Value::Number(Number::$kind(*self as $wide))
                }
            }
        )*
    };
}

impl_number!(Int as i128: i8, i16, i32, i64, i128, isize);
impl_number!(Uint as u128: u8, u16, u32, u64, u128, usize);
impl_number!(Float as f64: f32, f64);

impl FieldValue for bool {
    fn field_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl FieldValue for str {
    fn field_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl FieldValue for String {
    fn field_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

macro_rules! impl_collection {
    ($(<$($gen:ident),*> $ty:ty),* $(,)?) => {
        $(
            impl<$($gen),*> FieldValue for $ty {
                fn field_value(&self) -> Value<'_> {
                    Value::Collection(self.len())
                }
            }
        )*
    };
}

impl_collection!(
    <T> Vec<T>,
    <T> [T],
    <T> VecDeque<T>,
    <T, S> HashSet<T, S>,
    <T> BTreeSet<T>,
    <K, V, S> HashMap<K, V, S>,
    <K, V> BTreeMap<K, V>,
);

impl<T, const N: usize> FieldValue for [T; N] {
    fn field_value(&self) -> Value<'_> {
        Value::Collection(N)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_value(&self) -> Value<'_> {
        match self {
            Some(value) => value.field_value(),
            None => Value::Missing,
        }
    }

    fn presence(&self) -> Option<bool> {
        Some(self.is_some())
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn field_value(&self) -> Value<'_> {
        (**self).field_value()
    }

    fn presence(&self) -> Option<bool> {
        (**self).presence()
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn field_value(&self) -> Value<'_> {
        (**self).field_value()
    }

    fn presence(&self) -> Option<bool> {
        (**self).presence()
    }
}
