//! `First`: keeps the leftmost present value.
//!
//! Absence is the identity element, so `First` forms a monoid for any
//! payload.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::First;
//! use lawful::typeclass::{Monoid, Semigroup};
//! use lawful::value::Value;
//!
//! let picked = First::empty().concat(First::new(1)).concat(First::new(2));
//! assert_eq!(picked.option(Value::from(0)), Value::from(1));
//! assert_eq!(First::nothing().option(Value::from(0)), Value::from(0));
//! ```

use std::fmt;

use crate::guard::{GuardError, require_argument};
use crate::typeclass::{Monoid, Semigroup, Setoid};
use crate::value::Value;

use super::Kind;

/// The leftmost present value of a combination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct First {
    value: Option<Value>,
}

impl First {
    /// Wraps `value`, normalising absence.
    ///
    /// `Maybe(Some(x))` is unwrapped to `x`. `Maybe(None)`, `Undefined` and
    /// `Null` become absent.
    pub fn new(value: impl Into<Value>) -> Self {
        let value = match value.into() {
            Value::Maybe(inner) => inner.map(|boxed| *boxed),
            absent if absent.is_absent() => None,
            present => Some(present),
        };
        Self { value }
    }

    /// The absent `First`.
    pub const fn nothing() -> Self {
        Self { value: None }
    }

    /// Builds a `First` from constructor arguments; only the first is read.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidConstructionArgument`] when no argument
    /// is given.
    pub fn construct(arguments: &[Value]) -> Result<Self, GuardError> {
        require_argument(Kind::First, arguments).map(|value| Self::new(value.clone()))
    }

    /// The held value, or `default` when absent.
    pub fn option(&self, default: Value) -> Value {
        self.value.clone().unwrap_or(default)
    }

    /// The held value, if present.
    pub const fn value_of(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the container, returning the held value.
    pub fn into_inner(self) -> Option<Value> {
        self.value
    }

    /// Whether a value is held.
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The rendering, `First( Just <value> )` or `First( Nothing )`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for First {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "First( Just {value} )"),
            None => formatter.write_str("First( Nothing )"),
        }
    }
}

impl Setoid for First {
    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Semigroup for First {
    fn concat(self, other: Self) -> Self {
        if self.value.is_some() { self } else { other }
    }
}

impl Monoid for First {
    fn empty() -> Self {
        Self::nothing()
    }
}

impl From<Option<Value>> for First {
    fn from(value: Option<Value>) -> Self {
        Self::new(value)
    }
}
