//! `All`: the boolean conjunction monoid.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::All;
//! use lawful::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(All::new(true).concat(All::new(false)), All::new(false));
//! assert_eq!(All::concat_all([All::new(true), All::new(true)]), All::new(true));
//! assert_eq!(All::empty(), All::new(true));
//! ```

use std::fmt;

use crate::guard::{GuardError, require_non_function};
use crate::typeclass::{Monoid, Semigroup, Setoid};
use crate::value::Value;

use super::Kind;

/// Logical AND over booleans, with `true` as the identity element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct All {
    value: bool,
}

impl All {
    /// Wraps a boolean.
    pub const fn new(value: bool) -> Self {
        Self { value }
    }

    /// Reads a dynamic value as an `All`.
    ///
    /// `Undefined` and `Null` read as `true`; anything else by truthiness.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidConstructionArgument`] for functions.
    pub fn try_from_value(value: Value) -> Result<Self, GuardError> {
        Self::construct(std::slice::from_ref(&value))
    }

    /// Builds an `All` from constructor arguments; only the first is read.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidConstructionArgument`] when there is no
    /// argument or the first one is a function.
    pub fn construct(arguments: &[Value]) -> Result<Self, GuardError> {
        let value = require_non_function(Kind::All, arguments)?;
        Ok(Self::new(match value {
            Value::Undefined | Value::Null => true,
            other => other.is_truthy(),
        }))
    }

    /// The stored boolean.
    pub const fn value_of(self) -> bool {
        self.value
    }

    /// The rendering, `All true` or `All false`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for All {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "All {}", self.value)
    }
}

impl Setoid for All {
    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Semigroup for All {
    fn concat(self, other: Self) -> Self {
        Self::new(self.value && other.value)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self::new(true)
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}
