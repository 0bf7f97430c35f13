//! Dynamic values accepted at the container boundary.
//!
//! Containers are handed arbitrary payloads and arbitrary operands: a number,
//! a string, a function, another container, or nothing at all. The guard
//! layer needs to see all of these to reject the wrong ones, so they are
//! modelled explicitly as the [`Value`] sum type instead of being erased.
//!
//! # Truthiness
//!
//! Reducing a value to a boolean is an explicit rule, see [`Value::is_truthy`]:
//!
//! | Value | Truthy |
//! |---|---|
//! | `Undefined`, `Null` | no |
//! | `Boolean(b)` | `b` |
//! | `Number(n)` | `n != 0 && !n.is_nan()` |
//! | `String(s)` | `!s.is_empty()` |
//! | everything else | yes |
//!
//! # Examples
//!
//! ```rust
//! use lawful::value::Value;
//!
//! assert!(Value::from("text").is_truthy());
//! assert!(!Value::from(0).is_truthy());
//! assert!(Value::Array(vec![]).is_truthy());
//! ```

mod function;
mod render;

pub use function::Function;

use std::collections::BTreeMap;

use crate::container::{All, Container, First, Unit};

/// A dynamically shaped value.
///
/// `PartialEq` is deep structural equality: arrays and objects compare
/// element-wise, functions compare by identity, containers compare through
/// their own equality, and `NaN` equals itself so the relation stays
/// reflexive.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value was given.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A string-keyed record.
    Object(BTreeMap<String, Value>),
    /// An invocable value.
    Function(Function),
    /// An optional value, `Just x` or `Nothing`.
    Maybe(Option<Box<Value>>),
    /// One of the algebraic containers.
    Container(Box<Container>),
}

impl Value {
    /// Wraps a closure as a [`Value::Function`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::value::Value;
    ///
    /// let double = Value::function(|value| match value {
    ///     Value::Number(n) => Value::Number(n * 2.0),
    ///     other => other,
    /// });
    /// assert_eq!(double.apply(Value::from(4)), Value::from(8));
    /// ```
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(Self) -> Self + Send + Sync + 'static,
    {
        Self::Function(Function::new(function))
    }

    /// A present optional value.
    pub fn just(value: impl Into<Self>) -> Self {
        Self::Maybe(Some(Box::new(value.into())))
    }

    /// An absent optional value.
    pub const fn nothing() -> Self {
        Self::Maybe(None)
    }

    /// Returns `true` for [`Value::Function`].
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the wrapped function, if this value is invocable.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the wrapped container, if this value is one.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(container) => Some(container.as_ref()),
            _ => None,
        }
    }

    /// Consumes the value and returns the wrapped container, if any.
    pub fn into_container(self) -> Option<Container> {
        match self {
            Self::Container(container) => Some(*container),
            _ => None,
        }
    }

    /// Returns `true` for the representations of "no value":
    /// `Undefined`, `Null` and `Maybe(None)`.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null | Self::Maybe(None))
    }

    /// Reduces the value to a boolean using the rule in the module docs.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::String(value) => !value.is_empty(),
            Self::Array(_)
            | Self::Object(_)
            | Self::Function(_)
            | Self::Maybe(_)
            | Self::Container(_) => true,
        }
    }

    /// Calls this value with `argument` when it is a function.
    ///
    /// Calling anything that is not a function yields [`Value::Undefined`].
    pub fn apply(&self, argument: Self) -> Self {
        self.as_function()
            .map_or(Self::Undefined, |function| function.call(argument))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => {
                left == right || (left.is_nan() && right.is_nan())
            }
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Maybe(left), Self::Maybe(right)) => left == right,
            (Self::Container(left), Self::Container(right)) => left == right,
            _ => false,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(values)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Object(entries)
    }
}

impl From<Option<Self>> for Value {
    fn from(value: Option<Self>) -> Self {
        Self::Maybe(value.map(Box::new))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        Self::Container(Box::new(container))
    }
}

impl From<All> for Value {
    fn from(all: All) -> Self {
        Container::All(all).into()
    }
}

impl From<First> for Value {
    fn from(first: First) -> Self {
        Container::First(first).into()
    }
}

impl From<Unit> for Value {
    fn from(unit: Unit) -> Self {
        Container::Unit(unit).into()
    }
}
