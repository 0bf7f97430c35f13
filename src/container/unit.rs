//! `Unit`: the container that carries no information.
//!
//! Every capability succeeds and yields `Unit`. Functions handed to `map`,
//! `chain` and `ap` are never called.

use std::fmt;

use crate::guard::GuardError;
use crate::typeclass::{Applicative, Apply, Chain, Functor, Monoid, Semigroup, Setoid};
use crate::value::Value;

/// The single-inhabitant container.
///
/// # Examples
///
/// ```rust
/// use lawful::container::Unit;
/// use lawful::typeclass::{Applicative, Chain, Functor};
/// use lawful::value::Value;
///
/// let unit = Unit::of(Value::from(42)).map(|value| value).chain(|_| Unit);
/// assert_eq!(unit, Unit);
/// assert_eq!(unit.to_string(), "()");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// Builds a `Unit` from constructor arguments, which are never read.
    ///
    /// # Errors
    ///
    /// Never fails; the `Result` matches the other kinds' constructors.
    pub const fn construct(_arguments: &[Value]) -> Result<Self, GuardError> {
        Ok(Self)
    }

    /// Always `Undefined`.
    pub const fn value_of(self) -> Value {
        Value::Undefined
    }

    /// The rendering, `()`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl Setoid for Unit {
    fn equals(&self, _other: &Self) -> bool {
        true
    }
}

impl Semigroup for Unit {
    fn concat(self, _other: Self) -> Self {
        Self
    }
}

impl Monoid for Unit {
    fn empty() -> Self {
        Self
    }
}

impl Functor for Unit {
    fn map<F>(self, _function: F) -> Self
    where
        F: Fn(Value) -> Value,
    {
        Self
    }
}

impl Apply for Unit {
    fn ap(self, _values: Self) -> Self {
        Self
    }
}

impl Applicative for Unit {
    fn of(_value: Value) -> Self {
        Self
    }
}

impl Chain for Unit {
    fn chain<F>(self, _function: F) -> Self
    where
        F: Fn(Value) -> Self,
    {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn explode(_: Value) -> Value {
        panic!("Unit must not call the function")
    }

    #[rstest]
    #[case(&[])]
    #[case(&[Value::from(1)])]
    #[case(&[Value::function(|value| value)])]
    #[case(&[Value::from(1), Value::from(2)])]
    #[case(&[Value::Null, Value::function(|value| value), Value::from("x")])]
    fn construct_ignores_its_arguments(#[case] arguments: &[Value]) {
        assert_eq!(Unit::construct(arguments), Ok(Unit));
    }

    #[rstest]
    fn functions_are_never_called() {
        assert_eq!(Unit.map(explode), Unit);
        assert_eq!(Unit.chain(|value| Unit::of(explode(value))), Unit);
        assert_eq!(Unit.ap(Unit), Unit);
    }

    #[rstest]
    fn every_unit_is_equal() {
        assert!(Unit.equals(&Unit::default()));
        assert_eq!(Unit.concat(Unit::empty()), Unit);
    }

    #[rstest]
    fn value_of_is_undefined() {
        assert_eq!(Unit.value_of(), Value::Undefined);
        assert_eq!(Unit.inspect(), "()");
    }
}
