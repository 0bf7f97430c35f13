use crate::typeclass::{Applicative, Apply, Chain, Functor, Monoid, Semigroup, Setoid};
use crate::value::Value;

/// Reaches the type classes of `T` through their `fantasy-land/` names.
///
/// Every method forwards to the canonical implementation on `T`, so a law
/// that holds for `T` holds for `FantasyLand<T>` and the same harness
/// checks both conventions.
///
/// # Examples
///
/// ```rust
/// use lawful::container::First;
/// use lawful::dispatch::FantasyLand;
/// use lawful::typeclass::{Monoid, Semigroup};
///
/// let combined = FantasyLand::<First>::empty().concat(FantasyLand::new(First::new(1)));
/// assert_eq!(combined.into_inner(), First::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FantasyLand<T>(pub T);

impl<T> FantasyLand<T> {
    /// Wraps `inner`.
    #[inline]
    pub const fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for FantasyLand<T> {
    fn from(inner: T) -> Self {
        Self::new(inner)
    }
}

impl<T: Setoid> Setoid for FantasyLand<T> {
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}

impl<T: Semigroup> Semigroup for FantasyLand<T> {
    fn concat(self, other: Self) -> Self {
        Self(self.0.concat(other.0))
    }
}

impl<T: Monoid> Monoid for FantasyLand<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl<T: Functor> Functor for FantasyLand<T> {
    fn map<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> Value,
    {
        Self(self.0.map(function))
    }
}

impl<T: Apply> Apply for FantasyLand<T> {
    fn ap(self, values: Self) -> Self {
        Self(self.0.ap(values.0))
    }
}

impl<T: Applicative> Applicative for FantasyLand<T> {
    fn of(value: Value) -> Self {
        Self(T::of(value))
    }
}

impl<T: Chain> Chain for FantasyLand<T> {
    fn chain<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> Self,
    {
        Self(self.0.chain(|value| function(value).0))
    }
}
