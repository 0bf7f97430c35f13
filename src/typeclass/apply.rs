//! Apply type class - applying a wrapped function to a wrapped value.
//!
//! The receiver of [`Apply::ap`] wraps the function and the argument wraps
//! the value: `functions.ap(values)`.
//!
//! # Laws
//!
//! ## Composition Law
//!
//! ```text
//! g.map(compose).ap(f).ap(v) == g.ap(f.ap(v))
//! ```
//!
//! where `compose` is the curried `g => f => x => g(f(x))`.

use super::functor::Functor;

/// A functor supporting application of a wrapped function to a wrapped value.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Apply;
/// use lawful::container::Unit;
///
/// assert_eq!(Unit.ap(Unit), Unit);
/// ```
pub trait Apply: Functor {
    /// Applies the function(s) held by `self` to the value(s) held by `values`.
    #[must_use]
    fn ap(self, values: Self) -> Self;
}
