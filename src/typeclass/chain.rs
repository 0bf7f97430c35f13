//! Chain type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Associativity Law
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```

use super::apply::Apply;
use crate::value::Value;

/// An [`Apply`] supporting sequencing of container-producing functions.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Chain;
/// use lawful::container::Unit;
///
/// let calls = std::cell::Cell::new(0);
/// let result = Unit.chain(|_| {
///     calls.set(calls.get() + 1);
///     Unit
/// });
/// assert_eq!(result, Unit);
/// assert_eq!(calls.get(), 0);
/// ```
pub trait Chain: Apply {
    /// Feeds the value(s) inside `self` to `function` and flattens the result.
    #[must_use]
    fn chain<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> Self;
}
