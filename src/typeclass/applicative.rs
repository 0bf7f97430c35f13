//! Applicative type class - lifting plain values into a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! of(|x| x).ap(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! of(f).ap(of(x)) == of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.ap(of(y)) == of(|f| f(y)).ap(u)
//! ```

use super::apply::Apply;
use crate::value::Value;

/// An [`Apply`] with a way to lift a plain value.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Applicative;
/// use lawful::container::Unit;
/// use lawful::value::Value;
///
/// assert_eq!(Unit::of(Value::from(42)), Unit);
/// ```
pub trait Applicative: Apply {
    /// Lifts a value into the context.
    fn of(value: Value) -> Self;
}
