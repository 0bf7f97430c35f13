//! Functor type class - mapping over container values.
//!
//! Containers in this crate carry dynamic [`Value`] payloads, so mapping is
//! over `Value -> Value` functions and the container type is preserved.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(|x| f(g(x))) == fa.map(g).map(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Functor;
//! use lawful::container::Unit;
//!
//! // Unit carries no information, so the function is never called
//! let mapped = Unit.map(|_| panic!("never invoked"));
//! assert_eq!(mapped, Unit);
//! ```

use crate::value::Value;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.map(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.map(|x| f(g(x))) == fa.map(g).map(f)
/// ```
pub trait Functor: Sized {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// `Fn` rather than `FnOnce` so multi-element containers can call it once
    /// per element.
    #[must_use]
    fn map<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> Value;
}
