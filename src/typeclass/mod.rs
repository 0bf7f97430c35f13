//! Type class traits for the algebraic containers.
//!
//! Each algebraic class is one trait, and each law is stated on the trait it
//! belongs to:
//!
//! - [`Setoid`]: a lawful equivalence relation (`equals`)
//! - [`Semigroup`]: an associative combination (`concat`)
//! - [`Monoid`]: a semigroup with an identity element (`empty`)
//! - [`Functor`]: structure-preserving mapping (`map`)
//! - [`Apply`]: application of a wrapped function (`ap`)
//! - [`Applicative`]: lifting a plain value (`of`)
//! - [`Chain`]: sequencing dependent computations (`chain`)
//! - [`Monad`]: `Applicative` plus `Chain`
//!
//! The law harness in [`crate::laws`] is written against these traits only,
//! so any type implementing them can be checked without modification.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monoid, Semigroup};
//! use lawful::container::First;
//! use lawful::value::Value;
//!
//! let combined = First::concat_all([First::empty(), First::new("a"), First::new("b")]);
//! assert_eq!(combined.option(Value::from("fallback")), Value::from("a"));
//! ```

mod applicative;
mod apply;
mod chain;
mod functor;
mod monad;
mod monoid;
mod semigroup;
mod setoid;

pub use applicative::Applicative;
pub use apply::Apply;
pub use chain::Chain;
pub use functor::Functor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use setoid::Setoid;
