//! Monad type class - a lawful pairing of `of` and `chain`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::of(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.chain(Self::of) == m
//! ```
//!
//! ## Associativity Law (from Chain)
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```

use super::applicative::Applicative;
use super::chain::Chain;

/// A type that is both [`Applicative`] and [`Chain`].
///
/// Implemented automatically for every such type.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Monad;
/// use lawful::container::Unit;
///
/// fn assert_monad<M: Monad>() {}
/// assert_monad::<Unit>();
/// ```
pub trait Monad: Applicative + Chain {}

impl<M> Monad for M where M: Applicative + Chain {}
