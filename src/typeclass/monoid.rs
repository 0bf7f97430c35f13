//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().concat(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.concat(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Monoid, Semigroup};
//! use lawful::container::All;
//!
//! assert_eq!(All::empty(), All::new(true));
//! assert_eq!(All::empty().concat(All::new(false)), All::new(false));
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// In addition to associativity, for all `a`:
/// ```text
/// Self::empty().concat(a) == a
/// a.concat(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Monoid;
    /// use lawful::container::All;
    ///
    /// assert_eq!(All::concat_all([All::new(true), All::new(false)]), All::new(false));
    /// assert_eq!(All::concat_all(Vec::new()), All::new(true));
    /// ```
    fn concat_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.concat(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::empty()
    }
}
