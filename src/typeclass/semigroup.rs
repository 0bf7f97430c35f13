//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.concat(b)).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Semigroup;
//! use lawful::container::{All, First};
//!
//! assert_eq!(All::new(true).concat(All::new(false)), All::new(false));
//! assert_eq!(First::new("a").concat(First::new("b")), First::new("a"));
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.concat(b)).concat(c) == a.concat(b.concat(c))
/// ```
pub trait Semigroup: Sized {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn concat(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `concat`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::Semigroup;
    /// use lawful::container::All;
    ///
    /// let left = All::new(true);
    /// let right = All::new(false);
    /// assert_eq!(left.concat_ref(&right), All::new(false));
    /// assert_eq!(left, All::new(true));
    /// ```
    #[must_use]
    fn concat_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().concat(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that returns the
    /// identity element instead, see [`Monoid::concat_all`](super::Monoid::concat_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::typeclass::{Monoid, Semigroup};
    /// use lawful::container::First;
    ///
    /// let firsts = vec![First::empty(), First::new(1), First::new(2)];
    /// assert_eq!(First::reduce_all(firsts), Some(First::new(1)));
    /// assert_eq!(First::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.concat(element))
    }
}
