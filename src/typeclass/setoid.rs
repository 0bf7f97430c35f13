//! Setoid type class - types with a lawful equivalence relation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ## Reflexivity
//!
//! ```text
//! a.equals(&a) == true
//! ```
//!
//! ## Symmetry
//!
//! ```text
//! a.equals(&b) == b.equals(&a)
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! a.equals(&b) && b.equals(&c) implies a.equals(&c)
//! ```

/// A type class for types with an equivalence relation.
///
/// Unlike `PartialEq`, `Setoid` states the equivalence laws as part of its
/// contract; the law harness checks them through this trait alone.
///
/// # Examples
///
/// ```rust
/// use lawful::typeclass::Setoid;
/// use lawful::container::All;
///
/// assert!(All::new(true).equals(&All::new(true)));
/// assert!(!All::new(true).equals(&All::new(false)));
/// ```
pub trait Setoid {
    /// Returns `true` when `self` and `other` are equivalent.
    fn equals(&self, other: &Self) -> bool;
}
