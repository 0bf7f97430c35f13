//! The equality oracle handed to the law harness.
//!
//! Laws never compare instances themselves; they are given a predicate.
//! [`equals`] is the structural one: it defers to `PartialEq`, which for
//! [`Value`](crate::value::Value) is deep equality and for the containers is
//! their own Setoid equality.
//!
//! # Examples
//!
//! ```rust
//! use lawful::equals::equals;
//! use lawful::container::All;
//!
//! assert!(equals(&All::new(true), &All::new(true)));
//! assert!(!equals(&All::new(true), &All::new(false)));
//! ```

/// Structural equality of two values of the same type.
#[inline]
pub fn equals<T>(left: &T, right: &T) -> bool
where
    T: PartialEq + ?Sized,
{
    left == right
}
