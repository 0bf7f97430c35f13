//! Monoid laws.

use crate::typeclass::Monoid;

/// `M::empty().concat(m) ≡ m`
pub fn left_identity<M, E>(equals: E, m: M) -> bool
where
    M: Monoid + Clone,
    E: Fn(&M, &M) -> bool,
{
    equals(&M::empty().concat(m.clone()), &m)
}

/// `m.concat(M::empty()) ≡ m`
pub fn right_identity<M, E>(equals: E, m: M) -> bool
where
    M: Monoid + Clone,
    E: Fn(&M, &M) -> bool,
{
    equals(&m.clone().concat(M::empty()), &m)
}
