//! Semigroup laws.

use crate::typeclass::Semigroup;

/// `m.concat(n).concat(o) ≡ m.concat(n.concat(o))`
pub fn associativity<M, E>(equals: E, m: M, n: M, o: M) -> bool
where
    M: Semigroup + Clone,
    E: Fn(&M, &M) -> bool,
{
    let left = m.clone().concat(n.clone()).concat(o.clone());
    let right = m.concat(n.concat(o));
    equals(&left, &right)
}
