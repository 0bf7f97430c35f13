//! Setoid laws.

use crate::typeclass::Setoid;

/// `m.equals(m)`
pub fn reflexivity<M: Setoid>(m: &M) -> bool {
    m.equals(m)
}

/// `m.equals(n) == n.equals(m)`
pub fn symmetry<M: Setoid>(m: &M, n: &M) -> bool {
    m.equals(n) == n.equals(m)
}

/// If `m.equals(n)` and `n.equals(o)`, then `m.equals(o)`.
pub fn transitivity<M: Setoid>(m: &M, n: &M, o: &M) -> bool {
    !(m.equals(n) && n.equals(o)) || m.equals(o)
}
