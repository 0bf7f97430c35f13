//! Chain laws.

use crate::typeclass::Chain;
use crate::value::Value;

/// `m.chain(f).chain(g) ≡ m.chain(|x| f(x).chain(g))`
pub fn associativity<M, E, F, G>(equals: E, f: F, g: G, m: M) -> bool
where
    M: Chain + Clone,
    E: Fn(&M, &M) -> bool,
    F: Fn(Value) -> M,
    G: Fn(Value) -> M,
{
    let left = m.clone().chain(&f).chain(&g);
    let right = m.chain(|value| f(value).chain(&g));
    equals(&left, &right)
}
