//! Functor laws.

use crate::typeclass::Functor;
use crate::value::Value;

/// `m.map(|x| x) ≡ m`
pub fn identity<M, E>(equals: E, m: M) -> bool
where
    M: Functor + Clone,
    E: Fn(&M, &M) -> bool,
{
    equals(&m.clone().map(|value| value), &m)
}

/// `m.map(|x| f(g(x))) ≡ m.map(g).map(f)`
pub fn composition<M, E, F, G>(equals: E, f: F, g: G, m: M) -> bool
where
    M: Functor + Clone,
    E: Fn(&M, &M) -> bool,
    F: Fn(Value) -> Value,
    G: Fn(Value) -> Value,
{
    let left = m.clone().map(|value| f(g(value)));
    let right = m.map(&g).map(&f);
    equals(&left, &right)
}
