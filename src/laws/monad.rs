//! Monad laws.

use crate::typeclass::Monad;
use crate::value::Value;

/// `M::of(x).chain(f) ≡ f(x)`
pub fn left_identity<M, E, F>(equals: E, f: F, x: Value) -> bool
where
    M: Monad,
    E: Fn(&M, &M) -> bool,
    F: Fn(Value) -> M,
{
    let left = M::of(x.clone()).chain(&f);
    equals(&left, &f(x))
}

/// `m.chain(M::of) ≡ m`
pub fn right_identity<M, E>(equals: E, m: M) -> bool
where
    M: Monad + Clone,
    E: Fn(&M, &M) -> bool,
{
    equals(&m.clone().chain(M::of), &m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Unit;
    use crate::dispatch::FantasyLand;
    use crate::equals::equals;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined)]
    #[case(Value::from(1))]
    #[case(Value::function(|value| value))]
    fn unit_left_identity(#[case] x: Value) {
        assert!(left_identity(equals, |_| Unit, x.clone()));
        assert!(left_identity(equals, |_| FantasyLand(Unit), x));
    }

    #[rstest]
    fn unit_right_identity() {
        assert!(right_identity(equals, Unit));
        assert!(right_identity(equals, FantasyLand(Unit)));
    }
}
