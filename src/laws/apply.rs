//! Apply laws.

use crate::typeclass::Apply;
use crate::value::Value;

/// The curried composition `g => f => x => g(f(x))` over function values.
///
/// Applying a non-function yields `Undefined`, as [`Value::apply`] does.
///
/// # Examples
///
/// ```rust
/// use lawful::laws::apply::compose;
/// use lawful::value::Value;
///
/// let wrap = Value::function(|value| Value::Array(vec![value]));
/// let composed = compose(wrap.clone()).apply(wrap);
/// assert_eq!(
///     composed.apply(Value::from(1)),
///     Value::Array(vec![Value::Array(vec![Value::from(1)])])
/// );
/// ```
pub fn compose(g: Value) -> Value {
    Value::function(move |f| {
        let g = g.clone();
        Value::function(move |x| g.apply(f.apply(x)))
    })
}

/// `g.map(compose).ap(f).ap(v) ≡ g.ap(f.ap(v))`
///
/// `g` and `f` hold functions, `v` holds the values they are applied to.
pub fn composition<M, E>(equals: E, g: M, f: M, v: M) -> bool
where
    M: Apply + Clone,
    E: Fn(&M, &M) -> bool,
{
    let left = g.clone().map(compose).ap(f.clone()).ap(v.clone());
    let right = g.ap(f.ap(v));
    equals(&left, &right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Unit;
    use crate::equals::equals;
    use crate::typeclass::Functor;
    use rstest::rstest;

    /// Holds one value; `ap` calls the held function on the argument's value.
    #[derive(Debug, Clone, PartialEq)]
    struct Boxed(Value);

    impl Functor for Boxed {
        fn map<F>(self, function: F) -> Self
        where
            F: Fn(Value) -> Value,
        {
            Self(function(self.0))
        }
    }

    impl Apply for Boxed {
        fn ap(self, values: Self) -> Self {
            Self(self.0.apply(values.0))
        }
    }

    /// Ignores the values it is applied to.
    #[derive(Debug, Clone, PartialEq)]
    struct Stubborn(Value);

    impl Functor for Stubborn {
        fn map<F>(self, function: F) -> Self
        where
            F: Fn(Value) -> Value,
        {
            Self(function(self.0))
        }
    }

    impl Apply for Stubborn {
        fn ap(self, _values: Self) -> Self {
            self
        }
    }

    fn wrap() -> Value {
        Value::function(|value| Value::Array(vec![value]))
    }

    fn tag() -> Value {
        Value::function(|value| Value::Array(vec![Value::from("tag"), value]))
    }

    #[rstest]
    fn compose_applies_right_to_left() {
        let composed = compose(wrap()).apply(tag());
        assert_eq!(
            composed.apply(Value::from(1)),
            Value::Array(vec![Value::Array(vec![Value::from("tag"), Value::from(1)])])
        );
    }

    #[rstest]
    fn compose_of_non_functions_is_undefined() {
        let composed = compose(Value::from(1)).apply(tag());
        assert_eq!(composed.apply(Value::Null), Value::Undefined);
    }

    #[rstest]
    fn unit_holds() {
        assert!(composition(equals, Unit, Unit, Unit));
    }

    #[rstest]
    fn lawful_box_holds() {
        assert!(composition(equals, Boxed(wrap()), Boxed(tag()), Boxed(Value::from(1))));
    }

    #[rstest]
    fn detects_ignored_argument() {
        assert!(!composition(
            equals,
            Stubborn(wrap()),
            Stubborn(tag()),
            Stubborn(Value::from(1))
        ));
    }
}
