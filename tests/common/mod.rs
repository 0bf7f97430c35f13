//! Shared proptest strategies.

#![allow(dead_code)]

use lawful::container::{All, Container, First, Kind, Unit};
use lawful::value::Value;
use proptest::prelude::*;

/// Scalars, `Undefined` and `Null`.
pub fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<f64>().prop_map(Value::Number),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

/// Any value except a function, nested up to a few levels.
pub fn non_function_value() -> impl Strategy<Value = Value> {
    leaf_value().prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner.clone(), 0..4).prop_map(Value::Object),
            inner.prop_map(|value| Value::just(value)),
            Just(Value::nothing()),
            any::<bool>().prop_map(|flag| Value::from(All::new(flag))),
        ]
    })
}

/// A function value; identity or constant.
pub fn function_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::function(|value| value)),
        leaf_value().prop_map(|constant| Value::function(move |_| constant.clone())),
    ]
}

pub fn all() -> impl Strategy<Value = All> {
    any::<bool>().prop_map(All::new)
}

pub fn first() -> impl Strategy<Value = First> {
    prop_oneof![
        Just(First::nothing()),
        non_function_value().prop_map(First::new),
    ]
}

/// `First` over a tiny domain, so random triples are often equal.
pub fn small_first() -> impl Strategy<Value = First> {
    prop_oneof![Just(First::nothing()), (0..2_i32).prop_map(First::new)]
}

pub fn kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::VARIANTS.to_vec())
}

pub fn container_of(kind: Kind) -> BoxedStrategy<Container> {
    match kind {
        Kind::All => all().prop_map(Container::from).boxed(),
        Kind::First => first().prop_map(Container::from).boxed(),
        Kind::Unit => Just(Container::from(Unit)).boxed(),
    }
}

pub fn container() -> impl Strategy<Value = Container> {
    kind().prop_flat_map(container_of)
}

/// Any operand a dynamic capability might be handed.
pub fn operand() -> impl Strategy<Value = Value> {
    prop_oneof![
        non_function_value(),
        function_value(),
        container().prop_map(Value::from),
    ]
}
