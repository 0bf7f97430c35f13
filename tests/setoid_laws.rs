#![cfg(feature = "laws")]

//! Property-based tests for the Setoid laws.
//!
//! - **Reflexivity**: `m.equals(m)`
//! - **Symmetry**: `m.equals(n) == n.equals(m)`
//! - **Transitivity**: `m.equals(n) && n.equals(o)` implies `m.equals(o)`

mod common;

use lawful::container::{All, Container, First, Unit};
use lawful::dispatch::FantasyLand;
use lawful::laws::setoid;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_all_setoid(m in common::all(), n in common::all(), o in common::all()) {
        prop_assert!(setoid::reflexivity(&m));
        prop_assert!(setoid::symmetry(&m, &n));
        prop_assert!(setoid::transitivity(&m, &n, &o));
    }

    #[test]
    fn prop_first_setoid(m in common::small_first(), n in common::small_first(), o in common::small_first()) {
        prop_assert!(setoid::reflexivity(&m));
        prop_assert!(setoid::symmetry(&m, &n));
        prop_assert!(setoid::transitivity(&m, &n, &o));
    }

    #[test]
    fn prop_first_setoid_over_arbitrary_payloads(m in common::first(), n in common::first()) {
        prop_assert!(setoid::reflexivity(&m));
        prop_assert!(setoid::symmetry(&m, &n));
        prop_assert!(setoid::transitivity(&m, &m.clone(), &n));
    }

    #[test]
    fn prop_container_setoid_across_kinds(
        m in common::container(),
        n in common::container(),
        o in common::container(),
    ) {
        prop_assert!(setoid::reflexivity(&m));
        prop_assert!(setoid::symmetry(&m, &n));
        prop_assert!(setoid::transitivity(&m, &n, &o));
    }

    #[test]
    fn prop_namespaced_setoid(m in common::all(), n in common::all(), o in common::all()) {
        let (m, n, o) = (FantasyLand(m), FantasyLand(n), FantasyLand(o));
        prop_assert!(setoid::reflexivity(&m));
        prop_assert!(setoid::symmetry(&m, &n));
        prop_assert!(setoid::transitivity(&m, &n, &o));
    }
}

#[test]
fn unit_setoid() {
    assert!(setoid::reflexivity(&Unit));
    assert!(setoid::symmetry(&Unit, &Unit));
    assert!(setoid::transitivity(&Unit, &Unit, &Unit));
    assert!(setoid::transitivity(
        &Container::from(All::new(true)),
        &Container::from(First::new(1)),
        &Container::from(Unit)
    ));
}
