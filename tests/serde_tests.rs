#![cfg(feature = "serde")]

//! Integration tests for serde support.

use lawful::container::{All, Kind, Unit};
use lawful::dispatch::{Capability, Naming};
use rstest::rstest;

#[rstest]
fn all_is_transparent() {
    let json = serde_json::to_string(&All::new(false)).unwrap();
    assert_eq!(json, "false");
    let restored: All = serde_json::from_str("true").unwrap();
    assert_eq!(restored, All::new(true));
}

#[rstest]
fn unit_roundtrip() {
    let json = serde_json::to_string(&Unit).unwrap();
    assert_eq!(json, "null");
    let restored: Unit = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, Unit);
}

#[rstest]
#[case(Kind::All, "\"All\"")]
#[case(Kind::First, "\"First\"")]
#[case(Kind::Unit, "\"Unit\"")]
fn kind_uses_its_name(#[case] kind: Kind, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&kind).unwrap(), json);
    assert_eq!(serde_json::from_str::<Kind>(json).unwrap(), kind);
}

#[rstest]
fn capability_and_naming_are_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Capability::Concat).unwrap(),
        "\"concat\""
    );
    assert_eq!(
        serde_json::to_string(&Naming::FantasyLand).unwrap(),
        "\"fantasy-land\""
    );
    let restored: Capability = serde_json::from_str("\"ap\"").unwrap();
    assert_eq!(restored, Capability::Ap);
}
