//! Generic law checks for the type class traits.
//!
//! Each function states one law and returns whether it holds for the given
//! inputs. Nothing here knows about concrete containers: instances are
//! opaque, reached only through the type class traits, and compared with an
//! injected equality predicate (except the Setoid laws, which check
//! `equals` itself).
//!
//! | Family | Law |
//! |---|---|
//! | [`setoid`] | reflexivity, symmetry, transitivity |
//! | [`semigroup`] | associativity |
//! | [`monoid`] | left identity, right identity |
//! | [`functor`] | identity, composition |
//! | [`apply`] | composition |
//! | [`chain`] | associativity |
//! | [`monad`] | left identity, right identity |
//!
//! A law holding for the sampled inputs is evidence, not proof; pair the
//! harness with property-based input generation.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::{All, First, Unit};
//! use lawful::dispatch::FantasyLand;
//! use lawful::equals::equals;
//! use lawful::laws::{monad, monoid, semigroup};
//! use lawful::typeclass::Applicative;
//!
//! assert!(semigroup::associativity(equals, All::new(true), All::new(false), All::new(true)));
//! assert!(monoid::left_identity(equals, First::new(1)));
//! assert!(monoid::right_identity(equals, FantasyLand(First::new(1))));
//! assert!(monad::right_identity(equals, Unit::of(lawful::value::Value::Null)));
//! ```

pub mod apply;
pub mod chain;
pub mod functor;
pub mod monad;
pub mod monoid;
pub mod semigroup;
pub mod setoid;
