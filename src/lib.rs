//! # lawful
//!
//! Small immutable algebraic containers with a fixed, composable set of
//! capabilities, and a generic harness that checks any conforming container
//! against the algebraic laws.
//!
//! ## Overview
//!
//! - **Type Classes**: Setoid, Semigroup, Monoid, Functor, Apply, Applicative,
//!   Chain and Monad, as plain traits
//! - **Containers**: `All` (conjunction monoid), `First` (leftmost-present
//!   monoid) and `Unit` (the no-information monad)
//! - **Dual Naming**: every capability answers to its direct name and to its
//!   `fantasy-land/` name, both reaching one implementation
//! - **Guards**: capabilities reached with dynamic operands reject malformed
//!   input with uniform diagnostics
//! - **Laws**: one generic function per law, over the type class traits and an
//!   injected equality predicate
//!
//! ## Feature Flags
//!
//! - `laws` (default): the law-verification harness
//! - `serde`: `Serialize`/`Deserialize` for the kinds and plain containers
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! let all = All::concat_all([All::new(true), All::new(false)]);
//! assert_eq!(all.to_string(), "All false");
//!
//! let first = Container::from(First::new(1));
//! let error = first.fantasy_land_concat(&Value::from(all)).unwrap_err();
//! assert_eq!(error.to_string(), "First.fantasy-land/concat: First required");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the type class traits and the dynamic value.
///
/// # Usage
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::{All, Container, First, Kind, TypeRep, Unit};
    pub use crate::dispatch::{Capability, FantasyLand, Naming};
    pub use crate::equals::equals;
    pub use crate::guard::GuardError;
    pub use crate::typeclass::*;
    pub use crate::value::{Function, Value};
}

pub mod container;
pub mod dispatch;
pub mod equals;
pub mod guard;
#[cfg(feature = "laws")]
pub mod laws;
pub mod typeclass;
pub mod value;
