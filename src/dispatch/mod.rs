//! Capability dispatch under two naming conventions.
//!
//! Every capability is reachable by a direct name (`concat`) and by a
//! protocol-qualified name (`fantasy-land/concat`). Both names lead to one
//! implementation:
//!
//! - [`Protocol`] is the single guarded implementation of each capability on
//!   a [`Container`](crate::container::Container). The [`Naming`] it is opened
//!   with only changes the wording of diagnostics.
//! - [`resolve`] maps a name to a uniform [`Method`] pointer; both names of a
//!   capability resolve to the same pointer.
//! - [`FantasyLand`] is the typed adapter: it implements every type class of
//!   the wrapped type by delegating to the canonical method, so the law
//!   harness can be run through either convention.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::{All, Container};
//! use lawful::dispatch::{Capability, Naming};
//! use lawful::value::Value;
//!
//! assert_eq!(
//!     Naming::parse("fantasy-land/concat"),
//!     Some((Naming::FantasyLand, Capability::Concat))
//! );
//!
//! let all = Container::from(All::new(true));
//! let direct = all.invoke("concat", &[Value::from(All::new(false))]);
//! let namespaced = all.invoke("fantasy-land/concat", &[Value::from(All::new(false))]);
//! assert_eq!(direct, namespaced);
//! ```

mod fantasy_land;
mod protocol;
mod table;

pub use fantasy_land::FantasyLand;
pub use protocol::Protocol;
pub use table::{Method, resolve};

use std::fmt;

/// A capability a container kind may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Capability {
    /// Identity element production.
    Empty,
    /// Equality comparison.
    Equals,
    /// Combination.
    Concat,
    /// Mapping.
    Map,
    /// Sequencing.
    Chain,
    /// Application.
    Ap,
    /// Lifting.
    Of,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const VARIANTS: [Self; 7] = [
        Self::Empty,
        Self::Equals,
        Self::Concat,
        Self::Map,
        Self::Chain,
        Self::Ap,
        Self::Of,
    ];

    /// The direct name of the capability.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Equals => "equals",
            Self::Concat => "concat",
            Self::Map => "map",
            Self::Chain => "chain",
            Self::Ap => "ap",
            Self::Of => "of",
        }
    }

    /// Looks a capability up by its direct name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .into_iter()
            .find(|capability| capability.name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The convention a capability name is spelled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Naming {
    /// The bare name, e.g. `concat`.
    #[default]
    Direct,
    /// The protocol-qualified name, e.g. `fantasy-land/concat`.
    FantasyLand,
}

impl Naming {
    /// Prefix of protocol-qualified names.
    pub const FANTASY_LAND_PREFIX: &'static str = "fantasy-land/";

    /// The prefix this convention puts in front of the direct name.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Direct => "",
            Self::FantasyLand => Self::FANTASY_LAND_PREFIX,
        }
    }

    /// Spells `capability` in this convention.
    pub const fn qualify(self, capability: Capability) -> QualifiedName {
        QualifiedName {
            naming: self,
            capability,
        }
    }

    /// Splits a name into its convention and capability.
    ///
    /// Returns `None` for names that are not a capability in either convention.
    pub fn parse(name: &str) -> Option<(Self, Capability)> {
        let (naming, bare) = match name.strip_prefix(Self::FANTASY_LAND_PREFIX) {
            Some(bare) => (Self::FantasyLand, bare),
            None => (Self::Direct, name),
        };
        Capability::from_name(bare).map(|capability| (naming, capability))
    }
}

/// A capability spelled in one naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// The convention.
    pub naming: Naming,
    /// The capability.
    pub capability: Capability,
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}{}",
            self.naming.prefix(),
            self.capability.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("empty", Capability::Empty)]
    #[case("equals", Capability::Equals)]
    #[case("concat", Capability::Concat)]
    #[case("map", Capability::Map)]
    #[case("chain", Capability::Chain)]
    #[case("ap", Capability::Ap)]
    #[case("of", Capability::Of)]
    fn names_round_trip(#[case] name: &str, #[case] capability: Capability) {
        assert_eq!(capability.name(), name);
        assert_eq!(Capability::from_name(name), Some(capability));
        assert_eq!(Naming::parse(name), Some((Naming::Direct, capability)));

        let qualified = Naming::FantasyLand.qualify(capability).to_string();
        assert_eq!(qualified, format!("fantasy-land/{name}"));
        assert_eq!(
            Naming::parse(&qualified),
            Some((Naming::FantasyLand, capability))
        );
    }

    #[rstest]
    #[case("")]
    #[case("inspect")]
    #[case("fantasy-land/")]
    #[case("fantasy-land/inspect")]
    #[case("fantasy-land/fantasy-land/map")]
    #[case("CONCAT")]
    fn unknown_names_do_not_parse(#[case] name: &str) {
        assert_eq!(Naming::parse(name), None);
    }

    #[rstest]
    fn direct_qualification_is_the_bare_name() {
        assert_eq!(Naming::Direct.qualify(Capability::Ap).to_string(), "ap");
    }
}
