//! Per-kind type descriptors.

use super::{All, Container, First, Kind, Unit};
use crate::dispatch::Capability;
use crate::typeclass::Monoid;

/// Static facts about one container kind.
///
/// There is exactly one descriptor per [`Kind`]; the capability set is fixed
/// when the crate is compiled.
#[derive(Debug)]
pub struct TypeDescriptor {
    /// The kind name, e.g. `All`.
    pub name: &'static str,
    /// The stable type tag, `lawful/<Name>@<version>`.
    pub type_tag: &'static str,
    /// The capabilities the kind implements.
    pub capabilities: &'static [Capability],
    /// Produces the kind's identity element.
    pub empty: fn() -> Container,
}

impl TypeDescriptor {
    /// Returns `true` when the kind implements `capability`.
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

pub(super) static ALL_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "All",
    type_tag: "lawful/All@1",
    capabilities: &[Capability::Concat, Capability::Empty, Capability::Equals],
    empty: empty_all,
};

pub(super) static FIRST_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "First",
    type_tag: "lawful/First@1",
    capabilities: &[Capability::Concat, Capability::Empty, Capability::Equals],
    empty: empty_first,
};

pub(super) static UNIT_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "Unit",
    type_tag: "lawful/Unit@1",
    capabilities: &[
        Capability::Ap,
        Capability::Chain,
        Capability::Concat,
        Capability::Empty,
        Capability::Equals,
        Capability::Map,
        Capability::Of,
    ],
    empty: empty_unit,
};

fn empty_all() -> Container {
    Container::All(All::empty())
}

fn empty_first() -> Container {
    Container::First(First::empty())
}

fn empty_unit() -> Container {
    Container::Unit(Unit::empty())
}

/// Static access to a concrete container type's descriptor.
///
/// Everything here is answered without constructing an instance.
///
/// # Examples
///
/// ```rust
/// use lawful::container::{All, TypeRep, Unit};
///
/// assert_eq!(All::type_name(), "All");
/// assert_eq!(All::type_tag(), "lawful/All@1");
/// assert!(All::implements("concat"));
/// assert!(!All::implements("map"));
/// assert!(Unit::implements("fantasy-land/chain"));
/// ```
pub trait TypeRep {
    /// The kind of this type.
    const KIND: Kind;

    /// The literal kind name.
    fn type_name() -> &'static str {
        Self::KIND.name()
    }

    /// The stable type tag.
    fn type_tag() -> &'static str {
        Self::KIND.type_tag()
    }

    /// Whether the kind answers to `name`, spelled in either convention.
    fn implements(name: &str) -> bool {
        Self::KIND.implements(name)
    }

    /// The kind's descriptor.
    fn descriptor() -> &'static TypeDescriptor {
        Self::KIND.descriptor()
    }
}

impl TypeRep for All {
    const KIND: Kind = Kind::All;
}

impl TypeRep for First {
    const KIND: Kind = Kind::First;
}

impl TypeRep for Unit {
    const KIND: Kind = Kind::Unit;
}
