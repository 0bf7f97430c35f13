//! The shipped container kinds.
//!
//! - [`All`]: boolean conjunction monoid
//! - [`First`]: leftmost-present monoid
//! - [`Unit`]: the monad carrying no information
//!
//! The concrete types implement the type class traits directly. [`Container`]
//! is the closed sum over them. It is the value that crosses the dynamic
//! boundary: capabilities on a `Container` accept arbitrary [`Value`] operands
//! and reject malformed ones with a [`GuardError`].
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::{Container, Kind};
//! use lawful::value::Value;
//!
//! let first = Kind::First.construct(&[Value::from(0)]).unwrap();
//! let other = Kind::First.construct(&[Value::from(1)]).unwrap();
//! let combined = first.concat(&Value::from(other)).unwrap();
//! assert_eq!(combined.to_string(), "First( Just 0 )");
//!
//! let unit = Kind::Unit.construct(&[]).unwrap();
//! assert_eq!(unit, Container::from(lawful::container::Unit));
//! ```

mod all;
mod descriptor;
mod first;
mod unit;

pub use all::All;
pub use descriptor::{TypeDescriptor, TypeRep};
pub use first::First;
pub use unit::Unit;

use std::fmt;

use descriptor::{ALL_DESCRIPTOR, FIRST_DESCRIPTOR, UNIT_DESCRIPTOR};

use crate::dispatch::{Naming, Protocol};
use crate::guard::{GuardError, not_implemented};
use crate::typeclass::{Applicative, Setoid};
use crate::value::Value;

/// Discriminant of the container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// See [`All`].
    All,
    /// See [`First`].
    First,
    /// See [`Unit`].
    Unit,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const VARIANTS: [Self; 3] = [Self::All, Self::First, Self::Unit];

    /// The static descriptor of this kind.
    pub fn descriptor(self) -> &'static TypeDescriptor {
        match self {
            Self::All => &ALL_DESCRIPTOR,
            Self::First => &FIRST_DESCRIPTOR,
            Self::Unit => &UNIT_DESCRIPTOR,
        }
    }

    /// The literal kind name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::First => "First",
            Self::Unit => "Unit",
        }
    }

    /// The stable type tag, `lawful/<Name>@1`.
    pub fn type_tag(self) -> &'static str {
        self.descriptor().type_tag
    }

    /// Looks a kind up by its literal name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether this kind answers to `name`.
    ///
    /// Both `concat` and `fantasy-land/concat` are accepted; any other
    /// spelling answers `false`.
    pub fn implements(self, name: &str) -> bool {
        Naming::parse(name).is_some_and(|(_, capability)| self.descriptor().has(capability))
    }

    /// The identity element of this kind.
    pub fn empty(self) -> Container {
        (self.descriptor().empty)()
    }

    /// Lifts `value` into this kind.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::NotImplemented`] for kinds without `of`.
    pub fn of(self, value: Value) -> Result<Container, GuardError> {
        match self {
            Self::Unit => Ok(Container::Unit(Unit::of(value))),
            Self::All | Self::First => Err(not_implemented(self, "of")),
        }
    }

    /// Builds an instance from dynamic constructor arguments.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::InvalidConstructionArgument`] when the arguments
    /// break the kind's construction rule.
    pub fn construct(self, arguments: &[Value]) -> Result<Container, GuardError> {
        match self {
            Self::All => All::construct(arguments).map(Container::All),
            Self::First => First::construct(arguments).map(Container::First),
            Self::Unit => Unit::construct(arguments).map(Container::Unit),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// An instance of any container kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    /// An [`All`] instance.
    All(All),
    /// A [`First`] instance.
    First(First),
    /// A [`Unit`] instance.
    Unit(Unit),
}

impl Container {
    /// The kind of this instance.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::All(_) => Kind::All,
            Self::First(_) => Kind::First,
            Self::Unit(_) => Kind::Unit,
        }
    }

    /// The literal kind name.
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// The stable type tag.
    pub fn type_tag(&self) -> &'static str {
        self.kind().type_tag()
    }

    /// The payload as a dynamic value.
    pub fn value_of(&self) -> Value {
        match self {
            Self::All(all) => Value::Boolean(all.value_of()),
            Self::First(first) => Value::from(first.value_of().cloned()),
            Self::Unit(unit) => unit.value_of(),
        }
    }

    /// The human-readable rendering, identical to `Display`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Opens the guarded capability view under `naming`.
    pub const fn protocol(&self, naming: Naming) -> Protocol<'_> {
        Protocol::new(self, naming)
    }

    /// The inner [`All`], if this is one.
    pub const fn as_all(&self) -> Option<&All> {
        match self {
            Self::All(all) => Some(all),
            _ => None,
        }
    }

    /// The inner [`First`], if this is one.
    pub const fn as_first(&self) -> Option<&First> {
        match self {
            Self::First(first) => Some(first),
            _ => None,
        }
    }

    /// The inner [`Unit`], if this is one.
    pub const fn as_unit(&self) -> Option<&Unit> {
        match self {
            Self::Unit(unit) => Some(unit),
            _ => None,
        }
    }
}

macro_rules! dual_named_capabilities {
    (
        $(
            $(#[$meta:meta])*
            fn $name:ident(&self $(, $argument:ident: $argument_ty:ty)*) -> $ret_ty:ty;
        )*
    ) => {
        paste::paste! {
            impl Container {
                $(
                    $(#[$meta])*
                    pub fn $name(&self $(, $argument: $argument_ty)*) -> $ret_ty {
                        self.protocol(Naming::Direct).$name($($argument),*)
                    }

                    #[doc = "[`Container::" $name "`] reached through `fantasy-land/" $name "`."]
                    ///
                    /// Diagnostics name the namespaced capability.
                    pub fn [<fantasy_land_ $name>](&self $(, $argument: $argument_ty)*) -> $ret_ty {
                        self.protocol(Naming::FantasyLand).$name($($argument),*)
                    }
                )*
            }
        }
    };
}

dual_named_capabilities! {
    /// The identity element of this instance's kind.
    fn empty(&self) -> Container;

    /// Whether `other` is a container of the same kind holding an equal payload.
    fn equals(&self, other: &Value) -> bool;

    /// Combines with a container of the same kind.
    ///
    /// # Errors
    ///
    /// [`GuardError::TypeMismatch`] when `other` is not the same kind.
    fn concat(&self, other: &Value) -> Result<Container, GuardError>;

    /// Maps a function over the payload.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotInvocable`] when `function` is not a function, or
    /// [`GuardError::NotImplemented`] for kinds without `map`.
    fn map(&self, function: &Value) -> Result<Container, GuardError>;

    /// Sequences a container-producing function.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotInvocable`] when `function` is not a function, or
    /// [`GuardError::NotImplemented`] for kinds without `chain`.
    fn chain(&self, function: &Value) -> Result<Container, GuardError>;

    /// Applies the wrapped function(s) to a container of the same kind.
    ///
    /// # Errors
    ///
    /// [`GuardError::TypeMismatch`] when `values` is not the same kind, or
    /// [`GuardError::NotImplemented`] for kinds without `ap`.
    fn ap(&self, values: &Value) -> Result<Container, GuardError>;

    /// Lifts `value` into this instance's kind.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotImplemented`] for kinds without `of`.
    fn of(&self, value: Value) -> Result<Container, GuardError>;
}

impl Setoid for Container {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::All(left), Self::All(right)) => left.equals(right),
            (Self::First(left), Self::First(right)) => left.equals(right),
            (Self::Unit(left), Self::Unit(right)) => left.equals(right),
            _ => false,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All(all) => fmt::Display::fmt(all, formatter),
            Self::First(first) => fmt::Display::fmt(first, formatter),
            Self::Unit(unit) => fmt::Display::fmt(unit, formatter),
        }
    }
}

impl From<All> for Container {
    fn from(all: All) -> Self {
        Self::All(all)
    }
}

impl From<First> for Container {
    fn from(first: First) -> Self {
        Self::First(first)
    }
}

impl From<Unit> for Container {
    fn from(unit: Unit) -> Self {
        Self::Unit(unit)
    }
}

static_assertions::assert_impl_all!(Container: Send, Sync, Clone);
static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Kind: Send, Sync, Copy);
