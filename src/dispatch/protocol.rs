use super::{Capability, Naming};
use crate::container::{Container, Unit};
use crate::guard::{CallSite, GuardError, not_implemented, require_function, require_same_kind};
use crate::typeclass::{Applicative, Apply, Chain, Functor, Semigroup, Setoid};
use crate::value::Value;

/// The guarded capabilities of one container, under one naming convention.
///
/// This is the only implementation of the dynamic capabilities; the direct
/// and `fantasy_land_` methods on [`Container`] both open a `Protocol`.
///
/// # Examples
///
/// ```rust
/// use lawful::container::{Container, Unit};
/// use lawful::dispatch::Naming;
/// use lawful::value::Value;
///
/// let unit = Container::from(Unit);
/// let protocol = unit.protocol(Naming::FantasyLand);
/// assert_eq!(protocol.map(&Value::function(|value| value)), Ok(unit.clone()));
///
/// let error = protocol.ap(&Value::from(1)).unwrap_err();
/// assert_eq!(error.to_string(), "Unit.fantasy-land/ap: Unit required");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Protocol<'a> {
    container: &'a Container,
    naming: Naming,
}

impl<'a> Protocol<'a> {
    pub(crate) const fn new(container: &'a Container, naming: Naming) -> Self {
        Self { container, naming }
    }

    /// The container this view was opened on.
    pub const fn container(&self) -> &'a Container {
        self.container
    }

    /// The convention diagnostics are spelled in.
    pub const fn naming(&self) -> Naming {
        self.naming
    }

    fn site(&self, capability: Capability) -> CallSite {
        CallSite::new(self.container.kind(), self.naming, capability)
    }

    fn unsupported(&self, capability: Capability) -> GuardError {
        not_implemented(
            self.container.kind(),
            &self.naming.qualify(capability).to_string(),
        )
    }

    /// The identity element of the container's kind.
    pub fn empty(&self) -> Container {
        self.container.kind().empty()
    }

    /// Whether `other` is a container of the same kind with an equal payload.
    ///
    /// Never fails: any other operand is simply unequal.
    pub fn equals(&self, other: &Value) -> bool {
        other
            .as_container()
            .is_some_and(|other| Setoid::equals(self.container, other))
    }

    /// Combines with a container of the same kind.
    ///
    /// # Errors
    ///
    /// [`GuardError::TypeMismatch`] when `other` is not the same kind.
    pub fn concat(&self, other: &Value) -> Result<Container, GuardError> {
        let site = self.site(Capability::Concat);
        Ok(match self.container {
            Container::All(left) => {
                let right = require_same_kind(site, other, Container::as_all)?;
                Container::All(left.concat(*right))
            }
            Container::First(left) => {
                let right = require_same_kind(site, other, Container::as_first)?;
                Container::First(left.concat_ref(right))
            }
            Container::Unit(left) => {
                let right = require_same_kind(site, other, Container::as_unit)?;
                Container::Unit(left.concat(*right))
            }
        })
    }

    /// Maps a function over the payload.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotImplemented`] for kinds without `map`, otherwise
    /// [`GuardError::NotInvocable`] when `function` is not a function.
    pub fn map(&self, function: &Value) -> Result<Container, GuardError> {
        match self.container {
            Container::Unit(unit) => {
                let function = require_function(self.site(Capability::Map), function)?;
                Ok(Container::Unit(unit.map(|value| function.call(value))))
            }
            Container::All(_) | Container::First(_) => Err(self.unsupported(Capability::Map)),
        }
    }

    /// Sequences a container-producing function.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotImplemented`] for kinds without `chain`, otherwise
    /// [`GuardError::NotInvocable`] when `function` is not a function.
    pub fn chain(&self, function: &Value) -> Result<Container, GuardError> {
        match self.container {
            Container::Unit(unit) => {
                let function = require_function(self.site(Capability::Chain), function)?;
                let chained = unit.chain(|value| {
                    function
                        .call(value)
                        .as_container()
                        .and_then(Container::as_unit)
                        .copied()
                        .unwrap_or_default()
                });
                Ok(Container::Unit(chained))
            }
            Container::All(_) | Container::First(_) => Err(self.unsupported(Capability::Chain)),
        }
    }

    /// Applies the wrapped function(s) to a container of the same kind.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotImplemented`] for kinds without `ap`, otherwise
    /// [`GuardError::TypeMismatch`] when `values` is not the same kind.
    pub fn ap(&self, values: &Value) -> Result<Container, GuardError> {
        match self.container {
            Container::Unit(functions) => {
                let site = self.site(Capability::Ap);
                let values = require_same_kind(site, values, Container::as_unit)?;
                Ok(Container::Unit(functions.ap(*values)))
            }
            Container::All(_) | Container::First(_) => Err(self.unsupported(Capability::Ap)),
        }
    }

    /// Lifts `value` into the container's kind.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotImplemented`] for kinds without `of`.
    pub fn of(&self, value: Value) -> Result<Container, GuardError> {
        match self.container {
            Container::Unit(_) => Ok(Container::Unit(Unit::of(value))),
            Container::All(_) | Container::First(_) => Err(self.unsupported(Capability::Of)),
        }
    }
}
