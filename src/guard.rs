//! Argument validation for constructors and capabilities.
//!
//! Every rejection is a [`GuardError`] whose message follows one grammar:
//!
//! ```text
//! <TypeName>: <requirement>                          construction
//! <TypeName>.<capability>: <requirement>             direct name
//! <TypeName>.fantasy-land/<capability>: <requirement> namespaced name
//! ```
//!
//! so a caller can tell from the message which type, which capability and
//! which naming convention was involved.
//!
//! # Examples
//!
//! ```rust
//! use lawful::container::{All, Container, Unit};
//! use lawful::value::Value;
//!
//! let all = Container::from(All::new(true));
//! let error = all.concat(&Value::from(Unit)).unwrap_err();
//! assert_eq!(error.to_string(), "All.concat: All required");
//!
//! let unit = Container::from(Unit);
//! let error = unit.fantasy_land_map(&Value::from(3)).unwrap_err();
//! assert_eq!(error.to_string(), "Unit.fantasy-land/map: Function required");
//! ```

use std::fmt;

use crate::container::{Container, Kind};
use crate::dispatch::{Capability, Naming};
use crate::value::{Function, Value};

pub(crate) const NON_FUNCTION_VALUE_REQUIRED: &str = "Non-function value required";
pub(crate) const REQUIRES_ONE_ARGUMENT: &str = "Requires one argument";

/// The capability invocation a guard failure happened in.
///
/// Renders as `<TypeName>.<qualified capability name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// The container kind the capability was invoked on.
    pub kind: Kind,
    /// The naming convention the caller used.
    pub naming: Naming,
    /// The invoked capability.
    pub capability: Capability,
}

impl CallSite {
    /// Creates a call site.
    pub const fn new(kind: Kind, naming: Naming, capability: Capability) -> Self {
        Self {
            kind,
            naming,
            capability,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}.{}",
            self.kind,
            self.naming.qualify(self.capability)
        )
    }
}

/// A rejected constructor or capability argument.
///
/// Guard failures are programmer errors: they abort the single operation
/// and are never retried. Instances are immutable, so no partial state is
/// left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// Wrong arity or a disallowed value at construction.
    InvalidConstructionArgument {
        /// The kind being constructed.
        kind: Kind,
        /// The unmet requirement.
        requirement: &'static str,
    },
    /// An operand to `concat` or `ap` is not a container of the same kind.
    TypeMismatch {
        /// Where the mismatch was detected.
        site: CallSite,
    },
    /// An argument to `map` or `chain` is not a function.
    NotInvocable {
        /// Where the argument was rejected.
        site: CallSite,
    },
    /// The kind does not implement the named capability.
    NotImplemented {
        /// The kind the name was looked up on.
        kind: Kind,
        /// The name as the caller spelled it.
        name: String,
    },
}

impl fmt::Display for GuardError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConstructionArgument { kind, requirement } => {
                write!(formatter, "{kind}: {requirement}")
            }
            Self::TypeMismatch { site } => write!(formatter, "{site}: {} required", site.kind),
            Self::NotInvocable { site } => write!(formatter, "{site}: Function required"),
            Self::NotImplemented { kind, name } => {
                write!(formatter, "{kind}.{name}: Capability not implemented")
            }
        }
    }
}

impl std::error::Error for GuardError {}

// =============================================================================
// Guards
// =============================================================================

/// Requires `operand` to be a container of the call site's kind.
pub(crate) fn require_same_kind<'v, T>(
    site: CallSite,
    operand: &'v Value,
    project: impl Fn(&'v Container) -> Option<&'v T>,
) -> Result<&'v T, GuardError> {
    operand.as_container().and_then(project).ok_or_else(|| {
        tracing::debug!(
            type_name = site.kind.name(),
            capability = %site.naming.qualify(site.capability),
            "operand is not the same container kind"
        );
        GuardError::TypeMismatch { site }
    })
}

pub(crate) fn require_function(site: CallSite, operand: &Value) -> Result<&Function, GuardError> {
    operand.as_function().ok_or_else(|| {
        tracing::debug!(
            type_name = site.kind.name(),
            capability = %site.naming.qualify(site.capability),
            "operand is not invocable"
        );
        GuardError::NotInvocable { site }
    })
}

/// Requires a constructor argument that is present and not a function.
pub(crate) fn require_non_function(kind: Kind, arguments: &[Value]) -> Result<&Value, GuardError> {
    match arguments.first() {
        Some(value) if !value.is_function() => Ok(value),
        _ => Err(invalid_construction(kind, NON_FUNCTION_VALUE_REQUIRED)),
    }
}

/// Requires at least one constructor argument.
pub(crate) fn require_argument(kind: Kind, arguments: &[Value]) -> Result<&Value, GuardError> {
    arguments
        .first()
        .ok_or_else(|| invalid_construction(kind, REQUIRES_ONE_ARGUMENT))
}

/// Reports a name the kind does not answer to.
pub(crate) fn not_implemented(kind: Kind, name: &str) -> GuardError {
    tracing::debug!(type_name = kind.name(), name, "capability not implemented");
    GuardError::NotImplemented {
        kind,
        name: name.to_owned(),
    }
}

fn invalid_construction(kind: Kind, requirement: &'static str) -> GuardError {
    tracing::debug!(
        type_name = kind.name(),
        requirement,
        "construction rejected"
    );
    GuardError::InvalidConstructionArgument { kind, requirement }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{All, Unit};
    use rstest::rstest;

    #[rstest]
    #[case(Naming::Direct, "First.concat")]
    #[case(Naming::FantasyLand, "First.fantasy-land/concat")]
    fn call_site_renders_qualified_name(#[case] naming: Naming, #[case] expected: &str) {
        let site = CallSite::new(Kind::First, naming, Capability::Concat);
        assert_eq!(site.to_string(), expected);
    }

    #[rstest]
    fn type_mismatch_message() {
        let error = GuardError::TypeMismatch {
            site: CallSite::new(Kind::Unit, Naming::FantasyLand, Capability::Ap),
        };
        assert_eq!(error.to_string(), "Unit.fantasy-land/ap: Unit required");
    }

    #[rstest]
    fn not_invocable_message() {
        let error = GuardError::NotInvocable {
            site: CallSite::new(Kind::Unit, Naming::Direct, Capability::Chain),
        };
        assert_eq!(error.to_string(), "Unit.chain: Function required");
    }

    #[rstest]
    fn construction_message() {
        let error = GuardError::InvalidConstructionArgument {
            kind: Kind::All,
            requirement: NON_FUNCTION_VALUE_REQUIRED,
        };
        assert_eq!(error.to_string(), "All: Non-function value required");
    }

    #[rstest]
    fn not_implemented_message() {
        let error = not_implemented(Kind::All, "fantasy-land/map");
        assert_eq!(
            error.to_string(),
            "All.fantasy-land/map: Capability not implemented"
        );
    }

    #[rstest]
    fn same_kind_accepts_matching_container() {
        let site = CallSite::new(Kind::All, Naming::Direct, Capability::Concat);
        let operand = Value::from(All::new(false));
        assert_eq!(
            require_same_kind(site, &operand, Container::as_all),
            Ok(&All::new(false))
        );
    }

    #[rstest]
    #[case(Value::Undefined)]
    #[case(Value::from(true))]
    #[case(Value::from(Unit))]
    #[case(Value::just(All::new(true)))]
    fn same_kind_rejects_everything_else(#[case] operand: Value) {
        let site = CallSite::new(Kind::All, Naming::Direct, Capability::Concat);
        assert_eq!(
            require_same_kind(site, &operand, Container::as_all),
            Err(GuardError::TypeMismatch { site })
        );
    }

    #[rstest]
    fn function_guard() {
        let site = CallSite::new(Kind::Unit, Naming::Direct, Capability::Map);
        assert!(require_function(site, &Value::function(|value| value)).is_ok());
        assert_eq!(
            require_function(site, &Value::from("f")).unwrap_err(),
            GuardError::NotInvocable { site }
        );
    }

    #[rstest]
    fn construction_guards() {
        assert!(require_non_function(Kind::All, &[]).is_err());
        assert!(require_non_function(Kind::All, &[Value::function(|value| value)]).is_err());
        assert!(require_non_function(Kind::All, &[Value::Undefined]).is_ok());
        assert!(require_argument(Kind::First, &[]).is_err());
        assert!(require_argument(Kind::First, &[Value::Null, Value::Null]).is_ok());
    }
}
