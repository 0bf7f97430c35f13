//! Name-based capability lookup.

use super::{Capability, Naming};
use crate::container::{Container, Kind};
use crate::guard::{GuardError, not_implemented};
use crate::value::Value;

/// A capability reached by name.
///
/// The [`Naming`] argument only affects diagnostics. Results are returned as
/// dynamic values: containers are wrapped in [`Value::Container`] and
/// `equals` yields a [`Value::Boolean`].
pub type Method = fn(&Container, Naming, &[Value]) -> Result<Value, GuardError>;

static UNDEFINED: Value = Value::Undefined;

fn operand(arguments: &[Value]) -> &Value {
    arguments.first().unwrap_or(&UNDEFINED)
}

type Outcome = Result<Value, GuardError>;

fn empty(container: &Container, naming: Naming, _arguments: &[Value]) -> Outcome {
    Ok(container.protocol(naming).empty().into())
}

fn equals(container: &Container, naming: Naming, arguments: &[Value]) -> Outcome {
    let equal = container.protocol(naming).equals(operand(arguments));
    Ok(Value::Boolean(equal))
}

fn concat(container: &Container, naming: Naming, arguments: &[Value]) -> Outcome {
    let protocol = container.protocol(naming);
    protocol.concat(operand(arguments)).map(Value::from)
}

fn map(container: &Container, naming: Naming, arguments: &[Value]) -> Outcome {
    let protocol = container.protocol(naming);
    protocol.map(operand(arguments)).map(Value::from)
}

fn chain(container: &Container, naming: Naming, arguments: &[Value]) -> Outcome {
    let protocol = container.protocol(naming);
    protocol.chain(operand(arguments)).map(Value::from)
}

fn ap(container: &Container, naming: Naming, arguments: &[Value]) -> Outcome {
    let protocol = container.protocol(naming);
    protocol.ap(operand(arguments)).map(Value::from)
}

fn of(container: &Container, naming: Naming, arguments: &[Value]) -> Outcome {
    let protocol = container.protocol(naming);
    protocol.of(operand(arguments).clone()).map(Value::from)
}

const fn method(capability: Capability) -> Method {
    match capability {
        Capability::Empty => empty,
        Capability::Equals => equals,
        Capability::Concat => concat,
        Capability::Map => map,
        Capability::Chain => chain,
        Capability::Ap => ap,
        Capability::Of => of,
    }
}

/// Resolves a capability name for `kind`.
///
/// Both the direct and the `fantasy-land/` spelling of a capability resolve
/// to the same [`Method`]; only the returned [`Naming`] differs. Returns
/// `None` for unknown names and for capabilities the kind does not implement.
///
/// # Examples
///
/// ```rust
/// use lawful::container::Kind;
/// use lawful::dispatch::{Naming, resolve};
///
/// let (naming, direct) = resolve(Kind::Unit, "map").unwrap();
/// assert_eq!(naming, Naming::Direct);
/// let (naming, namespaced) = resolve(Kind::Unit, "fantasy-land/map").unwrap();
/// assert_eq!(naming, Naming::FantasyLand);
/// assert!(std::ptr::fn_addr_eq(direct, namespaced));
///
/// assert!(resolve(Kind::All, "map").is_none());
/// ```
pub fn resolve(kind: Kind, name: &str) -> Option<(Naming, Method)> {
    let (naming, capability) = Naming::parse(name)?;
    let resolved = kind.descriptor().has(capability);
    tracing::trace!(
        type_name = kind.name(),
        name,
        resolved,
        "resolving capability"
    );
    resolved.then(|| (naming, method(capability)))
}

impl Container {
    /// Invokes the capability called `name` with dynamic arguments.
    ///
    /// Missing arguments read as `Undefined`; extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// [`GuardError::NotImplemented`] when the kind does not answer to `name`,
    /// otherwise whatever the capability's guard reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::container::{All, Container};
    /// use lawful::value::Value;
    ///
    /// let all = Container::from(All::new(true));
    /// let result = all.invoke("fantasy-land/concat", &[Value::from(All::new(false))]);
    /// assert_eq!(result, Ok(Value::from(All::new(false))));
    ///
    /// let error = all.invoke("chain", &[]).unwrap_err();
    /// assert_eq!(error.to_string(), "All.chain: Capability not implemented");
    /// ```
    pub fn invoke(&self, name: &str, arguments: &[Value]) -> Result<Value, GuardError> {
        let kind = self.kind();
        let (naming, method) = resolve(kind, name).ok_or_else(|| not_implemented(kind, name))?;
        method(self, naming, arguments)
    }
}
