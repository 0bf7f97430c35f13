use std::fmt;
use std::sync::Arc;

use super::Value;

/// A shared, invocable value.
///
/// Cloning a `Function` shares the closure; two `Function`s are equal only
/// when they share the same closure.
///
/// # Examples
///
/// ```rust
/// use lawful::value::{Function, Value};
///
/// let identity = Function::new(|value| value);
/// assert_eq!(identity.call(Value::from(1)), Value::from(1));
/// assert!(identity.ptr_eq(&identity.clone()));
/// ```
#[derive(Clone)]
pub struct Function(Arc<dyn Fn(Value) -> Value + Send + Sync>);

impl Function {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Invokes the function.
    #[inline]
    pub fn call(&self, argument: Value) -> Value {
        (self.0)(argument)
    }

    /// Returns `true` when both handles share one closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Function")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn call_invokes_closure() {
        let negate = Function::new(|value| Value::Boolean(!value.is_truthy()));
        assert_eq!(negate.call(Value::from(true)), Value::from(false));
    }

    #[rstest]
    fn clones_share_identity() {
        let function = Function::new(|value| value);
        assert!(function.ptr_eq(&function.clone()));
        assert!(!function.ptr_eq(&Function::new(|value| value)));
    }

    #[rstest]
    fn debug_hides_closure() {
        assert_eq!(format!("{:?}", Function::new(|value| value)), "Function");
    }
}
