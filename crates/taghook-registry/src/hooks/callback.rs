//! Callback handles stored in the registry.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use taghook_core::HookResult;

type CallbackFn = dyn Fn(&[Value]) -> HookResult<Value> + Send + Sync;

/// A shareable handle to a hook callback.
///
/// Callbacks receive the forwarded arguments as a slice and return the
/// (possibly new) value. Identity follows the handle: clones of one handle
/// compare equal, while two handles built from identical closures do not.
/// Keep a clone around to remove or look up the callback later.
#[derive(Clone)]
pub struct Callback {
    func: Arc<CallbackFn>,
    name: Option<Arc<str>>,
}

impl Callback {
    /// Wraps a closure as a callback.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> HookResult<Value> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            name: None,
        }
    }

    /// Wraps a value-returning closure. Same as [`Callback::new`].
    pub fn filter<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> HookResult<Value> + Send + Sync + 'static,
    {
        Self::new(func)
    }

    /// Wraps a side-effect closure. Its result is seen as `Value::Null`.
    pub fn action<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> HookResult<()> + Send + Sync + 'static,
    {
        Self::new(move |args| func(args).map(|()| Value::Null))
    }

    /// Attaches a name used in log output. Identity is unchanged.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Arc::from(name.into()));
        self
    }

    /// Returns the attached name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn label(&self) -> &str {
        self.name().unwrap_or("<anonymous>")
    }

    /// Invokes the callback with the given arguments.
    pub fn invoke(&self, args: &[Value]) -> HookResult<Value> {
        (self.func)(args)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.label())
            .field("ptr", &Arc::as_ptr(&self.func).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_identity() {
        let cb = Callback::new(|args| Ok(args.first().cloned().unwrap_or(Value::Null)));
        let clone = cb.clone();
        assert_eq!(cb, clone);
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let a = Callback::new(|_| Ok(Value::Null));
        let b = Callback::new(|_| Ok(Value::Null));
        assert_ne!(a, b);
    }

    #[test]
    fn test_named_keeps_identity() {
        let cb = Callback::new(|_| Ok(json!(1)));
        let named = cb.clone().named("one");
        assert_eq!(cb, named);
        assert_eq!(named.name(), Some("one"));
        assert_eq!(cb.name(), None);
    }

    #[test]
    fn test_action_returns_null() {
        let cb = Callback::action(|_| Ok(()));
        assert_eq!(cb.invoke(&[json!("ignored")]).expect("invoke"), Value::Null);
    }
}
