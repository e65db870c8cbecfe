//! Convenience result type alias for taghook.

use crate::error::HookError;

/// A specialized `Result` type for hook operations and hook callbacks.
pub type HookResult<T> = Result<T, HookError>;
