//! Convenience re-exports for hook consumers.
//!
//! ```ignore
//! use taghook_registry::prelude::*;
//! ```

pub use crate::hooks::callback::Callback;
pub use crate::hooks::definitions::HookOptions;
pub use crate::hooks::registry::HookRegistry;
pub use serde_json::{Value, json};
pub use taghook_core::{ErrorKind, HookError, HookResult};
