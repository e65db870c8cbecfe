//! # taghook-registry
//!
//! In-process hook registry. Provides:
//!
//! - Registration of callbacks under string tags with a priority and an
//!   argument-count cap
//! - Filter application: a value threaded through the tag's callbacks
//! - Action dispatch: the tag's callbacks invoked for side effects
//! - Priority sorting deferred until dispatch and cached per tag
//!
//! The registry is an ordinary value. Construct one and share it (usually
//! as `Arc<HookRegistry>`) with whatever needs to fire or register hooks.

pub mod hooks;
pub mod prelude;

pub use hooks::callback::Callback;
pub use hooks::definitions::HookOptions;
pub use hooks::registry::HookRegistry;
pub use taghook_core::{ErrorKind, HookError, HookResult};
