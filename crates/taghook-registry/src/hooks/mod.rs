//! Hook system — callbacks, per-tag lists, registry, and dispatch.

pub mod callback;
pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use callback::Callback;
pub use definitions::HookOptions;
pub use registry::HookRegistry;
