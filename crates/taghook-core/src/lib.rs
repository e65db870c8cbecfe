//! # taghook-core
//!
//! Core crate for taghook. Contains the unified error system, the
//! configuration schemas, and logging setup shared by the registry crate.
//!
//! This crate has **no** internal dependencies on other taghook crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use error::{ErrorKind, HookError};
pub use result::HookResult;
