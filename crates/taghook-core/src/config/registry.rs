//! Hook registry configuration.

use serde::{Deserialize, Serialize};

/// Defaults and policies applied by a hook registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Priority given to callbacks registered without an explicit one.
    /// Lower values dispatch earlier.
    #[serde(default = "default_priority")]
    pub default_priority: i32,
    /// Number of trailing arguments forwarded to callbacks registered
    /// without an explicit limit.
    #[serde(default = "default_args_limit")]
    pub default_args_limit: usize,
    /// Drop a tag from the registry once its last callback is removed.
    /// When false the tag lingers as an empty list.
    #[serde(default)]
    pub prune_empty_tags: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
            default_args_limit: default_args_limit(),
            prune_empty_tags: false,
        }
    }
}

fn default_priority() -> i32 {
    10
}

fn default_args_limit() -> usize {
    1
}
