//! Configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file overlaid with `TAGHOOK__`-prefixed environment
//! variables. Every field carries a default, so an empty source is valid.

pub mod logging;
pub mod registry;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::registry::RegistryConfig;

use crate::result::HookResult;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaghookConfig {
    /// Hook registry defaults and policies.
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TaghookConfig {
    /// Load configuration from a TOML file (if present) and the environment.
    ///
    /// Environment variables use the `TAGHOOK` prefix and `__` as the
    /// section separator, e.g. `TAGHOOK__REGISTRY__DEFAULT_PRIORITY=5`.
    pub fn load(path: &str) -> HookResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("TAGHOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str) -> HookResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
