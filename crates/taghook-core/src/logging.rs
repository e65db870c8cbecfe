//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;
use crate::error::HookError;
use crate::result::HookResult;

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if the
/// format is unknown or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> HookResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init(),
        "pretty" => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init(),
        other => {
            return Err(HookError::configuration(format!(
                "Unknown log format '{other}' (expected \"json\" or \"pretty\")"
            )));
        }
    };

    installed.map_err(|e| HookError::internal(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "xml".to_string(),
        };
        let err = init_logging(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_second_install_fails() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        let err = init_logging(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Internal);
    }
}
