//! Environment overrides for `TaghookConfig::load`.
//!
//! Kept in its own test binary with a single test: the variables are
//! process-wide and must not leak into tests that expect defaults.

use taghook_core::config::TaghookConfig;

const PRIORITY_VAR: &str = "TAGHOOK__REGISTRY__DEFAULT_PRIORITY";
const PRUNE_VAR: &str = "TAGHOOK__REGISTRY__PRUNE_EMPTY_TAGS";

#[test]
fn environment_overrides_defaults_and_file_values() {
    // SAFETY: this is the only test in this binary, so no other thread reads
    // or writes the environment concurrently.
    unsafe {
        std::env::set_var(PRIORITY_VAR, "5");
        std::env::set_var(PRUNE_VAR, "true");
    }

    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("absent.toml");
    let config = TaghookConfig::load(missing.to_str().expect("utf-8 path")).expect("load");
    assert_eq!(config.registry.default_priority, 5);
    assert!(config.registry.prune_empty_tags);
    assert_eq!(config.registry.default_args_limit, 1);

    let path = dir.path().join("taghook.toml");
    std::fs::write(
        &path,
        r#"
        [registry]
        default_priority = 50
        default_args_limit = 3
        prune_empty_tags = false
        "#,
    )
    .expect("write config");

    let config = TaghookConfig::load(path.to_str().expect("utf-8 path")).expect("load");
    assert_eq!(config.registry.default_priority, 5);
    assert!(config.registry.prune_empty_tags);
    assert_eq!(config.registry.default_args_limit, 3);

    // SAFETY: see above.
    unsafe {
        std::env::remove_var(PRIORITY_VAR);
        std::env::remove_var(PRUNE_VAR);
    }
}
