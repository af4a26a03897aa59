//! Loading-focused tests for configuration

use std::io::Write;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use super::*;
use crate::infrastructure::event_bus::SubscriberFailurePolicy;

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create config file");
    file.write_all(contents.as_bytes()).expect("write config file");
    path
}

fn clear_env() {
    std::env::remove_var(ENV_LOG_FILTER);
    std::env::remove_var(ENV_SUBSCRIBER_FAILURE);
}

#[test]
#[serial]
fn test_no_files_returns_defaults() {
    clear_env();

    let config = load_config_from(None, None).expect("defaults load");

    assert_eq!(config, StartlistConfig::default());
    assert_eq!(config.logging.filter, "info");
    assert_eq!(
        config.event_bus.subscriber_failure,
        SubscriberFailurePolicy::Propagate
    );
}

#[test]
#[serial]
fn test_missing_global_file_is_skipped() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");

    let config = load_config_from(Some(&dir.path().join("absent.toml")), None)
        .expect("missing global ignored");

    assert_eq!(config, StartlistConfig::default());
}

#[test]
#[serial]
fn test_missing_explicit_file_is_error() {
    clear_env();

    let result = load_config_from(None, Some(Path::new("/definitely/not/here.toml")));

    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
#[serial]
fn test_explicit_file_overrides_global() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let global = write_config(
        &dir,
        "global.toml",
        "[logging]\nfilter = \"warn\"\n\n[event_bus]\nsubscriber_failure = \"isolate\"\n",
    );
    let explicit = write_config(&dir, "explicit.toml", "[logging]\nfilter = \"debug\"\n");

    let config = load_config_from(Some(&global), Some(&explicit)).expect("layers load");

    assert_eq!(config.logging.filter, "debug");
    assert_eq!(
        config.event_bus.subscriber_failure,
        SubscriberFailurePolicy::Isolate
    );
}

#[test]
#[serial]
fn test_explicit_file_can_restore_default_values() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let global = write_config(
        &dir,
        "global.toml",
        "[logging]\nfilter = \"debug\"\n\n[event_bus]\nsubscriber_failure = \"isolate\"\n",
    );
    let explicit = write_config(
        &dir,
        "explicit.toml",
        "[logging]\nfilter = \"info\"\n\n[event_bus]\nsubscriber_failure = \"propagate\"\n",
    );

    let config = load_config_from(Some(&global), Some(&explicit)).expect("layers load");

    assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
    assert_eq!(
        config.event_bus.subscriber_failure,
        SubscriberFailurePolicy::Propagate
    );
}

#[test]
#[serial]
fn test_empty_file_layer_sets_nothing() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "empty.toml", "");

    let layer = load_toml_file(&path).expect("empty file parses");

    assert_eq!(layer, PartialStartlistConfig::default());
}

#[test]
#[serial]
fn test_malformed_toml_returns_parse_error() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(&dir, "bad.toml", "[logging\nfilter = ");

    let result = load_toml_file(&path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
#[serial]
fn test_unknown_policy_in_file_is_parse_error() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_config(
        &dir,
        "policy.toml",
        "[event_bus]\nsubscriber_failure = \"ignore\"\n",
    );

    assert!(matches!(
        load_config_from(None, Some(&path)),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
#[serial]
fn test_env_overrides_files() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let explicit = write_config(&dir, "explicit.toml", "[logging]\nfilter = \"debug\"\n");
    std::env::set_var(ENV_LOG_FILTER, "trace");
    std::env::set_var(ENV_SUBSCRIBER_FAILURE, "isolate");

    let config = load_config_from(None, Some(&explicit));
    clear_env();

    let config = config.expect("env overrides load");
    assert_eq!(config.logging.filter, "trace");
    assert_eq!(
        config.event_bus.subscriber_failure,
        SubscriberFailurePolicy::Isolate
    );
}

#[test]
#[serial]
fn test_invalid_env_policy_is_rejected() {
    clear_env();
    std::env::set_var(ENV_SUBSCRIBER_FAILURE, "sometimes");

    let result = load_config_from(None, None);
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnv {
            variable: ENV_SUBSCRIBER_FAILURE,
            ..
        })
    ));
}

#[test]
#[serial]
fn test_blank_filter_fails_validation() {
    clear_env();
    std::env::set_var(ENV_LOG_FILTER, "   ");

    let result = load_config_from(None, None);
    clear_env();

    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_global_path_ends_with_config_toml() {
    if let Some(path) = global_config_path() {
        assert!(path.ends_with("config.toml"));
    }
}
