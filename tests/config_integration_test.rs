//! Integration tests for configuration loading and validation
//!
//! Tests touching EDGEX_* variables hold ENV_MUTEX.

use edgex_north::adapters::edgex::Scheme;
use edgex_north::config::{load_config, Source};
use edgex_north::domain::{EdgeXError, OriginTimestamp};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "EDGEX_APPLICATION_LOG_LEVEL",
        "EDGEX_EDGEX_HOST",
        "EDGEX_EDGEX_PORT",
        "EDGEX_EDGEX_SCHEME",
        "EDGEX_EDGEX_PASSWORD",
        "EDGEX_EDGEX_SOURCE",
        "EDGEX_EDGEX_ORIGIN_TIMESTAMP",
        "TEST_EDGEX_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[edgex]
host = "core-data.local"
port = 59880
scheme = "https"
username = "north"
password = "pw"
source = "statistics"
timeout_seconds = 10
tls_verify = false
origin_timestamp = "epoch_millis"

[logging]
local_enabled = true
local_path = "/tmp/edgex-north"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.edgex.host_and_port(), "core-data.local:59880");
    assert_eq!(config.edgex.scheme, Scheme::Https);
    assert_eq!(config.edgex.source, Source::Statistics);
    assert_eq!(config.edgex.timeout_seconds, 10);
    assert!(!config.edgex.tls_verify);
    assert_eq!(config.edgex.origin_timestamp, OriginTimestamp::EpochMillis);
    assert_eq!(config.edgex.password.expose_secret().as_str(), "pw");
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[edgex]\nhost = \"localhost\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.edgex.port, 48080);
    assert_eq!(config.edgex.scheme, Scheme::Http);
    assert_eq!(config.edgex.source, Source::Readings);
    assert_eq!(config.edgex.origin_timestamp, OriginTimestamp::Legacy);
    assert!(!config.edgex.has_credentials());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_EDGEX_PASSWORD", "from-env");

    let file = write_config(
        "[edgex]\nhost = \"localhost\"\nusername = \"north\"\npassword = \"${TEST_EDGEX_PASSWORD}\"\n",
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.edgex.password.expose_secret().as_str(), "from-env");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[edgex]\npassword = \"${TEST_EDGEX_PASSWORD}\"\n");
    let result = load_config(file.path());
    assert!(matches!(result, Err(EdgeXError::Configuration(ref m)) if m.contains("TEST_EDGEX_PASSWORD")));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("EDGEX_EDGEX_HOST", "override-host");
    std::env::set_var("EDGEX_EDGEX_PORT", "6000");
    std::env::set_var("EDGEX_EDGEX_SCHEME", "https");
    std::env::set_var("EDGEX_EDGEX_SOURCE", "statistics");
    std::env::set_var("EDGEX_APPLICATION_LOG_LEVEL", "warn");

    let file = write_config("[edgex]\nhost = \"localhost\"\nport = 48080\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.edgex.host, "override-host");
    assert_eq!(config.edgex.port, 6000);
    assert_eq!(config.edgex.scheme, Scheme::Https);
    assert_eq!(config.edgex.source, Source::Statistics);
    assert_eq!(config.application.log_level, "warn");

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("EDGEX_EDGEX_PORT", "not-a-port");

    let file = write_config("[edgex]\nhost = \"localhost\"\n");
    let result = load_config(file.path());
    assert!(matches!(result, Err(EdgeXError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_invalid_configs_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    for contents in [
        "[edgex]\nhost = \"\"\n",
        "[edgex]\nhost = \"http://core-data\"\n",
        "[edgex]\nport = 0\n",
        "[edgex]\npassword = \"orphan\"\n",
        "[edgex]\ntimeout_seconds = 0\n",
        "[application]\nlog_level = \"loud\"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
    ] {
        let file = write_config(contents);
        let result = load_config(file.path());
        assert!(
            matches!(result, Err(EdgeXError::Configuration(_))),
            "expected rejection for {contents:?}"
        );
    }
}

#[test]
fn test_missing_file() {
    let result = load_config("/nonexistent/edgex.toml");
    assert!(matches!(result, Err(EdgeXError::Configuration(ref m)) if m.contains("not found")));
}
