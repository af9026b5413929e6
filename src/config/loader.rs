//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{NorthConfig, Source};
use super::secret::secret_string;
use crate::domain::errors::EdgeXError;
use crate::domain::result::Result;
use crate::domain::OriginTimestamp;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`NorthConfig`]
/// 4. Applies environment variable overrides (EDGEX_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read, a referenced
/// variable is unset, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use edgex_north::config::loader::load_config;
///
/// let config = load_config("edgex.toml").expect("Failed to load config");
/// println!("{}", config.edgex.host_and_port());
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<NorthConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EdgeXError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        EdgeXError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Same as [`load_config`] for an in-memory document
pub fn load_config_from_str(contents: &str) -> Result<NorthConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: NorthConfig = toml::from_str(&contents)
        .map_err(|e| EdgeXError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        EdgeXError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| EdgeXError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(EdgeXError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the EDGEX_* prefix
///
/// Variables follow the pattern `EDGEX_<SECTION>_<KEY>`, e.g.
/// `EDGEX_EDGEX_HOST` or `EDGEX_APPLICATION_LOG_LEVEL`. Unparseable numeric
/// or enum values are configuration errors.
fn apply_env_overrides(config: &mut NorthConfig) -> Result<()> {
    if let Ok(val) = std::env::var("EDGEX_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("EDGEX_EDGEX_HOST") {
        config.edgex.host = val;
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_PORT") {
        config.edgex.port = parse_override("EDGEX_EDGEX_PORT", &val)?;
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_SCHEME") {
        config.edgex.scheme = crate::adapters::edgex::Scheme::from_str(&val)
            .map_err(EdgeXError::Configuration)?;
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_USERNAME") {
        config.edgex.username = val;
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_PASSWORD") {
        config.edgex.password = secret_string(val);
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_SOURCE") {
        config.edgex.source = match val.to_lowercase().as_str() {
            "readings" => Source::Readings,
            "statistics" => Source::Statistics,
            other => {
                return Err(EdgeXError::Configuration(format!(
                    "Invalid EDGEX_EDGEX_SOURCE '{other}'. Must be one of: readings, statistics"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_TIMEOUT_SECONDS") {
        config.edgex.timeout_seconds = parse_override("EDGEX_EDGEX_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_TLS_VERIFY") {
        config.edgex.tls_verify = parse_override("EDGEX_EDGEX_TLS_VERIFY", &val)?;
    }
    if let Ok(val) = std::env::var("EDGEX_EDGEX_ORIGIN_TIMESTAMP") {
        config.edgex.origin_timestamp = match val.to_lowercase().as_str() {
            "legacy" => OriginTimestamp::Legacy,
            "epoch_millis" => OriginTimestamp::EpochMillis,
            other => {
                return Err(EdgeXError::Configuration(format!(
                    "Invalid EDGEX_EDGEX_ORIGIN_TIMESTAMP '{other}'. Must be one of: legacy, epoch_millis"
                )))
            }
        };
    }

    if let Ok(val) = std::env::var("EDGEX_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("EDGEX_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("EDGEX_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| EdgeXError::Configuration(format!("Invalid value for {name} '{value}': {e}")))
}
