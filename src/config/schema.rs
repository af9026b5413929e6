//! Configuration schema types
//!
//! This module defines the configuration structure for the EdgeX north
//! exporter. Every section has defaults, so an empty file is a valid
//! configuration pointing at `http://localhost:48080`.

use crate::adapters::edgex::Scheme;
use crate::config::{secret_string, SecretString};
use crate::domain::OriginTimestamp;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default port of the EdgeX core-data service
pub const DEFAULT_PORT: u16 = 48080;

/// Upstream stream that feeds the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Sensor readings
    #[default]
    Readings,
    /// Host statistics
    Statistics,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Readings => write!(f, "readings"),
            Source::Statistics => write!(f, "statistics"),
        }
    }
}

/// Main exporter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NorthConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Historian connection settings
    #[serde(default)]
    pub edgex: EdgeXConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NorthConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.edgex.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// EdgeX historian configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeXConfig {
    /// Hostname of the EdgeX service
    #[serde(default = "default_host")]
    pub host: String,

    /// Port of the EdgeX core-data service
    #[serde(default = "default_port")]
    pub port: u16,

    /// http or https, fixed for the life of the exporter
    #[serde(default)]
    pub scheme: Scheme,

    /// Username within EdgeX (empty = unauthenticated)
    #[serde(default)]
    pub username: String,

    /// Password for this user
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_password")]
    pub password: SecretString,

    /// Upstream stream feeding this exporter
    #[serde(default)]
    pub source: Source,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification (https only)
    ///
    /// Disabling verification exposes the exporter to man-in-the-middle
    /// attacks. Default: `true`.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// How reading timestamps are converted into the `origin` field
    #[serde(default)]
    pub origin_timestamp: OriginTimestamp,
}

impl EdgeXConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("edgex.host cannot be empty".to_string());
        }

        if self.host.contains("://") {
            return Err(format!(
                "edgex.host must be a bare hostname, got '{}'. Use edgex.scheme to select http or https",
                self.host
            ));
        }

        if self.host.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(format!("edgex.host contains invalid characters: '{}'", self.host));
        }

        if self.port == 0 {
            return Err("edgex.port must be between 1 and 65535".to_string());
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(format!(
                "edgex.timeout_seconds must be between 1 and 300, got {}",
                self.timeout_seconds
            ));
        }

        if self.username.is_empty() && !self.password.expose_secret().is_empty() {
            return Err("edgex.password is set but edgex.username is empty".to_string());
        }

        Ok(())
    }

    /// `host:port` authority of the historian
    pub fn host_and_port(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether credentials were supplied
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() || !self.password.expose_secret().is_empty()
    }
}

impl Default for EdgeXConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            scheme: Scheme::default(),
            username: String::new(),
            password: default_password(),
            source: Source::default(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
            origin_timestamp: OriginTimestamp::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_password() -> SecretString {
    secret_string(String::new())
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_local_path() -> String {
    "/var/log/edgex-north".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
