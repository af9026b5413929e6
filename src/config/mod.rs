//! Configuration management for the EdgeX north exporter.
//!
//! # Overview
//!
//! Configuration is read from a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `EDGEX_<SECTION>_<KEY>` environment overrides
//! - Defaults for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`EdgeXConfig`] - Historian host, port, scheme, credentials and source
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [edgex]
//! host = "localhost"
//! port = 48080
//! scheme = "http"
//! username = "north"
//! password = "${EDGEX_PASSWORD}"
//! source = "readings"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use edgex_north::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("edgex.toml")?;
//! println!("Historian: {}", config.edgex.host_and_port());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_from_str};
pub use schema::{ApplicationConfig, EdgeXConfig, LoggingConfig, NorthConfig, Source, DEFAULT_PORT};
pub use secret::{secret_string, SecretString, SecretValue};
