//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Human-readable console output
//! - Optional JSON file logging with rotation
//! - `RUST_LOG` overrides via `EnvFilter`
//!
//! # Example
//!
//! ```no_run
//! use edgex_north::config::LoggingConfig;
//! use edgex_north::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(asset = "boiler", "Exporter started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
