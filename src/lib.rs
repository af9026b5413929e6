//! # EdgeX North
//!
//! North-bound exporter that forwards telemetry batches to an EdgeX
//! core-data service.
//!
//! Each batch is grouped by asset. Every asset becomes one EdgeX event
//! envelope, posted as JSON to `<scheme>://host:port/v1/event`.
//!
//! ## Architecture
//!
//! - [`plugin`] - host lifecycle (`init`, `send`, `shutdown`, plugin info)
//! - [`core`] - grouping, envelope construction and delivery accounting
//! - [`adapters`] - HTTP transport to the EdgeX service
//! - [`domain`] - readings, datapoint values and errors
//! - [`config`] - TOML configuration with environment overrides
//! - [`logging`] - structured logging
//! - [`cli`] - command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgex_north::config::load_config;
//! use edgex_north::domain::Reading;
//! use edgex_north::plugin;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("edgex.toml")?;
//!     let handle = plugin::init(&config)?;
//!
//!     let readings = vec![Reading::new("pump-1", 1, chrono::Utc::now())
//!         .with_datapoint("pressure", 4.2)];
//!
//!     let sent = plugin::send(&handle, &readings).await;
//!     println!("sent {sent}");
//!
//!     plugin::shutdown(handle);
//!     Ok(())
//! }
//! ```
//!
//! ## Delivery count
//!
//! `send` adds the full batch length for every asset the service accepts
//! (status 200 or 202). Hosts depend on that count, so a batch of two
//! readings for two assets reports 4 when both are accepted.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod plugin;
