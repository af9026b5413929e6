//! Host plugin lifecycle
//!
//! The host drives the exporter through three calls:
//!
//! - [`init`] builds a connected [`PluginHandle`] from configuration
//! - [`send`] forwards one batch and returns the delivered count
//! - [`shutdown`] releases the handle
//!
//! ```rust,no_run
//! use edgex_north::config::NorthConfig;
//! use edgex_north::plugin;
//!
//! # async fn example() -> edgex_north::domain::Result<()> {
//! let handle = plugin::init(&NorthConfig::default())?;
//! let sent = plugin::send(&handle, &[]).await;
//! plugin::shutdown(handle);
//! # Ok(())
//! # }
//! ```

pub mod info;

pub use info::{default_config, plugin_info, PluginInformation, PluginType, PLUGIN_NAME};

use crate::config::{NorthConfig, Source};
use crate::core::export::{DeliverySummary, Exporter, ExporterOptions};
use crate::domain::{EdgeXError, Reading, Result};
use secrecy::ExposeSecret;

/// Live plugin instance owned by the host
pub struct PluginHandle {
    exporter: Exporter,
    source: Source,
}

impl PluginHandle {
    /// Stream this instance was configured to consume
    pub fn source(&self) -> Source {
        self.source
    }

    /// The underlying exporter
    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }
}

/// Initialise the plugin with configuration
///
/// Validates the configuration, connects the exporter and attaches
/// credentials when a username or password is configured.
///
/// # Errors
///
/// Returns [`EdgeXError::Configuration`] for invalid host/port or other bad
/// settings. Startup must not proceed on error.
pub fn init(config: &NorthConfig) -> Result<PluginHandle> {
    config
        .validate()
        .map_err(|e| EdgeXError::Configuration(format!("Invalid plugin configuration: {e}")))?;

    let edgex = &config.edgex;
    let mut exporter = Exporter::new(ExporterOptions::from_config(edgex));
    exporter.connect(&edgex.host, edgex.port)?;

    if edgex.has_credentials() {
        exporter.authenticate(&edgex.username, edgex.password.expose_secret().as_str())?;
    }

    tracing::info!(
        host = %edgex.host,
        port = edgex.port,
        scheme = %edgex.scheme,
        source = %edgex.source,
        "EdgeX plugin configured"
    );

    Ok(PluginHandle {
        exporter,
        source: edgex.source,
    })
}

/// Send a batch to the historian
pub async fn send(handle: &PluginHandle, readings: &[Reading]) -> u32 {
    handle.exporter.send(readings).await
}

/// Send a batch and keep the per-asset summary
pub async fn send_with_summary(handle: &PluginHandle, readings: &[Reading]) -> DeliverySummary {
    handle.exporter.send_batch(readings).await
}

/// Shut the plugin down, releasing the transport
pub fn shutdown(handle: PluginHandle) {
    tracing::info!(
        url = handle.exporter.url().unwrap_or("<unconnected>"),
        "EdgeX plugin shutting down"
    );
    drop(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, EdgeXConfig};

    #[test]
    fn test_init_with_defaults() {
        let handle = init(&NorthConfig::default()).unwrap();
        assert_eq!(handle.source(), Source::Readings);
        assert_eq!(
            handle.exporter().url(),
            Some("http://localhost:48080/v1/event")
        );
        shutdown(handle);
    }

    #[test]
    fn test_init_with_credentials_and_statistics_source() {
        let config = NorthConfig {
            edgex: EdgeXConfig {
                host: "core-data".to_string(),
                port: 59880,
                username: "north".to_string(),
                password: secret_string("pw".to_string()),
                source: Source::Statistics,
                ..Default::default()
            },
            ..Default::default()
        };

        let handle = init(&config).unwrap();
        assert_eq!(handle.source(), Source::Statistics);
        assert_eq!(
            handle.exporter().url(),
            Some("http://core-data:59880/v1/event")
        );
    }

    #[test]
    fn test_init_rejects_invalid_configuration() {
        let config = NorthConfig {
            edgex: EdgeXConfig {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = init(&config);
        assert!(matches!(result, Err(EdgeXError::Configuration(_))));
    }
}
