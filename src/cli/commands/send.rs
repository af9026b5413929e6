//! Send command implementation
//!
//! Reads a JSON array of readings and forwards it as one batch.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_PARTIAL};
use crate::config::load_config;
use crate::core::export::build_envelopes;
use crate::domain::Reading;
use crate::plugin;
use clap::Args;
use std::fs;

/// Arguments for the send command
#[derive(Args, Debug)]
pub struct SendArgs {
    /// JSON file holding an array of readings
    #[arg(short, long)]
    pub input: String,

    /// Override the historian host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the historian port
    #[arg(long)]
    pub port: Option<u16>,

    /// Print the envelopes instead of posting them
    #[arg(long)]
    pub dry_run: bool,
}

impl SendArgs {
    /// Execute the send command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if let Some(ref host) = self.host {
            tracing::info!(host = %host, "Overriding host from CLI");
            config.edgex.host = host.clone();
        }
        if let Some(port) = self.port {
            tracing::info!(port = port, "Overriding port from CLI");
            config.edgex.port = port;
        }

        let readings = match read_batch(&self.input) {
            Ok(readings) => readings,
            Err(e) => {
                tracing::error!(input = %self.input, error = %e, "Failed to read batch");
                eprintln!("❌ Failed to read {}: {e}", self.input);
                return Ok(EXIT_FATAL);
            }
        };

        if self.dry_run {
            let envelopes = build_envelopes(&readings, config.edgex.origin_timestamp);
            println!("🔍 Dry run: {} envelope(s) would be posted", envelopes.len());
            for envelope in &envelopes {
                println!("{}", serde_json::to_string_pretty(envelope)?);
            }
            return Ok(EXIT_OK);
        }

        let handle = match plugin::init(&config) {
            Ok(handle) => handle,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let summary = plugin::send_with_summary(&handle, &readings).await;
        plugin::shutdown(handle);

        println!("📤 Batch of {} reading(s)", summary.batch_size);
        println!("   Assets delivered: {}/{}", summary.assets_delivered, summary.assets_total);
        if summary.assets_skipped > 0 {
            println!("   Assets skipped (no datapoints): {}", summary.assets_skipped);
        }
        println!("   Sent count: {}", summary.sent);
        for failure in &summary.failures {
            println!("   ❌ {}: {}", failure.asset, failure.message);
        }

        Ok(if summary.is_successful() {
            EXIT_OK
        } else {
            EXIT_PARTIAL
        })
    }
}

/// Parse a batch file
fn read_batch(path: &str) -> anyhow::Result<Vec<Reading>> {
    let contents = fs::read_to_string(path)?;
    let readings: Vec<Reading> = serde_json::from_str(&contents)?;
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_batch() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"asset_code": "A", "id": 1, "user_ts": "2024-01-01T00:00:00Z",
                 "readings": [{"name": "temp", "value": 21.5}]},
                {"asset_code": "B", "id": 2, "user_ts": "2024-01-01T00:00:01Z",
                 "readings": [{"name": "hum", "value": 55}]}
            ]"#,
        )
        .unwrap();

        let readings = read_batch(file.path().to_str().unwrap()).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].asset_name(), "B");
    }

    #[test]
    fn test_read_batch_rejects_non_array() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        assert!(read_batch(file.path().to_str().unwrap()).is_err());
    }
}
