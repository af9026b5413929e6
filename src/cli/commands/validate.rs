//! Validate config command implementation
//!
//! Loads the configuration file and prints what the exporter would use.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after substitution and overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let edgex = &config.edgex;
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Endpoint: {}",
            edgex.scheme.event_url(&edgex.host_and_port())
        );
        println!("  Source: {}", edgex.source);
        println!(
            "  Authentication: {}",
            if edgex.has_credentials() {
                format!("basic ({})", edgex.username)
            } else {
                "none".to_string()
            }
        );
        println!("  Timeout: {}s", edgex.timeout_seconds);
        println!("  TLS Verify: {}", edgex.tls_verify);
        println!("  Origin Timestamp: {}", edgex.origin_timestamp);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(EXIT_OK)
    }
}
