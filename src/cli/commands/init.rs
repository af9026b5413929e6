//! Init command implementation
//!
//! Writes a starter configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "edgex.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, default_config_toml()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set [edgex] host and port for your core-data service");
                println!("  2. Put EDGEX_PASSWORD in a .env file if the service needs auth");
                println!("  3. Validate configuration: edgex-north validate-config");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}

/// Starter configuration document
pub fn default_config_toml() -> &'static str {
    r#"# EdgeX north exporter configuration

[application]
log_level = "info"

[edgex]
host = "localhost"
port = 48080
# http or https
scheme = "http"
# Leave both empty to disable basic auth
username = ""
# password = "${EDGEX_PASSWORD}"
# readings or statistics
source = "readings"
timeout_seconds = 30
tls_verify = true
# legacy or epoch_millis
origin_timestamp = "legacy"

[logging]
local_enabled = false
local_path = "/var/log/edgex-north"
# daily, hourly or never
local_rotation = "daily"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_toml_is_valid() {
        let config = load_config_from_str(default_config_toml()).unwrap();
        assert_eq!(config.edgex.host, "localhost");
        assert_eq!(config.edgex.port, 48080);
        assert!(!config.edgex.has_credentials());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("edgex.toml");
        fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert!(fs::read_to_string(&output).unwrap().contains("[edgex]"));
    }
}
