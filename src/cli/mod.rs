//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// EdgeX north exporter
#[derive(Parser, Debug)]
#[command(name = "edgex-north")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "edgex.toml", env = "EDGEX_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "EDGEX_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a batch of readings from a JSON file to the historian
    Send(commands::send::SendArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Print the plugin information block
    Info(commands::info::InfoArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_send() {
        let cli = Cli::parse_from(["edgex-north", "send", "--input", "batch.json"]);
        assert_eq!(cli.config, "edgex.toml");
        match cli.command {
            Commands::Send(args) => {
                assert_eq!(args.input, "batch.json");
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_log_level() {
        let cli = Cli::parse_from([
            "edgex-north",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
            "validate-config",
        ]);
        assert_eq!(cli.config, "custom.toml");
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["edgex-north", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }

    #[test]
    fn test_cli_parse_info() {
        let cli = Cli::parse_from(["edgex-north", "info"]);
        assert!(matches!(cli.command, Commands::Info(_)));
    }

    #[test]
    fn test_cli_send_requires_input() {
        assert!(Cli::try_parse_from(["edgex-north", "send"]).is_err());
    }
}
