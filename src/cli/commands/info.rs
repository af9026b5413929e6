//! Info command implementation

use super::EXIT_OK;
use crate::plugin::plugin_info;
use clap::Args;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Print compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl InfoArgs {
    /// Execute the info command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let info = plugin_info();
        let rendered = if self.compact {
            serde_json::to_string(&info)?
        } else {
            serde_json::to_string_pretty(&info)?
        };
        println!("{rendered}");
        Ok(EXIT_OK)
    }
}
