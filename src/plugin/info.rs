//! Plugin information block
//!
//! Hosts discover the plugin through [`plugin_info`]: name, version, kind
//! and the default configuration category shown to operators.

use crate::config::DEFAULT_PORT;
use serde::Serialize;
use serde_json::{json, Value};

/// Name the plugin registers under
pub const PLUGIN_NAME: &str = "EdgeX";

/// Version of the host plugin interface implemented
pub const INTERFACE_VERSION: &str = "1.0.0";

/// Plugin kind as understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginType {
    /// Sends data out of the host
    North,
}

/// Static description of the plugin
#[derive(Debug, Clone, Serialize)]
pub struct PluginInformation {
    pub name: &'static str,
    pub version: &'static str,
    pub flags: u32,
    #[serde(rename = "type")]
    pub kind: PluginType,
    pub interface_version: &'static str,
    pub default_config: Value,
}

/// Describe the plugin to the host
pub fn plugin_info() -> PluginInformation {
    PluginInformation {
        name: PLUGIN_NAME,
        version: env!("CARGO_PKG_VERSION"),
        flags: 0,
        kind: PluginType::North,
        interface_version: INTERFACE_VERSION,
        default_config: default_config(),
    }
}

/// Default configuration category, in the host's item format
pub fn default_config() -> Value {
    json!({
        "plugin": {
            "description": "EdgeX North",
            "type": "string",
            "default": PLUGIN_NAME,
            "readonly": "true"
        },
        "host": {
            "description": "The hostname of the EdgeX service",
            "type": "string",
            "default": "localhost",
            "order": "1",
            "displayName": "Hostname"
        },
        "port": {
            "description": "The port of the EdgeX core-data service",
            "type": "integer",
            "default": DEFAULT_PORT.to_string(),
            "order": "2",
            "displayName": "Port"
        },
        "username": {
            "description": "The username within EdgeX",
            "type": "string",
            "default": "",
            "order": "3",
            "displayName": "Username"
        },
        "password": {
            "description": "The password for this user",
            "type": "password",
            "default": "",
            "order": "4",
            "displayName": "Password"
        },
        "source": {
            "description": "Defines the source of the data to be sent on the stream",
            "type": "enumeration",
            "default": "readings",
            "options": ["readings", "statistics"],
            "order": "5",
            "displayName": "Source"
        }
    })
}
