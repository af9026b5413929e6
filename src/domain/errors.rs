//! Domain error types
//!
//! This module defines the error hierarchy for the EdgeX north exporter.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the crate. Delivery
/// failures inside a `send` pass are logged and swallowed; everything else
/// surfaces through this type.
#[derive(Debug, Error)]
pub enum EdgeXError {
    /// Configuration-related errors (fatal at plugin startup)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failures (connection refused, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The historian answered with a status other than 200 or 202
    #[error("Historian rejected request with status {status}: {body}")]
    Protocol { status: u16, body: String },

    /// Exporter connection lifecycle errors
    #[error("Connection error: {0}")]
    Connection(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Transport-specific errors
///
/// Errors raised by the HTTP collaborator before any status code is
/// available. These errors don't expose the HTTP client's own types.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to reach the historian
    #[error("Failed to connect to historian: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// TLS handshake or certificate failure
    #[error("TLS failure: {0}")]
    Tls(String),

    /// Request could not be built or sent
    #[error("Request failed: {0}")]
    Request(String),
}

impl EdgeXError {
    /// Whether this error came from the wire rather than from local setup
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, EdgeXError::Transport(_) | EdgeXError::Protocol { .. })
    }
}

impl From<std::io::Error> for EdgeXError {
    fn from(err: std::io::Error) -> Self {
        EdgeXError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EdgeXError {
    fn from(err: serde_json::Error) -> Self {
        EdgeXError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for EdgeXError {
    fn from(err: toml::de::Error) -> Self {
        EdgeXError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edgex_error_display() {
        let err = EdgeXError::Configuration("port must be non-zero".to_string());
        assert_eq!(err.to_string(), "Configuration error: port must be non-zero");
    }

    #[test]
    fn test_protocol_error_display() {
        let err = EdgeXError::Protocol {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Historian rejected request with status 500: boom"
        );
    }

    #[test]
    fn test_transport_error_conversion() {
        let transport_err = TransportError::Timeout("30s".to_string());
        let err: EdgeXError = transport_err.into();
        assert!(matches!(err, EdgeXError::Transport(_)));
        assert!(err.is_delivery_failure());
    }

    #[test]
    fn test_configuration_is_not_delivery_failure() {
        let err = EdgeXError::Configuration("bad".to_string());
        assert!(!err.is_delivery_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: EdgeXError = io_err.into();
        assert!(matches!(err, EdgeXError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: EdgeXError = json_err.into();
        assert!(matches!(err, EdgeXError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: EdgeXError = toml_err.into();
        assert!(matches!(err, EdgeXError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
