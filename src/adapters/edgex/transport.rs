//! Transport trait definition
//!
//! The exporter talks to the historian through the [`Transport`] trait, so
//! the HTTP client can be swapped for a recording fake in tests. One owned
//! transport value replaces the HTTP/HTTPS handle pair of older north
//! plugins; the scheme is fixed when the transport is built.

use crate::config::SecretString;
use crate::domain::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resource path of the core-data event endpoint
pub const EVENT_PATH: &str = "/v1/event";

/// URL scheme used to reach the historian
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    #[default]
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// Scheme as it appears in a URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Build the event URL for `host:port`
    ///
    /// ```
    /// use edgex_north::adapters::edgex::Scheme;
    ///
    /// assert_eq!(
    ///     Scheme::Http.event_url("localhost:48080"),
    ///     "http://localhost:48080/v1/event"
    /// );
    /// ```
    pub fn event_url(&self, host_and_port: &str) -> String {
        format!("{}://{host_and_port}{EVENT_PATH}", self.as_str())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(format!("Invalid scheme '{other}'. Must be one of: http, https")),
        }
    }
}

/// Status code and body returned by the historian
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body, empty if it could not be read
    pub body: String,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The historian accepts an event with 200 or 202
    pub fn is_accepted(&self) -> bool {
        self.status == 200 || self.status == 202
    }
}

/// Request/response capability the exporter posts envelopes through
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and wait for the response
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no status code could be obtained
    /// (connection refused, TLS failure, timeout). A non-success status is
    /// not an error at this level.
    async fn send_request(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<TransportResponse, TransportError>;

    /// Attach basic-auth credentials (already base64 encoded) to every
    /// subsequent request
    fn set_basic_auth(&mut self, credentials: SecretString);

    /// `host:port` this transport is bound to
    fn host_and_port(&self) -> &str;

    /// Scheme selected at construction
    fn scheme(&self) -> Scheme;
}
