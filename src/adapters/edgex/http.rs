//! reqwest-backed transport
//!
//! [`HttpTransport`] is the production [`Transport`]. It is bound to one
//! `host:port` and one [`Scheme`] for its whole life; HTTPS uses rustls.

use super::auth::authorization_header;
use super::transport::{Scheme, Transport, TransportResponse};
use crate::config::SecretString;
use crate::domain::{EdgeXError, Result, TransportError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method};
use std::error::Error as StdError;
use std::time::Duration;

/// Connect timeout applied regardless of the request timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP(S) transport to the historian
pub struct HttpTransport {
    /// Scheme fixed at construction
    scheme: Scheme,

    /// `host:port` the transport is bound to
    host_and_port: String,

    /// HTTP client for making requests
    client: Client,

    /// Encoded basic-auth credentials, if any
    credentials: Option<SecretString>,
}

impl HttpTransport {
    /// Build a transport for `host:port`
    ///
    /// # Arguments
    ///
    /// * `scheme` - HTTP or HTTPS
    /// * `host_and_port` - Target authority, e.g. `localhost:48080`
    /// * `timeout` - Whole-request timeout
    /// * `tls_verify` - Verify server certificates (HTTPS only)
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(
        scheme: Scheme,
        host_and_port: impl Into<String>,
        timeout: Duration,
        tls_verify: bool,
    ) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));

        if scheme == Scheme::Https {
            client_builder = client_builder.use_rustls_tls();
            if !tls_verify {
                tracing::warn!("TLS certificate verification is disabled for the historian");
                client_builder = client_builder.danger_accept_invalid_certs(true);
            }
        }

        let client = client_builder.build().map_err(|e| {
            EdgeXError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            scheme,
            host_and_port: host_and_port.into(),
            client,
            credentials: None,
        })
    }

    /// Whether basic-auth credentials are attached
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_request(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| TransportError::Request(format!("invalid method '{method}': {e}")))?;

        let mut request = self.client.request(method, url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(ref credentials) = self.credentials {
            request = request.header("Authorization", authorization_header(credentials));
        }

        let response = request.body(body).send().await.map_err(classify_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        tracing::trace!(url = %url, status = status, "Historian responded");

        Ok(TransportResponse { status, body })
    }

    fn set_basic_auth(&mut self, credentials: SecretString) {
        self.credentials = Some(credentials);
    }

    fn host_and_port(&self) -> &str {
        &self.host_and_port
    }

    fn scheme(&self) -> Scheme {
        self.scheme
    }
}

/// Map a reqwest failure onto the transport taxonomy
fn classify_error(err: reqwest::Error) -> TransportError {
    let detail = error_chain(&err);

    if err.is_timeout() {
        TransportError::Timeout(detail)
    } else if looks_like_tls(&detail) {
        TransportError::Tls(detail)
    } else if err.is_connect() {
        TransportError::ConnectionFailed(detail)
    } else {
        TransportError::Request(detail)
    }
}

/// Flatten an error and its sources into one line
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn looks_like_tls(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    lower.contains("certificate") || lower.contains("tls") || lower.contains("handshake")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::edgex::auth::basic_auth_token;

    #[test]
    fn test_http_transport_creation() {
        let transport =
            HttpTransport::new(Scheme::Http, "localhost:48080", Duration::from_secs(5), true)
                .unwrap();
        assert_eq!(transport.scheme(), Scheme::Http);
        assert_eq!(transport.host_and_port(), "localhost:48080");
        assert!(!transport.has_credentials());
    }

    #[test]
    fn test_https_transport_creation_without_verification() {
        let transport =
            HttpTransport::new(Scheme::Https, "historian:443", Duration::from_secs(5), false)
                .unwrap();
        assert_eq!(transport.scheme(), Scheme::Https);
    }

    #[test]
    fn test_set_basic_auth() {
        let mut transport =
            HttpTransport::new(Scheme::Http, "localhost:48080", Duration::from_secs(5), true)
                .unwrap();
        transport.set_basic_auth(basic_auth_token("user", "pass"));
        assert!(transport.has_credentials());
    }

    #[test]
    fn test_looks_like_tls() {
        assert!(looks_like_tls("invalid peer certificate: UnknownIssuer"));
        assert!(looks_like_tls("TLS handshake failed"));
        assert!(!looks_like_tls("Connection refused (os error 111)"));
    }

    #[tokio::test]
    async fn test_invalid_method_is_request_error() {
        let transport =
            HttpTransport::new(Scheme::Http, "localhost:48080", Duration::from_secs(5), true)
                .unwrap();
        let result = transport
            .send_request("BAD METHOD", "http://localhost:48080/v1/event", &[], String::new())
            .await;
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
