//! The exporter: batch in, delivered count out
//!
//! [`Exporter::send`] groups a batch by asset, posts one envelope per asset
//! through the owned [`Transport`], and adds up the successes. A failed
//! asset is logged and skipped; it never stops the rest of the batch.

use crate::adapters::edgex::{basic_auth_token, HttpTransport, Scheme, Transport};
use crate::config::EdgeXConfig;
use crate::core::export::envelope::{build_envelope, group_by_asset};
use crate::core::export::summary::{DeliveryFailureKind, DeliverySummary};
use crate::domain::{EdgeXError, OriginTimestamp, Reading, Result};
use std::time::{Duration, Instant};

/// Settings fixed when the exporter is created
#[derive(Debug, Clone, PartialEq)]
pub struct ExporterOptions {
    /// http or https
    pub scheme: Scheme,
    /// Whole-request timeout
    pub timeout: Duration,
    /// Verify server certificates (https only)
    pub tls_verify: bool,
    /// `origin` conversion for reading entries
    pub origin_timestamp: OriginTimestamp,
}

impl ExporterOptions {
    /// Derive options from the `[edgex]` configuration section
    pub fn from_config(config: &EdgeXConfig) -> Self {
        Self {
            scheme: config.scheme,
            timeout: Duration::from_secs(config.timeout_seconds),
            tls_verify: config.tls_verify,
            origin_timestamp: config.origin_timestamp,
        }
    }
}

impl Default for ExporterOptions {
    fn default() -> Self {
        Self::from_config(&EdgeXConfig::default())
    }
}

/// Forwards reading batches to the historian
///
/// The exporter owns its transport. `connect` and `authenticate` need
/// `&mut self`; `send` takes `&self` and posts sequentially, so callers on
/// multi-threaded hosts must not share one exporter across concurrent sends.
pub struct Exporter {
    options: ExporterOptions,
    transport: Option<Box<dyn Transport>>,
    url: Option<String>,
    headers: Vec<(String, String)>,
}

impl Exporter {
    /// Create an unconnected exporter
    pub fn new(options: ExporterOptions) -> Self {
        Self {
            options,
            transport: None,
            url: None,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Create an exporter that is already connected through `transport`
    ///
    /// The target URL is derived from the transport's scheme and authority.
    pub fn with_transport(options: ExporterOptions, transport: Box<dyn Transport>) -> Self {
        let mut exporter = Self::new(options);
        exporter.url = Some(transport.scheme().event_url(transport.host_and_port()));
        exporter.transport = Some(transport);
        exporter
    }

    /// Bind the exporter to `host:port`
    ///
    /// Builds the transport for the configured scheme and computes the event
    /// URL. May be called once.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeXError::Connection`] if the exporter is already
    /// connected, and [`EdgeXError::Configuration`] for an empty host, port 0
    /// or an HTTP client that cannot be built.
    pub fn connect(&mut self, host: &str, port: u16) -> Result<()> {
        if let Some(ref url) = self.url {
            return Err(EdgeXError::Connection(format!(
                "Exporter is already connected to {url}"
            )));
        }

        if host.trim().is_empty() {
            return Err(EdgeXError::Configuration("host cannot be empty".to_string()));
        }
        if port == 0 {
            return Err(EdgeXError::Configuration("port must be non-zero".to_string()));
        }

        let host_and_port = format!("{host}:{port}");
        let transport = HttpTransport::new(
            self.options.scheme,
            host_and_port.clone(),
            self.options.timeout,
            self.options.tls_verify,
        )?;

        let url = self.options.scheme.event_url(&host_and_port);
        tracing::info!(url = %url, "Exporter connected");

        self.transport = Some(Box::new(transport));
        self.url = Some(url);
        Ok(())
    }

    /// Configure basic authentication on the transport
    ///
    /// An empty user and password leaves requests unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeXError::Connection`] if called before [`Exporter::connect`]
    /// with non-empty credentials.
    pub fn authenticate(&mut self, user: &str, password: &str) -> Result<()> {
        if user.is_empty() && password.is_empty() {
            tracing::debug!("No credentials supplied, requests will be unauthenticated");
            return Ok(());
        }

        let transport = self.transport.as_mut().ok_or_else(|| {
            EdgeXError::Connection("authenticate called before connect".to_string())
        })?;

        transport.set_basic_auth(basic_auth_token(user, password));
        tracing::info!(user = %user, "Using Basic Authentication for EdgeX");
        Ok(())
    }

    /// Event URL, once connected
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether a transport is bound
    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Options the exporter was created with
    pub fn options(&self) -> &ExporterOptions {
        &self.options
    }

    /// Send a batch and return the delivered count
    ///
    /// See [`DeliverySummary::record_delivered`] for how the count is formed.
    pub async fn send(&self, readings: &[Reading]) -> u32 {
        self.send_batch(readings).await.sent
    }

    /// Send a batch and return the full per-asset summary
    pub async fn send_batch(&self, readings: &[Reading]) -> DeliverySummary {
        let start = Instant::now();
        let mut summary = DeliverySummary::new(readings.len());

        let (Some(transport), Some(url)) = (self.transport.as_deref(), self.url.as_deref()) else {
            tracing::error!(
                batch_size = readings.len(),
                "Exporter is not connected, dropping batch"
            );
            return summary;
        };

        if readings.is_empty() {
            tracing::debug!("Empty batch, nothing to send");
            return summary;
        }

        let groups = group_by_asset(readings);
        summary.assets_total = groups.len();

        for group in &groups {
            let Some(envelope) = build_envelope(group, self.options.origin_timestamp) else {
                tracing::debug!(asset = %group.asset, "Asset has no datapoints, skipping");
                summary.record_skipped();
                continue;
            };

            let payload = match envelope.to_payload() {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!(asset = %group.asset, error = %e, "Failed to serialize envelope");
                    summary.record_failure(group.asset, DeliveryFailureKind::Serialization, e.to_string());
                    continue;
                }
            };

            tracing::debug!(
                asset = %group.asset,
                readings = group.readings.len(),
                entries = envelope.entry_count(),
                "Posting envelope"
            );

            match self.post(transport, url, payload).await {
                Ok(()) => summary.record_delivered(),
                Err(e) => {
                    let kind = match e {
                        EdgeXError::Protocol { .. } => DeliveryFailureKind::Protocol,
                        _ => DeliveryFailureKind::Transport,
                    };
                    summary.record_failure(group.asset, kind, e.to_string());
                }
            }
        }

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        summary
    }

    /// POST one payload; 200 and 202 are success
    async fn post(&self, transport: &dyn Transport, url: &str, payload: String) -> Result<()> {
        match transport
            .send_request("POST", url, &self.headers, payload.clone())
            .await
        {
            Ok(response) if response.is_accepted() => Ok(()),
            Ok(response) => {
                tracing::error!(
                    url = %url,
                    status = response.status,
                    response = %response.body,
                    payload = %payload,
                    "Failed to send to EdgeX"
                );
                Err(EdgeXError::Protocol {
                    status: response.status,
                    body: response.body,
                })
            }
            Err(e) => {
                tracing::error!(
                    url = %url,
                    error = %e,
                    payload = %payload,
                    "Failed to send to EdgeX"
                );
                Err(e.into())
            }
        }
    }
}
