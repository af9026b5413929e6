//! Delivery summary and reporting
//!
//! Tracks what happened to each asset group during one `send` pass.

use std::time::Duration;

/// Why an asset group was not delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryFailureKind {
    /// No status code was obtained (connection, TLS, timeout)
    Transport,
    /// The historian answered with a status other than 200/202
    Protocol,
    /// The envelope could not be serialized
    Serialization,
}

/// Failed delivery of one asset group
#[derive(Debug, Clone)]
pub struct DeliveryFailure {
    /// Asset whose envelope was dropped
    pub asset: String,

    /// Failure category
    pub kind: DeliveryFailureKind,

    /// Human readable reason
    pub message: String,
}

/// Summary of one `send` pass
#[derive(Debug, Clone, Default)]
pub struct DeliverySummary {
    /// Number of readings in the batch
    pub batch_size: usize,

    /// Count reported back to the host (see [`DeliverySummary::record_delivered`])
    pub sent: u32,

    /// Distinct assets found in the batch
    pub assets_total: usize,

    /// Assets whose envelope was accepted
    pub assets_delivered: usize,

    /// Assets with no datapoints, for which nothing was posted
    pub assets_skipped: usize,

    /// Failed assets, in posting order
    pub failures: Vec<DeliveryFailure>,

    /// Wall time spent in the pass
    pub duration: Duration,
}

impl DeliverySummary {
    /// Create an empty summary for a batch
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size,
            ..Default::default()
        }
    }

    /// Record an accepted envelope.
    ///
    /// Every accepted asset adds the size of the whole batch, not the
    /// number of its own readings. Hosts rely on this count, so a batch with
    /// two assets that both succeed reports twice its length.
    pub fn record_delivered(&mut self) {
        self.assets_delivered += 1;
        let batch = u32::try_from(self.batch_size).unwrap_or(u32::MAX);
        self.sent = self.sent.saturating_add(batch);
    }

    /// Record an asset that produced no envelope
    pub fn record_skipped(&mut self) {
        self.assets_skipped += 1;
    }

    /// Record a failed asset
    pub fn record_failure(
        &mut self,
        asset: impl Into<String>,
        kind: DeliveryFailureKind,
        message: impl Into<String>,
    ) {
        self.failures.push(DeliveryFailure {
            asset: asset.into(),
            kind,
            message: message.into(),
        });
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Number of POSTs attempted
    pub fn requests_attempted(&self) -> usize {
        self.assets_delivered
            + self
                .failures
                .iter()
                .filter(|f| f.kind != DeliveryFailureKind::Serialization)
                .count()
    }

    /// True when no asset failed
    pub fn is_successful(&self) -> bool {
        self.failures.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            batch_size = self.batch_size,
            sent = self.sent,
            assets_total = self.assets_total,
            assets_delivered = self.assets_delivered,
            assets_skipped = self.assets_skipped,
            assets_failed = self.failures.len(),
            duration_ms = self.duration.as_millis() as u64,
            "Batch delivery completed"
        );

        for failure in &self.failures {
            tracing::warn!(
                asset = %failure.asset,
                kind = ?failure.kind,
                message = %failure.message,
                "Asset not delivered"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_delivered_adds_batch_size() {
        let mut summary = DeliverySummary::new(3);
        summary.record_delivered();
        summary.record_delivered();

        assert_eq!(summary.sent, 6);
        assert_eq!(summary.assets_delivered, 2);
        assert!(summary.is_successful());
    }

    #[test]
    fn test_failures_do_not_count() {
        let mut summary = DeliverySummary::new(2);
        summary.record_delivered();
        summary.record_failure("B", DeliveryFailureKind::Protocol, "status 500");

        assert_eq!(summary.sent, 2);
        assert!(!summary.is_successful());
        assert_eq!(summary.requests_attempted(), 2);
    }

    #[test]
    fn test_serialization_failure_is_not_a_request() {
        let mut summary = DeliverySummary::new(1);
        summary.record_failure("A", DeliveryFailureKind::Serialization, "bad");
        assert_eq!(summary.requests_attempted(), 0);
    }

    #[test]
    fn test_sent_saturates() {
        let mut summary = DeliverySummary::new(usize::MAX);
        summary.record_delivered();
        summary.record_delivered();
        assert_eq!(summary.sent, u32::MAX);
    }

    #[test]
    fn test_empty_summary() {
        let summary = DeliverySummary::new(0).with_duration(Duration::from_millis(3));
        assert_eq!(summary.sent, 0);
        assert_eq!(summary.requests_attempted(), 0);
        assert_eq!(summary.duration, Duration::from_millis(3));
    }
}
