//! Batch export to the historian
//!
//! - [`envelope`] - grouping readings by asset and building wire envelopes
//! - [`exporter`] - the [`Exporter`] that posts envelopes and counts deliveries
//! - [`summary`] - per-batch delivery accounting

pub mod envelope;
pub mod exporter;
pub mod summary;

pub use envelope::{build_envelope, build_envelopes, group_by_asset, AssetGroup, Envelope, ReadingEntry};
pub use exporter::{Exporter, ExporterOptions};
pub use summary::{DeliveryFailure, DeliveryFailureKind, DeliverySummary};
