//! Domain models and types for the EdgeX north exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Telemetry readings** ([`Reading`], [`Datapoint`], [`DatapointValue`])
//! - **Timestamp conversion** ([`OriginTimestamp`])
//! - **Error types** ([`EdgeXError`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use edgex_north::domain::Reading;
//!
//! let reading = Reading::new("boiler", 1, Utc::now())
//!     .with_datapoint("temperature", 88.5)
//!     .with_datapoint("state", "heating");
//! assert_eq!(reading.datapoints.len(), 2);
//! ```

pub mod errors;
pub mod reading;
pub mod result;

pub use errors::{EdgeXError, TransportError};
pub use reading::{Datapoint, DatapointValue, OriginTimestamp, Reading};
pub use result::Result;
