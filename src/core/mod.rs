//! Core business logic.
//!
//! # Export Workflow
//!
//! 1. **Group**: split the batch by asset name, lexicographic order
//! 2. **Translate**: build one core-data envelope per asset
//! 3. **Post**: one blocking POST per envelope, in order
//! 4. **Account**: add the batch size for every accepted envelope
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use edgex_north::core::export::{Exporter, ExporterOptions};
//! use edgex_north::domain::Reading;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut exporter = Exporter::new(ExporterOptions::default());
//! exporter.connect("localhost", 48080)?;
//! exporter.authenticate("north", "secret")?;
//!
//! let batch = vec![Reading::new("boiler", 1, Utc::now()).with_datapoint("temperature", 88.5)];
//! let sent = exporter.send(&batch).await;
//! println!("Delivered {sent}");
//! # Ok(())
//! # }
//! ```

pub mod export;
