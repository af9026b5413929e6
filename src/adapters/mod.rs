//! External system integrations.
//!
//! - [`edgex`] - HTTP(S) transport to the EdgeX core-data historian
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the export logic
//! can be tested against in-memory fakes:
//!
//! ```rust,no_run
//! use edgex_north::adapters::edgex::{HttpTransport, Scheme, Transport};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new(Scheme::Http, "localhost:48080", Duration::from_secs(30), true)?;
//! let response = transport
//!     .send_request("POST", &Scheme::Http.event_url("localhost:48080"), &[], "{}".to_string())
//!     .await?;
//! println!("status {}", response.status);
//! # Ok(())
//! # }
//! ```

pub mod edgex;
