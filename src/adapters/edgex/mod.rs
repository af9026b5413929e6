//! EdgeX core-data adapter
//!
//! This module provides the transport used to reach the historian: the
//! [`Transport`] trait, its reqwest implementation and basic-auth helpers.

pub mod auth;
pub mod http;
pub mod transport;

pub use auth::{authorization_header, basic_auth_token};
pub use http::HttpTransport;
pub use transport::{Scheme, Transport, TransportResponse, EVENT_PATH};
