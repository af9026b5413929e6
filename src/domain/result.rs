//! Result type alias for the exporter

use super::errors::EdgeXError;

/// Result type alias using `EdgeXError` as the error type.
///
/// # Examples
///
/// ```
/// use edgex_north::domain::result::Result;
/// use edgex_north::domain::errors::EdgeXError;
///
/// fn connected() -> Result<()> {
///     Err(EdgeXError::Connection("not connected".to_string()))
/// }
/// assert!(connected().is_err());
/// ```
pub type Result<T> = std::result::Result<T, EdgeXError>;
