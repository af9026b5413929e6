//! Basic authentication credentials

use crate::config::{secret_string, SecretString};
use base64::{engine::general_purpose, Engine as _};
use secrecy::ExposeSecret;

/// Encode `user:password` with standard base64
///
/// ```
/// use edgex_north::adapters::edgex::auth::basic_auth_token;
/// use secrecy::ExposeSecret;
///
/// let token = basic_auth_token("admin", "secret");
/// assert_eq!(token.expose_secret().as_str(), "YWRtaW46c2VjcmV0");
/// ```
pub fn basic_auth_token(user: &str, password: &str) -> SecretString {
    let credentials = format!("{user}:{password}");
    secret_string(general_purpose::STANDARD.encode(credentials.as_bytes()))
}

/// Value of the `Authorization` header for an encoded token
pub fn authorization_header(token: &SecretString) -> String {
    format!("Basic {}", token.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_token_matches_rfc7617_example() {
        let token = basic_auth_token("Aladdin", "open sesame");
        assert_eq!(token.expose_secret().as_str(), "QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }

    #[test]
    fn test_basic_auth_token_empty_password() {
        let token = basic_auth_token("user", "");
        assert_eq!(token.expose_secret().as_str(), "dXNlcjo=");
    }

    #[test]
    fn test_authorization_header() {
        let token = basic_auth_token("Aladdin", "open sesame");
        assert_eq!(
            authorization_header(&token),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = basic_auth_token("user", "hunter2");
        assert!(!format!("{token:?}").contains("dXNlcjpodW50ZXIy"));
    }
}
