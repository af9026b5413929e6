//! CLI command implementations

pub mod info;
pub mod init;
pub mod send;
pub mod validate;

/// Exit code: everything delivered
pub const EXIT_OK: i32 = 0;
/// Exit code: at least one asset was not delivered
pub const EXIT_PARTIAL: i32 = 1;
/// Exit code: configuration error
pub const EXIT_CONFIG: i32 = 2;
/// Exit code: fatal error
pub const EXIT_FATAL: i32 = 5;
