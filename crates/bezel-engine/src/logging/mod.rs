//! Logging utilities.
//!
//! Centralizes logger initialization. Intentionally small; imposes nothing
//! beyond the standard `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
