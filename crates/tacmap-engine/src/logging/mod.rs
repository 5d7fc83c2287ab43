//! Logging utilities.
//!
//! Library code logs through the `log` facade only. Hosts call
//! [`init_logging`] once to install the `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
