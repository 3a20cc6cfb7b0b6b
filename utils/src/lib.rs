//! Shared utilities for proledger.

pub mod logging;

pub use logging::{init_logging, LogFormat, LogFormatError};
