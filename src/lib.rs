//! cookie-export - export browser cookies to a flat text file
//!
//! This crate reads cookies from a Firefox profile database and writes them
//! one per line as `host includeSubdomains path isSecure expiry name value`.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod utils;

pub use error::{ExportError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
