//! Error types for the port scanner

use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The host handed to the scanner is not an IPv4/IPv6 literal.
    #[error("{0:?} is an invalid ip address")]
    InvalidHost(String),

    #[error("Invalid scan options: {0}")]
    InvalidOptions(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;
