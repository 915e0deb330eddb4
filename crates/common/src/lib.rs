//! Port scanner common - shared types and traits
//!
//! This crate provides the error type, scan options, report type, the
//! `Prober` seam and the cancellation token used across the workspace.

pub mod cancel;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use cancel::CancelToken;
pub use error::{ScanError, ScanResult};
pub use traits::Prober;
pub use types::{
    ScanOptions, ScanReport, ScanState, ALL_PORTS, DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT,
    WELL_KNOWN_PORTS,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
