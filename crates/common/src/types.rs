//! Core data types shared by the scanner crates
//!
//! Port ranges are half-open: the well-known scan covers `1..WELL_KNOWN_PORTS`
//! and the full scan covers `1..ALL_PORTS`, so neither port 0 nor the bound
//! itself is ever probed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{ScanError, ScanResult};

/// Exclusive upper bound of the default (well-known) port range.
pub const WELL_KNOWN_PORTS: u16 = 1024;

/// Exclusive upper bound of the "scan all" port range.
pub const ALL_PORTS: u16 = 65535;

/// Connect timeout applied to every probe unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Default cap on simultaneously in-flight probes.
pub const DEFAULT_MAX_CONCURRENCY: usize = 500;

/// Scan behaviour tuning options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    pub timeout: Duration,
    /// `None` spawns every probe at once with no bound on in-flight connects.
    pub max_concurrency: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_concurrency: Some(DEFAULT_MAX_CONCURRENCY),
        }
    }
}

impl ScanOptions {
    /// One connect per port, all in flight together.
    #[inline]
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_concurrency: None,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn validate(&self) -> ScanResult<()> {
        if self.timeout.is_zero() {
            return Err(ScanError::InvalidOptions("timeout must be non-zero".into()));
        }
        if self.max_concurrency == Some(0) {
            return Err(ScanError::InvalidOptions(
                "max concurrency must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Lifecycle of a single scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanState {
    Constructed,
    Scanning,
    Completed,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanState::Constructed => "constructed",
            ScanState::Scanning => "scanning",
            ScanState::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Outcome of one scan, suitable for printing or serializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub id: Uuid,
    pub host: String,
    pub scan_all: bool,
    /// Sorted ascending.
    pub open_ports: Vec<u16>,
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
    pub cancelled: bool,
}

impl ScanReport {
    #[must_use]
    pub fn new(host: impl Into<String>, scan_all: bool, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            host: host.into(),
            scan_all,
            open_ports: Vec::new(),
            elapsed: Duration::ZERO,
            started_at,
            cancelled: false,
        }
    }

    /// Attach the collected ports; they are sorted since probe completion order is arbitrary.
    #[must_use]
    pub fn with_open_ports(mut self, mut ports: Vec<u16>) -> Self {
        ports.sort_unstable();
        self.open_ports = ports;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_cancelled(mut self, cancelled: bool) -> Self {
        self.cancelled = cancelled;
        self
    }

    #[inline]
    #[must_use]
    pub fn has_open_ports(&self) -> bool {
        !self.open_ports.is_empty()
    }
}
