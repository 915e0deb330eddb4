// crates/scanner_tcp/src/scanner.rs
//! TCP connect probe implementation

use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{instrument, trace};

use portscan_common::{Prober, DEFAULT_TIMEOUT};

/// Attempt a TCP connect to `ip:port` bounded by `limit`.
///
/// The stream is dropped (closed) as soon as the handshake completes. Refused,
/// unreachable and timed-out connects all report `false`.
#[instrument(level = "trace")]
pub async fn is_open(ip: IpAddr, port: u16, limit: Duration) -> bool {
    let addr = SocketAddr::new(ip, port);
    match timeout(limit, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            true
        }
        Ok(Err(e)) => {
            trace!(%addr, error = %e, "connect failed");
            false
        }
        Err(_) => {
            trace!(%addr, "connect timed out");
            false
        }
    }
}

/// Connect prober used by the scanner.
#[derive(Debug, Clone)]
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    /// Create a prober with the default 3s connect timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connect timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn is_open(&self, ip: IpAddr, port: u16) -> bool {
        is_open(ip, port, self.timeout).await
    }

    fn name(&self) -> &str {
        "TCP Connect Prober"
    }
}
