// crates/orchestrator/src/orchestrator.rs
//! Scanner - target validation, port fan-out and result collection

use chrono::Utc;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info, instrument, warn};

use portscan_common::{
    CancelToken, Prober, ScanError, ScanOptions, ScanReport, ScanResult, ScanState, ALL_PORTS,
    WELL_KNOWN_PORTS,
};
use portscan_scanner_tcp::TcpProber;

use crate::open_ports::OpenPorts;
use crate::progress::ProgressTracker;

/// Ports probed by a scan: `1..1024` by default, `1..65535` when `scan_all` is set.
pub fn ports_to_scan(scan_all: bool) -> Vec<u16> {
    let max = if scan_all { ALL_PORTS } else { WELL_KNOWN_PORTS };
    (1..max).collect()
}

/// A scan session against a single host.
pub struct Scanner {
    host: String,
    ip: IpAddr,
    scan_all: bool,
    options: ScanOptions,
    prober: Option<Arc<dyn Prober>>,
    state: ScanState,
}

impl Scanner {
    /// Validate `host` as an IPv4/IPv6 literal and create a scanner for it.
    pub fn new(host: &str, scan_all: bool) -> ScanResult<Self> {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ScanError::InvalidHost(host.to_string()))?;

        Ok(Self {
            host: host.to_string(),
            ip,
            scan_all,
            options: ScanOptions::default(),
            prober: None,
            state: ScanState::Constructed,
        })
    }

    /// Replace the timeout / concurrency settings.
    pub fn with_options(mut self, options: ScanOptions) -> ScanResult<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    /// Use a custom prober instead of the TCP connect prober.
    pub fn with_prober(mut self, prober: Arc<dyn Prober>) -> Self {
        self.prober = Some(prober);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn scan_all(&self) -> bool {
        self.scan_all
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Probe every port in the configured range and return the ones that
    /// accepted a connection, in completion order.
    ///
    /// Cancelling `cancel` stops pending probes, aborts in-flight ones and
    /// returns whatever was found so far.
    pub async fn scan(&mut self, cancel: &CancelToken) -> Vec<u16> {
        let ports = ports_to_scan(self.scan_all);
        self.scan_ports(ports, cancel).await
    }

    /// Run `scan` and wrap the outcome with timing metadata.
    pub async fn scan_report(&mut self, cancel: &CancelToken) -> ScanReport {
        let started_at = Utc::now();
        let start = Instant::now();
        let open_ports = self.scan(cancel).await;

        ScanReport::new(self.host.clone(), self.scan_all, started_at)
            .with_open_ports(open_ports)
            .with_elapsed(start.elapsed())
            .with_cancelled(cancel.is_cancelled())
    }

    #[instrument(skip(self, ports, cancel), fields(host = %self.host, ports = ports.len()))]
    pub(crate) async fn scan_ports(&mut self, ports: Vec<u16>, cancel: &CancelToken) -> Vec<u16> {
        self.state = ScanState::Scanning;
        if ports.is_empty() {
            self.state = ScanState::Completed;
            return Vec::new();
        }

        let prober = self.prober();
        info!(
            "Starting scan with {} (max in flight: {})",
            prober.name(),
            self.options
                .max_concurrency
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string())
        );

        let open_ports = Arc::new(OpenPorts::new());
        let progress = Arc::new(ProgressTracker::new(ports.len()));
        let semaphore = self
            .options
            .max_concurrency
            .map(|n| Arc::new(Semaphore::new(n.clamp(1, Semaphore::MAX_PERMITS))));

        let mut tasks = Vec::with_capacity(ports.len());
        for port in ports {
            let ip = self.ip;
            let prober = prober.clone();
            let semaphore = semaphore.clone();
            let open_ports = open_ports.clone();
            let progress = progress.clone();
            let cancel = cancel.clone();

            let task = tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(sem) => tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            progress.increment_skipped();
                            return;
                        }
                        permit = sem.acquire_owned() => match permit {
                            Ok(p) => Some(p),
                            Err(_) => {
                                progress.increment_skipped();
                                return;
                            }
                        },
                    },
                    None => None,
                };

                let open = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        progress.increment_skipped();
                        return;
                    }
                    open = prober.is_open(ip, port) => open,
                };

                progress.increment_probed();
                if open {
                    debug!(port, "open");
                    progress.increment_open();
                    open_ports.add(port).await;
                }
            });
            tasks.push(task);
        }

        // Barrier: every probe finishes (or bails on cancel) before results are read.
        for task in tasks {
            if let Err(e) = task.await {
                warn!("Probe task failed: {}", e);
            }
        }

        progress.print_summary();
        if cancel.is_cancelled() {
            info!("Scan cancelled; returning partial results");
        }
        self.state = ScanState::Completed;

        match Arc::try_unwrap(open_ports) {
            Ok(open_ports) => open_ports.into_inner(),
            Err(shared) => shared.snapshot().await,
        }
    }

    fn prober(&self) -> Arc<dyn Prober> {
        match &self.prober {
            Some(p) => p.clone(),
            None => Arc::new(TcpProber::new().with_timeout(self.options.timeout)),
        }
    }
}
