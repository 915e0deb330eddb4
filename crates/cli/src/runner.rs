// runner.rs
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::output::print_report;
use portscan_common::{CancelToken, ScanOptions};
use portscan_orchestrator::Scanner;

pub async fn run_scan(
    host: String,
    scan_all: bool,
    concurrency: usize,
    unbounded: bool,
    timeout: u64,
    output_format: String,
) -> Result<()> {
    let options = build_options(concurrency, unbounded, timeout);

    let mut scanner = Scanner::new(&host, scan_all)
        .and_then(|s| s.with_options(options))
        .context("failed to initialize port scanner")?;

    // Ctrl-C stops pending probes; whatever was found so far is still reported.
    let cancel = CancelToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping scan");
                cancel.cancel();
            }
        })
    };

    info!("scanning {}...", host);
    if scan_all {
        info!("Port range: 1-65534");
    } else {
        info!("Port range: 1-1023");
    }

    let report = scanner.scan_report(&cancel).await;
    interrupt.abort();

    print_report(&report, &output_format)?;
    Ok(())
}

fn build_options(concurrency: usize, unbounded: bool, timeout: u64) -> ScanOptions {
    let options = if unbounded {
        ScanOptions::unbounded()
    } else {
        ScanOptions::default().with_max_concurrency(Some(concurrency))
    };
    options.with_timeout(Duration::from_millis(timeout))
}
