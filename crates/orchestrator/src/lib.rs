//! Orchestrator - concurrent port scanning for a single host

mod open_ports;
mod orchestrator;
mod progress;

pub use open_ports::OpenPorts;
pub use orchestrator::{ports_to_scan, Scanner};
pub use progress::ProgressTracker;

#[cfg(test)]
mod tests {
	use super::*;
	use portscan_common::CancelToken;

	#[tokio::test]
	async fn scanner_rejects_hostname() {
		// Only literal addresses are accepted; names are never resolved.
		assert!(Scanner::new("localhost", false).is_err());
	}

	#[tokio::test]
	async fn closed_loopback_range_with_no_listeners() {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let port = listener.local_addr().unwrap().port();
		drop(listener);

		let cancel = CancelToken::new();
		let mut scanner = Scanner::new("127.0.0.1", false).unwrap();
		let ports = scanner.scan_ports(vec![port], &cancel).await;
		assert!(ports.is_empty());
	}
}
