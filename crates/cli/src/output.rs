//! Output formatting for scan reports

use anyhow::Result;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

use portscan_common::ScanReport;

/// Print a scan report in the specified format
pub fn print_report(report: &ScanReport, format: &str) -> Result<()> {
    let format = format.trim().to_lowercase();
    match format.as_str() {
        "json" | "j" => print_json(report)?,
        "text" | "t" | "" => print_text(report),
        _ => {
            warn!("Unknown format '{}', using text", format);
            print_text(report);
        }
    }
    Ok(())
}

/// Log the outcome the same way progress is logged.
fn print_text(report: &ScanReport) {
    info!("scan completed in {}", format_duration(report.elapsed));
    if report.cancelled {
        warn!("scan was cancelled; results are partial");
    }

    if !report.has_open_ports() {
        info!("{:?} has no exposed ports", report.host);
        return;
    }
    info!("found {} open ports", report.open_ports.len());
    info!("open-ports: {:?}", report.open_ports);
}

fn print_json(report: &ScanReport) -> Result<()> {
    let output = json!({
        "scan_info": {
            "id": report.id,
            "started_at": report.started_at,
            "duration_seconds": report.elapsed.as_secs_f64(),
            "duration_formatted": format_duration(report.elapsed),
            "cancelled": report.cancelled,
        },
        "host": report.host,
        "scan_all": report.scan_all,
        "open_ports": report.open_ports,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Format duration in a human-readable way
fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs == 0 {
        format!("{}ms", millis)
    } else if total_secs < 60 {
        if millis > 0 {
            format!("{}.{:03}s", total_secs, millis)
        } else {
            format!("{}s", total_secs)
        }
    } else {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        if secs > 0 {
            format!("{}m {}s", mins, secs)
        } else {
            format!("{}m", mins)
        }
    }
}
