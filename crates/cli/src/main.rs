mod args;
mod runner;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use args::{Cli, Commands};
use portscan_common::ScanError;
use runner::run_scan;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            host,
            all,
            concurrency,
            unbounded,
            timeout,
            output_format,
        } => {
            let result = run_scan(host, all, concurrency, unbounded, timeout, output_format).await;
            if let Err(e) = &result {
                if e.downcast_ref::<ScanError>().is_some() {
                    print_scan_usage();
                }
            }
            result?;
        }
    }

    Ok(())
}

fn print_scan_usage() {
    let mut cmd = Cli::command();
    if let Some(scan) = cmd.find_subcommand_mut("scan") {
        let _ = scan.print_help();
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so JSON output on stdout stays machine-readable.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
