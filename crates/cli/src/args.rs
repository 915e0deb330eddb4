use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "port-scanner")]
#[command(version)]
#[command(about = "A simple port-scanner.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a host for open ports.
    #[command(visible_alias = "s")]
    Scan {
        /// Host to scan (IPv4 or IPv6 address)
        #[arg(long, required = true)]
        host: String,

        /// Scan all ports (scans ports 1-1023 if not enabled)
        #[arg(short, long)]
        all: bool,

    /// Max probes in flight
    #[arg(short, long, default_value_t = 500)]
    concurrency: usize,

    /// Start every probe at once instead of bounding in-flight probes
    #[arg(long, conflicts_with = "concurrency")]
    unbounded: bool,

    /// Connect timeout in milliseconds
    #[arg(long, default_value_t = 3000)]
    timeout: u64,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        output_format: String,
    },
}
