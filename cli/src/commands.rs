pub mod convert;
pub mod extract;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use edgesift_common::config::{Config, DEFAULT_RANGE_URL, DEFAULT_SCAN_RATE, DEFAULT_TOOL_URL};

#[derive(Parser)]
#[command(name = "edgesift")]
#[command(about = "Sift low-latency proxy endpoints out of remote range lists.")]
pub struct CommandLine {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch ranges, scan them, and rank the discovered endpoints
    #[command(alias = "r")]
    Run(RunArgs),
    /// Convert scanner list output into address:port lines
    #[command(alias = "c")]
    Convert { input: PathBuf, output: PathBuf },
    /// Extract the endpoint column from a ranked result CSV
    #[command(alias = "x")]
    Extract { input: PathBuf, output: PathBuf },
}

#[derive(Args)]
pub struct RunArgs {
    /// Packet rate handed to the scanner
    #[arg(long, default_value_t = DEFAULT_SCAN_RATE)]
    pub rate: u32,

    /// URL of the newline-delimited range list to scan
    #[arg(long, default_value = DEFAULT_RANGE_URL)]
    pub range_url: String,

    /// URL of the latency-tester binary
    #[arg(long, default_value = DEFAULT_TOOL_URL)]
    pub tool_url: String,

    /// Where to write the final endpoint list
    #[arg(short, long, default_value = "final_ip_port.txt")]
    pub output: PathBuf,

    /// Keep the downloaded tool directory after the run
    #[arg(long)]
    pub keep_tool: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl RunArgs {
    pub fn into_config(self) -> Config {
        Config {
            range_url: self.range_url,
            tool_url: self.tool_url,
            scan_rate: self.rate,
            final_output: self.output,
            keep_tool_dir: self.keep_tool,
            ..Config::default()
        }
    }
}
