use std::path::PathBuf;

/// Remote newline-delimited CIDR list scanned by default.
pub const DEFAULT_RANGE_URL: &str =
    "https://raw.githubusercontent.com/GuangYu-yu/PCF/refs/heads/main/VPS_CIDR_4.txt";

/// Remote latency-tester binary fetched by default.
pub const DEFAULT_TOOL_URL: &str =
    "https://raw.githubusercontent.com/GuangYu-yu/CloudflareST-Rust/refs/heads/main/binaries/Linux_AMD64/CloudflareST-Rust";

/// Default packet rate handed to the scanner's `--rate` flag.
pub const DEFAULT_SCAN_RATE: u32 = 1_000_000;

/// Pipeline settings, threaded by reference through every step.
pub struct Config {
    /// URL of the newline-delimited range list to scan.
    pub range_url: String,
    /// URL of the latency-tester binary.
    pub tool_url: String,
    /// Packet rate for the scanner.
    pub scan_rate: u32,
    /// Raw scanner list output.
    pub scan_output: PathBuf,
    /// `address:port` lines fed to the latency tester.
    pub endpoint_list: PathBuf,
    /// Ranked CSV written by the latency tester.
    pub result_csv: PathBuf,
    /// Final extracted endpoint list.
    pub final_output: PathBuf,
    /// Leave the downloaded tool directory on disk after the run.
    pub keep_tool_dir: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range_url: DEFAULT_RANGE_URL.to_string(),
            tool_url: DEFAULT_TOOL_URL.to_string(),
            scan_rate: DEFAULT_SCAN_RATE,
            scan_output: PathBuf::from("masscan_result.txt"),
            endpoint_list: PathBuf::from("ip_port_list.txt"),
            result_csv: PathBuf::from("result.csv"),
            final_output: PathBuf::from("final_ip_port.txt"),
            keep_tool_dir: false,
        }
    }
}
