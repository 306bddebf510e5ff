//! Full-port-range scan over the fetched ranges, delegated to masscan.
//!
//! The scanner needs raw socket access, so the invocation is prefixed
//! with `sudo` unless the process is already running as root.

use std::path::Path;

use anyhow::{Result, bail};
use edgesift_common::network::range::CidrRange;
use is_root::is_root;
use tracing::info;

use crate::exec::{ToolCommand, ToolRunner};

const SCANNER_BIN: &str = "masscan";

/// Scans every port (0-65535) of every range, writing the scanner's
/// native list output to `output`.
///
/// Blocks until the scanner exits. A non-zero exit surfaces the
/// scanner's captured stderr.
pub async fn run_scan(
    runner: &impl ToolRunner,
    ranges: &[CidrRange],
    output: &Path,
    rate: u32,
) -> Result<()> {
    if ranges.is_empty() {
        bail!("range list is empty, refusing to start the scanner");
    }

    let cmd = build_command(ranges, output, rate);
    info!("Running: {cmd}");

    let result = runner.run(&cmd).await?;
    if !result.success() {
        bail!(
            "scanner exited with {}: {}",
            result.status,
            result.stderr.trim()
        );
    }

    Ok(())
}

fn build_command(ranges: &[CidrRange], output: &Path, rate: u32) -> ToolCommand {
    let cmd = if is_root() {
        ToolCommand::new(SCANNER_BIN)
    } else {
        ToolCommand::new("sudo").arg(SCANNER_BIN)
    };

    cmd.arg("-p0-65535")
        .args(ranges.iter().map(ToString::to_string))
        .arg("-oL")
        .arg(output)
        .arg("--rate")
        .arg(rate.to_string())
}
