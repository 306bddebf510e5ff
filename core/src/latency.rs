//! Ranks endpoints by invoking the downloaded latency tester.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::exec::{ToolCommand, ToolRunner};

/// Runs the tester over the endpoint list, producing a ranked CSV.
///
/// The tester runs with its own directory as working directory, so both
/// file paths are made absolute first; the cwd change must not reroute
/// them.
pub async fn run_latency_test(
    runner: &impl ToolRunner,
    tool: &Path,
    endpoint_list: &Path,
    output_csv: &Path,
) -> Result<()> {
    let endpoint_list = std::path::absolute(endpoint_list)
        .with_context(|| format!("failed to resolve {}", endpoint_list.display()))?;
    let output_csv = std::path::absolute(output_csv)
        .with_context(|| format!("failed to resolve {}", output_csv.display()))?;

    let mut cmd = ToolCommand::new(tool)
        .arg("-f")
        .arg(&endpoint_list)
        .arg("-httping")
        .arg("-sp")
        .arg("-o")
        .arg(&output_csv);

    if let Some(dir) = tool.parent().filter(|d| !d.as_os_str().is_empty()) {
        cmd = cmd.current_dir(dir);
    }

    info!("Running: {cmd}");

    let result = runner.run(&cmd).await?;
    if !result.success() {
        bail!(
            "latency tester exited with {}: {}",
            result.status,
            result.stderr.trim()
        );
    }

    Ok(())
}
