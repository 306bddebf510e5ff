//! The pipeline itself: a strict chain of succeed-or-abort steps, each
//! step's file output feeding the next step's input.
//!
//! There is no retry, no backoff, and no partial resume. Artifacts from
//! completed steps are left on disk when a later step fails.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use edgesift_common::{config::Config, success};
use tracing::info;

use crate::exec::ToolRunner;
use crate::{convert, extract, fetch, latency, scan, tool};

/// What a completed run produced.
pub struct PipelineSummary {
    pub ranges: usize,
    pub endpoints: usize,
    pub ranked: usize,
    pub output: PathBuf,
}

/// Runs all six steps in order against the given configuration.
pub async fn run(cfg: &Config, runner: &impl ToolRunner) -> Result<PipelineSummary> {
    let client = fetch::http_client()?;

    info!("Fetching address ranges");
    let ranges = fetch::fetch_ranges(&client, &cfg.range_url)
        .await
        .context("failed to fetch the range list")?;
    if ranges.is_empty() {
        bail!(
            "range list at {} contains no scannable ranges",
            cfg.range_url
        );
    }
    success!("{} address ranges fetched", ranges.len());

    info!("Scanning all ports across {} ranges", ranges.len());
    scan::run_scan(runner, &ranges, &cfg.scan_output, cfg.scan_rate)
        .await
        .context("port scan failed")?;
    success!("Scan results saved to {}", cfg.scan_output.display());

    let endpoints = convert::convert_scan_results(&cfg.scan_output, &cfg.endpoint_list)
        .context("failed to convert scan results")?;
    success!(
        "{endpoints} endpoints written to {}",
        cfg.endpoint_list.display()
    );

    info!("Fetching the latency tester");
    let tester = tool::fetch_tool(&client, &cfg.tool_url, cfg.keep_tool_dir)
        .await
        .context("failed to fetch the latency tester")?;
    success!("Latency tester ready at {}", tester.binary().display());

    info!("Testing endpoint latency");
    latency::run_latency_test(runner, tester.binary(), &cfg.endpoint_list, &cfg.result_csv)
        .await
        .context("latency test failed")?;
    success!("Latency results saved to {}", cfg.result_csv.display());

    let ranked = extract::extract_results(&cfg.result_csv, &cfg.final_output)
        .context("failed to extract ranked endpoints")?;
    success!(
        "{ranked} ranked endpoints written to {}",
        cfg.final_output.display()
    );

    Ok(PipelineSummary {
        ranges: ranges.len(),
        endpoints,
        ranked,
        output: cfg.final_output.clone(),
    })
}
